mod builder;
pub use builder::AbacBuilder;

use tracing::{debug, trace};

use crate::decision::{Decide, Decision, Verdict};
use crate::registry::{Record, Registry};
use crate::Result;

/// Department whose materials are open to every eligible student,
/// regardless of major.
pub const OPEN_DEPARTMENT: &str = "Math";

/// Attribute-based subject.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    id: String,
    year: u32,
    major: String,
    gpa: f64,
}

impl Student {
    pub fn new(id: impl Into<String>, year: u32, major: impl Into<String>, gpa: f64) -> Self {
        Self {
            id: id.into(),
            year,
            major: major.into(),
            gpa,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn gpa(&self) -> f64 {
        self.gpa
    }
}

impl Record for Student {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Attribute-based resource: a piece of course material.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    id: String,
    level: u32,
    department: String,
    min_year: u32,
    min_gpa: f64,
}

impl Material {
    pub fn new(
        id: impl Into<String>,
        level: u32,
        department: impl Into<String>,
        min_year: u32,
        min_gpa: f64,
    ) -> Self {
        Self {
            id: id.into(),
            level,
            department: department.into(),
            min_year,
            min_gpa,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Course level. Carried with the record, not consulted by access checks.
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn min_year(&self) -> u32 {
        self.min_year
    }

    pub fn min_gpa(&self) -> f64 {
        self.min_gpa
    }

    /// Year and GPA thresholds, both inclusive.
    pub fn admits(&self, student: &Student) -> bool {
        student.year() >= self.min_year && student.gpa() >= self.min_gpa
    }

    pub fn is_open_to(&self, student: &Student) -> bool {
        self.department == student.major() || self.department == OPEN_DEPARTMENT
    }
}

impl Record for Material {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Attribute-based access evaluator.
///
/// A student is granted a material when both hold:
/// - eligibility: the student's year and GPA meet the material's minimums;
/// - department: the material belongs to the student's major, or to the
///   open department.
///
/// Eligibility is checked first. A student who fails it is denied without
/// looking at the department.
#[derive(Debug, Clone, Copy)]
pub struct AbacEvaluator<'a> {
    students: &'a Registry<Student>,
    materials: &'a Registry<Material>,
}

impl<'a> AbacEvaluator<'a> {
    pub fn new(students: &'a Registry<Student>, materials: &'a Registry<Material>) -> Self {
        Self {
            students,
            materials,
        }
    }

    fn resolve(&self, subject: &str, material: &str) -> Result<(&'a Student, &'a Material)> {
        Ok((self.students.get(subject)?, self.materials.get(material)?))
    }
}

impl<'a> Decide for AbacEvaluator<'a> {
    fn decide(&self, subject: &str, resource: &str) -> Decision {
        let verdict = match self.resolve(subject, resource) {
            Ok((student, material)) => {
                if material.admits(student) {
                    Verdict::from(material.is_open_to(student))
                } else {
                    trace!(subject, resource, "eligibility gate failed");
                    Verdict::Denied
                }
            }
            Err(e) => {
                debug!(error = %e, "abac lookup failed");
                Verdict::Unresolved
            }
        };

        debug!(subject, resource, ?verdict, "abac decision");
        Decision::new(verdict, subject, resource)
    }
}

/// Owned students and materials, as produced by `AbacBuilder`.
#[derive(Debug, Clone, Default)]
pub struct AbacCatalog {
    students: Registry<Student>,
    materials: Registry<Material>,
}

impl AbacCatalog {
    pub fn new(students: Registry<Student>, materials: Registry<Material>) -> Self {
        Self {
            students,
            materials,
        }
    }

    pub fn students(&self) -> &Registry<Student> {
        &self.students
    }

    pub fn materials(&self) -> &Registry<Material> {
        &self.materials
    }

    pub fn evaluator(&self) -> AbacEvaluator<'_> {
        AbacEvaluator::new(&self.students, &self.materials)
    }
}
