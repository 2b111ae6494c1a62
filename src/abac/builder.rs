use serde::Deserialize;

use crate::{
    abac::{AbacCatalog, Material, Student},
    DefaultValidator, Error, RecordValidator, Registry, Result,
};

/// Builds an `AbacCatalog` from a JSON document:
///
/// ```json
/// {
///     "students": [{ "id": "Alice", "year": 2, "major": "CS", "gpa": 3.5 }],
///     "materials": [
///         { "id": "Intro_CS", "level": 1, "department": "CS", "minYear": 1, "minGpa": 2.0 }
///     ]
/// }
/// ```
pub struct AbacBuilder<V> {
    validator: V,
    json: String,
}

impl AbacBuilder<DefaultValidator> {
    pub fn from_json(json: &str) -> Self {
        Self {
            json: json.into(),
            validator: DefaultValidator,
        }
    }
}

impl<V> AbacBuilder<V>
where
    V: RecordValidator,
{
    pub fn with_validator<W>(self, validator: W) -> AbacBuilder<W>
    where
        W: RecordValidator,
    {
        AbacBuilder {
            json: self.json,
            validator,
        }
    }

    pub fn build(self) -> Result<AbacCatalog> {
        let definition: AbacDefinition =
            serde_json::from_str(&self.json).map_err(Error::Deserializing)?;

        let mut students = Vec::with_capacity(definition.students.len());
        for student in definition.students {
            let student: Student = student.into();
            self.validator.validate_student(&student)?;
            students.push(student);
        }

        let mut materials = Vec::with_capacity(definition.materials.len());
        for material in definition.materials {
            let material: Material = material.into();
            self.validator.validate_material(&material)?;
            materials.push(material);
        }

        Ok(AbacCatalog::new(
            Registry::from_records(students)?,
            Registry::from_records(materials)?,
        ))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct AbacDefinition {
    #[serde(default)]
    students: Vec<StudentDefinition>,
    #[serde(default)]
    materials: Vec<MaterialDefinition>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct StudentDefinition {
    id: String,
    year: u32,
    major: String,
    #[serde(alias = "GPA")]
    gpa: f64,
}

impl From<StudentDefinition> for Student {
    fn from(definition: StudentDefinition) -> Self {
        Student::new(
            definition.id,
            definition.year,
            definition.major,
            definition.gpa,
        )
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct MaterialDefinition {
    id: String,
    level: u32,
    department: String,
    #[serde(alias = "min_year")]
    min_year: u32,
    #[serde(alias = "min_GPA")]
    min_gpa: f64,
}

impl From<MaterialDefinition> for Material {
    fn from(definition: MaterialDefinition) -> Self {
        Material::new(
            definition.id,
            definition.level,
            definition.department,
            definition.min_year,
            definition.min_gpa,
        )
    }
}
