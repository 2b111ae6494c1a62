use crate::abac::{Material, Student};
use crate::errors::{Error, Result};
use crate::rbac::{Permission, Role, User};

pub const MAX_GPA: f64 = 4.0;

/// Checks records before they are admitted into a registry.
pub trait RecordValidator {
    fn validate_user(&self, user: &User) -> Result<()>;
    fn validate_permission(&self, role: Role, permission: &Permission) -> Result<()>;
    fn validate_student(&self, student: &Student) -> Result<()>;
    fn validate_material(&self, material: &Material) -> Result<()>;
}

/// Enforces the data-model invariants: non-empty ids and names, years and
/// levels of at least 1, GPAs within `[0.0, 4.0]`.
#[derive(Debug, Default, Copy, Clone)]
pub struct DefaultValidator;

impl RecordValidator for DefaultValidator {
    fn validate_user(&self, user: &User) -> Result<()> {
        not_empty("user id", user.id())
    }

    fn validate_permission(&self, role: Role, permission: &Permission) -> Result<()> {
        not_empty(&format!("permission of role {}", role), permission.as_str())
    }

    fn validate_student(&self, student: &Student) -> Result<()> {
        not_empty("student id", student.id())?;
        not_empty(&format!("major of {}", student.id()), student.major())?;
        positive(&format!("year of {}", student.id()), student.year())?;
        gpa(&format!("GPA of {}", student.id()), student.gpa())
    }

    fn validate_material(&self, material: &Material) -> Result<()> {
        not_empty("material id", material.id())?;
        not_empty(
            &format!("department of {}", material.id()),
            material.department(),
        )?;
        positive(&format!("level of {}", material.id()), material.level())?;
        positive(&format!("minimum year of {}", material.id()), material.min_year())?;
        gpa(&format!("minimum GPA of {}", material.id()), material.min_gpa())
    }
}

fn not_empty(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::Validation(format!("{} must be specified", field)));
    }
    Ok(())
}

fn positive(field: &str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(Error::Validation(format!("{} must be at least 1", field)));
    }
    Ok(())
}

fn gpa(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 || value > MAX_GPA {
        return Err(Error::Validation(format!(
            "{} must be between 0.0 and {:.1}, got {}",
            field, MAX_GPA, value
        )));
    }
    Ok(())
}
