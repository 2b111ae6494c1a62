//! Reference campus data shared by the unit tests.

use crate::abac::{AbacCatalog, Material, Student};
use crate::rbac::{Permission, RbacCatalog, Role, RoleTable, User};
use crate::Registry;

/// Alice (Student), Bob (TA) and Charlie (Instructor), with cumulative
/// permissions per role.
pub(crate) fn rbac_catalog() -> RbacCatalog {
    let users = Registry::from_records(vec![
        User::new("Alice", Role::Student),
        User::new("Bob", Role::TeachingAssistant),
        User::new("Charlie", Role::Instructor),
    ])
    .expect("reference users are unique");

    let roles = [
        (Role::Student, "View_Assignment"),
        (Role::TeachingAssistant, "View_Assignment"),
        (Role::TeachingAssistant, "Grade_Assignment"),
        (Role::Instructor, "View_Assignment"),
        (Role::Instructor, "Grade_Assignment"),
        (Role::Instructor, "Modify_Course"),
    ]
    .iter()
    .map(|(role, permission)| (*role, Permission::new(*permission)))
    .collect::<RoleTable>();

    RbacCatalog::new(users, roles)
}

pub(crate) fn abac_catalog() -> AbacCatalog {
    let students = Registry::from_records(vec![
        Student::new("Alice", 2, "CS", 3.5),
        Student::new("Bob", 1, "EE", 3.0),
        Student::new("Charlie", 3, "CS", 2.5),
    ])
    .expect("reference students are unique");

    let materials = Registry::from_records(vec![
        Material::new("Intro_CS", 1, "CS", 1, 2.0),
        Material::new("Advanced_EE", 3, "EE", 2, 3.0),
        Material::new("Math_Open", 1, "Math", 1, 0.0),
    ])
    .expect("reference materials are unique");

    AbacCatalog::new(students, materials)
}
