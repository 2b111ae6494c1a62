#![deny(rust_2018_idioms, warnings)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]
//! Access decisions for campus resources under two interchangeable models:
//!
//! - role-based ([`rbac`]): a user's role holds a set of permissions and the
//!   requested resource is a permission name;
//! - attribute-based ([`abac`]): a student's year, GPA and major are checked
//!   against the thresholds and department of a course material.
//!
//! Both evaluators implement [`Decide`] and return a [`Decision`].
pub mod abac;
mod decision;
mod errors;
#[cfg(test)]
mod fixtures;
mod matcher;
pub mod rbac;
mod registry;
mod validator;

pub use abac::{AbacBuilder, AbacCatalog, AbacEvaluator, Material, Student, OPEN_DEPARTMENT};
pub use decision::{Decide, Decision, Verdict};
pub use errors::{Error, Result};
pub use matcher::{ExactMatcher, PermissionMatcher};
pub use rbac::{Permission, RbacBuilder, RbacCatalog, RbacEvaluator, Role, RoleTable, User};
pub use registry::{Record, Registry};
pub use validator::{DefaultValidator, RecordValidator, MAX_GPA};
