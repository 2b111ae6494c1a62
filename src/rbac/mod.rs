mod builder;
pub use builder::RbacBuilder;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::iter::FromIterator;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decision::{Decide, Decision, Verdict};
use crate::matcher::{ExactMatcher, PermissionMatcher};
use crate::registry::{Record, Registry};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    Student,
    #[serde(rename = "TA")]
    TeachingAssistant,
    Instructor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Student => "Student",
            Role::TeachingAssistant => "TA",
            Role::Instructor => "Instructor",
        };
        f.write_str(name)
    }
}

/// Role-based subject: a user holds exactly one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: String,
    role: Role,
}

impl User {
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Opaque permission name, e.g. `View_Assignment`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Permission(String);

impl Permission {
    pub fn new(name: impl Into<String>) -> Self {
        Permission(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps each role to the unordered set of permissions it holds.
///
/// A role with no entry holds nothing.
#[derive(Debug, Clone, Default)]
pub struct RoleTable(BTreeMap<Role, BTreeSet<Permission>>);

impl RoleTable {
    pub fn new() -> Self {
        RoleTable(BTreeMap::new())
    }

    pub fn grant(&mut self, role: Role, permission: Permission) {
        self.0.entry(role).or_default().insert(permission);
    }

    pub fn permissions(&self, role: Role) -> impl Iterator<Item = &Permission> {
        self.0.get(&role).into_iter().flatten()
    }

    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Role, Permission)> for RoleTable {
    fn from_iter<I: IntoIterator<Item = (Role, Permission)>>(iter: I) -> Self {
        let mut table = RoleTable::new();
        for (role, permission) in iter {
            table.grant(role, permission);
        }
        table
    }
}

/// Role-based access evaluator.
///
/// The resource of a role-based check is the permission name itself: a
/// request is granted when the subject's role holds a matching
/// permission. Only the subject lookup can fail, unknown permission names
/// are simply denied.
#[derive(Debug, Clone)]
pub struct RbacEvaluator<'a, M = ExactMatcher> {
    users: &'a Registry<User>,
    roles: &'a RoleTable,
    matcher: M,
}

impl<'a> RbacEvaluator<'a, ExactMatcher> {
    pub fn new(users: &'a Registry<User>, roles: &'a RoleTable) -> Self {
        Self {
            users,
            roles,
            matcher: ExactMatcher,
        }
    }
}

impl<'a, M> RbacEvaluator<'a, M>
where
    M: PermissionMatcher,
{
    pub fn with_matcher<N>(self, matcher: N) -> RbacEvaluator<'a, N>
    where
        N: PermissionMatcher,
    {
        RbacEvaluator {
            users: self.users,
            roles: self.roles,
            matcher,
        }
    }

    fn holds(&self, role: Role, permission: &str) -> bool {
        self.roles
            .permissions(role)
            .any(|held| self.matcher.do_match(permission, held.as_str()))
    }
}

impl<'a, M> Decide for RbacEvaluator<'a, M>
where
    M: PermissionMatcher,
{
    fn decide(&self, subject: &str, permission: &str) -> Decision {
        let verdict = match self.users.get(subject) {
            Ok(user) => Verdict::from(self.holds(user.role(), permission)),
            Err(e) => {
                debug!(error = %e, "rbac subject lookup failed");
                Verdict::Unresolved
            }
        };

        debug!(subject, permission, ?verdict, "rbac decision");
        Decision::new(verdict, subject, permission)
    }
}

/// Owned users and role table, as produced by `RbacBuilder`.
#[derive(Debug, Clone, Default)]
pub struct RbacCatalog {
    users: Registry<User>,
    roles: RoleTable,
}

impl RbacCatalog {
    pub fn new(users: Registry<User>, roles: RoleTable) -> Self {
        Self { users, roles }
    }

    pub fn users(&self) -> &Registry<User> {
        &self.users
    }

    pub fn roles(&self) -> &RoleTable {
        &self.roles
    }

    pub fn evaluator(&self) -> RbacEvaluator<'_> {
        RbacEvaluator::new(&self.users, &self.roles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use assert_matches::assert_matches;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case("Alice", "View_Assignment", Verdict::Granted)]
    #[test_case("Alice", "Grade_Assignment", Verdict::Denied)]
    #[test_case("Alice", "Modify_Course", Verdict::Denied)]
    #[test_case("Bob", "View_Assignment", Verdict::Granted)]
    #[test_case("Bob", "Grade_Assignment", Verdict::Granted)]
    #[test_case("Bob", "Modify_Course", Verdict::Denied)]
    #[test_case("Charlie", "View_Assignment", Verdict::Granted)]
    #[test_case("Charlie", "Grade_Assignment", Verdict::Granted)]
    #[test_case("Charlie", "Modify_Course", Verdict::Granted)]
    #[test_case("Dave", "View_Assignment", Verdict::Unresolved)]
    #[test_case("alice", "View_Assignment", Verdict::Unresolved; "subject lookup is case sensitive")]
    #[test_case("", "View_Assignment", Verdict::Unresolved; "empty subject")]
    fn reference_scenarios(subject: &str, permission: &str, expected: Verdict) {
        let catalog = fixtures::rbac_catalog();
        let decision = catalog.evaluator().decide(subject, permission);

        assert_eq!(expected, decision.verdict());
        assert_eq!(subject, decision.subject());
        assert_eq!(permission, decision.resource());
    }

    #[test]
    fn unknown_permission_is_denied_not_unresolved() {
        let catalog = fixtures::rbac_catalog();

        assert_matches!(
            catalog.evaluator().decide("Charlie", "Delete_Everything"),
            Decision::Denied { .. }
        );
        assert_matches!(
            catalog.evaluator().decide("Charlie", "view_assignment"),
            Decision::Denied { .. }
        );
    }

    #[test]
    fn role_missing_from_table_is_denied_everything() {
        let users = Registry::from_records(vec![User::new("Erin", Role::TeachingAssistant)]).unwrap();
        let roles: RoleTable = vec![(Role::Instructor, Permission::new("Modify_Course"))]
            .into_iter()
            .collect();
        let evaluator = RbacEvaluator::new(&users, &roles);

        for permission in &["View_Assignment", "Grade_Assignment", "Modify_Course", ""] {
            assert_matches!(evaluator.decide("Erin", permission), Decision::Denied { .. });
        }
    }

    #[test]
    fn membership_ignores_grant_order_and_duplicates() {
        let users = Registry::from_records(vec![User::new("Bob", Role::TeachingAssistant)]).unwrap();
        let forward: RoleTable = vec![
            (Role::TeachingAssistant, Permission::new("View_Assignment")),
            (Role::TeachingAssistant, Permission::new("Grade_Assignment")),
        ]
        .into_iter()
        .collect();
        let backward: RoleTable = vec![
            (Role::TeachingAssistant, Permission::new("Grade_Assignment")),
            (Role::TeachingAssistant, Permission::new("View_Assignment")),
            (Role::TeachingAssistant, Permission::new("Grade_Assignment")),
        ]
        .into_iter()
        .collect();

        for permission in &["View_Assignment", "Grade_Assignment", "Modify_Course"] {
            assert_eq!(
                RbacEvaluator::new(&users, &forward).decide("Bob", permission),
                RbacEvaluator::new(&users, &backward).decide("Bob", permission),
            );
        }
        assert_eq!(2, backward.permissions(Role::TeachingAssistant).count());
    }

    #[test]
    fn custom_matcher_replaces_exact_match() {
        struct CaseInsensitive;

        impl PermissionMatcher for CaseInsensitive {
            fn do_match(&self, requested: &str, held: &str) -> bool {
                requested.eq_ignore_ascii_case(held)
            }
        }

        let catalog = fixtures::rbac_catalog();
        let evaluator = catalog.evaluator().with_matcher(CaseInsensitive);

        assert_matches!(
            evaluator.decide("Alice", "view_assignment"),
            Decision::Granted { .. }
        );
        assert_matches!(evaluator.decide("Dave", "view_assignment"), Decision::Unresolved { .. });
    }

    #[test]
    fn role_display_uses_short_names() {
        assert_eq!("TA", Role::TeachingAssistant.to_string());
        assert_eq!("Instructor", Role::Instructor.to_string());
    }

    proptest! {
        #[test]
        fn decide_is_pure(subject in "[A-Za-z]{0,8}", permission in "[A-Za-z_]{0,20}") {
            let catalog = fixtures::rbac_catalog();
            let evaluator = catalog.evaluator();

            prop_assert_eq!(
                evaluator.decide(&subject, &permission),
                evaluator.decide(&subject, &permission)
            );
        }

        #[test]
        fn only_unknown_subjects_are_unresolved(subject in "[A-Za-z]{0,8}", permission in "[A-Za-z_]{0,20}") {
            let catalog = fixtures::rbac_catalog();
            let decision = catalog.evaluator().decide(&subject, &permission);

            prop_assert_eq!(
                !catalog.users().contains(&subject),
                decision.verdict() == Verdict::Unresolved
            );
        }
    }
}
