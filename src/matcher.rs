/// Decides whether a requested permission name is covered by a permission
/// held through a role.
pub trait PermissionMatcher {
    fn do_match(&self, requested: &str, held: &str) -> bool;
}

/// Exact, case-sensitive string equality.
#[derive(Debug, Default, Copy, Clone)]
pub struct ExactMatcher;

impl PermissionMatcher for ExactMatcher {
    fn do_match(&self, requested: &str, held: &str) -> bool {
        requested == held
    }
}
