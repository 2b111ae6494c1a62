use serde::Serialize;

/// Outcome of a single access check.
///
/// `Unresolved` is reported when the subject (or, for attribute-based
/// checks, the material) is missing from its registry. It is distinct
/// from `Denied` so that callers can tell "no" apart from "unknown"
/// without re-running the lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "camelCase")]
pub enum Decision {
    Granted { subject: String, resource: String },
    Denied { subject: String, resource: String },
    Unresolved { subject: String, resource: String },
}

impl Decision {
    pub(crate) fn new(verdict: Verdict, subject: &str, resource: &str) -> Self {
        let (subject, resource) = (subject.to_string(), resource.to_string());
        match verdict {
            Verdict::Granted => Decision::Granted { subject, resource },
            Verdict::Denied => Decision::Denied { subject, resource },
            Verdict::Unresolved => Decision::Unresolved { subject, resource },
        }
    }

    pub fn verdict(&self) -> Verdict {
        match self {
            Decision::Granted { .. } => Verdict::Granted,
            Decision::Denied { .. } => Verdict::Denied,
            Decision::Unresolved { .. } => Verdict::Unresolved,
        }
    }

    pub fn subject(&self) -> &str {
        match self {
            Decision::Granted { subject, .. }
            | Decision::Denied { subject, .. }
            | Decision::Unresolved { subject, .. } => subject,
        }
    }

    pub fn resource(&self) -> &str {
        match self {
            Decision::Granted { resource, .. }
            | Decision::Denied { resource, .. }
            | Decision::Unresolved { resource, .. } => resource,
        }
    }

    pub fn is_granted(&self) -> bool {
        self.verdict() == Verdict::Granted
    }
}

/// The bare tag of a `Decision`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Verdict {
    Granted,
    Denied,
    Unresolved,
}

impl From<bool> for Verdict {
    fn from(allowed: bool) -> Self {
        if allowed {
            Verdict::Granted
        } else {
            Verdict::Denied
        }
    }
}

/// Common capability of both access models: decide whether `subject`
/// may access `resource`.
///
/// What `resource` names depends on the model. For role-based checks it
/// is a permission name, for attribute-based checks it is a material id.
pub trait Decide {
    fn decide(&self, subject: &str, resource: &str) -> Decision;
}

impl<D: Decide + ?Sized> Decide for &D {
    fn decide(&self, subject: &str, resource: &str) -> Decision {
        (**self).decide(subject, resource)
    }
}
