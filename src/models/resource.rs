//! Resource and assignment models.
//!
//! A resource is whoever (or whatever) performs a task. Assignments link
//! a task to a resource; the reference may be unresolved when the upstream
//! project file names a resource it never defines.

use serde::{Deserialize, Serialize};

/// A resource that can be assigned to tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Upstream resource identifier, if the source provides one.
    #[serde(default)]
    pub id: Option<i64>,
    /// Display name (may be empty).
    #[serde(default)]
    pub name: String,
}

/// Links a task to a resource.
///
/// `resource` is `None` when the reference could not be resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceAssignment {
    /// The assigned resource, if resolved.
    #[serde(default)]
    pub resource: Option<Resource>,
}

impl Resource {
    /// Creates a named resource without an upstream ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Sets the upstream identifier.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Whether `self` and `other` denote the same resource.
    ///
    /// Resources with upstream IDs match by ID alone; otherwise every
    /// field must match.
    pub fn is_same(&self, other: &Resource) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => self == other,
        }
    }
}

impl ResourceAssignment {
    /// Creates a resolved assignment.
    pub fn to(resource: Resource) -> Self {
        Self {
            resource: Some(resource),
        }
    }

    /// Creates an assignment whose resource reference is unresolved.
    pub fn unresolved() -> Self {
        Self { resource: None }
    }
}
