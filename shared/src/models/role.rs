//! Role Model

use serde::{Deserialize, Serialize};

/// Operator role, as reported by the identity collaborator.
///
/// Only `Admin` and `Department Head` carry directory-specific behavior;
/// every other wire value maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    #[serde(rename = "Department Head")]
    DepartmentHead,
    #[serde(other)]
    Other,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}
