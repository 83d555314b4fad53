//! Participant roles
//!
//! Every registered identity holds exactly one role; identities without an
//! entry in the registry hold no privileges at all.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Access level of a registered participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The identity that initialized the system. Fixed at initialization;
    /// never grantable afterwards.
    Owner,
    /// Operational staff: issues and deactivates policies, adjudicates claims.
    Admin,
    /// A registered policyholder: holds policies and submits claims.
    User,
}

impl Role {
    /// Whether this role carries administrative capability over policies
    /// and claims.
    pub fn is_admin_or_owner(self) -> bool {
        matches!(self, Role::Owner | Role::Admin)
    }

    /// Whether this role can be granted through role assignment.
    ///
    /// Ownership is fixed when the system is initialized; only `Admin` and
    /// `User` are assignable.
    pub fn is_assignable(self) -> bool {
        matches!(self, Role::Admin | Role::User)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Owner => "Owner",
            Role::Admin => "Admin",
            Role::User => "User",
        };
        f.write_str(name)
    }
}
