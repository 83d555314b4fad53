//! Party domain errors

use core_kernel::Role;
use thiserror::Error;

/// Errors that can occur in the role registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PartyError {
    /// Caller is not the owner; role assignment is the owner's privilege alone
    #[error("Caller is not the owner")]
    Unauthorized,

    /// Attempted to grant a role that assignment can never hand out
    #[error("Role {0} cannot be granted through role assignment")]
    InvalidRole(Role),
}
