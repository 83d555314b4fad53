//! Policy domain errors

use thiserror::Error;

/// Errors that can occur when issuing or deactivating policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// Caller is neither an administrator nor the owner
    #[error("Caller may not administer policies")]
    Unauthorized,

    /// Policies can only be issued to identities currently registered as users
    #[error("Target identity is not a registered user")]
    NotARegisteredUser,
}
