//! Store errors
//!
//! `StoreError` aggregates the domain error enums. Every variant maps to
//! exactly one failure cause; a call that returns any of them has changed
//! nothing.

use thiserror::Error;

use domain_claims::ClaimError;
use domain_party::PartyError;
use domain_policy::PolicyError;

/// Errors surfaced by the gated store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Role registry error
    #[error("Role error: {0}")]
    Party(#[from] PartyError),

    /// Policy ledger error
    #[error("Policy error: {0}")]
    Policy(#[from] PolicyError),

    /// Claim ledger error
    #[error("Claim error: {0}")]
    Claim(#[from] ClaimError),
}

impl StoreError {
    /// Whether this error is an authorization failure (the caller's role
    /// does not permit the operation, as opposed to a bad target record).
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            StoreError::Party(PartyError::Unauthorized)
                | StoreError::Policy(PolicyError::Unauthorized)
                | StoreError::Claim(ClaimError::Unauthorized)
        )
    }
}
