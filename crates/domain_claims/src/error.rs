//! Claims domain errors

use thiserror::Error;

use core_kernel::ClaimId;

use crate::claim::ClaimStatus;

/// Errors that can occur in the claims domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClaimError {
    /// Caller's role does not permit this claim operation
    #[error("Caller may not perform this claim operation")]
    Unauthorized,

    /// The referenced policy is inactive - or was never issued at all;
    /// claimants cannot tell the two apart
    #[error("Policy is not active")]
    PolicyInactive,

    /// Claims may only be submitted by the policy's holder
    #[error("Caller does not hold the referenced policy")]
    NotPolicyHolder,

    /// The claim has already been adjudicated and is frozen
    #[error("Claim {claim_id} is not pending (status {status})")]
    ClaimNotPending {
        claim_id: ClaimId,
        status: ClaimStatus,
    },

    /// No claim with this id was ever submitted
    #[error("Claim not found: {0}")]
    ClaimNotFound(ClaimId),
}
