//! Claim record and status

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{ClaimId, Identity, PolicyId};

use crate::error::ClaimError;

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Awaiting adjudication; every claim starts here
    Submitted,
    /// Accepted by an administrator
    Approved,
    /// Declined by an administrator
    Rejected,
    /// Recorded as paid. A label only - no funds move through the registry
    Paid,
}

impl ClaimStatus {
    /// Whether a claim in this status may still be adjudicated.
    ///
    /// Only `Submitted` claims are pending; every other status is final.
    pub fn is_pending(self) -> bool {
        matches!(self, ClaimStatus::Submitted)
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClaimStatus::Submitted => "Submitted",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Rejected => "Rejected",
            ClaimStatus::Paid => "Paid",
        };
        f.write_str(name)
    }
}

/// A claim against a policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Sequential identifier, allocated at submission (first claim is 1)
    pub id: ClaimId,
    /// The policy this claim is lodged against
    pub policy_id: PolicyId,
    /// The user who submitted the claim
    pub claimant: Identity,
    /// Free-form description of the loss
    pub description: String,
    /// Current adjudication status
    pub status: ClaimStatus,
    /// Claimed amount. A recorded label, not a payable sum
    pub amount: u64,
}

impl Claim {
    /// Creates a freshly submitted claim.
    pub fn submit(
        id: ClaimId,
        policy_id: PolicyId,
        claimant: Identity,
        description: String,
        amount: u64,
    ) -> Self {
        Self {
            id,
            policy_id,
            claimant,
            description,
            status: ClaimStatus::Submitted,
            amount,
        }
    }

    /// Overwrites the status with `new_status`.
    ///
    /// Allowed exactly while the claim is pending; the target is
    /// unconstrained, so a pending claim may move straight to `Paid`, or
    /// even be rewritten as `Submitted`. Once the status has left
    /// `Submitted` the claim is frozen and every further update fails.
    pub fn adjudicate(&mut self, new_status: ClaimStatus) -> Result<(), ClaimError> {
        if !self.status.is_pending() {
            return Err(ClaimError::ClaimNotPending {
                claim_id: self.id,
                status: self.status,
            });
        }
        self.status = new_status;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_claim() -> Claim {
        Claim::submit(
            ClaimId::new(1),
            PolicyId::new(1),
            Identity::new("alice"),
            "water damage".to_string(),
            500,
        )
    }

    #[test]
    fn test_submitted_claim_is_pending() {
        let claim = create_test_claim();
        assert_eq!(claim.status, ClaimStatus::Submitted);
        assert!(claim.status.is_pending());
    }

    #[test]
    fn test_any_target_is_accepted_once() {
        for target in [
            ClaimStatus::Submitted,
            ClaimStatus::Approved,
            ClaimStatus::Rejected,
            ClaimStatus::Paid,
        ] {
            let mut claim = create_test_claim();
            assert!(claim.adjudicate(target).is_ok());
            assert_eq!(claim.status, target);
        }
    }

    #[test]
    fn test_approved_claim_is_frozen() {
        let mut claim = create_test_claim();
        claim.adjudicate(ClaimStatus::Approved).unwrap();

        let result = claim.adjudicate(ClaimStatus::Paid);
        assert_eq!(
            result,
            Err(ClaimError::ClaimNotPending {
                claim_id: ClaimId::new(1),
                status: ClaimStatus::Approved,
            })
        );
        assert_eq!(claim.status, ClaimStatus::Approved);
    }

    #[test]
    fn test_rewrite_to_submitted_keeps_claim_pending() {
        let mut claim = create_test_claim();
        claim.adjudicate(ClaimStatus::Submitted).unwrap();
        assert!(claim.status.is_pending());
        // Still pending, so a later adjudication succeeds.
        assert!(claim.adjudicate(ClaimStatus::Rejected).is_ok());
    }
}
