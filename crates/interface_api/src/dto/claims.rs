//! Claims DTOs

use core_kernel::{ClaimId, PolicyId};
use domain_claims::{Claim, ClaimStatus};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct SubmitClaimRequest {
    pub policy_id: PolicyId,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    pub amount: u64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ClaimStatus,
}

#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub id: ClaimId,
    pub policy_id: PolicyId,
    pub claimant: String,
    pub description: String,
    pub status: ClaimStatus,
    pub amount: u64,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            id: claim.id,
            policy_id: claim.policy_id,
            claimant: claim.claimant.as_str().to_string(),
            description: claim.description,
            status: claim.status,
            amount: claim.amount,
        }
    }
}
