//! Party DTOs

use core_kernel::{ClaimId, PolicyId, Role};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AssignRoleRequest {
    /// Role to grant; the store rejects `Owner` here
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub identity: String,
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub struct PartyPoliciesResponse {
    pub identity: String,
    pub policy_ids: Vec<PolicyId>,
}

#[derive(Debug, Serialize)]
pub struct PartyClaimsResponse {
    pub identity: String,
    pub claim_ids: Vec<ClaimId>,
}
