//! Policy DTOs

use core_kernel::PolicyId;
use domain_policy::Policy;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct IssuePolicyRequest {
    #[validate(length(min = 1, message = "holder must not be empty"))]
    pub holder: String,
    #[validate(length(min = 1, message = "details must not be empty"))]
    pub details: String,
    pub coverage_amount: u64,
}

#[derive(Debug, Serialize)]
pub struct PolicyResponse {
    pub id: PolicyId,
    pub holder: String,
    pub details: String,
    pub coverage_amount: u64,
    pub is_active: bool,
}

impl From<Policy> for PolicyResponse {
    fn from(policy: Policy) -> Self {
        Self {
            id: policy.id,
            holder: policy.holder.as_str().to_string(),
            details: policy.details,
            coverage_amount: policy.coverage_amount,
            is_active: policy.is_active,
        }
    }
}
