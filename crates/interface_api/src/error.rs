//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain_claims::ClaimError;
use domain_party::PartyError;
use domain_policy::PolicyError;
use infra_store::StoreError;
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "Unauthorized".to_string(),
            ),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
            ApiError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.clone())
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

/// Maps store rejections onto HTTP semantics.
///
/// Authorization failures become 403 (the caller is authenticated, their
/// role just does not permit the call), bad targets become 400 or 404,
/// and state conflicts become 409.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();
        match err {
            StoreError::Party(PartyError::Unauthorized)
            | StoreError::Policy(PolicyError::Unauthorized)
            | StoreError::Claim(ClaimError::Unauthorized)
            | StoreError::Claim(ClaimError::NotPolicyHolder) => ApiError::Forbidden(message),
            StoreError::Party(PartyError::InvalidRole(_))
            | StoreError::Policy(PolicyError::NotARegisteredUser) => ApiError::BadRequest(message),
            StoreError::Claim(ClaimError::PolicyInactive)
            | StoreError::Claim(ClaimError::ClaimNotPending { .. }) => ApiError::Conflict(message),
            StoreError::Claim(ClaimError::ClaimNotFound(_)) => ApiError::NotFound(message),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_failures_map_to_forbidden() {
        for err in [
            StoreError::Party(PartyError::Unauthorized),
            StoreError::Policy(PolicyError::Unauthorized),
            StoreError::Claim(ClaimError::Unauthorized),
            StoreError::Claim(ClaimError::NotPolicyHolder),
        ] {
            assert!(matches!(ApiError::from(err), ApiError::Forbidden(_)));
        }
    }

    #[test]
    fn test_state_conflicts_map_to_conflict() {
        let err = StoreError::Claim(ClaimError::PolicyInactive);
        assert!(matches!(ApiError::from(err), ApiError::Conflict(_)));
    }

    #[test]
    fn test_missing_claim_maps_to_not_found() {
        let err = StoreError::Claim(ClaimError::ClaimNotFound(core_kernel::ClaimId::new(5)));
        assert!(matches!(ApiError::from(err), ApiError::NotFound(_)));
    }
}
