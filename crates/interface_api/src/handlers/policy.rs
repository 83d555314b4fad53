//! Policy handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use core_kernel::{Identity, PolicyId};
use validator::Validate;

use crate::dto::policy::*;
use crate::{error::ApiError, AppState};

/// Issues a new policy
pub async fn issue_policy(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Json(request): Json<IssuePolicyRequest>,
) -> Result<(StatusCode, Json<PolicyResponse>), ApiError> {
    request.validate()?;

    let policy = state.store.issue_policy(
        &caller,
        Identity::new(request.holder),
        request.details,
        request.coverage_amount,
    )?;

    Ok((StatusCode::CREATED, Json(policy.into())))
}

/// Gets a policy by ID
pub async fn get_policy(
    State(state): State<AppState>,
    Path(id): Path<PolicyId>,
) -> Result<Json<PolicyResponse>, ApiError> {
    let policy = state
        .store
        .get_policy(id)
        .ok_or_else(|| ApiError::NotFound(format!("Policy not found: {id}")))?;

    Ok(Json(policy.into()))
}

/// Deactivates a policy
///
/// Succeeds with no body whether or not the id was ever issued.
pub async fn deactivate_policy(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Path(id): Path<PolicyId>,
) -> Result<StatusCode, ApiError> {
    state.store.deactivate_policy(&caller, id)?;
    Ok(StatusCode::NO_CONTENT)
}
