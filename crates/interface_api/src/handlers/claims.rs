//! Claims handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use core_kernel::{ClaimId, Identity};
use validator::Validate;

use crate::dto::claims::*;
use crate::{error::ApiError, AppState};

/// Submits a new claim against one of the caller's policies
pub async fn submit_claim(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Json(request): Json<SubmitClaimRequest>,
) -> Result<(StatusCode, Json<ClaimResponse>), ApiError> {
    request.validate()?;

    let claim = state.store.submit_claim(
        &caller,
        request.policy_id,
        request.description,
        request.amount,
    )?;

    Ok((StatusCode::CREATED, Json(claim.into())))
}

/// Gets a claim by ID
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let claim = state
        .store
        .get_claim(id)
        .ok_or_else(|| ApiError::NotFound(format!("Claim not found: {id}")))?;

    Ok(Json(claim.into()))
}

/// Reviews a pending claim, fixing its final status
pub async fn update_status(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Path(id): Path<ClaimId>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let claim = state
        .store
        .update_claim_status(&caller, id, request.status)?;

    Ok(Json(claim.into()))
}
