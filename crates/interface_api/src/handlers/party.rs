//! Party handlers

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use core_kernel::Identity;

use crate::dto::party::*;
use crate::{error::ApiError, AppState};

/// Grants a role to the party in the path
pub async fn assign_role(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Path(id): Path<String>,
    Json(request): Json<AssignRoleRequest>,
) -> Result<Json<RoleResponse>, ApiError> {
    let target = Identity::new(id);
    state
        .store
        .assign_role(&caller, target.clone(), request.role)?;

    Ok(Json(RoleResponse {
        identity: target.as_str().to_string(),
        role: request.role,
    }))
}

/// Gets the role currently held by a party
pub async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RoleResponse>, ApiError> {
    let identity = Identity::new(id);
    let role = state
        .store
        .role_of(&identity)
        .ok_or_else(|| ApiError::NotFound(format!("No role recorded for {identity}")))?;

    Ok(Json(RoleResponse {
        identity: identity.as_str().to_string(),
        role,
    }))
}

/// Lists every policy ever issued to a party, oldest first
pub async fn list_party_policies(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<PartyPoliciesResponse> {
    let identity = Identity::new(id);
    let policy_ids = state.store.user_policies(&identity);

    Json(PartyPoliciesResponse {
        identity: identity.as_str().to_string(),
        policy_ids,
    })
}

/// Lists every claim ever submitted by a party, oldest first
pub async fn list_party_claims(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<PartyClaimsResponse> {
    let identity = Identity::new(id);
    let claim_ids = state.store.user_claims(&identity);

    Json(PartyClaimsResponse {
        identity: identity.as_str().to_string(),
        claim_ids,
    })
}
