//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub version: String,
    pub registered_parties: usize,
    pub policies_issued: usize,
    pub claims_submitted: usize,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check (exercises the store lock and reports its counters)
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let stats = state.store.stats();

    Json(ReadinessResponse {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        registered_parties: stats.registered_parties,
        policies_issued: stats.policies_issued,
        claims_submitted: stats.claims_submitted,
    })
}
