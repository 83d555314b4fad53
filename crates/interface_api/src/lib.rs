//! HTTP API Layer
//!
//! This crate provides the REST API for the coverage ledger using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for each domain
//! - **Middleware**: Authentication, tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! Authentication establishes who the caller is; what they may do is
//! decided by the store, which resolves their role at call time. Tokens
//! therefore never carry roles, and a role change takes effect on the
//! very next request.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(store, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use infra_store::InsuranceStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{claims, events, health, party, policy};
use crate::middleware::{audit_middleware, auth_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InsuranceStore>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `store` - The shared insurance store
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(store: Arc<InsuranceStore>, config: ApiConfig) -> Router {
    let state = AppState { store, config };

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Party routes
    let party_routes = Router::new()
        .route("/:id/role", post(party::assign_role))
        .route("/:id/role", get(party::get_role))
        .route("/:id/policies", get(party::list_party_policies))
        .route("/:id/claims", get(party::list_party_claims));

    // Policy routes
    let policy_routes = Router::new()
        .route("/", post(policy::issue_policy))
        .route("/:id", get(policy::get_policy))
        .route("/:id/deactivate", post(policy::deactivate_policy));

    // Claims routes
    let claims_routes = Router::new()
        .route("/", post(claims::submit_claim))
        .route("/:id", get(claims::get_claim))
        .route("/:id/status", put(claims::update_status));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/parties", party_routes)
        .nest("/policies", policy_routes)
        .nest("/claims", claims_routes)
        .route("/events", get(events::event_stream))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            audit_middleware,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
