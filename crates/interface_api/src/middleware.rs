//! API middleware

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use core_kernel::Identity;
use std::str::FromStr;
use tracing::{info, warn};

use crate::AppState;

/// Authentication middleware
///
/// Validates JWT tokens and attaches the caller's identity to the
/// request. Role checks happen later, inside the store.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    // Extract token from Authorization header
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) if header.starts_with("Bearer ") => &header[7..],
        _ => {
            warn!("Missing or invalid Authorization header");
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    // Validate token, then require a well-formed subject
    let claims = match crate::auth::validate_token(token, &state.config.jwt_secret) {
        Ok(claims) => claims,
        Err(e) => {
            warn!("Token validation failed: {:?}", e);
            return Err(StatusCode::UNAUTHORIZED);
        }
    };
    let caller = match Identity::from_str(&claims.sub) {
        Ok(identity) => identity,
        Err(e) => {
            warn!("Token subject is not a usable identity: {:?}", e);
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    request.extensions_mut().insert(caller);
    Ok(next.run(request).await)
}

/// Audit logging middleware
///
/// Logs all API requests for compliance and debugging
pub async fn audit_middleware(
    State(_state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let caller = request
        .extensions()
        .get::<Identity>()
        .map(|identity| identity.as_str().to_string())
        .unwrap_or_else(|| "anonymous".to_string());

    let start = Utc::now();

    let response = next.run(request).await;

    let duration = Utc::now() - start;
    let status = response.status();

    info!(
        method = %method,
        uri = %uri,
        caller = %caller,
        status = %status.as_u16(),
        duration_ms = duration.num_milliseconds(),
        "API request"
    );

    response
}
