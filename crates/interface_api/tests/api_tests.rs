//! HTTP API Integration Tests
//!
//! This module drives the full router over HTTP: token handling in the
//! middleware, DTO validation, role-gated store operations, and the
//! error-to-status mapping.
//!
//! # Test Coverage
//!
//! - Public health endpoints and store-backed readiness counters
//! - Token authentication (missing, malformed, foreign-secret, expired)
//! - Role administration endpoints
//! - Policy issuance, lookup, and deactivation endpoints
//! - Claim submission and review endpoints
//! - Per-party listing endpoints
//! - The end-to-end walkthrough over HTTP
//!
//! # Test Organization
//!
//! Tests are grouped by functionality:
//! - `health_tests` - Unauthenticated health and readiness
//! - `auth_tests` - Token validation in the middleware
//! - `role_endpoint_tests` - Granting and reading roles
//! - `policy_endpoint_tests` - Policy lifecycle over HTTP
//! - `claim_endpoint_tests` - Claim lifecycle over HTTP
//! - `party_listing_tests` - Per-party index endpoints
//! - `event_route_tests` - Event stream access control
//! - `scenario_tests` - Full walkthroughs

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use core_kernel::Identity;
use infra_store::InsuranceStore;
use interface_api::auth::create_token;
use interface_api::config::ApiConfig;
use interface_api::create_router;
use serde_json::{json, Value};
use test_utils::{IdentityFixtures, TestStoreBuilder};

// ============================================================================
// TEST FIXTURES
// ============================================================================

const TEST_SECRET: &str = "test-secret";

/// Test configuration with a fixed secret and the fixture owner
fn test_config() -> ApiConfig {
    ApiConfig {
        jwt_secret: TEST_SECRET.to_string(),
        owner_identity: IdentityFixtures::owner().as_str().to_string(),
        ..ApiConfig::default()
    }
}

/// Mints a valid token for `identity`
fn token_for(identity: &Identity) -> String {
    create_token(identity.as_str(), TEST_SECRET, 3600).expect("token creation should succeed")
}

/// Builds a test server over `store`
fn create_test_server(store: InsuranceStore) -> TestServer {
    TestServer::new(create_router(Arc::new(store), test_config()))
        .expect("test server should start")
}

/// Builds a server whose store already has the admin `bob` and user `alice`
fn create_staffed_server() -> TestServer {
    create_test_server(
        TestStoreBuilder::new()
            .with_admin(IdentityFixtures::admin())
            .with_user(IdentityFixtures::user())
            .build(),
    )
}

/// Issues a flood-cover policy to `alice` as the admin, returning its id
async fn issue_flood_policy(server: &TestServer) -> u64 {
    let response = server
        .post("/api/v1/policies")
        .authorization_bearer(&token_for(&IdentityFixtures::admin()))
        .json(&json!({
            "holder": "alice",
            "details": "flood cover",
            "coverage_amount": 1000
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<Value>()["id"]
        .as_u64()
        .expect("policy id is numeric")
}

/// Submits a water-damage claim as `alice`, returning its id
async fn submit_water_damage_claim(server: &TestServer, policy_id: u64) -> u64 {
    let response = server
        .post("/api/v1/claims")
        .authorization_bearer(&token_for(&IdentityFixtures::user()))
        .json(&json!({
            "policy_id": policy_id,
            "description": "water damage",
            "amount": 500
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<Value>()["id"]
        .as_u64()
        .expect("claim id is numeric")
}

// ============================================================================
// HEALTH TESTS
// ============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_requires_no_token() {
        let server = create_staffed_server();

        let response = server.get("/health").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body = response.json::<Value>();
        assert_eq!(body["status"], "healthy");
        assert!(body["version"].as_str().is_some_and(|v| !v.is_empty()));
    }

    #[tokio::test]
    async fn test_readiness_reports_store_counters() {
        let server = create_staffed_server();

        let response = server.get("/health/ready").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body = response.json::<Value>();
        assert_eq!(body["status"], "ready");
        // Owner, bob, alice.
        assert_eq!(body["registered_parties"], 3);
        assert_eq!(body["policies_issued"], 0);
        assert_eq!(body["claims_submitted"], 0);
    }
}

// ============================================================================
// AUTH TESTS
// ============================================================================

mod auth_tests {
    use super::*;
    use chrono::{Duration, Utc};
    use interface_api::auth::Claims;
    use jsonwebtoken::{encode, EncodingKey, Header};

    #[tokio::test]
    async fn test_protected_routes_require_a_token() {
        let server = create_staffed_server();

        let response = server.get("/api/v1/policies/1").await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_garbage_tokens_are_rejected() {
        let server = create_staffed_server();

        let response = server
            .get("/api/v1/policies/1")
            .authorization_bearer("not-a-jwt")
            .await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_tokens_signed_with_another_secret_are_rejected() {
        let server = create_staffed_server();
        let foreign = create_token("alice", "other-secret", 3600).unwrap();

        let response = server
            .get("/api/v1/policies/1")
            .authorization_bearer(&foreign)
            .await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_expired_tokens_are_rejected() {
        let server = create_staffed_server();
        let stale = Claims {
            sub: "alice".to_string(),
            exp: (Utc::now() - Duration::hours(2)).timestamp(),
            iat: (Utc::now() - Duration::hours(3)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &stale,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        let response = server
            .get("/api/v1/policies/1")
            .authorization_bearer(&token)
            .await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_authentication_does_not_imply_authorization() {
        // A stranger with a perfectly valid token is authenticated, but
        // the store still refuses them.
        let server = create_staffed_server();

        let response = server
            .post("/api/v1/policies")
            .authorization_bearer(&token_for(&IdentityFixtures::stranger()))
            .json(&json!({
                "holder": "alice",
                "details": "flood cover",
                "coverage_amount": 1000
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    }
}

// ============================================================================
// ROLE ENDPOINT TESTS
// ============================================================================

mod role_endpoint_tests {
    use super::*;

    #[tokio::test]
    async fn test_owner_assigns_and_reads_back_a_role() {
        let server = create_staffed_server();

        let response = server
            .post("/api/v1/parties/carol/role")
            .authorization_bearer(&token_for(&IdentityFixtures::owner()))
            .json(&json!({ "role": "User" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body = response.json::<Value>();
        assert_eq!(body["identity"], "carol");
        assert_eq!(body["role"], "User");

        let lookup = server
            .get("/api/v1/parties/carol/role")
            .authorization_bearer(&token_for(&IdentityFixtures::user()))
            .await;
        assert_eq!(lookup.status_code(), StatusCode::OK);
        assert_eq!(lookup.json::<Value>()["role"], "User");
    }

    #[tokio::test]
    async fn test_admins_cannot_assign_roles() {
        let server = create_staffed_server();

        let response = server
            .post("/api/v1/parties/carol/role")
            .authorization_bearer(&token_for(&IdentityFixtures::admin()))
            .json(&json!({ "role": "User" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(response.json::<Value>()["error"], "forbidden");
    }

    #[tokio::test]
    async fn test_owner_role_is_not_grantable() {
        let server = create_staffed_server();

        let response = server
            .post("/api/v1/parties/carol/role")
            .authorization_bearer(&token_for(&IdentityFixtures::owner()))
            .json(&json!({ "role": "Owner" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_role_lookup_for_unknown_party_is_not_found() {
        let server = create_staffed_server();

        let response = server
            .get("/api/v1/parties/nobody/role")
            .authorization_bearer(&token_for(&IdentityFixtures::owner()))
            .await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_reassignment_changes_the_role_for_the_next_request() {
        let server = create_staffed_server();

        // Demote bob; his previously minted token stays valid but his
        // next administrative call fails.
        let demotion = server
            .post("/api/v1/parties/bob/role")
            .authorization_bearer(&token_for(&IdentityFixtures::owner()))
            .json(&json!({ "role": "User" }))
            .await;
        assert_eq!(demotion.status_code(), StatusCode::OK);

        let response = server
            .post("/api/v1/policies")
            .authorization_bearer(&token_for(&IdentityFixtures::admin()))
            .json(&json!({
                "holder": "alice",
                "details": "flood cover",
                "coverage_amount": 1000
            }))
            .await;
        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    }
}

// ============================================================================
// POLICY ENDPOINT TESTS
// ============================================================================

mod policy_endpoint_tests {
    use super::*;

    #[tokio::test]
    async fn test_admin_issues_a_policy() {
        let server = create_staffed_server();

        let response = server
            .post("/api/v1/policies")
            .authorization_bearer(&token_for(&IdentityFixtures::admin()))
            .json(&json!({
                "holder": "alice",
                "details": "flood cover",
                "coverage_amount": 1000
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::CREATED);
        let body = response.json::<Value>();
        assert_eq!(body["id"], 1);
        assert_eq!(body["holder"], "alice");
        assert_eq!(body["details"], "flood cover");
        assert_eq!(body["coverage_amount"], 1000);
        assert_eq!(body["is_active"], true);
    }

    #[tokio::test]
    async fn test_users_cannot_issue_policies() {
        let server = create_staffed_server();

        let response = server
            .post("/api/v1/policies")
            .authorization_bearer(&token_for(&IdentityFixtures::user()))
            .json(&json!({
                "holder": "alice",
                "details": "flood cover",
                "coverage_amount": 1000
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_unregistered_holders_are_rejected() {
        let server = create_staffed_server();

        let response = server
            .post("/api/v1/policies")
            .authorization_bearer(&token_for(&IdentityFixtures::admin()))
            .json(&json!({
                "holder": "mallory",
                "details": "flood cover",
                "coverage_amount": 1000
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_blank_holder_fails_validation() {
        let server = create_staffed_server();

        let response = server
            .post("/api/v1/policies")
            .authorization_bearer(&token_for(&IdentityFixtures::admin()))
            .json(&json!({
                "holder": "",
                "details": "flood cover",
                "coverage_amount": 1000
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.json::<Value>()["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_policy_lookup_roundtrip() {
        let server = create_staffed_server();
        let policy_id = issue_flood_policy(&server).await;

        let response = server
            .get(&format!("/api/v1/policies/{policy_id}"))
            .authorization_bearer(&token_for(&IdentityFixtures::user()))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body = response.json::<Value>();
        assert_eq!(body["id"], policy_id);
        assert_eq!(body["is_active"], true);
    }

    #[tokio::test]
    async fn test_missing_policy_is_not_found() {
        let server = create_staffed_server();

        let response = server
            .get("/api/v1/policies/42")
            .authorization_bearer(&token_for(&IdentityFixtures::user()))
            .await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["error"], "not_found");
    }

    #[tokio::test]
    async fn test_deactivation_round_trip() {
        let server = create_staffed_server();
        let policy_id = issue_flood_policy(&server).await;

        let response = server
            .post(&format!("/api/v1/policies/{policy_id}/deactivate"))
            .authorization_bearer(&token_for(&IdentityFixtures::admin()))
            .await;
        assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

        let lookup = server
            .get(&format!("/api/v1/policies/{policy_id}"))
            .authorization_bearer(&token_for(&IdentityFixtures::user()))
            .await;
        assert_eq!(lookup.json::<Value>()["is_active"], false);
    }

    #[tokio::test]
    async fn test_users_cannot_deactivate_policies() {
        let server = create_staffed_server();
        let policy_id = issue_flood_policy(&server).await;

        let response = server
            .post(&format!("/api/v1/policies/{policy_id}/deactivate"))
            .authorization_bearer(&token_for(&IdentityFixtures::user()))
            .await;

        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_deactivating_an_unknown_policy_succeeds_silently() {
        let server = create_staffed_server();

        let response = server
            .post("/api/v1/policies/404/deactivate")
            .authorization_bearer(&token_for(&IdentityFixtures::admin()))
            .await;

        assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    }
}

// ============================================================================
// CLAIM ENDPOINT TESTS
// ============================================================================

mod claim_endpoint_tests {
    use super::*;

    #[tokio::test]
    async fn test_holder_submits_a_claim() {
        let server = create_staffed_server();
        let policy_id = issue_flood_policy(&server).await;

        let response = server
            .post("/api/v1/claims")
            .authorization_bearer(&token_for(&IdentityFixtures::user()))
            .json(&json!({
                "policy_id": policy_id,
                "description": "water damage",
                "amount": 500
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::CREATED);
        let body = response.json::<Value>();
        assert_eq!(body["id"], 1);
        assert_eq!(body["policy_id"], policy_id);
        assert_eq!(body["claimant"], "alice");
        assert_eq!(body["status"], "Submitted");
        assert_eq!(body["amount"], 500);
    }

    #[tokio::test]
    async fn test_admins_cannot_submit_claims() {
        let server = create_staffed_server();
        let policy_id = issue_flood_policy(&server).await;

        let response = server
            .post("/api/v1/claims")
            .authorization_bearer(&token_for(&IdentityFixtures::admin()))
            .json(&json!({
                "policy_id": policy_id,
                "description": "water damage",
                "amount": 500
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_claims_against_deactivated_policies_conflict() {
        let server = create_staffed_server();
        let policy_id = issue_flood_policy(&server).await;
        server
            .post(&format!("/api/v1/policies/{policy_id}/deactivate"))
            .authorization_bearer(&token_for(&IdentityFixtures::admin()))
            .await;

        let response = server
            .post("/api/v1/claims")
            .authorization_bearer(&token_for(&IdentityFixtures::user()))
            .json(&json!({
                "policy_id": policy_id,
                "description": "water damage",
                "amount": 500
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::CONFLICT);
        assert_eq!(response.json::<Value>()["error"], "conflict");
    }

    #[tokio::test]
    async fn test_non_holders_cannot_claim() {
        let server = create_staffed_server();
        let policy_id = issue_flood_policy(&server).await;
        server
            .post("/api/v1/parties/carol/role")
            .authorization_bearer(&token_for(&IdentityFixtures::owner()))
            .json(&json!({ "role": "User" }))
            .await;

        let response = server
            .post("/api/v1/claims")
            .authorization_bearer(&token_for(&IdentityFixtures::second_user()))
            .json(&json!({
                "policy_id": policy_id,
                "description": "water damage",
                "amount": 500
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_blank_description_fails_validation() {
        let server = create_staffed_server();
        let policy_id = issue_flood_policy(&server).await;

        let response = server
            .post("/api/v1/claims")
            .authorization_bearer(&token_for(&IdentityFixtures::user()))
            .json(&json!({
                "policy_id": policy_id,
                "description": "",
                "amount": 500
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_admin_reviews_a_claim() {
        let server = create_staffed_server();
        let policy_id = issue_flood_policy(&server).await;
        let claim_id = submit_water_damage_claim(&server, policy_id).await;

        let response = server
            .put(&format!("/api/v1/claims/{claim_id}/status"))
            .authorization_bearer(&token_for(&IdentityFixtures::admin()))
            .json(&json!({ "status": "Approved" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.json::<Value>()["status"], "Approved");
    }

    #[tokio::test]
    async fn test_users_cannot_review_claims() {
        let server = create_staffed_server();
        let policy_id = issue_flood_policy(&server).await;
        let claim_id = submit_water_damage_claim(&server, policy_id).await;

        let response = server
            .put(&format!("/api/v1/claims/{claim_id}/status"))
            .authorization_bearer(&token_for(&IdentityFixtures::user()))
            .json(&json!({ "status": "Approved" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_second_review_conflicts_and_changes_nothing() {
        let server = create_staffed_server();
        let policy_id = issue_flood_policy(&server).await;
        let claim_id = submit_water_damage_claim(&server, policy_id).await;
        server
            .put(&format!("/api/v1/claims/{claim_id}/status"))
            .authorization_bearer(&token_for(&IdentityFixtures::admin()))
            .json(&json!({ "status": "Approved" }))
            .await;

        let response = server
            .put(&format!("/api/v1/claims/{claim_id}/status"))
            .authorization_bearer(&token_for(&IdentityFixtures::admin()))
            .json(&json!({ "status": "Paid" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::CONFLICT);
        let lookup = server
            .get(&format!("/api/v1/claims/{claim_id}"))
            .authorization_bearer(&token_for(&IdentityFixtures::user()))
            .await;
        assert_eq!(lookup.json::<Value>()["status"], "Approved");
    }

    #[tokio::test]
    async fn test_reviewing_an_unknown_claim_is_not_found() {
        let server = create_staffed_server();

        let response = server
            .put("/api/v1/claims/9/status")
            .authorization_bearer(&token_for(&IdentityFixtures::admin()))
            .json(&json!({ "status": "Approved" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_claim_is_not_found() {
        let server = create_staffed_server();

        let response = server
            .get("/api/v1/claims/1")
            .authorization_bearer(&token_for(&IdentityFixtures::user()))
            .await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }
}

// ============================================================================
// PARTY LISTING TESTS
// ============================================================================

mod party_listing_tests {
    use super::*;

    #[tokio::test]
    async fn test_listings_accumulate_in_order() {
        let server = create_staffed_server();
        let first = issue_flood_policy(&server).await;
        let second = issue_flood_policy(&server).await;
        submit_water_damage_claim(&server, first).await;

        let policies = server
            .get("/api/v1/parties/alice/policies")
            .authorization_bearer(&token_for(&IdentityFixtures::user()))
            .await;
        assert_eq!(policies.status_code(), StatusCode::OK);
        let body = policies.json::<Value>();
        assert_eq!(body["identity"], "alice");
        assert_eq!(body["policy_ids"], json!([first, second]));

        let claims = server
            .get("/api/v1/parties/alice/claims")
            .authorization_bearer(&token_for(&IdentityFixtures::user()))
            .await;
        assert_eq!(claims.json::<Value>()["claim_ids"], json!([1]));
    }

    #[tokio::test]
    async fn test_listings_for_unknown_parties_are_empty() {
        let server = create_staffed_server();

        let response = server
            .get("/api/v1/parties/nobody/policies")
            .authorization_bearer(&token_for(&IdentityFixtures::user()))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.json::<Value>()["policy_ids"], json!([]));
    }
}

// ============================================================================
// EVENT ROUTE TESTS
// ============================================================================

mod event_route_tests {
    use super::*;

    #[tokio::test]
    async fn test_event_stream_requires_auth() {
        let server = create_staffed_server();

        let response = server.get("/api/v1/events").await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }
}

// ============================================================================
// SCENARIO TESTS
// ============================================================================

mod scenario_tests {
    use super::*;

    /// The canonical walkthrough, driven entirely over HTTP: staffing,
    /// issuance, submission, approval, and the frozen follow-up.
    #[tokio::test]
    async fn test_full_walkthrough_over_http() {
        let owner = IdentityFixtures::owner();
        let server = create_test_server(InsuranceStore::initialize(owner.clone()));

        for (identity, role) in [("alice", "User"), ("bob", "Admin")] {
            let response = server
                .post(&format!("/api/v1/parties/{identity}/role"))
                .authorization_bearer(&token_for(&owner))
                .json(&json!({ "role": role }))
                .await;
            assert_eq!(response.status_code(), StatusCode::OK);
        }

        let policy_id = issue_flood_policy(&server).await;
        assert_eq!(policy_id, 1);

        let claim_id = submit_water_damage_claim(&server, policy_id).await;
        assert_eq!(claim_id, 1);

        let approval = server
            .put(&format!("/api/v1/claims/{claim_id}/status"))
            .authorization_bearer(&token_for(&IdentityFixtures::admin()))
            .json(&json!({ "status": "Approved" }))
            .await;
        assert_eq!(approval.status_code(), StatusCode::OK);

        let second_review = server
            .put(&format!("/api/v1/claims/{claim_id}/status"))
            .authorization_bearer(&token_for(&IdentityFixtures::admin()))
            .json(&json!({ "status": "Paid" }))
            .await;
        assert_eq!(second_review.status_code(), StatusCode::CONFLICT);

        let lookup = server
            .get(&format!("/api/v1/claims/{claim_id}"))
            .authorization_bearer(&token_for(&IdentityFixtures::user()))
            .await;
        assert_eq!(lookup.json::<Value>()["status"], "Approved");
    }
}
