//! Custom Assertions
//!
//! Domain-aware assertion helpers with failure messages that describe the
//! record under test, not just the mismatched values.

use core_kernel::{ClaimId, PolicyId};
use domain_claims::ClaimStatus;
use infra_store::{InsuranceStore, LedgerEvent};
use tokio::sync::broadcast;

/// Asserts that a policy exists and is active
pub fn assert_policy_active(store: &InsuranceStore, policy_id: PolicyId) {
    match store.get_policy(policy_id) {
        Some(policy) => assert!(
            policy.is_active,
            "expected policy {policy_id} to be active, but it is deactivated"
        ),
        None => panic!("expected policy {policy_id} to exist, but the store has no record of it"),
    }
}

/// Asserts that a policy exists and has been deactivated
pub fn assert_policy_inactive(store: &InsuranceStore, policy_id: PolicyId) {
    match store.get_policy(policy_id) {
        Some(policy) => assert!(
            !policy.is_active,
            "expected policy {policy_id} to be inactive, but it is still active"
        ),
        None => panic!("expected policy {policy_id} to exist, but the store has no record of it"),
    }
}

/// Asserts that a claim exists and currently carries `expected` status
pub fn assert_claim_status(store: &InsuranceStore, claim_id: ClaimId, expected: ClaimStatus) {
    match store.get_claim(claim_id) {
        Some(claim) => assert_eq!(
            claim.status, expected,
            "expected claim {claim_id} to be {expected}, but it is {}",
            claim.status
        ),
        None => panic!("expected claim {claim_id} to exist, but the store has no record of it"),
    }
}

/// Drains every event currently buffered on `receiver` and asserts that
/// their [`event_type`](LedgerEvent::event_type) names match `expected`
/// in order.
///
/// Subscribe before performing the operations under test; the store
/// publishes in commit order, so the drained sequence is the commit
/// sequence.
pub fn assert_event_types(receiver: &mut broadcast::Receiver<LedgerEvent>, expected: &[&str]) {
    let mut seen = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        seen.push(event.event_type());
    }
    assert_eq!(
        seen, expected,
        "expected event sequence {expected:?}, but observed {seen:?}"
    );
}
