//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{Identity, Role};
use domain_claims::ClaimStatus;
use proptest::prelude::*;

/// Strategy for generating well-formed identities
pub fn identity_strategy() -> impl Strategy<Value = Identity> {
    "[a-z][a-z0-9]{2,11}".prop_map(Identity::new)
}

/// Strategy for generating any role, including Owner
pub fn role_strategy() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Owner), Just(Role::Admin), Just(Role::User)]
}

/// Strategy for generating roles that role assignment accepts
pub fn assignable_role_strategy() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Admin), Just(Role::User)]
}

/// Strategy for generating any claim status
pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Submitted),
        Just(ClaimStatus::Approved),
        Just(ClaimStatus::Rejected),
        Just(ClaimStatus::Paid),
    ]
}

/// Strategy for generating statuses a review can move a claim to
pub fn adjudicated_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Approved),
        Just(ClaimStatus::Rejected),
        Just(ClaimStatus::Paid),
    ]
}

/// Strategy for generating free-text details and descriptions
pub fn details_strategy() -> impl Strategy<Value = String> {
    "[a-z]{3,10}( [a-z]{3,10}){0,4}"
}

/// Strategy for generating coverage and claim amounts, biased to include
/// the extremes
pub fn amount_strategy() -> impl Strategy<Value = u64> {
    prop_oneof![
        9 => 1u64..10_000_000u64,
        1 => Just(u64::MAX),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn test_generated_identities_are_non_empty(identity in identity_strategy()) {
            prop_assert!(!identity.as_str().is_empty());
        }

        #[test]
        fn test_assignable_roles_pass_the_assignability_check(role in assignable_role_strategy()) {
            prop_assert!(role.is_assignable());
        }

        #[test]
        fn test_adjudicated_statuses_are_never_pending(status in adjudicated_status_strategy()) {
            prop_assert!(!status.is_pending());
        }
    }
}
