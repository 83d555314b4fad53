//! The policy record

use serde::{Deserialize, Serialize};

use core_kernel::{Identity, PolicyId};

/// An issued insurance policy.
///
/// The id, holder, details, and coverage amount are fixed at issuance. The
/// active flag is the only mutable field, and it only ever moves from
/// `true` to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Sequential identifier, allocated at issuance (first policy is 1)
    pub id: PolicyId,
    /// The registered user the policy was issued to
    pub holder: Identity,
    /// Free-form description of the cover
    pub details: String,
    /// Covered amount. A recorded label: no funds move through the registry
    pub coverage_amount: u64,
    /// Whether claims may currently be submitted against this policy
    pub is_active: bool,
}

impl Policy {
    /// Creates an active policy record.
    pub fn issue(
        id: PolicyId,
        holder: Identity,
        details: String,
        coverage_amount: u64,
    ) -> Self {
        Self {
            id,
            holder,
            details,
            coverage_amount,
            is_active: true,
        }
    }

    /// Marks the policy inactive. One-way: there is no reactivation.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Whether `id` holds this policy.
    pub fn is_held_by(&self, id: &Identity) -> bool {
        self.holder == *id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_policy() -> Policy {
        Policy::issue(
            PolicyId::new(1),
            Identity::new("alice"),
            "flood cover".to_string(),
            1000,
        )
    }

    #[test]
    fn test_issued_policy_is_active() {
        let policy = create_test_policy();
        assert!(policy.is_active);
        assert_eq!(policy.coverage_amount, 1000);
    }

    #[test]
    fn test_deactivate_is_permanent_and_idempotent() {
        let mut policy = create_test_policy();
        policy.deactivate();
        assert!(!policy.is_active);
        policy.deactivate();
        assert!(!policy.is_active);
    }

    #[test]
    fn test_holder_check() {
        let policy = create_test_policy();
        assert!(policy.is_held_by(&Identity::new("alice")));
        assert!(!policy.is_held_by(&Identity::new("bob")));
    }
}
