//! The policy ledger
//!
//! Storage and indexing for policy records. Authorization is decided by the
//! caller before the ledger is touched; the ledger itself only enforces the
//! record-level rules: sequential ids, append-only indexes, one-way
//! deactivation.

use std::collections::HashMap;

use core_kernel::{IdSequence, Identity, PolicyId};

use crate::policy::Policy;

/// Ledger of every policy ever issued.
///
/// Ids are allocated 1, 2, 3, ... in issuance order and never reused. The
/// per-holder index is append-only and insertion-ordered; deactivated
/// policies remain in both the map and the index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyLedger {
    sequence: IdSequence,
    policies: HashMap<PolicyId, Policy>,
    by_holder: HashMap<Identity, Vec<PolicyId>>,
}

impl PolicyLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a policy to `holder` and returns the stored record.
    ///
    /// Allocates the next sequential id and appends it to the holder's
    /// index. The caller has already verified that `holder` is a registered
    /// user and that the requesting identity may issue policies.
    pub fn issue_policy(
        &mut self,
        holder: Identity,
        details: String,
        coverage_amount: u64,
    ) -> &Policy {
        let id = PolicyId::new(self.sequence.allocate());
        let policy = Policy::issue(id, holder.clone(), details, coverage_amount);
        self.by_holder.entry(holder).or_default().push(id);
        tracing::debug!(policy_id = %id, "policy issued");
        self.policies.entry(id).or_insert(policy)
    }

    /// Marks the policy with `policy_id` inactive.
    ///
    /// Deactivation is one-way and idempotent. An id that was never issued
    /// is accepted and ignored; callers cannot distinguish deactivating a
    /// missing policy from deactivating one that is already inactive.
    pub fn deactivate_policy(&mut self, policy_id: PolicyId) {
        if let Some(policy) = self.policies.get_mut(&policy_id) {
            policy.deactivate();
            tracing::debug!(policy_id = %policy_id, "policy deactivated");
        }
    }

    /// Returns the policy with `policy_id`, if it was ever issued.
    pub fn get(&self, policy_id: PolicyId) -> Option<&Policy> {
        self.policies.get(&policy_id)
    }

    /// Returns the ids of every policy ever issued to `holder`, oldest
    /// first. Deactivated policies stay in the list; identities with no
    /// policies yield an empty slice.
    pub fn policies_of(&self, holder: &Identity) -> &[PolicyId] {
        self.by_holder.get(holder).map_or(&[], Vec::as_slice)
    }

    /// Number of policies ever issued.
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// Whether no policy has ever been issued.
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}
