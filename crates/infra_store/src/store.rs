//! The gated store
//!
//! `InsuranceStore` is the one component callers touch. It owns the role
//! registry and both ledgers, serializes every mutation behind a single
//! write lock, and publishes notifications for accepted mutations.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use core_kernel::{ClaimId, Identity, PolicyId, Role};
use domain_claims::{Claim, ClaimError, ClaimEvent, ClaimLedger, ClaimStatus};
use domain_party::{PartyEvent, RoleRegistry};
use domain_policy::{Policy, PolicyError, PolicyEvent, PolicyLedger};

use crate::error::StoreError;
use crate::events::LedgerEvent;

/// Capacity of the notification channel. A subscriber that falls further
/// behind than this loses its oldest events instead of blocking writers.
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Point-in-time counters over the whole registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    /// Registered identities, the owner included
    pub registered_parties: usize,
    /// Policies ever issued, active or not
    pub policies_issued: usize,
    /// Claims ever submitted, in any status
    pub claims_submitted: usize,
}

#[derive(Debug)]
struct LedgerState {
    registry: RoleRegistry,
    policies: PolicyLedger,
    claims: ClaimLedger,
}

/// Authorization-gated, in-memory store of roles, policies, and claims.
///
/// Every mutating operation resolves the caller's role from the registry,
/// validates the target record, and then mutates - all inside one write
/// critical section, so each call is atomic and all-or-nothing. Reads take
/// the shared lock and return owned snapshots.
#[derive(Debug)]
pub struct InsuranceStore {
    state: RwLock<LedgerState>,
    events: broadcast::Sender<LedgerEvent>,
}

impl InsuranceStore {
    /// Creates the store, appointing `owner` at initialization.
    ///
    /// This is the only way an owner ever comes to exist; there is no
    /// re-initialization and no owner reassignment.
    pub fn initialize(owner: Identity) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        tracing::info!(owner = %owner, "store initialized");
        Self {
            state: RwLock::new(LedgerState {
                registry: RoleRegistry::initialize(owner),
                policies: PolicyLedger::new(),
                claims: ClaimLedger::new(),
            }),
            events,
        }
    }

    /// Subscribes to ledger notifications.
    ///
    /// Receivers observe accepted mutations in commit order. Delivery is
    /// fire-and-forget: dropping the receiver or lagging never affects the
    /// store.
    pub fn subscribe(&self) -> broadcast::Receiver<LedgerEvent> {
        self.events.subscribe()
    }

    // ------------------------------------------------------------------
    // Role registry operations
    // ------------------------------------------------------------------

    /// Assigns `role` to `target` on behalf of `caller`.
    ///
    /// Owner-only; grantable roles are `Admin` and `User`. Overwrites any
    /// previous entry for `target`. Emits `RoleAssigned`.
    pub fn assign_role(
        &self,
        caller: &Identity,
        target: Identity,
        role: Role,
    ) -> Result<(), StoreError> {
        let mut guard = self.write_state();
        guard.registry.assign_role(caller, target.clone(), role)?;
        tracing::info!(assignee = %target, role = %role, "role assigned");
        self.publish(
            PartyEvent::RoleAssigned {
                target,
                role,
                timestamp: Utc::now(),
            }
            .into(),
        );
        Ok(())
    }

    /// Returns the role currently held by `id`, if any.
    pub fn role_of(&self, id: &Identity) -> Option<Role> {
        self.read_state().registry.role_of(id)
    }

    // ------------------------------------------------------------------
    // Policy ledger operations
    // ------------------------------------------------------------------

    /// Issues a policy to `holder` and returns the stored record.
    ///
    /// Requires an administrator (or the owner) as caller and a registered
    /// user as holder. Emits `PolicyIssued`.
    pub fn issue_policy(
        &self,
        caller: &Identity,
        holder: Identity,
        details: String,
        coverage_amount: u64,
    ) -> Result<Policy, StoreError> {
        let mut guard = self.write_state();
        let state = &mut *guard;
        if !state.registry.is_admin_or_owner(caller) {
            return Err(PolicyError::Unauthorized.into());
        }
        if !state.registry.is_user(&holder) {
            return Err(PolicyError::NotARegisteredUser.into());
        }

        let policy = state
            .policies
            .issue_policy(holder, details, coverage_amount)
            .clone();
        tracing::info!(policy_id = %policy.id, holder = %policy.holder, "policy issued");
        self.publish(
            PolicyEvent::PolicyIssued {
                policy_id: policy.id,
                holder: policy.holder.clone(),
                timestamp: Utc::now(),
            }
            .into(),
        );
        Ok(policy)
    }

    /// Marks a policy inactive.
    ///
    /// Requires an administrator (or the owner) as caller; there is no
    /// holder check, so any administrator may deactivate any policy. An id
    /// that was never issued is accepted and ignored. Emits nothing.
    pub fn deactivate_policy(
        &self,
        caller: &Identity,
        policy_id: PolicyId,
    ) -> Result<(), StoreError> {
        let mut guard = self.write_state();
        let state = &mut *guard;
        if !state.registry.is_admin_or_owner(caller) {
            return Err(PolicyError::Unauthorized.into());
        }
        state.policies.deactivate_policy(policy_id);
        tracing::info!(policy_id = %policy_id, "policy deactivated");
        Ok(())
    }

    /// Returns the policy with `policy_id`, if it was ever issued.
    pub fn get_policy(&self, policy_id: PolicyId) -> Option<Policy> {
        self.read_state().policies.get(policy_id).cloned()
    }

    /// Returns the ids of every policy ever issued to `holder`, oldest
    /// first, deactivated ones included.
    pub fn user_policies(&self, holder: &Identity) -> Vec<PolicyId> {
        self.read_state().policies.policies_of(holder).to_vec()
    }

    // ------------------------------------------------------------------
    // Claim ledger operations
    // ------------------------------------------------------------------

    /// Submits a claim by `caller` against `policy_id`.
    ///
    /// Requires a registered user as caller, an active policy, and the
    /// caller to be that policy's holder - checked in that order. Emits
    /// `ClaimSubmitted`.
    pub fn submit_claim(
        &self,
        caller: &Identity,
        policy_id: PolicyId,
        description: String,
        amount: u64,
    ) -> Result<Claim, StoreError> {
        let mut guard = self.write_state();
        let state = &mut *guard;
        if !state.registry.is_user(caller) {
            return Err(ClaimError::Unauthorized.into());
        }
        // A policy that was never issued reads as inactive here; claimants
        // cannot probe for the difference.
        let policy = state
            .policies
            .get(policy_id)
            .filter(|policy| policy.is_active)
            .ok_or(ClaimError::PolicyInactive)?;
        if !policy.is_held_by(caller) {
            return Err(ClaimError::NotPolicyHolder.into());
        }

        let claim = state
            .claims
            .submit_claim(caller.clone(), policy_id, description, amount)
            .clone();
        tracing::info!(claim_id = %claim.id, policy_id = %policy_id, "claim submitted");
        self.publish(
            ClaimEvent::ClaimSubmitted {
                claim_id: claim.id,
                policy_id: claim.policy_id,
                claimant: claim.claimant.clone(),
                timestamp: Utc::now(),
            }
            .into(),
        );
        Ok(claim)
    }

    /// Overwrites the status of the pending claim `claim_id`.
    ///
    /// Requires an administrator (or the owner) as caller and a claim that
    /// is still `Submitted`; the target status is unconstrained. Emits
    /// `ClaimStatusUpdated`.
    pub fn update_claim_status(
        &self,
        caller: &Identity,
        claim_id: ClaimId,
        new_status: ClaimStatus,
    ) -> Result<Claim, StoreError> {
        let mut guard = self.write_state();
        let state = &mut *guard;
        if !state.registry.is_admin_or_owner(caller) {
            return Err(ClaimError::Unauthorized.into());
        }

        let claim = state.claims.update_status(claim_id, new_status)?.clone();
        tracing::info!(claim_id = %claim_id, status = %new_status, "claim status updated");
        self.publish(
            ClaimEvent::ClaimStatusUpdated {
                claim_id,
                new_status,
                timestamp: Utc::now(),
            }
            .into(),
        );
        Ok(claim)
    }

    /// Returns the claim with `claim_id`, if it was ever submitted.
    pub fn get_claim(&self, claim_id: ClaimId) -> Option<Claim> {
        self.read_state().claims.get(claim_id).cloned()
    }

    /// Returns the ids of every claim ever submitted by `claimant`, oldest
    /// first, adjudicated ones included.
    pub fn user_claims(&self, claimant: &Identity) -> Vec<ClaimId> {
        self.read_state().claims.claims_of(claimant).to_vec()
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    /// Returns a consistent snapshot of the registry counters.
    pub fn stats(&self) -> StoreStats {
        let state = self.read_state();
        StoreStats {
            registered_parties: state.registry.len(),
            policies_issued: state.policies.len(),
            claims_submitted: state.claims.len(),
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn publish(&self, event: LedgerEvent) {
        tracing::debug!(event_type = event.event_type(), "publishing ledger event");
        // A send error only means nobody is subscribed right now.
        let _ = self.events.send(event);
    }

    // Mutations validate before touching any field, so even a writer that
    // panicked mid-call left the maps consistent; recover the guard instead
    // of propagating the poison.
    fn read_state(&self) -> RwLockReadGuard<'_, LedgerState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, LedgerState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
