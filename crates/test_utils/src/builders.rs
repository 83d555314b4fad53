//! Test Data Builders
//!
//! Provides builder patterns for constructing seeded stores with sensible
//! defaults. Tests specify only the participants and records they care
//! about; everything is created through the store's public operations, so a
//! built store is always in a state the system itself could have reached.

use core_kernel::{Identity, PolicyId, Role};
use infra_store::InsuranceStore;

use crate::fixtures::IdentityFixtures;

/// Builder for a store populated with roles and policies.
///
/// The owner defaults to [`IdentityFixtures::owner`]. Policies are issued
/// by the owner, so they never require a seeded admin.
pub struct TestStoreBuilder {
    owner: Identity,
    admins: Vec<Identity>,
    users: Vec<Identity>,
    policies: Vec<(Identity, String, u64)>,
}

impl Default for TestStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestStoreBuilder {
    /// Creates a builder seeding only the default owner
    pub fn new() -> Self {
        Self {
            owner: IdentityFixtures::owner(),
            admins: Vec::new(),
            users: Vec::new(),
            policies: Vec::new(),
        }
    }

    /// Sets the initializing owner identity
    pub fn with_owner(mut self, owner: Identity) -> Self {
        self.owner = owner;
        self
    }

    /// Registers an admin
    pub fn with_admin(mut self, admin: Identity) -> Self {
        self.admins.push(admin);
        self
    }

    /// Registers a user
    pub fn with_user(mut self, user: Identity) -> Self {
        self.users.push(user);
        self
    }

    /// Issues a policy to `holder` during build. The holder must also be
    /// registered with [`with_user`](Self::with_user).
    pub fn with_policy(
        mut self,
        holder: Identity,
        details: impl Into<String>,
        coverage_amount: u64,
    ) -> Self {
        self.policies.push((holder, details.into(), coverage_amount));
        self
    }

    /// Builds the store by replaying the seeded operations in order:
    /// admins, then users, then policies.
    ///
    /// # Panics
    ///
    /// Panics if any seeded operation is rejected - for example a policy
    /// whose holder was never registered as a user.
    pub fn build(self) -> InsuranceStore {
        let store = InsuranceStore::initialize(self.owner.clone());
        for admin in self.admins {
            store
                .assign_role(&self.owner, admin.clone(), Role::Admin)
                .unwrap_or_else(|e| panic!("seeding admin {admin} failed: {e}"));
        }
        for user in self.users {
            store
                .assign_role(&self.owner, user.clone(), Role::User)
                .unwrap_or_else(|e| panic!("seeding user {user} failed: {e}"));
        }
        for (holder, details, coverage_amount) in self.policies {
            store
                .issue_policy(&self.owner, holder.clone(), details, coverage_amount)
                .unwrap_or_else(|e| panic!("seeding policy for {holder} failed: {e}"));
        }
        store
    }
}

/// Builds the canonical scenario store: an owner, the admin `bob`, the
/// user `alice`, and one active flood-cover policy held by alice.
///
/// Returns the store and the id of the seeded policy.
pub fn scenario_store() -> (InsuranceStore, PolicyId) {
    let store = TestStoreBuilder::new()
        .with_admin(IdentityFixtures::admin())
        .with_user(IdentityFixtures::user())
        .with_policy(
            IdentityFixtures::user(),
            crate::fixtures::StringFixtures::flood_cover(),
            crate::fixtures::AmountFixtures::coverage(),
        )
        .build();
    let policy_id = store
        .user_policies(&IdentityFixtures::user())
        .first()
        .copied()
        .expect("scenario store seeds one policy");
    (store, policy_id)
}
