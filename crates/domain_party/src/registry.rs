//! Identity and role registry
//!
//! A single mapping from identity to role. Identities appear in the mapping
//! only when the owner assigns them a role; everyone else is an unregistered
//! stranger with no privileges.

use std::collections::HashMap;

use core_kernel::{Identity, Role};

use crate::error::PartyError;

/// Registry of participant roles.
///
/// Construction doubles as system initialization: the deploying identity
/// becomes the owner, and no code path ever appoints a second one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRegistry {
    roles: HashMap<Identity, Role>,
}

impl RoleRegistry {
    /// Creates the registry, appointing `deployer` as the owner.
    pub fn initialize(deployer: Identity) -> Self {
        let mut roles = HashMap::new();
        roles.insert(deployer, Role::Owner);
        Self { roles }
    }

    /// Assigns `role` to `target` on behalf of `caller`.
    ///
    /// Only the owner may assign roles, and only `Admin` or `User` can be
    /// granted. Assignment is an unconditional overwrite with no history:
    /// a demoted admin loses all administrative capability from the next
    /// call on, and the overwrite applies to every entry - including the
    /// owner's own, should the owner point the call at itself.
    ///
    /// # Errors
    ///
    /// Returns [`PartyError::Unauthorized`] when `caller` is not the owner,
    /// and [`PartyError::InvalidRole`] when `role` is not assignable.
    pub fn assign_role(
        &mut self,
        caller: &Identity,
        target: Identity,
        role: Role,
    ) -> Result<(), PartyError> {
        if !self.is_owner(caller) {
            return Err(PartyError::Unauthorized);
        }
        if !role.is_assignable() {
            return Err(PartyError::InvalidRole(role));
        }
        self.roles.insert(target, role);
        Ok(())
    }

    /// Returns the role currently held by `id`, if any.
    pub fn role_of(&self, id: &Identity) -> Option<Role> {
        self.roles.get(id).copied()
    }

    /// Whether `id` is the owner.
    pub fn is_owner(&self, id: &Identity) -> bool {
        self.role_of(id) == Some(Role::Owner)
    }

    /// Whether `id` holds administrative capability (owner or admin).
    pub fn is_admin_or_owner(&self, id: &Identity) -> bool {
        self.role_of(id).map_or(false, Role::is_admin_or_owner)
    }

    /// Whether `id` is a registered user.
    pub fn is_user(&self, id: &Identity) -> bool {
        self.role_of(id) == Some(Role::User)
    }

    /// Number of registered identities, the owner included.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether the registry holds no entries. Never true in practice, since
    /// initialization always registers the owner.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
