//! Domain events for the role registry
//!
//! Registry events are notifications only: nothing in the system waits for
//! them, and failing to deliver one never fails the assignment that
//! produced it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Identity, Role};

/// Domain events emitted by the role registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartyEvent {
    /// A role was granted to an identity, overwriting any previous entry
    RoleAssigned {
        target: Identity,
        role: Role,
        timestamp: DateTime<Utc>,
    },
}

impl PartyEvent {
    /// Returns the identity this event concerns
    pub fn target(&self) -> &Identity {
        match self {
            PartyEvent::RoleAssigned { target, .. } => target,
        }
    }

    /// Returns the timestamp of this event
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            PartyEvent::RoleAssigned { timestamp, .. } => *timestamp,
        }
    }

    /// Returns the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            PartyEvent::RoleAssigned { .. } => "RoleAssigned",
        }
    }
}
