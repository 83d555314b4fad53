//! Domain events for the policy ledger
//!
//! Only issuance is announced. Deactivation deliberately emits nothing:
//! observers learn about it, if at all, by re-reading the record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Identity, PolicyId};

/// Domain events emitted by the policy ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyEvent {
    /// A policy has been issued and is active
    PolicyIssued {
        policy_id: PolicyId,
        holder: Identity,
        timestamp: DateTime<Utc>,
    },
}

impl PolicyEvent {
    /// Returns the policy ID associated with this event
    pub fn policy_id(&self) -> PolicyId {
        match self {
            PolicyEvent::PolicyIssued { policy_id, .. } => *policy_id,
        }
    }

    /// Returns the timestamp of this event
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            PolicyEvent::PolicyIssued { timestamp, .. } => *timestamp,
        }
    }

    /// Returns the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            PolicyEvent::PolicyIssued { .. } => "PolicyIssued",
        }
    }
}
