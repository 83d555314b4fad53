//! Domain events for the claim ledger

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, Identity, PolicyId};

use crate::claim::ClaimStatus;

/// Domain events emitted by the claim ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimEvent {
    /// A claim has been submitted and is pending adjudication
    ClaimSubmitted {
        claim_id: ClaimId,
        policy_id: PolicyId,
        claimant: Identity,
        timestamp: DateTime<Utc>,
    },

    /// A pending claim's status has been overwritten
    ClaimStatusUpdated {
        claim_id: ClaimId,
        new_status: ClaimStatus,
        timestamp: DateTime<Utc>,
    },
}

impl ClaimEvent {
    /// Returns the claim ID associated with this event
    pub fn claim_id(&self) -> ClaimId {
        match self {
            ClaimEvent::ClaimSubmitted { claim_id, .. } => *claim_id,
            ClaimEvent::ClaimStatusUpdated { claim_id, .. } => *claim_id,
        }
    }

    /// Returns the timestamp of this event
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            ClaimEvent::ClaimSubmitted { timestamp, .. } => *timestamp,
            ClaimEvent::ClaimStatusUpdated { timestamp, .. } => *timestamp,
        }
    }

    /// Returns the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            ClaimEvent::ClaimSubmitted { .. } => "ClaimSubmitted",
            ClaimEvent::ClaimStatusUpdated { .. } => "ClaimStatusUpdated",
        }
    }
}
