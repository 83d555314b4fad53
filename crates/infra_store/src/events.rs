//! The unified ledger event stream

use serde::{Deserialize, Serialize};

use domain_claims::ClaimEvent;
use domain_party::PartyEvent;
use domain_policy::PolicyEvent;

/// Every notification the store can broadcast.
///
/// Wraps the per-domain events so a single subscription observes the whole
/// registry in commit order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum LedgerEvent {
    /// Role registry notification
    Party(PartyEvent),
    /// Policy ledger notification
    Policy(PolicyEvent),
    /// Claim ledger notification
    Claim(ClaimEvent),
}

impl LedgerEvent {
    /// Returns the event type name of the wrapped event
    pub fn event_type(&self) -> &'static str {
        match self {
            LedgerEvent::Party(event) => event.event_type(),
            LedgerEvent::Policy(event) => event.event_type(),
            LedgerEvent::Claim(event) => event.event_type(),
        }
    }
}

impl From<PartyEvent> for LedgerEvent {
    fn from(event: PartyEvent) -> Self {
        LedgerEvent::Party(event)
    }
}

impl From<PolicyEvent> for LedgerEvent {
    fn from(event: PolicyEvent) -> Self {
        LedgerEvent::Policy(event)
    }
}

impl From<ClaimEvent> for LedgerEvent {
    fn from(event: ClaimEvent) -> Self {
        LedgerEvent::Claim(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use core_kernel::{Identity, PolicyId};

    #[test]
    fn test_event_type_delegates_to_wrapped_event() {
        let event: LedgerEvent = PolicyEvent::PolicyIssued {
            policy_id: PolicyId::new(1),
            holder: Identity::new("alice"),
            timestamp: Utc::now(),
        }
        .into();
        assert_eq!(event.event_type(), "PolicyIssued");
    }

    #[test]
    fn test_json_shape_is_tagged_by_domain() {
        let event: LedgerEvent = PolicyEvent::PolicyIssued {
            policy_id: PolicyId::new(3),
            holder: Identity::new("bob"),
            timestamp: Utc::now(),
        }
        .into();
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["domain"], "Policy");
        assert_eq!(json["event"]["PolicyIssued"]["policy_id"], 3);
    }
}
