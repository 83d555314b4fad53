//! Policy Administration Domain
//!
//! This crate implements the policy side of the coverage registry: the
//! policy record itself and the ledger that issues, indexes, and
//! deactivates policies.
//!
//! # Policy Lifecycle
//!
//! ```text
//! issued (active) -> deactivated
//! ```
//!
//! There are exactly two states and one transition. Nothing reactivates a
//! policy, and no record is ever deleted - deactivated policies stay in the
//! ledger and in their holder's index forever.

pub mod error;
pub mod events;
pub mod ledger;
pub mod policy;

pub use error::PolicyError;
pub use events::PolicyEvent;
pub use ledger::PolicyLedger;
pub use policy::Policy;
