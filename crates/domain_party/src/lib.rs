//! Party Domain
//!
//! This crate holds the identity and role registry: the single mapping from
//! participant identities to roles, and the rules governing who may change it.
//!
//! The registry is deliberately minimal. It keeps only the current role per
//! identity - no assignment history, no effective dates - so a reassignment
//! changes an identity's privileges from the very next call.

pub mod error;
pub mod events;
pub mod registry;

pub use error::PartyError;
pub use events::PartyEvent;
pub use registry::RoleRegistry;
