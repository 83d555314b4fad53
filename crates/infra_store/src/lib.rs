//! Infrastructure State Layer
//!
//! This crate owns the authoritative in-memory state of the coverage
//! registry. The domain crates define the records and their rules; this
//! crate composes them behind a single lock and gates every mutation on the
//! caller's registered role.
//!
//! # Concurrency model
//!
//! One `RwLock` guards the role registry and both ledgers together. Every
//! mutating operation takes the write lock, resolves the caller's role,
//! validates the target record, and only then mutates - so a failed call
//! leaves no partial writes, and no reader ever observes a half-applied
//! mutation. Reads take the shared lock and return owned snapshots.
//!
//! # Events
//!
//! Accepted mutations publish notifications on a broadcast channel.
//! Delivery is fire-and-forget: subscribers that lag lose old events, and
//! nobody listening at all is perfectly fine.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::InsuranceStore;
//!
//! let store = InsuranceStore::initialize(Identity::new("deployer"));
//! store.assign_role(&Identity::new("deployer"), Identity::new("alice"), Role::User)?;
//! ```

pub mod error;
pub mod events;
pub mod store;

pub use error::StoreError;
pub use events::LedgerEvent;
pub use store::{InsuranceStore, StoreStats};
