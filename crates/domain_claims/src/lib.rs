//! Claims Management Domain
//!
//! This crate implements the claim side of the coverage registry: the claim
//! record, its four-state status, and the ledger that stores and indexes
//! claims.
//!
//! # Status machine
//!
//! ```text
//!              +-> Approved --+
//! Submitted ---+-> Rejected   +--> (frozen)
//!              +-> Paid ------+
//! ```
//!
//! A claim is adjudicated at most once. While `Submitted`, an administrator
//! may overwrite the status with any value - even `Submitted` itself. The
//! moment the status is anything else, the claim is frozen: `Approved`
//! never becomes `Paid`, `Rejected` is never reconsidered. There is no
//! richer pipeline behind the four states, and recording `Paid` moves no
//! funds anywhere.

pub mod claim;
pub mod error;
pub mod events;
pub mod ledger;

pub use claim::{Claim, ClaimStatus};
pub use error::ClaimError;
pub use events::ClaimEvent;
pub use ledger::ClaimLedger;
