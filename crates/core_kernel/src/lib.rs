//! Core Kernel - Foundational types for the coverage registry
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Opaque caller-supplied identities
//! - Strongly-typed sequential record identifiers
//! - The participant role vocabulary

pub mod identifiers;
pub mod identity;
pub mod role;

pub use identifiers::{ClaimId, IdSequence, PolicyId};
pub use identity::{Identity, IdentityError};
pub use role::Role;
