//! Strongly-typed identifiers for ledger records
//!
//! Using newtype wrappers around the sequence numbers provides type safety
//! and prevents accidental mixing of policy and claim identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wraps an already-allocated sequence number
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the underlying sequence number
            pub const fn value(self) -> u64 {
                self.0
            }

            /// Returns the identifier prefix for display
            pub const fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let digits = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(digits.parse()?))
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }
    };
}

define_id!(PolicyId, "POL");
define_id!(ClaimId, "CLM");

/// Monotonic allocator for sequential record ids.
///
/// The counter starts at zero and is incremented before each allocation, so
/// the first id handed out is 1. Ids strictly increase and are never reused,
/// regardless of what later happens to the records they name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    /// Creates a sequence that has allocated nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next sequence number.
    pub fn allocate(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    /// Returns the most recently allocated number, or 0 if none.
    pub fn last(&self) -> u64 {
        self.last
    }
}
