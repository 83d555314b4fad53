//! Opaque participant identities
//!
//! The registry never mints identities of its own. Every call names its
//! caller (and sometimes a target) by an externally supplied reference - an
//! account address, a public key, an employee number - and the system treats
//! that reference as an opaque, case-sensitive key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error raised when parsing an identity reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// An identity reference must contain at least one visible character.
    #[error("Identity reference is empty")]
    Empty,
}

/// An opaque reference to a participant.
///
/// Identities are compared byte-for-byte; the system never interprets them
/// beyond equality and hashing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Wraps a raw identity reference.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identity {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(IdentityError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<&str> for Identity {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Identity {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}
