//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! coverage registry test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for seeded store construction
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;

use once_cell::sync::Lazy;

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
});

/// Initializes tracing once for the whole test binary.
///
/// Safe to call from every test; only the first call installs the
/// subscriber. Set `RUST_LOG` to see store and ledger logs while debugging.
pub fn init_test_tracing() {
    Lazy::force(&TRACING);
}
