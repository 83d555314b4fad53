//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the coverage
//! registry. These fixtures are designed to be consistent and predictable
//! for unit tests; the faker-backed helpers produce varied but well-formed
//! data where the exact value does not matter.

use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::FirstName;
use fake::Fake;

use core_kernel::Identity;

/// Fixture for participant identities
pub struct IdentityFixtures;

impl IdentityFixtures {
    /// The identity that initializes the store in tests
    pub fn owner() -> Identity {
        Identity::new("owner")
    }

    /// A standing administrator
    pub fn admin() -> Identity {
        Identity::new("bob")
    }

    /// A registered user and policyholder
    pub fn user() -> Identity {
        Identity::new("alice")
    }

    /// A second registered user, for cross-holder tests
    pub fn second_user() -> Identity {
        Identity::new("carol")
    }

    /// An identity that is never registered
    pub fn stranger() -> Identity {
        Identity::new("mallory")
    }

    /// A random plausible identity
    pub fn random() -> Identity {
        let name: String = FirstName().fake();
        Identity::new(name.to_lowercase())
    }
}

/// Fixture for free-form record texts
pub struct StringFixtures;

impl StringFixtures {
    /// Standard policy details
    pub fn flood_cover() -> String {
        "flood cover".to_string()
    }

    /// Standard claim description
    pub fn water_damage() -> String {
        "water damage".to_string()
    }

    /// A random sentence for details/description fields
    pub fn random_text() -> String {
        Sentence(3..8).fake()
    }
}

/// Fixture for recorded amounts
pub struct AmountFixtures;

impl AmountFixtures {
    /// Standard coverage amount
    pub fn coverage() -> u64 {
        1000
    }

    /// Standard claim amount
    pub fn claim_amount() -> u64 {
        500
    }

    /// The largest recordable amount; coverage has no upper bound
    pub fn max_coverage() -> u64 {
        u64::MAX
    }
}
