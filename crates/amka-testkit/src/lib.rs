//! # AMKA Testkit
//!
//! Testing utilities for the AMKA crates.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known identifiers with their expected verdicts, evaluated on a fixed date
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: A validator on a fixed clock paired with a seeded RNG
//!
//! ## Golden Vectors
//!
//! ```rust
//! use amka_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok) in verify_all_vectors() {
//!     assert!(ok, "vector '{}' disagrees", name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use amka_testkit::generators::{amka_from_params, AmkaParams};
//!
//! proptest! {
//!     #[test]
//!     fn generated_amka_is_valid(params: AmkaParams) {
//!         let (fixture, id) = amka_from_params(&params);
//!         prop_assert!(fixture.amka.is_valid(&id, None));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use amka_testkit::fixtures::TestFixture;
//!
//! let mut fixture = TestFixture::new();
//! let id = fixture.generate(Some("1/2/1985")).unwrap();
//! assert!(fixture.amka.is_valid(&id, Some("1985")));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{TestFixture, REFERENCE_DATE};
pub use generators::{amka_from_params, AmkaParams};
pub use vectors::{all_vectors, luhn_vectors, verify_all_vectors, GoldenVector, LuhnVector};
