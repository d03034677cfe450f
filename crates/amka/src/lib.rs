//! # AMKA
//!
//! Validation and generation of AMKA, the 11-digit Greek social security
//! number.
//!
//! ## Overview
//!
//! An AMKA is a Luhn identifier of exactly 11 digits whose first six digits
//! encode the holder's birth date as `DDMMYY`. This crate checks both parts:
//!
//! - **Birth date**: the `DDMMYY` prefix must be a real calendar date that is
//!   not in the future, optionally pinned to an explicit four-digit year
//! - **Checksum**: the full 11 digits must satisfy the Luhn algorithm
//!
//! Nothing here checks that an AMKA was actually issued to anyone.
//!
//! ## Usage
//!
//! ```rust
//! use amka::Violation;
//!
//! let id = amka::generate(Some("1/2/1985")).unwrap();
//! assert!(id.starts_with("010285"));
//! assert!(amka::is_valid(&id, Some("1985")));
//!
//! assert!(!amka::is_valid("11118734597", None));
//! assert_eq!(
//!     amka::validate("11118734597", None),
//!     vec![Violation::InvalidChecksum]
//! );
//! ```
//!
//! The free functions read the system date and the thread-local RNG. For
//! deterministic results, build an [`Amka`] over a [`FixedClock`] and use
//! [`Amka::generate_with_rng`] with a seeded RNG.
//!
//! ## Error Policy
//!
//! Checking untrusted identifiers never fails: [`is_valid`] returns `false`
//! and [`validate`] returns the list of [`Violation`]s. Errors are reserved for
//! misuse of arguments (a malformed date of birth, an out-of-range year) and
//! for [`validate_strict`], which turns the first violation into
//! [`AmkaError::ValidationFailed`].
//!
//! ## Re-exports
//!
//! - `amka::core` - the Luhn engine and digit strings

pub mod birth_date;
pub mod clock;
pub mod error;
pub mod validator;

pub use amka_core as core;

pub use birth_date::{BirthDateFragment, MIN_BIRTH_YEAR};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{AmkaError, Result, Violation};
pub use validator::{Amka, AmkaConfig, AMKA_LEN};

pub use amka_core::luhn::{generate as luhn_generate, is_valid as luhn_valid};

/// Whether `id` is a valid AMKA today. See [`Amka::is_valid`].
pub fn is_valid(id: &str, year: Option<&str>) -> bool {
    Amka::system().is_valid(id, year)
}

/// Every reason `id` is not a valid AMKA today. See [`Amka::validate`].
pub fn validate(id: &str, year: Option<&str>) -> Vec<Violation> {
    Amka::system().validate(id, year)
}

/// Fail with the first reason `id` is not a valid AMKA today.
/// See [`Amka::validate_strict`].
pub fn validate_strict(id: &str, year: Option<&str>) -> Result<amka_core::DigitString> {
    Amka::system().validate_strict(id, year)
}

/// Whether `date6` starts with a past `DDMMYY` birth date. See [`Amka::is_valid_date`].
pub fn is_valid_date(date6: &str, year: Option<&str>) -> Result<bool> {
    Amka::system().is_valid_date(date6, year)
}

/// Generate a valid AMKA. See [`Amka::generate`].
pub fn generate(date_of_birth: Option<&str>) -> Result<String> {
    Amka::system().generate(date_of_birth)
}
