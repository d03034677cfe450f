//! Error types for AMKA operations.

use amka_core::LuhnError;
use serde::Serialize;
use thiserror::Error;

/// A reason a candidate AMKA is not valid.
///
/// These are data-driven outcomes, reported by [`crate::Amka::validate`] as an
/// ordered list. They only become an error through
/// [`crate::Amka::validate_strict`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// Input contains something other than `0`-`9`, or is empty.
    #[error("AMKA must contain only digits")]
    NotDigits,

    /// Input is not exactly 11 digits long.
    #[error("AMKA must be exactly 11 digits long, got {len}")]
    WrongLength { len: usize },

    /// The first six digits are not a past `DDMMYY` date.
    #[error("AMKA must start with a valid date of birth (DDMMYY)")]
    InvalidBirthDate,

    /// The explicit four-digit year given alongside the AMKA was rejected.
    #[error("birth year does not fit this AMKA: {reason}")]
    InvalidBirthYear { reason: String },

    /// The full identifier fails the Luhn checksum.
    #[error("AMKA has an invalid Luhn checksum")]
    InvalidChecksum,
}

/// Errors that can occur during AMKA operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmkaError {
    /// Well-formed but unusable argument: bad year, date of birth or length.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Raised only by strict validation, carrying the first violation.
    #[error("validation failed: {0}")]
    ValidationFailed(Violation),

    /// Error from the Luhn engine, including malformed digit strings.
    #[error(transparent)]
    Luhn(#[from] LuhnError),
}

/// Result type for AMKA operations.
pub type Result<T> = std::result::Result<T, AmkaError>;
