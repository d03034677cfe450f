//! Error types for the Luhn engine.

use thiserror::Error;

/// Errors raised when the engine is called with malformed arguments.
///
/// A candidate identifier that merely fails its checksum is not an error;
/// it is reported as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LuhnError {
    /// Input is empty or contains characters other than `0`-`9`.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Input is well-formed but semantically unusable (bad length or prefix).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for Luhn operations.
pub type Result<T> = std::result::Result<T, LuhnError>;
