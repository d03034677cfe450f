//! Digit strings: the only input shape the engine accepts.
//!
//! Every identifier handled by this workspace is a sequence of ASCII digits.
//! [`DigitString`] carries that guarantee in the type once constructed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LuhnError;

/// Returns true if `input` is non-empty and contains only `0`-`9`.
pub fn is_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Like [`is_digits`], but also accepts the empty string.
///
/// Prefixes passed to [`crate::luhn::generate`] may be empty.
pub fn is_digits_or_empty(input: &str) -> bool {
    input.bytes().all(|b| b.is_ascii_digit())
}

/// A non-empty string of ASCII digits.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DigitString(String);

impl DigitString {
    /// Validate and wrap `input`.
    ///
    /// # Errors
    ///
    /// Returns [`LuhnError::InvalidFormat`] if `input` is empty or contains a non-digit.
    pub fn parse(input: &str) -> Result<Self, LuhnError> {
        if is_digits(input) {
            return Ok(Self(input.to_owned()));
        }
        Err(LuhnError::InvalidFormat(format!(
            "expected a non-empty string of digits, got: '{}'",
            input
        )))
    }

    /// Get the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a parsed value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the numeric value of each digit, most significant first.
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'0')
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitString({})", self.0)
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for DigitString {
    type Err = LuhnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DigitString {
    type Error = LuhnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_digits(&value) {
            Ok(Self(value))
        } else {
            Err(LuhnError::InvalidFormat(format!(
                "expected a non-empty string of digits, got: '{}'",
                value
            )))
        }
    }
}

impl From<DigitString> for String {
    fn from(value: DigitString) -> Self {
        value.0
    }
}
