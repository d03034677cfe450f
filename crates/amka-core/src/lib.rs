//! # AMKA Core
//!
//! The Luhn checksum engine and the digit-string primitives it operates on.
//!
//! This crate contains no I/O, no clock and no logging. It is pure computation
//! over strings of ASCII digits; the only external input is the random source
//! used when generating identifiers.
//!
//! ## Key Types
//!
//! - [`DigitString`] - A non-empty string guaranteed to contain only `0`-`9`
//! - [`LuhnError`] - Malformed-input errors raised by the engine
//!
//! ## Luhn Engine
//!
//! Validation and generation live in the [`luhn`] module:
//!
//! ```rust
//! use amka_core::luhn;
//!
//! assert!(luhn::is_valid("79927398713").unwrap());
//!
//! let id = luhn::generate(16, "4532").unwrap();
//! assert_eq!(id.len(), 16);
//! assert!(luhn::is_valid(&id).unwrap());
//! ```

pub mod digits;
pub mod error;
pub mod luhn;

pub use digits::{is_digits, is_digits_or_empty, DigitString};
pub use error::{LuhnError, Result};
pub use luhn::{check_digit, digit_sum, generate, generate_with_rng, is_valid, is_valid_lenient};
