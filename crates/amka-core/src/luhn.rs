//! The Luhn checksum engine.
//!
//! Digits are walked from the rightmost (index 0) to the leftmost. A complete
//! identifier has its check digit at index 0, so validation doubles the odd
//! indices. During generation the check digit is not yet present and every
//! position shifts left by one, so generation doubles the even indices.
//!
//! A doubled digit above 9 has 9 subtracted, which equals the sum of its two
//! decimal digits for every value in `0..=18`.

use rand::Rng;

use crate::digits::{is_digits, is_digits_or_empty};
use crate::error::{LuhnError, Result};

/// Luhn sum over `digits`.
///
/// `digits` must contain only `0`-`9`; callers validate first.
/// With `generating` set, the sum is computed as if a check digit were
/// already appended to the right of `digits`.
pub fn digit_sum(digits: &str, generating: bool) -> u32 {
    digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            let double = if generating { i % 2 == 0 } else { i % 2 == 1 };
            if !double {
                return digit;
            }
            let doubled = digit * 2;
            if doubled > 9 {
                doubled - 9
            } else {
                doubled
            }
        })
        .sum()
}

/// The check digit that completes `partial` into a valid identifier.
///
/// `(s * 9) mod 10` is `-s mod 10`, the amount that brings the sum to a
/// multiple of ten.
pub fn check_digit(partial: &str) -> u8 {
    ((digit_sum(partial, true) * 9) % 10) as u8
}

/// Check whether `id` satisfies the Luhn checksum.
///
/// # Errors
///
/// Returns [`LuhnError::InvalidFormat`] unless `id` is a non-empty string of digits.
pub fn is_valid(id: &str) -> Result<bool> {
    if !is_digits(id) {
        return Err(LuhnError::InvalidFormat(format!(
            "identifier must be a non-empty string of digits, got: '{}'",
            id
        )));
    }
    Ok(digit_sum(id, false) % 10 == 0)
}

/// Like [`is_valid`], but malformed input is simply not valid.
pub fn is_valid_lenient(id: &str) -> bool {
    is_valid(id).unwrap_or(false)
}

/// Generate a Luhn-valid identifier of `total` digits starting with `prefix`,
/// using the thread-local RNG.
///
/// See [`generate_with_rng`].
pub fn generate(total: usize, prefix: &str) -> Result<String> {
    generate_with_rng(&mut rand::thread_rng(), total, prefix)
}

/// Generate a Luhn-valid identifier of `total` digits starting with `prefix`.
///
/// The digits between the prefix and the trailing check digit are drawn
/// uniformly from `rng`.
///
/// # Errors
///
/// Returns [`LuhnError::InvalidArgument`] if `prefix` contains a non-digit,
/// if `total` is zero, or if `total` does not leave room for the check digit
/// after `prefix`.
pub fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    total: usize,
    prefix: &str,
) -> Result<String> {
    if !is_digits_or_empty(prefix) {
        return Err(LuhnError::InvalidArgument(format!(
            "prefix must contain only digits, got: '{}'",
            prefix
        )));
    }
    if total == 0 {
        return Err(LuhnError::InvalidArgument(
            "total length must be a positive integer".into(),
        ));
    }
    if total <= prefix.len() {
        return Err(LuhnError::InvalidArgument(format!(
            "total length {} leaves no room for a check digit after a {}-digit prefix",
            total,
            prefix.len()
        )));
    }

    if prefix.is_empty() && total == 1 {
        return Ok("0".into());
    }

    let remaining = total - prefix.len() - 1;
    let mut id = String::with_capacity(total);
    id.push_str(prefix);
    for _ in 0..remaining {
        id.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }

    let check = check_digit(&id);
    id.push(char::from(b'0' + check));
    Ok(id)
}
