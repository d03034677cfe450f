//! The AMKA validator and generator.
//!
//! [`Amka`] layers the birth-date rules over the Luhn engine and owns the two
//! ambient inputs they need: the current date (through a [`Clock`]) and the
//! configuration.

use amka_core::{is_digits, luhn, DigitString};
use rand::Rng;

use crate::birth_date::{self, BirthDateFragment, FRAGMENT_LEN};
use crate::clock::{Clock, SystemClock};
use crate::error::{AmkaError, Result, Violation};

/// Length of every AMKA.
pub const AMKA_LEN: usize = 11;

/// Configuration for [`Amka`].
#[derive(Debug, Clone, Default)]
pub struct AmkaConfig {
    /// Upper bound on random birth-date draws during generation.
    ///
    /// `None` keeps drawing until a valid date comes up. A clock on or before
    /// 1900-01-01 fails generation without a date of birth either way.
    pub max_date_samples: Option<u32>,
}

/// Validates and generates AMKA identifiers against a clock.
///
/// Validation comes in three shapes over the same checks:
/// - [`Amka::is_valid`] answers yes or no and never fails
/// - [`Amka::validate`] lists every [`Violation`] found
/// - [`Amka::validate_strict`] fails with the first violation
#[derive(Debug, Clone, Default)]
pub struct Amka<C: Clock = SystemClock> {
    clock: C,
    config: AmkaConfig,
}

impl Amka<SystemClock> {
    /// An instance reading the system date, with default configuration.
    pub fn system() -> Self {
        Self::new(SystemClock, AmkaConfig::default())
    }
}

impl<C: Clock> Amka<C> {
    /// Create a new instance.
    pub fn new(clock: C, config: AmkaConfig) -> Self {
        Self { clock, config }
    }

    /// Get the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Get the configuration.
    pub fn config(&self) -> &AmkaConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────────────────────

    /// Check that `date6` starts with a past `DDMMYY` birth date.
    ///
    /// See [`birth_date::is_valid_date`].
    pub fn is_valid_date(&self, date6: &str, year: Option<&str>) -> Result<bool> {
        birth_date::is_valid_date(date6, year, self.clock.today())
    }

    /// Whether `id` is a valid AMKA, optionally pinned to a four-digit birth `year`.
    ///
    /// Never fails: malformed input, a rejected `year` and every other
    /// violation are all just `false`.
    pub fn is_valid(&self, id: &str, year: Option<&str>) -> bool {
        if id.len() != AMKA_LEN || !is_digits(id) {
            return false;
        }
        match self.is_valid_date(&id[..FRAGMENT_LEN], year) {
            Ok(true) => luhn::is_valid_lenient(id),
            Ok(false) | Err(_) => false,
        }
    }

    /// List the reasons `id` is not a valid AMKA, in check order.
    ///
    /// An empty list means valid. A non-digit input short-circuits with a
    /// single [`Violation::NotDigits`]; the length, birth-date and checksum
    /// checks all run and accumulate.
    pub fn validate(&self, id: &str, year: Option<&str>) -> Vec<Violation> {
        if !is_digits(id) {
            return vec![Violation::NotDigits];
        }

        let mut violations = Vec::new();

        if id.len() != AMKA_LEN {
            violations.push(Violation::WrongLength { len: id.len() });
        }

        match self.is_valid_date(id, year) {
            Ok(true) => {}
            Ok(false) => violations.push(Violation::InvalidBirthDate),
            Err(AmkaError::InvalidArgument(reason)) => {
                violations.push(Violation::InvalidBirthYear { reason })
            }
            Err(e) => violations.push(Violation::InvalidBirthYear {
                reason: e.to_string(),
            }),
        }

        if !luhn::is_valid_lenient(id) {
            violations.push(Violation::InvalidChecksum);
        }

        violations
    }

    /// Like [`Amka::validate`], but fails on the first violation.
    ///
    /// On success, returns the identifier as a [`DigitString`].
    ///
    /// # Errors
    ///
    /// Returns [`AmkaError::ValidationFailed`] carrying the first violation.
    pub fn validate_strict(&self, id: &str, year: Option<&str>) -> Result<DigitString> {
        match self.validate(id, year).into_iter().next() {
            Some(violation) => Err(AmkaError::ValidationFailed(violation)),
            None => Ok(DigitString::parse(id)?),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Generation
    // ─────────────────────────────────────────────────────────────────────────

    /// Generate a valid AMKA using the thread-local RNG.
    ///
    /// See [`Amka::generate_with_rng`].
    pub fn generate(&self, date_of_birth: Option<&str>) -> Result<String> {
        self.generate_with_rng(&mut rand::thread_rng(), date_of_birth)
    }

    /// Generate a valid AMKA.
    ///
    /// With `date_of_birth` (`D/M/YYYY`), the identifier starts with that
    /// date. Without it, a random past birth date is drawn.
    ///
    /// # Errors
    ///
    /// Returns [`AmkaError::InvalidArgument`] if `date_of_birth` is malformed,
    /// is not a calendar date, is not strictly in the past, or has a year
    /// outside the accepted range; or if the configured sampling cap is hit.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        date_of_birth: Option<&str>,
    ) -> Result<String> {
        let today = self.clock.today();

        let fragment = match date_of_birth {
            Some(dob) => {
                let fragment = BirthDateFragment::from_date_of_birth(dob)?;
                if !birth_date::is_valid_date(
                    &fragment.to_string(),
                    Some(&fragment.year_str()),
                    today,
                )? {
                    return Err(AmkaError::InvalidArgument(format!(
                        "date of birth {} is not a past calendar date",
                        dob
                    )));
                }
                fragment
            }
            None => birth_date::sample_fragment(rng, today, self.config.max_date_samples)?,
        };

        let id = luhn::generate_with_rng(rng, AMKA_LEN, &fragment.to_string())?;
        tracing::debug!(birth_date = %fragment, "generated AMKA");
        Ok(id)
    }
}
