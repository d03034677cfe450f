//! Birth dates embedded in the first six digits of an AMKA.
//!
//! The fragment is `DDMMYY`. A two-digit year is ambiguous; without an
//! explicit four-digit year it is read as `20YY`, falling back to `19YY`
//! when `20YY` would put the birth in the future. This is a fixed heuristic
//! anchored on today's date, not a configurable pivot.

use std::fmt;

use amka_core::is_digits;
use chrono::{Datelike, NaiveDate};
use rand::Rng;

use crate::error::{AmkaError, Result};

/// Earliest four-digit birth year accepted alongside an AMKA.
pub const MIN_BIRTH_YEAR: i32 = 1800;

/// Number of leading digits that encode the birth date.
pub const FRAGMENT_LEN: usize = 6;

/// Day, month and full year destined for the `DDMMYY` prefix of an AMKA.
///
/// The components are not checked against the calendar on construction;
/// use [`is_valid_date`] for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthDateFragment {
    day: u8,
    month: u8,
    year: u16,
}

impl BirthDateFragment {
    /// Create a fragment from raw components.
    pub const fn new(day: u8, month: u8, year: u16) -> Self {
        Self { day, month, year }
    }

    /// Parse a `D/M/YYYY` date of birth (day and month may be one or two digits).
    ///
    /// # Errors
    ///
    /// Returns [`AmkaError::InvalidArgument`] unless `dob` matches `^\d{1,2}/\d{1,2}/\d{4}$`.
    pub fn from_date_of_birth(dob: &str) -> Result<Self> {
        let malformed = || {
            AmkaError::InvalidArgument(format!(
                "date of birth must look like D/M/YYYY, got: '{}'",
                dob
            ))
        };

        let mut parts = dob.split('/');
        let (Some(day), Some(month), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        let well_formed = is_digits(day)
            && day.len() <= 2
            && is_digits(month)
            && month.len() <= 2
            && is_digits(year)
            && year.len() == 4;
        if !well_formed {
            return Err(malformed());
        }

        Ok(Self {
            day: day.parse().map_err(|_| malformed())?,
            month: month.parse().map_err(|_| malformed())?,
            year: year.parse().map_err(|_| malformed())?,
        })
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    /// The full year, zero-padded to four digits.
    pub fn year_str(&self) -> String {
        format!("{:04}", self.year)
    }

    /// The calendar date, if the components name one.
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }
}

impl fmt::Display for BirthDateFragment {
    /// Formats as the six-digit `DDMMYY` fragment.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}{:02}", self.day, self.month, self.year % 100)
    }
}

/// Check that the first six digits of `date6` form a past `DDMMYY` birth date.
///
/// `date6` must be at least six digits and nothing else, otherwise the answer
/// is `false`. Only the first six digits are read.
///
/// With `year`, the date is built from `DDMM` and the full year and must be
/// strictly before `today`. Without it, the century is resolved as described
/// in the module docs.
///
/// # Errors
///
/// Returns [`AmkaError::InvalidArgument`] if `year` is not a four-digit year in
/// `MIN_BIRTH_YEAR..=today.year()`, or if its last two digits differ from `YY`.
pub fn is_valid_date(date6: &str, year: Option<&str>, today: NaiveDate) -> Result<bool> {
    if date6.len() < FRAGMENT_LEN || !is_digits(date6) {
        return Ok(false);
    }

    let day = two_digits(&date6[0..2]);
    let month = two_digits(&date6[2..4]);
    let yy = two_digits(&date6[4..6]);

    match year {
        Some(year) => {
            let full_year = parse_birth_year(year, today)?;
            if year[2..4] != date6[4..6] {
                return Err(AmkaError::InvalidArgument(format!(
                    "year {} does not end in the AMKA's two-digit year {}",
                    year,
                    &date6[4..6]
                )));
            }
            Ok(NaiveDate::from_ymd_opt(full_year, month, day).is_some_and(|date| date < today))
        }
        None => {
            let Some(date) = NaiveDate::from_ymd_opt(2000 + yy as i32, month, day) else {
                return Ok(false);
            };
            if date > today {
                return Ok(NaiveDate::from_ymd_opt(1900 + yy as i32, month, day).is_some());
            }
            Ok(true)
        }
    }
}

/// Earliest year [`sample_fragment`] can draw.
const SAMPLE_MIN_YEAR: i32 = 1900;

/// Draw random `DDMMYY` fragments until one is a valid past date.
///
/// Day digits come from `[0-3][0-9]`, month digits from `[0-1][0-2]` and the
/// year from `(19|20)[0-9][0-9]`. Each draw of all three counts as one attempt,
/// and a draw is rejected if any part is out of range or the result is not a
/// calendar date strictly before `today`. With `max_attempts` set, running out
/// of attempts is an error; otherwise the loop runs until it succeeds, which
/// takes a handful of draws on average.
///
/// # Errors
///
/// Returns [`AmkaError::InvalidArgument`] if `today` leaves no year to draw
/// from (on or before 1900-01-01), or if `max_attempts` is exhausted.
pub fn sample_fragment<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    max_attempts: Option<u32>,
) -> Result<BirthDateFragment> {
    if (today.year(), today.ordinal()) <= (SAMPLE_MIN_YEAR, 1) {
        return Err(AmkaError::InvalidArgument(format!(
            "no birth date between {} and {} can be sampled",
            SAMPLE_MIN_YEAR, today
        )));
    }

    let mut attempts: u32 = 0;
    loop {
        if max_attempts.is_some_and(|max| attempts >= max) {
            tracing::warn!(attempts, "gave up sampling a birth date");
            return Err(AmkaError::InvalidArgument(format!(
                "no valid birth date found in {} attempts",
                attempts
            )));
        }
        attempts += 1;

        let day = rng.gen_range(0..=3u8) * 10 + rng.gen_range(0..=9u8);
        let month = rng.gen_range(0..=1u8) * 10 + rng.gen_range(0..=2u8);
        let year = rng.gen_range(19..=20u16) * 100
            + rng.gen_range(0..=9u16) * 10
            + rng.gen_range(0..=9u16);

        if day == 0 || day > 31 || month == 0 || month > 12 || i32::from(year) > today.year() {
            tracing::trace!(day, month, year, "birth date sample out of range");
            continue;
        }

        let fragment = BirthDateFragment::new(day, month, year);
        if fragment.to_date().is_some_and(|date| date < today) {
            tracing::debug!(attempts, fragment = %fragment, "sampled birth date");
            return Ok(fragment);
        }
        tracing::trace!(fragment = %fragment, year, "rejected birth date sample");
    }
}

/// Parse an explicit four-digit birth year.
fn parse_birth_year(year: &str, today: NaiveDate) -> Result<i32> {
    let out_of_range = || {
        AmkaError::InvalidArgument(format!(
            "year must be a four-digit year between {} and {}, got: '{}'",
            MIN_BIRTH_YEAR,
            today.year(),
            year
        ))
    };

    if year.len() != 4 || !is_digits(year) {
        return Err(out_of_range());
    }
    let parsed: i32 = year.parse().map_err(|_| out_of_range())?;
    if !(MIN_BIRTH_YEAR..=today.year()).contains(&parsed) {
        return Err(out_of_range());
    }
    Ok(parsed)
}

/// Numeric value of two ASCII digits already known to be digits.
fn two_digits(s: &str) -> u32 {
    s.bytes().fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_century_defaults_to_2000s() {
        // 2005-01-01 is in the past
        assert!(is_valid_date("010105", None, today()).unwrap());
    }

    #[test]
    fn test_century_falls_back_to_1900s() {
        // 2090 would be in the future, so 1990
        assert!(is_valid_date("010190", None, today()).unwrap());
        assert!(is_valid_date("311299", None, today()).unwrap());
    }

    #[test]
    fn test_today_is_valid_without_year() {
        assert!(is_valid_date("150624", None, today()).unwrap());
        // Tomorrow in 2024 falls back to 1924
        assert!(is_valid_date("160624", None, today()).unwrap());
    }

    #[test]
    fn test_non_calendar_dates_are_invalid() {
        assert!(!is_valid_date("310405", None, today()).unwrap());
        assert!(!is_valid_date("000105", None, today()).unwrap());
        assert!(!is_valid_date("011305", None, today()).unwrap());
        assert!(!is_valid_date("290201", None, today()).unwrap());
        assert!(is_valid_date("290200", None, today()).unwrap());
    }

    #[test]
    fn test_malformed_fragment_is_false_not_error() {
        assert!(!is_valid_date("", None, today()).unwrap());
        assert!(!is_valid_date("01019", None, today()).unwrap());
        assert!(!is_valid_date("01a190", None, today()).unwrap());
        assert!(!is_valid_date("010190x", None, today()).unwrap());
    }

    #[test]
    fn test_only_first_six_digits_are_read() {
        assert!(is_valid_date("01019000007", None, today()).unwrap());
    }

    #[test]
    fn test_explicit_year() {
        assert!(is_valid_date("010105", Some("2005"), today()).unwrap());
        assert!(is_valid_date("010190", Some("1890"), today()).unwrap());
        assert!(is_valid_date("290200", Some("2000"), today()).unwrap());
        assert!(!is_valid_date("290200", Some("1900"), today()).unwrap());
    }

    #[test]
    fn test_explicit_year_must_be_strictly_past() {
        assert!(!is_valid_date("150624", Some("2024"), today()).unwrap());
        assert!(!is_valid_date("010724", Some("2024"), today()).unwrap());
        assert!(is_valid_date("140624", Some("2024"), today()).unwrap());
    }

    #[test]
    fn test_explicit_year_out_of_range() {
        for year in ["2105", "1799", "0005", "205", "20055", "2o05"] {
            let result = is_valid_date("010105", Some(year), today());
            assert!(
                matches!(result, Err(AmkaError::InvalidArgument(_))),
                "year '{}' should be rejected",
                year
            );
        }
    }

    #[test]
    fn test_explicit_year_mismatch() {
        let result = is_valid_date("010105", Some("2006"), today());
        match result {
            Err(AmkaError::InvalidArgument(msg)) => assert!(msg.contains("does not end in")),
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_fragment_from_date_of_birth() {
        let fragment = BirthDateFragment::from_date_of_birth("1/2/1985").unwrap();
        assert_eq!(fragment, BirthDateFragment::new(1, 2, 1985));
        assert_eq!(fragment.to_string(), "010285");
        assert_eq!(fragment.year_str(), "1985");

        let fragment = BirthDateFragment::from_date_of_birth("31/12/2000").unwrap();
        assert_eq!(fragment.to_string(), "311200");
    }

    #[test]
    fn test_fragment_rejects_malformed_date_of_birth() {
        for dob in [
            "", "1/2", "1/2/85", "1/2/19851", "001/2/1985", "1/002/1985", "1-2-1985",
            "1/2/1985/", "a/2/1985", "1/2/1985 ",
        ] {
            assert!(
                matches!(
                    BirthDateFragment::from_date_of_birth(dob),
                    Err(AmkaError::InvalidArgument(_))
                ),
                "'{}' should be rejected",
                dob
            );
        }
    }

    #[test]
    fn test_sample_fragment_is_valid() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let fragment = sample_fragment(&mut rng, today(), None).unwrap();
            assert!(is_valid_date(&fragment.to_string(), Some(&fragment.year_str()), today()).unwrap());
            assert!((1..=31).contains(&fragment.day()));
            assert!(matches!(fragment.month(), 1 | 2 | 10 | 11 | 12));
            assert!((1900..=2024).contains(&fragment.year()));
        }
    }

    #[test]
    fn test_to_date() {
        let fragment = BirthDateFragment::new(29, 2, 2000);
        assert_eq!(fragment.to_date(), NaiveDate::from_ymd_opt(2000, 2, 29));
        assert_eq!(BirthDateFragment::new(29, 2, 1900).to_date(), None);
        assert_eq!(BirthDateFragment::new(31, 11, 1990).to_date(), None);
    }

    #[test]
    fn test_sample_fragment_capped_before_1900() {
        let today = NaiveDate::from_ymd_opt(1899, 6, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let result = sample_fragment(&mut rng, today, Some(1000));
        assert!(matches!(result, Err(AmkaError::InvalidArgument(_))));
    }

    #[test]
    fn test_sample_fragment_uncapped_before_1900() {
        let mut rng = StdRng::seed_from_u64(42);
        for (y, m, d) in [(1899, 6, 1), (1900, 1, 1)] {
            let today = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            let result = sample_fragment(&mut rng, today, None);
            assert!(matches!(result, Err(AmkaError::InvalidArgument(_))));
        }
    }

    #[test]
    fn test_sample_fragment_on_1900_01_02() {
        let today = NaiveDate::from_ymd_opt(1900, 1, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let fragment = sample_fragment(&mut rng, today, None).unwrap();
        assert_eq!(fragment, BirthDateFragment::new(1, 1, 1900));
    }

    #[test]
    fn test_sample_fragment_gives_up_when_capped() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = sample_fragment(&mut rng, today(), Some(0));
        assert!(matches!(result, Err(AmkaError::InvalidArgument(_))));
    }
}
