//! Proptest generators for property-based testing.

use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;

use crate::fixtures::{reference_date, TestFixture};

/// Generate a string of digits with a length in `len`.
pub fn digit_string(len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    prop::collection::vec(0u8..10, len)
        .prop_map(|ds| ds.into_iter().map(|d| char::from(b'0' + d)).collect::<String>())
}

/// Generate a `(total, prefix)` pair accepted by `luhn::generate`.
pub fn luhn_params() -> impl Strategy<Value = (usize, String)> {
    (1usize..=30).prop_flat_map(|total| (Just(total), digit_string(0..=total - 1)))
}

/// Generate a calendar date strictly before the reference date, back to 1900.
pub fn past_date() -> impl Strategy<Value = NaiveDate> {
    let earliest = NaiveDate::from_ymd_opt(1900, 1, 1).expect("1900-01-01 is a calendar date");
    let span = (reference_date() - earliest).num_days();
    (0..span).prop_map(move |offset| earliest + Duration::days(offset))
}

/// Generate a `D/M/YYYY` date of birth, sometimes without zero padding.
pub fn date_of_birth() -> impl Strategy<Value = String> {
    (past_date(), any::<bool>()).prop_map(|(date, padded)| {
        if padded {
            format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
        } else {
            format!("{}/{}/{}", date.day(), date.month(), date.year())
        }
    })
}

/// Generate a string that is not all digits.
pub fn non_digit_string() -> impl Strategy<Value = String> {
    "[0-9]{0,10}[^0-9][0-9a-z ]{0,10}".prop_map(String::from)
}

/// Parameters for generating an AMKA.
#[derive(Debug, Clone)]
pub struct AmkaParams {
    pub seed: u64,
    pub date_of_birth: Option<String>,
}

impl Arbitrary for AmkaParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (any::<u64>(), prop::option::of(date_of_birth()))
            .prop_map(|(seed, date_of_birth)| AmkaParams {
                seed,
                date_of_birth,
            })
            .boxed()
    }
}

/// Generate an AMKA from parameters, on the reference date.
///
/// Returns the fixture used so callers can validate against the same clock.
pub fn amka_from_params(params: &AmkaParams) -> (TestFixture, String) {
    let mut fixture = TestFixture::with_seed(params.seed);
    let id = fixture
        .generate(params.date_of_birth.as_deref())
        .expect("generated parameters always describe a past birth date");
    (fixture, id)
}
