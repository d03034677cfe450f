//! Golden vectors and end-to-end behaviour of the public API.
//!
//! Every vector is evaluated on a fixed date so verdicts stay stable.

use amka::{Amka, AmkaConfig, AmkaError, FixedClock, Violation, AMKA_LEN};
use amka_testkit::fixtures::{reference_date, TestFixture};
use amka_testkit::vectors::{all_vectors, luhn_vectors, violation_kind};
use amka_testkit::{amka_from_params, AmkaParams};
use chrono::NaiveDate;
use proptest::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn golden_amka_vectors() {
    let fixture = TestFixture::new();

    for vector in all_vectors() {
        let kinds: Vec<String> = fixture
            .amka
            .validate(vector.id, vector.year)
            .iter()
            .map(violation_kind)
            .collect();

        assert_eq!(kinds, vector.violations, "vector '{}'", vector.name);
        assert_eq!(
            fixture.amka.is_valid(vector.id, vector.year),
            vector.is_valid(),
            "vector '{}'",
            vector.name
        );
        assert_eq!(
            fixture.amka.validate_strict(vector.id, vector.year).is_ok(),
            vector.is_valid(),
            "vector '{}'",
            vector.name
        );
    }
}

#[test]
fn golden_luhn_vectors() -> anyhow::Result<()> {
    for vector in luhn_vectors() {
        assert_eq!(
            amka::luhn_valid(vector.digits)?,
            vector.valid,
            "digits '{}'",
            vector.digits
        );
    }
    Ok(())
}

#[test]
fn golden_vectors_serialize_to_json() -> anyhow::Result<()> {
    let json = serde_json::to_value(all_vectors())?;
    let array = json.as_array().expect("vectors serialize as an array");

    assert_eq!(array.len(), all_vectors().len());
    assert_eq!(array[0]["id"], "01019000007");
    assert!(array[0]["year"].is_null());
    Ok(())
}

#[test]
fn hundred_generated_amkas_are_valid() -> anyhow::Result<()> {
    init_tracing();
    let mut fixture = TestFixture::with_seed(2024);

    for id in fixture.generate_many(100)? {
        assert_eq!(id.len(), AMKA_LEN);
        assert!(fixture.amka.is_valid_date(&id[..6], None)?);
        assert!(amka::luhn_valid(&id)?);
        assert!(fixture.amka.validate(&id, None).is_empty(), "{}", id);
    }
    Ok(())
}

#[test]
fn luhn_generate_edge_cases() -> anyhow::Result<()> {
    assert_eq!(amka::luhn_generate(1, "")?, "0");
    assert_eq!(amka::luhn_generate(11, "0101900000")?, "01019000007");

    for (total, prefix) in [(0, ""), (3, "123"), (1, "12"), (5, "1a")] {
        assert!(
            matches!(
                amka::luhn_generate(total, prefix),
                Err(amka::core::LuhnError::InvalidArgument(_))
            ),
            "({}, '{}') should be rejected",
            total,
            prefix
        );
    }
    Ok(())
}

#[test]
fn century_disambiguation() -> anyhow::Result<()> {
    let fixture = TestFixture::new();

    assert!(fixture.amka.is_valid_date("010190", None)?);
    assert!(fixture.amka.is_valid_date("010105", Some("2005"))?);
    assert!(matches!(
        fixture.amka.is_valid_date("010105", Some("2105")),
        Err(AmkaError::InvalidArgument(_))
    ));
    assert!(matches!(
        fixture.amka.is_valid_date("010105", Some("1905")),
        Ok(true)
    ));
    Ok(())
}

#[test]
fn validity_moves_with_the_clock() {
    // 01/07/24 is after the reference date: without a year it reads as 1924,
    // with an explicit 2024 it is a future birth until the clock catches up.
    let id = "01072400003";
    let before = TestFixture::new();
    assert!(reference_date() < NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());

    assert!(before.amka.is_valid(id, None));
    assert!(!before.amka.is_valid(id, Some("2024")));
    assert_eq!(
        before.amka.validate(id, Some("2024")),
        vec![Violation::InvalidBirthDate]
    );

    let later = Amka::new(
        FixedClock(NaiveDate::from_ymd_opt(2024, 7, 2).unwrap()),
        AmkaConfig::default(),
    );
    assert!(later.is_valid(id, Some("2024")));
}

#[test]
fn strict_validation_reports_first_violation() {
    let fixture = TestFixture::new();

    let err = fixture.amka.validate_strict("99999", None).unwrap_err();
    assert_eq!(
        err,
        AmkaError::ValidationFailed(Violation::WrongLength { len: 5 })
    );
    assert_eq!(
        err.to_string(),
        "validation failed: AMKA must be exactly 11 digits long, got 5"
    );
}

#[test]
fn system_clock_free_functions() -> anyhow::Result<()> {
    let id = amka::generate(None)?;
    assert!(amka::is_valid(&id, None));
    assert!(amka::validate(&id, None).is_empty());
    amka::validate_strict(&id, None)?;

    let id = amka::generate(Some("9/11/1987"))?;
    assert!(id.starts_with("091187"));
    assert!(amka::is_valid(&id, Some("1987")));
    assert!(amka::is_valid_date("091187", Some("1987"))?);
    Ok(())
}

proptest! {
    #[test]
    fn generated_amka_passes_strict_validation(params: AmkaParams) {
        let (fixture, id) = amka_from_params(&params);

        let digits = fixture.amka.validate_strict(&id, None).unwrap();
        prop_assert_eq!(digits.len(), AMKA_LEN);
        prop_assert_eq!(digits.into_string(), id.clone());

        if let Some(dob) = &params.date_of_birth {
            let year = dob.rsplit('/').next().unwrap();
            prop_assert!(fixture.amka.validate_strict(&id, Some(year)).is_ok());
        }
    }
}
