//! Golden test vectors for deterministic verification.
//!
//! Each vector is evaluated on [`REFERENCE_DATE`](crate::fixtures::REFERENCE_DATE),
//! so verdicts do not drift as the calendar moves on.

use amka::Violation;
use serde::Serialize;

use crate::fixtures::TestFixture;

/// A golden AMKA vector.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Candidate identifier.
    pub id: &'static str,
    /// Explicit four-digit birth year, if any.
    pub year: Option<&'static str>,
    /// Expected violation kinds, in order. Empty means valid.
    pub violations: &'static [&'static str],
}

impl GoldenVector {
    /// Whether the vector is expected to be valid.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// A golden Luhn vector.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LuhnVector {
    pub digits: &'static str,
    pub valid: bool,
}

/// Get all golden AMKA vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "1990 birth date",
            id: "01019000007",
            year: None,
            violations: &[],
        },
        GoldenVector {
            name: "two-digit year resolved to 1900s",
            id: "15038501233",
            year: None,
            violations: &[],
        },
        GoldenVector {
            name: "leap day 2000",
            id: "29020004569",
            year: None,
            violations: &[],
        },
        GoldenVector {
            name: "explicit year in 2000s",
            id: "01010500005",
            year: Some("2005"),
            violations: &[],
        },
        GoldenVector {
            name: "born today without explicit year",
            id: "15062400005",
            year: None,
            violations: &[],
        },
        GoldenVector {
            name: "born today with explicit year",
            id: "15062400005",
            year: Some("2024"),
            violations: &["invalid_birth_date"],
        },
        GoldenVector {
            name: "Luhn-valid with impossible date",
            id: "97909369536",
            year: None,
            violations: &["invalid_birth_date"],
        },
        GoldenVector {
            name: "leap day in a common year",
            id: "29020100003",
            year: None,
            violations: &["invalid_birth_date"],
        },
        GoldenVector {
            name: "valid date with bad checksum",
            id: "11118734597",
            year: None,
            violations: &["invalid_checksum"],
        },
        GoldenVector {
            name: "valid date and checksum but 12 digits",
            id: "010190000009",
            year: None,
            violations: &["wrong_length"],
        },
        GoldenVector {
            name: "short garbage accumulates",
            id: "99999",
            year: None,
            violations: &["wrong_length", "invalid_birth_date", "invalid_checksum"],
        },
        GoldenVector {
            name: "non-digit short-circuits",
            id: "9909x",
            year: None,
            violations: &["not_digits"],
        },
        GoldenVector {
            name: "empty input",
            id: "",
            year: None,
            violations: &["not_digits"],
        },
        GoldenVector {
            name: "year disagrees with fragment",
            id: "01010500005",
            year: Some("2006"),
            violations: &["invalid_birth_year"],
        },
        GoldenVector {
            name: "year out of range",
            id: "01010500005",
            year: Some("2105"),
            violations: &["invalid_birth_year"],
        },
    ]
}

/// Get all golden Luhn vectors.
pub fn luhn_vectors() -> Vec<LuhnVector> {
    [
        ("79927398713", true),
        ("79927398710", false),
        ("4532015112830366", true),
        ("4532015112830367", false),
        ("0", true),
        ("1", false),
        ("18", true),
        ("97909369536", true),
        ("11118734597", false),
    ]
    .into_iter()
    .map(|(digits, valid)| LuhnVector { digits, valid })
    .collect()
}

/// The serialized `kind` tag of a violation, e.g. `"invalid_checksum"`.
pub fn violation_kind(violation: &Violation) -> String {
    serde_json::to_value(violation)
        .ok()
        .and_then(|v| v.get("kind").and_then(|k| k.as_str()).map(str::to_owned))
        .unwrap_or_default()
}

/// Verify all golden vectors against the implementation.
///
/// Returns `(name, matches)` for every AMKA and Luhn vector.
pub fn verify_all_vectors() -> Vec<(String, bool)> {
    let fixture = TestFixture::new();

    let amka = all_vectors().into_iter().map(|v| {
        let kinds: Vec<String> = fixture
            .amka
            .validate(v.id, v.year)
            .iter()
            .map(violation_kind)
            .collect();
        let matches = kinds == v.violations
            && fixture.amka.is_valid(v.id, v.year) == v.is_valid();
        (v.name.to_string(), matches)
    });

    let luhn = luhn_vectors().into_iter().map(|v| {
        let matches = amka_core::luhn::is_valid(v.digits) == Ok(v.valid);
        (format!("luhn {}", v.digits), matches)
    });

    amka.chain(luhn).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_match() {
        for (name, matches) in verify_all_vectors() {
            assert!(matches, "vector '{}' does not match", name);
        }
    }

    #[test]
    fn test_violation_kind() {
        assert_eq!(violation_kind(&Violation::InvalidChecksum), "invalid_checksum");
        assert_eq!(
            violation_kind(&Violation::WrongLength { len: 3 }),
            "wrong_length"
        );
    }

    #[test]
    fn test_vectors_serialize() {
        let json = serde_json::to_string(&all_vectors()[0]).unwrap();
        assert!(json.contains("\"id\":\"01019000007\""));
    }
}
