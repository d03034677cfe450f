//! Test fixtures and helpers.
//!
//! Everything here runs on a fixed date with a seeded RNG, so results are
//! reproducible across runs and machines.

use amka::{Amka, AmkaConfig, FixedClock};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The date golden vectors and fixtures are evaluated on: 2024-06-15.
pub const REFERENCE_DATE: (i32, u32, u32) = (2024, 6, 15);

/// Get [`REFERENCE_DATE`] as a date.
pub fn reference_date() -> NaiveDate {
    let (y, m, d) = REFERENCE_DATE;
    NaiveDate::from_ymd_opt(y, m, d).expect("reference date is a calendar date")
}

/// A validator on a fixed clock and a seeded RNG.
pub struct TestFixture {
    pub amka: Amka<FixedClock>,
    pub rng: StdRng,
}

impl TestFixture {
    /// Create a fixture on [`REFERENCE_DATE`] with seed 0.
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Create on [`REFERENCE_DATE`] with a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::on(reference_date(), seed)
    }

    /// Create on an arbitrary date.
    pub fn on(today: NaiveDate, seed: u64) -> Self {
        Self {
            amka: Amka::new(FixedClock(today), AmkaConfig::default()),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The fixture's "today".
    pub fn today(&self) -> NaiveDate {
        self.amka.clock().0
    }

    /// Generate an AMKA with the fixture's RNG.
    pub fn generate(&mut self, date_of_birth: Option<&str>) -> amka::Result<String> {
        self.amka.generate_with_rng(&mut self.rng, date_of_birth)
    }

    /// Generate `n` AMKAs with random birth dates.
    pub fn generate_many(&mut self, n: usize) -> amka::Result<Vec<String>> {
        (0..n).map(|_| self.generate(None)).collect()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
