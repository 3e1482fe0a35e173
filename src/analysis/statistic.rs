//! Counts of interactions, by classification.

use serde::Serialize;

/// Counts of covered, uncovered, and invalid interactions.
///
/// Statistics of disjoint collections of interactions may be [merged](CoverageStatistic::merge).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CoverageStatistic {
    /// Interactions contained in some configuration of the sample.
    pub covered: u64,

    /// Valid interactions contained in no configuration of the sample.
    pub uncovered: u64,

    /// Interactions contained in no model of the formula.
    pub invalid: u64,
}

impl CoverageStatistic {
    pub fn merge(&mut self, other: &CoverageStatistic) {
        self.covered += other.covered;
        self.uncovered += other.uncovered;
        self.invalid += other.invalid;
    }

    pub fn total(&self) -> u64 {
        self.covered + self.uncovered + self.invalid
    }

    /// A count of interactions which may be covered.
    pub fn valid(&self) -> u64 {
        self.covered + self.uncovered
    }

    /// The share of valid interactions which are covered.
    ///
    /// If no interaction is valid, every valid interaction is covered, and so the coverage is 1.
    pub fn coverage(&self) -> f64 {
        match self.valid() {
            0 => 1.0,
            valid => self.covered as f64 / valid as f64,
        }
    }
}

impl std::fmt::Display for CoverageStatistic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "covered: {}, uncovered: {}, invalid: {}, coverage: {:.4}",
            self.covered,
            self.uncovered,
            self.invalid,
            self.coverage()
        )
    }
}
