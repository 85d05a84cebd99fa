//! Objective catalogue
//!
//! A closed set of scalar objectives over (problem, bit vector), all
//! minimized. "Higher is better" quantities (DDU, coverage, failure
//! history) are negated. The catalogue is a plain enum so every caller
//! combination is statically checkable; string identifiers exist only at
//! the configuration boundary via `FromStr`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::metric;
use crate::problem::SelectionProblem;

/// Penalty objective value for an empty selection where a count of 0 would
/// otherwise make the trivial empty set look optimal.
pub const EMPTY_SELECTION_PENALTY: f64 = 123_456.0;

/// One objective to minimize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    /// Negated DDU diagnosability score, rounded to 2 decimals.
    Ddu,
    /// Negated raw coverage: total hits in the selected sub-matrix over
    /// the column count. Can exceed 1 in magnitude under overlapping
    /// coverage.
    Coverage,
    /// Negated fraction of methods touched by at least one selected test.
    NormCoverage,
    /// Number of selected tests; empty selections score the sentinel
    /// penalty instead of 0.
    TestCount,
    /// Negated sum of historical failure counts over selected tests.
    HistoryFailures,
    /// Sum of historical execution seconds over selected tests.
    HistoryExecTime,
}

impl Objective {
    /// Stable identifier used at the configuration boundary.
    pub fn name(&self) -> &'static str {
        match self {
            Objective::Ddu => "ddu",
            Objective::Coverage => "coverage",
            Objective::NormCoverage => "norm_coverage",
            Objective::TestCount => "test_count",
            Objective::HistoryFailures => "history_failures",
            Objective::HistoryExecTime => "history_exec_time",
        }
    }

    /// Evaluate this objective for a bit-vector selection.
    pub(crate) fn evaluate(&self, problem: &SelectionProblem, bits: &[bool]) -> f64 {
        match self {
            Objective::Ddu => {
                let value = -metric::ddu(problem.matrix(), bits);
                (value * 100.0).round() / 100.0
            }
            Objective::Coverage => coverage(problem, bits, false),
            Objective::NormCoverage => coverage(problem, bits, true),
            Objective::TestCount => {
                let count = bits.iter().filter(|&&b| b).count();
                if count == 0 {
                    EMPTY_SELECTION_PENALTY
                } else {
                    count as f64
                }
            }
            Objective::HistoryFailures => {
                let total: u64 = problem
                    .selected_test_names(bits)
                    .map(|test| problem.history().failures_for(test))
                    .sum();
                -(total as f64)
            }
            Objective::HistoryExecTime => problem
                .selected_test_names(bits)
                .map(|test| problem.history().exec_time_for(test))
                .sum(),
        }
    }
}

/// Per-column hit counts over the selected rows; `normalized` clamps each
/// column to 0/1 before summing. Empty selections score 0.
fn coverage(problem: &SelectionProblem, bits: &[bool], normalized: bool) -> f64 {
    let matrix = problem.matrix();
    let selected: Vec<usize> = bits
        .iter()
        .enumerate()
        .filter(|(_, &b)| b)
        .map(|(i, _)| i)
        .collect();
    if selected.is_empty() || matrix.num_methods() == 0 {
        return 0.0;
    }

    let mut total = 0usize;
    for col in 0..matrix.num_methods() {
        let hits = selected.iter().filter(|&&row| matrix.get(row, col)).count();
        total += if normalized { usize::from(hits > 0) } else { hits };
    }
    -(total as f64 / matrix.num_methods() as f64)
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Objective {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ddu" => Ok(Objective::Ddu),
            "coverage" => Ok(Objective::Coverage),
            "norm_coverage" => Ok(Objective::NormCoverage),
            "test_count" => Ok(Objective::TestCount),
            "history_failures" => Ok(Objective::HistoryFailures),
            "history_exec_time" => Ok(Objective::HistoryExecTime),
            other => Err(ConfigError::UnknownObjective {
                name: other.to_string(),
            }),
        }
    }
}
