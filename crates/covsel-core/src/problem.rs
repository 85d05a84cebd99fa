//! Selection problem: working matrix + history + active objectives.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::matrix::{CoverageMatrix, HistoryMetrics};
use crate::objective::Objective;

/// One candidate test selection: a bit per test plus the evaluated
/// objective vector (empty until the problem evaluates it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub bits: Vec<bool>,
    pub objectives: Vec<f64>,
}

impl Candidate {
    /// Unevaluated candidate from a raw bit vector.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self {
            bits,
            objectives: Vec::new(),
        }
    }

    /// Number of selected tests.
    pub fn selected_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

/// Binds a working coverage matrix, historical metrics, and an ordered,
/// non-empty list of objectives. Evaluation is pure: the only effect is
/// filling a candidate's objective vector.
#[derive(Debug, Clone)]
pub struct SelectionProblem {
    matrix: CoverageMatrix,
    history: HistoryMetrics,
    objectives: Vec<Objective>,
}

impl SelectionProblem {
    pub fn new(
        matrix: CoverageMatrix,
        history: HistoryMetrics,
        objectives: Vec<Objective>,
    ) -> Result<Self, ConfigError> {
        if objectives.is_empty() {
            return Err(ConfigError::NoObjectives);
        }
        if matrix.is_empty() {
            return Err(ConfigError::EmptyMatrix);
        }
        Ok(Self {
            matrix,
            history,
            objectives,
        })
    }

    pub fn matrix(&self) -> &CoverageMatrix {
        &self.matrix
    }

    pub fn history(&self) -> &HistoryMetrics {
        &self.history
    }

    pub fn objectives(&self) -> &[Objective] {
        &self.objectives
    }

    pub fn num_tests(&self) -> usize {
        self.matrix.num_tests()
    }

    pub fn num_objectives(&self) -> usize {
        self.objectives.len()
    }

    /// Candidate with each bit drawn uniformly.
    ///
    /// The generator is owned by the run and passed in; candidate creation
    /// must never reseed it (a reseed here would collapse the initial
    /// swarm onto a single point).
    pub fn random_candidate<R: Rng>(&self, rng: &mut R) -> Candidate {
        let bits = (0..self.num_tests()).map(|_| rng.gen::<bool>()).collect();
        Candidate::from_bits(bits)
    }

    /// Apply every active objective in order, populating the candidate's
    /// objective vector.
    pub fn evaluate(&self, candidate: &mut Candidate) {
        debug_assert_eq!(candidate.bits.len(), self.num_tests());
        candidate.objectives = self
            .objectives
            .iter()
            .map(|obj| obj.evaluate(self, &candidate.bits))
            .collect();
    }

    /// Names of the tests picked by a bit vector.
    pub fn selected_test_names<'a>(
        &'a self,
        bits: &'a [bool],
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.matrix
            .tests()
            .iter()
            .zip(bits)
            .filter(|(_, &selected)| selected)
            .map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn matrix() -> CoverageMatrix {
        CoverageMatrix::new(
            vec![vec![true, false], vec![false, true], vec![true, true]],
            vec!["t0".into(), "t1".into(), "t2".into()],
            vec!["m0".into(), "m1".into()],
        )
        .unwrap()
    }

    #[test]
    fn rejects_empty_objective_list() {
        let err = SelectionProblem::new(matrix(), HistoryMetrics::default(), vec![]).unwrap_err();
        assert_eq!(err, ConfigError::NoObjectives);
    }

    #[test]
    fn rejects_empty_matrix() {
        let empty = CoverageMatrix::new(vec![], vec![], vec!["m0".into()]).unwrap();
        let err = SelectionProblem::new(
            empty,
            HistoryMetrics::default(),
            vec![Objective::TestCount],
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::EmptyMatrix);
    }

    #[test]
    fn evaluation_fills_objectives_in_order() {
        let problem = SelectionProblem::new(
            matrix(),
            HistoryMetrics::default(),
            vec![Objective::TestCount, Objective::NormCoverage],
        )
        .unwrap();

        let mut candidate = Candidate::from_bits(vec![true, false, true]);
        assert!(candidate.objectives.is_empty());
        problem.evaluate(&mut candidate);
        assert_eq!(candidate.objectives.len(), 2);
        assert_eq!(candidate.objectives[0], 2.0);
        assert!((candidate.objectives[1] + 1.0).abs() < 1e-9);
    }

    #[test]
    fn random_candidates_have_matching_length() {
        let problem = SelectionProblem::new(
            matrix(),
            HistoryMetrics::default(),
            vec![Objective::TestCount],
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let candidate = problem.random_candidate(&mut rng);
        assert_eq!(candidate.bits.len(), problem.num_tests());
    }

    #[test]
    fn selected_test_names_follow_bits() {
        let problem = SelectionProblem::new(
            matrix(),
            HistoryMetrics::default(),
            vec![Objective::TestCount],
        )
        .unwrap();
        let names: Vec<&str> = problem
            .selected_test_names(&[true, false, true])
            .collect();
        assert_eq!(names, vec!["t0", "t2"]);
    }
}
