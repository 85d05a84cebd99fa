//! Pareto dominance over objective vectors (all objectives minimized).

/// Outcome of comparing candidate A against candidate B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DominanceRelation {
    /// A is no worse in every objective and strictly better in at least one.
    Dominates,
    /// B dominates A.
    DominatedBy,
    /// Neither dominates the other (includes equal vectors).
    NonDominated,
}

/// Compare two objective vectors under minimize-all Pareto dominance.
///
/// Vectors must have the same length; comparison stops at the shorter one
/// otherwise.
pub fn dominance(a: &[f64], b: &[f64]) -> DominanceRelation {
    let mut a_better = false;
    let mut b_better = false;
    for (x, y) in a.iter().zip(b) {
        if x < y {
            a_better = true;
        } else if y < x {
            b_better = true;
        }
    }
    match (a_better, b_better) {
        (true, false) => DominanceRelation::Dominates,
        (false, true) => DominanceRelation::DominatedBy,
        _ => DominanceRelation::NonDominated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strictly_better_everywhere_dominates() {
        assert_eq!(dominance(&[1.0, 1.0], &[2.0, 2.0]), DominanceRelation::Dominates);
        assert_eq!(dominance(&[2.0, 2.0], &[1.0, 1.0]), DominanceRelation::DominatedBy);
    }

    #[test]
    fn better_in_one_equal_in_rest_dominates() {
        assert_eq!(dominance(&[1.0, 5.0], &[2.0, 5.0]), DominanceRelation::Dominates);
    }

    #[test]
    fn trade_offs_are_non_dominated() {
        assert_eq!(
            dominance(&[1.0, 5.0], &[2.0, 3.0]),
            DominanceRelation::NonDominated
        );
    }

    #[test]
    fn equal_vectors_are_non_dominated() {
        assert_eq!(
            dominance(&[1.0, 2.0], &[1.0, 2.0]),
            DominanceRelation::NonDominated
        );
    }

    #[test]
    fn relation_is_antisymmetric() {
        let a = [0.3, -1.0, 4.0];
        let b = [0.3, -2.0, 4.0];
        assert_eq!(dominance(&a, &b), DominanceRelation::DominatedBy);
        assert_eq!(dominance(&b, &a), DominanceRelation::Dominates);
    }
}
