//! Property tests for the metric, dominance relation, and archives.

use covsel_core::archive::{crowding_distances, dominance, DominanceRelation, ParetoArchive};
use covsel_core::metric::{density, diversity, uniqueness};
use covsel_core::{Candidate, CoverageMatrix};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn matrix_strategy() -> impl Strategy<Value = Vec<Vec<bool>>> {
    (1usize..7, 1usize..7).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(proptest::collection::vec(any::<bool>(), cols), rows)
    })
}

fn as_refs(rows: &[Vec<bool>]) -> Vec<&[bool]> {
    rows.iter().map(|r| r.as_slice()).collect()
}

fn ddu_of(rows: &[Vec<bool>]) -> f64 {
    let refs = as_refs(rows);
    density(&refs) * diversity(&refs) * uniqueness(&refs)
}

fn permute_rows(rows: &[Vec<bool>], seed: u64) -> Vec<Vec<bool>> {
    let mut shuffled = rows.to_vec();
    shuffled.shuffle(&mut StdRng::seed_from_u64(seed));
    shuffled
}

fn permute_columns(rows: &[Vec<bool>], seed: u64) -> Vec<Vec<bool>> {
    let cols = rows[0].len();
    let mut order: Vec<usize> = (0..cols).collect();
    order.shuffle(&mut StdRng::seed_from_u64(seed));
    rows.iter()
        .map(|row| order.iter().map(|&c| row[c]).collect())
        .collect()
}

proptest! {
    #[test]
    fn ddu_stays_in_unit_interval(rows in matrix_strategy()) {
        let value = ddu_of(&rows);
        prop_assert!((0.0..=1.0).contains(&value), "DDU {} out of range", value);
    }

    #[test]
    fn ddu_is_zero_for_degenerate_matrices(row in proptest::collection::vec(any::<bool>(), 1..7)) {
        // Zero rows.
        let empty: Vec<&[bool]> = Vec::new();
        prop_assert_eq!(density(&empty), 0.0);
        prop_assert_eq!(diversity(&empty), 0.0);
        prop_assert_eq!(uniqueness(&empty), 0.0);
        // A single row has zero diversity, so DDU is zero.
        let single = vec![row];
        prop_assert_eq!(diversity(&as_refs(&single)), 0.0);
    }

    #[test]
    fn metric_components_are_permutation_invariant(rows in matrix_strategy(), seed in any::<u64>()) {
        let by_rows = permute_rows(&rows, seed);
        let by_cols = permute_columns(&rows, seed);

        let original = as_refs(&rows);
        for permuted in [&by_rows, &by_cols] {
            let refs = as_refs(permuted);
            prop_assert!((density(&original) - density(&refs)).abs() < 1e-12);
            prop_assert!((diversity(&original) - diversity(&refs)).abs() < 1e-12);
            prop_assert!((uniqueness(&original) - uniqueness(&refs)).abs() < 1e-12);
        }
    }

    #[test]
    fn dominance_is_antisymmetric(
        a in proptest::collection::vec(-100.0f64..100.0, 1..5),
        b in proptest::collection::vec(-100.0f64..100.0, 1..5),
    ) {
        let len = a.len().min(b.len());
        let (a, b) = (&a[..len], &b[..len]);
        match dominance(a, b) {
            DominanceRelation::Dominates => {
                prop_assert_eq!(dominance(b, a), DominanceRelation::DominatedBy);
            }
            DominanceRelation::DominatedBy => {
                prop_assert_eq!(dominance(b, a), DominanceRelation::Dominates);
            }
            DominanceRelation::NonDominated => {
                prop_assert_eq!(dominance(b, a), DominanceRelation::NonDominated);
            }
        }
    }

    #[test]
    fn archive_never_exceeds_capacity(
        inserts in proptest::collection::vec(
            (proptest::collection::vec(any::<bool>(), 4), -50.0f64..50.0, -50.0f64..50.0),
            0..40,
        )
    ) {
        let mut archive = ParetoArchive::new(5);
        for (bits, x, y) in inserts {
            archive.try_insert(Candidate { bits, objectives: vec![x, y] });
            prop_assert!(archive.len() <= 5);
        }
    }

    #[test]
    fn archive_members_stay_mutually_non_dominated(
        inserts in proptest::collection::vec(
            (proptest::collection::vec(any::<bool>(), 3), -10.0f64..10.0, -10.0f64..10.0),
            1..30,
        )
    ) {
        let mut archive = ParetoArchive::new(8);
        for (bits, x, y) in inserts {
            archive.try_insert(Candidate { bits, objectives: vec![x, y] });
        }
        let members = archive.members();
        for (i, a) in members.iter().enumerate() {
            for b in members.iter().skip(i + 1) {
                prop_assert_eq!(
                    dominance(&a.objectives, &b.objectives),
                    DominanceRelation::NonDominated
                );
            }
        }
    }

    #[test]
    fn crowding_distances_are_non_negative(
        objectives in proptest::collection::vec(
            (-10.0f64..10.0, -10.0f64..10.0),
            0..20,
        )
    ) {
        let members: Vec<Candidate> = objectives
            .into_iter()
            .map(|(x, y)| Candidate { bits: Vec::new(), objectives: vec![x, y] })
            .collect();
        let distances = crowding_distances(&members);
        prop_assert_eq!(distances.len(), members.len());
        prop_assert!(distances.iter().all(|&d| d >= 0.0));
    }
}

proptest! {
    #[test]
    fn ddu_matches_component_product_on_full_selection(rows in matrix_strategy()) {
        let tests: Vec<String> = (0..rows.len()).map(|i| format!("t{i}")).collect();
        let methods: Vec<String> = (0..rows[0].len()).map(|i| format!("m{i}")).collect();
        let matrix = CoverageMatrix::new(rows.clone(), tests, methods).unwrap();
        let selection = vec![true; matrix.num_tests()];
        let via_matrix = covsel_core::metric::ddu(&matrix, &selection);
        prop_assert!((via_matrix - ddu_of(&rows)).abs() < 1e-12);
    }
}
