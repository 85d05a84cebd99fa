//! DDU diagnosability metric.
//!
//! ```text
//! DDU = density · diversity · uniqueness
//! ```
//!
//! Computed over the sub-matrix of selected test rows (all method columns).
//! Reference: Perez, Abreu, van Deursen, "A test-suite diagnosability
//! metric for spectrum-based fault localization approaches", ICSE 2017.

use std::collections::{HashMap, HashSet};

use crate::matrix::CoverageMatrix;

/// DDU value for the tests picked by `selection` (one flag per matrix row).
///
/// Degenerate selections (no rows, or a matrix with no columns) score 0.
pub fn ddu(matrix: &CoverageMatrix, selection: &[bool]) -> f64 {
    let rows: Vec<&[bool]> = selection
        .iter()
        .enumerate()
        .filter(|(_, &sel)| sel)
        .map(|(i, _)| matrix.row(i))
        .collect();
    if rows.is_empty() || matrix.num_methods() == 0 {
        return 0.0;
    }
    density(&rows) * diversity(&rows) * uniqueness(&rows)
}

/// Normalized density: `1 − |1 − 2·(nonzero / size)|`, peaking at 1 when
/// exactly half the cells are active.
pub fn density(rows: &[&[bool]]) -> f64 {
    let size: usize = rows.iter().map(|r| r.len()).sum();
    if size == 0 {
        return 0.0;
    }
    let nonzero = rows
        .iter()
        .flat_map(|r| r.iter())
        .filter(|&&cell| cell)
        .count();
    1.0 - (1.0 - 2.0 * (nonzero as f64 / size as f64)).abs()
}

/// Test diversity: penalizes duplicate activity rows.
///
/// With `c_i` the multiplicity of each distinct row and `R` the row count,
/// `diversity = 1 − Σ c_i·(c_i−1) / (R·(R−1))`; 0 when `R ≤ 1`.
pub fn diversity(rows: &[&[bool]]) -> f64 {
    let r = rows.len();
    if r <= 1 {
        return 0.0;
    }
    let mut multiplicity: HashMap<&[bool], usize> = HashMap::new();
    for row in rows {
        *multiplicity.entry(row).or_insert(0) += 1;
    }
    let duplicates: usize = multiplicity.values().map(|&c| c * (c - 1)).sum();
    1.0 - duplicates as f64 / (r * (r - 1)) as f64
}

/// Column uniqueness: distinct method-activity columns over total columns;
/// 0 when there are no columns.
pub fn uniqueness(rows: &[&[bool]]) -> f64 {
    let cols = rows.first().map_or(0, |r| r.len());
    if cols == 0 {
        return 0.0;
    }
    let mut distinct: HashSet<Vec<bool>> = HashSet::new();
    for c in 0..cols {
        let column: Vec<bool> = rows.iter().map(|r| r[c]).collect();
        distinct.insert(column);
    }
    distinct.len() as f64 / cols as f64
}
