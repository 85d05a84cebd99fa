//! Coverage matrix data types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::MatrixShapeError;

/// Boolean test×method activity matrix.
///
/// Rows are tests, columns are methods. The `tests` and `methods` arrays
/// hold the identifiers for each row/column in order. All slicing
/// operations return a new matrix; the receiver is never mutated, so the
/// full dataset matrix can be re-sliced for every commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageMatrix {
    /// Row-major cell data, `num_tests × num_methods`.
    data: Vec<bool>,
    num_tests: usize,
    num_methods: usize,
    /// Test identifier per row.
    tests: Vec<String>,
    /// Method identifier per column.
    methods: Vec<String>,
}

impl CoverageMatrix {
    /// Build a matrix from per-test activity rows and aligned identifier
    /// arrays. Fails if the shapes disagree.
    pub fn new(
        rows: Vec<Vec<bool>>,
        tests: Vec<String>,
        methods: Vec<String>,
    ) -> Result<Self, MatrixShapeError> {
        if rows.len() != tests.len() {
            return Err(MatrixShapeError::RowCountMismatch {
                rows: rows.len(),
                tests: tests.len(),
            });
        }
        let num_methods = methods.len();
        let mut data = Vec::with_capacity(rows.len() * num_methods);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != num_methods {
                return Err(MatrixShapeError::RaggedRow {
                    row: i,
                    len: row.len(),
                    expected: num_methods,
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            num_tests: tests.len(),
            num_methods,
            tests,
            methods,
        })
    }

    /// Number of tests (rows).
    pub fn num_tests(&self) -> usize {
        self.num_tests
    }

    /// Number of methods (columns).
    pub fn num_methods(&self) -> usize {
        self.num_methods
    }

    /// True when there are no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.num_tests == 0 || self.num_methods == 0
    }

    /// Cell value at (row, col).
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.data[row * self.num_methods + col]
    }

    /// Activity row for one test.
    pub fn row(&self, row: usize) -> &[bool] {
        &self.data[row * self.num_methods..(row + 1) * self.num_methods]
    }

    /// Test identifiers, one per row.
    pub fn tests(&self) -> &[String] {
        &self.tests
    }

    /// Method identifiers, one per column.
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// New matrix keeping only the given columns, in the given order.
    pub(crate) fn select_columns(&self, columns: &[usize]) -> CoverageMatrix {
        let mut data = Vec::with_capacity(self.num_tests * columns.len());
        for row in 0..self.num_tests {
            let src = self.row(row);
            data.extend(columns.iter().map(|&c| src[c]));
        }
        CoverageMatrix {
            data,
            num_tests: self.num_tests,
            num_methods: columns.len(),
            tests: self.tests.clone(),
            methods: columns.iter().map(|&c| self.methods[c].clone()).collect(),
        }
    }

    /// New matrix with all-zero rows (tests with no activity) dropped.
    pub fn without_inactive_tests(&self) -> CoverageMatrix {
        let keep: Vec<usize> = (0..self.num_tests)
            .filter(|&r| self.row(r).iter().any(|&cell| cell))
            .collect();
        let mut data = Vec::with_capacity(keep.len() * self.num_methods);
        for &r in &keep {
            data.extend_from_slice(self.row(r));
        }
        CoverageMatrix {
            data,
            num_tests: keep.len(),
            num_methods: self.num_methods,
            tests: keep.iter().map(|&r| self.tests[r].clone()).collect(),
            methods: self.methods.clone(),
        }
    }

    /// New matrix with all-zero columns (methods with no activity) dropped.
    pub fn without_inactive_methods(&self) -> CoverageMatrix {
        let keep: Vec<usize> = (0..self.num_methods)
            .filter(|&c| (0..self.num_tests).any(|r| self.get(r, c)))
            .collect();
        self.select_columns(&keep)
    }
}

/// Historical per-test metrics, loaded once and read-only during a run.
///
/// Tests absent from a map contribute 0, so partially populated history
/// (new tests, renamed tests) degrades gracefully.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryMetrics {
    /// Test identifier → total observed failures.
    pub failures: HashMap<String, u64>,
    /// Test identifier → total execution time in seconds.
    pub exec_times: HashMap<String, f64>,
}

impl HistoryMetrics {
    /// Failure count for a test, 0 when unknown.
    pub fn failures_for(&self, test: &str) -> u64 {
        self.failures.get(test).copied().unwrap_or(0)
    }

    /// Execution time in seconds for a test, 0.0 when unknown.
    pub fn exec_time_for(&self, test: &str) -> f64 {
        self.exec_times.get(test).copied().unwrap_or(0.0)
    }
}
