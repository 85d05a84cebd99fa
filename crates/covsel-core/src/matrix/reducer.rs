//! Per-commit matrix reduction
//!
//! Slices the full activity matrix down to the methods a commit touched,
//! then drops tests and methods with no remaining activity. The three
//! sentinel outcomes are stable categories that downstream reporting
//! matches on verbatim.

use std::collections::HashSet;

use crate::errors::ReductionError;
use crate::matrix::CoverageMatrix;

/// Kind of change for one file in a changelist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Modified,
}

/// One changed file, already normalized by the VCS collaborator to the
/// dotted form that appears inside method identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    pub name: String,
    pub kind: ChangeKind,
}

impl ChangedFile {
    pub fn added(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ChangeKind::Added,
        }
    }

    pub fn modified(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ChangeKind::Modified,
        }
    }
}

/// Maps changelists to matrix columns across a sequence of commits.
///
/// Remembers files first seen as additions: a later modification of such a
/// file still has no prior coverage, so it counts as new when deciding the
/// `OnlyNewFiles` outcome.
#[derive(Debug, Default)]
pub struct CommitReducer {
    known_new_files: HashSet<String>,
}

impl CommitReducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a changelist to the matrix columns it affects.
    pub fn columns_for_changes(
        &mut self,
        matrix: &CoverageMatrix,
        changes: &[ChangedFile],
    ) -> Result<Vec<usize>, ReductionError> {
        if changes.is_empty() {
            return Err(ReductionError::NoCoveredFiles);
        }

        let mut new_count = 0;
        for change in changes {
            match change.kind {
                ChangeKind::Added => {
                    self.known_new_files.insert(change.name.clone());
                    new_count += 1;
                }
                ChangeKind::Modified => {
                    if self.known_new_files.contains(&change.name) {
                        new_count += 1;
                    }
                }
            }
        }
        if new_count == changes.len() {
            return Err(ReductionError::OnlyNewFiles);
        }

        let columns: Vec<usize> = matrix
            .methods()
            .iter()
            .enumerate()
            .filter(|(_, method)| changes.iter().any(|c| method.contains(&c.name)))
            .map(|(i, _)| i)
            .collect();

        if columns.is_empty() {
            return Err(ReductionError::NoCoverageForChange);
        }
        Ok(columns)
    }

    /// Full reduction: resolve the changelist, then slice the matrix.
    pub fn reduce(
        &mut self,
        matrix: &CoverageMatrix,
        changes: &[ChangedFile],
    ) -> Result<CoverageMatrix, ReductionError> {
        let columns = self.columns_for_changes(matrix, changes)?;
        reduce_for_commit(matrix, &columns)
    }
}

/// Restrict the matrix to the given columns, then drop all-zero rows and
/// all-zero columns. Out-of-range indices are ignored; the upstream
/// collaborator that produced the changelist owns index hygiene.
pub fn reduce_for_commit(
    matrix: &CoverageMatrix,
    changed_columns: &[usize],
) -> Result<CoverageMatrix, ReductionError> {
    let valid: Vec<usize> = changed_columns
        .iter()
        .copied()
        .filter(|&c| c < matrix.num_methods())
        .collect();
    if valid.is_empty() {
        return Err(ReductionError::NoCoverageForChange);
    }

    let reduced = matrix
        .select_columns(&valid)
        .without_inactive_tests()
        .without_inactive_methods();

    if reduced.is_empty() {
        return Err(ReductionError::NoCoverageForChange);
    }
    Ok(reduced)
}
