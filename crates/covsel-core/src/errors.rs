//! Error types for the selection core.
//!
//! Reduction outcomes are expected, frequent business results (a commit that
//! touches nothing covered is normal), so they are returned as typed errors
//! rather than panics. Configuration problems are fatal at construction.

/// Commit-reduction outcomes with no usable working matrix.
///
/// Downstream reporting classifies runs by these exact categories, so the
/// display strings are stable and must not be reworded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReductionError {
    #[error("no covered files for this change")]
    NoCoveredFiles,

    #[error("only newly added files changed")]
    OnlyNewFiles,

    #[error("no coverage data for the changed methods")]
    NoCoverageForChange,
}

/// Shape mismatches between matrix data and its index arrays.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixShapeError {
    #[error("row count {rows} does not match test index length {tests}")]
    RowCountMismatch { rows: usize, tests: usize },

    #[error("row {row} has {len} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// Invalid run configuration, rejected before any optimization starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("swarm size must be positive")]
    ZeroSwarmSize,

    #[error("at least one objective is required")]
    NoObjectives,

    #[error("archive capacity {capacity} is too small: tournament selection needs more than 2 slots")]
    ArchiveCapacityTooSmall { capacity: usize },

    #[error("working matrix has no tests or no methods")]
    EmptyMatrix,

    #[error("mutation stride must be positive")]
    ZeroMutationStride,

    #[error("mutation probability {value} is outside [0, 1]")]
    InvalidMutationProbability { value: f64 },

    #[error("unknown objective identifier: {name}")]
    UnknownObjective { name: String },
}
