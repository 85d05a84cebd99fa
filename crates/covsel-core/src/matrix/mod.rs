//! Coverage matrix module
//!
//! Boolean test×method activity matrix with aligned identifier arrays,
//! historical metric maps, and per-commit reduction.

mod reducer;
mod types;

pub use reducer::{reduce_for_commit, ChangeKind, ChangedFile, CommitReducer};
pub use types::{CoverageMatrix, HistoryMetrics};
