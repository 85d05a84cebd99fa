//! covsel-core: Multi-objective regression test selection engine
//!
//! This crate provides the optimization core for covsel:
//! - Matrix: boolean test×method activity matrix and per-commit reduction
//! - Metric: DDU diagnosability (density × diversity × uniqueness)
//! - Objective: the closed catalogue of minimized objectives
//! - Problem: candidate creation and evaluation over a working matrix
//! - Archive: bounded (leaders) and unbounded (result) non-dominated sets
//! - PSO: binary multi-objective particle swarm optimizer
//!
//! Collaborators own everything around the core: mining changelists,
//! parsing coverage reports into the matrix, historical metric stores, and
//! report aggregation. The core consumes a ready-made matrix plus history
//! maps and returns a Pareto front of candidate selections.

pub mod archive;
pub mod errors;
pub mod matrix;
pub mod metric;
pub mod objective;
pub mod problem;
pub mod pso;

// Re-exports for convenience
pub use archive::{dominance, DominanceRelation, ParetoArchive, ResultArchive};
pub use errors::{ConfigError, MatrixShapeError, ReductionError};
pub use matrix::{
    reduce_for_commit, ChangeKind, ChangedFile, CommitReducer, CoverageMatrix, HistoryMetrics,
};
pub use objective::{Objective, EMPTY_SELECTION_PENALTY};
pub use problem::{Candidate, SelectionProblem};
pub use pso::{BinaryPsoOptimizer, ParticleSwarm, PsoConfig};
