//! Binary multi-objective particle swarm optimizer
//!
//! Canonical binary PSO with a sigmoid transfer rule, stride-based bit-flip
//! perturbation, a bounded crowding-distance leaders archive, and an
//! unbounded result archive collecting the final non-dominated front.

mod config;
mod optimizer;

pub use config::{
    PsoConfig, DEFAULT_ARCHIVE_CAPACITY, DEFAULT_MAX_EVALUATIONS, DEFAULT_MUTATION_PROBABILITY,
    DEFAULT_MUTATION_STRIDE, DEFAULT_SWARM_SIZE,
};
pub use optimizer::BinaryPsoOptimizer;

/// Capability surface of one swarm-optimization run.
///
/// Each member is one step of the generation loop; a concrete optimizer
/// owns all state and implements every step itself, with no shared base
/// machinery between implementations.
pub trait ParticleSwarm {
    /// Populate the swarm with fresh random candidates and zeroed
    /// velocities.
    fn create_initial_swarm(&mut self);
    /// Evaluate every particle's current objective vector.
    fn evaluate_swarm(&mut self);
    /// Real-valued velocity update from personal bests and an archive
    /// leader.
    fn update_velocity(&mut self);
    /// Map velocities to new bit positions through the transfer function.
    fn update_position(&mut self);
    /// Apply the mutation operator to the perturbation subset.
    fn perturb(&mut self);
    /// Offer every particle to the archives.
    fn update_archives(&mut self);
    /// True once the evaluation budget is spent.
    fn is_done(&self) -> bool;
}
