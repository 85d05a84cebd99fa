//! Non-dominated archive module
//!
//! Two archives back one optimizer run: a capacity-bounded leaders archive
//! with crowding-distance pruning (guides the swarm) and an unbounded
//! result archive (collects the final front).

mod crowding;
mod dominance;
mod pareto;
mod result;

pub use crowding::crowding_distances;
pub use dominance::{dominance, DominanceRelation};
pub use pareto::ParetoArchive;
pub use result::ResultArchive;
