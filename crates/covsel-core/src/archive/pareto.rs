//! Bounded leaders archive with crowding-distance pruning.

use rand::Rng;

use super::crowding::crowding_distances;
use super::dominance::{dominance, DominanceRelation};
use crate::problem::Candidate;

/// Capacity-bounded non-dominated set used to pull the swarm toward the
/// front. Over capacity, the most crowded member (smallest crowding
/// distance) is evicted. Distances are recomputed wholesale, never
/// maintained incrementally.
#[derive(Debug, Clone)]
pub struct ParetoArchive {
    capacity: usize,
    members: Vec<Candidate>,
    crowding: Vec<f64>,
}

impl ParetoArchive {
    /// New empty archive. Capacity validation happens at optimizer
    /// construction; the archive itself just honors the bound.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            members: Vec::new(),
            crowding: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[Candidate] {
        &self.members
    }

    /// Crowding distance per member, aligned with `members()`. Stale until
    /// the next `recompute_crowding` after insertions.
    pub fn crowding(&self) -> &[f64] {
        &self.crowding
    }

    /// Insert a candidate unless it is dominated by (or a bit-for-bit
    /// duplicate of) an existing member. Members dominated by the incoming
    /// candidate are evicted. Returns whether the candidate was accepted.
    pub fn try_insert(&mut self, candidate: Candidate) -> bool {
        let mut keep = vec![true; self.members.len()];
        for (i, member) in self.members.iter().enumerate() {
            match dominance(&candidate.objectives, &member.objectives) {
                DominanceRelation::DominatedBy => return false,
                DominanceRelation::Dominates => keep[i] = false,
                DominanceRelation::NonDominated => {
                    if member.bits == candidate.bits {
                        return false;
                    }
                }
            }
        }

        let mut it = keep.iter();
        self.members.retain(|_| *it.next().unwrap_or(&true));
        self.members.push(candidate);

        if self.members.len() > self.capacity {
            self.evict_most_crowded();
        }
        true
    }

    /// Recompute the crowding-distance estimator for the whole archive.
    pub fn recompute_crowding(&mut self) {
        self.crowding = crowding_distances(&self.members);
    }

    /// Binary-tournament leader selection: two distinct members, keep the
    /// one with the larger crowding distance. With two or fewer members,
    /// the first is returned directly. `None` only for an empty archive.
    pub fn select_leader<R: Rng>(&self, rng: &mut R) -> Option<&Candidate> {
        if self.members.len() > 2 {
            let i = rng.gen_range(0..self.members.len());
            let mut j = rng.gen_range(0..self.members.len() - 1);
            if j >= i {
                j += 1;
            }
            let di = self.crowding.get(i).copied().unwrap_or(0.0);
            let dj = self.crowding.get(j).copied().unwrap_or(0.0);
            let winner = if di >= dj { i } else { j };
            self.members.get(winner)
        } else {
            self.members.first()
        }
    }

    fn evict_most_crowded(&mut self) {
        self.recompute_crowding();
        let victim = self
            .crowding
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, _)| i);
        if let Some(i) = victim {
            self.members.remove(i);
            self.crowding.remove(i);
        }
    }
}
