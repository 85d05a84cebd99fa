//! Unbounded result archive: every accepted candidate ever seen that is
//! still non-dominated. Its final contents are the returned front.

use std::cmp::Ordering;

use super::dominance::{dominance, DominanceRelation};
use crate::problem::Candidate;

#[derive(Debug, Clone, Default)]
pub struct ResultArchive {
    members: Vec<Candidate>,
}

impl ResultArchive {
    pub fn new() -> Self {
        Self::default()
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

    /// Insert unless dominated by a member or a bit-for-bit duplicate;
    /// evict members the candidate dominates.
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
        true
    }

    /// Final front in canonical order: ascending lexicographic by
    /// objective vector, for deterministic downstream reporting.
    pub fn into_sorted_front(mut self) -> Vec<Candidate> {
        self.members.sort_by(compare_objective_vectors);
        self.members
    }
}

fn compare_objective_vectors(a: &Candidate, b: &Candidate) -> Ordering {
    for (x, y) in a.objectives.iter().zip(&b.objectives) {
        match x.total_cmp(y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}
