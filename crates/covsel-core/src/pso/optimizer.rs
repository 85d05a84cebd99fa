//! Binary multi-objective PSO implementation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::config::PsoConfig;
use super::ParticleSwarm;
use crate::archive::{dominance, DominanceRelation, ParetoArchive, ResultArchive};
use crate::errors::ConfigError;
use crate::problem::{Candidate, SelectionProblem};

// Coefficient ranges; each draw is quantized to one decimal place.
const INERTIA_MIN: f64 = 0.1;
const INERTIA_MAX: f64 = 0.5;
const COGNITIVE_MIN: f64 = 1.5;
const COGNITIVE_MAX: f64 = 2.0;
const SOCIAL_MIN: f64 = 1.5;
const SOCIAL_MAX: f64 = 2.0;

#[derive(Debug, Clone)]
struct Particle {
    current: Candidate,
    personal_best: Candidate,
}

/// One binary-PSO run over a selection problem.
///
/// All state (swarm, velocities, both archives, the RNG) is owned by the
/// instance; parallel workloads run independent instances. The RNG is
/// seeded exactly once, at construction.
pub struct BinaryPsoOptimizer {
    problem: SelectionProblem,
    config: PsoConfig,
    rng: StdRng,
    swarm: Vec<Particle>,
    /// Per-particle velocity over test bits, real-valued.
    velocities: Vec<Vec<f64>>,
    leaders: ParetoArchive,
    results: ResultArchive,
    evaluations: usize,
}

impl BinaryPsoOptimizer {
    /// Validate the configuration and set up an idle optimizer.
    pub fn new(problem: SelectionProblem, config: PsoConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let leaders = ParetoArchive::new(config.archive_capacity);
        Ok(Self {
            problem,
            config,
            rng,
            swarm: Vec::new(),
            velocities: Vec::new(),
            leaders,
            results: ResultArchive::new(),
            evaluations: 0,
        })
    }

    /// Candidate evaluations spent so far.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    pub fn problem(&self) -> &SelectionProblem {
        &self.problem
    }

    /// Run to the evaluation budget and return the final front: the result
    /// archive's contents, deduplicated by bit vector, in ascending
    /// objective order.
    pub fn run(&mut self) -> Vec<Candidate> {
        info!(
            swarm_size = self.config.swarm_size,
            archive_capacity = self.config.archive_capacity,
            max_evaluations = self.config.max_evaluations,
            objectives = ?self.problem.objectives(),
            tests = self.problem.num_tests(),
            "starting binary PSO run"
        );

        self.create_initial_swarm();
        self.evaluate_swarm();
        for particle in &mut self.swarm {
            particle.personal_best = particle.current.clone();
        }
        self.update_archives();
        self.evaluations = self.config.swarm_size;

        let mut generation = 0usize;
        while !self.is_done() {
            generation += 1;
            self.update_velocity();
            self.update_position();
            self.perturb();
            self.evaluate_swarm();
            self.update_personal_bests();
            self.update_archives();
            self.evaluations += self.config.swarm_size;

            debug!(
                generation,
                evaluations = self.evaluations,
                leaders = self.leaders.len(),
                front = self.results.len(),
                "generation complete"
            );
        }

        let front = self.results.clone().into_sorted_front();
        info!(
            front_size = front.len(),
            evaluations = self.evaluations,
            "binary PSO run finished"
        );
        front
    }

    fn update_personal_bests(&mut self) {
        for particle in &mut self.swarm {
            // Keep the old best only when it strictly dominates; ties and
            // non-domination favor the new state.
            let relation = dominance(
                &particle.current.objectives,
                &particle.personal_best.objectives,
            );
            if relation != DominanceRelation::DominatedBy {
                particle.personal_best = particle.current.clone();
            }
        }
    }
}

impl ParticleSwarm for BinaryPsoOptimizer {
    fn create_initial_swarm(&mut self) {
        self.swarm = (0..self.config.swarm_size)
            .map(|_| {
                let candidate = self.problem.random_candidate(&mut self.rng);
                Particle {
                    personal_best: candidate.clone(),
                    current: candidate,
                }
            })
            .collect();
        self.velocities = vec![vec![0.0; self.problem.num_tests()]; self.config.swarm_size];
    }

    fn evaluate_swarm(&mut self) {
        for particle in &mut self.swarm {
            self.problem.evaluate(&mut particle.current);
        }
    }

    fn update_velocity(&mut self) {
        for i in 0..self.swarm.len() {
            let leader = self
                .leaders
                .select_leader(&mut self.rng)
                .cloned()
                .unwrap_or_else(|| self.swarm[i].personal_best.clone());

            let w = round1(self.rng.gen_range(INERTIA_MIN..=INERTIA_MAX));
            let c1 = round1(self.rng.gen_range(COGNITIVE_MIN..=COGNITIVE_MAX));
            let c2 = round1(self.rng.gen_range(SOCIAL_MIN..=SOCIAL_MAX));
            let r1 = round1(self.rng.gen_range(0.0..=1.0));
            let r2 = round1(self.rng.gen_range(0.0..=1.0));

            let particle = &self.swarm[i];
            let velocity = &mut self.velocities[i];
            for j in 0..velocity.len() {
                let position = bit_value(particle.current.bits[j]);
                let best = bit_value(particle.personal_best.bits[j]);
                let lead = bit_value(leader.bits[j]);
                velocity[j] = w * velocity[j]
                    + c1 * r1 * (best - position)
                    + c2 * r2 * (lead - position);
            }
        }
    }

    fn update_position(&mut self) {
        // Canonical binary-PSO transfer rule: each bit is set with
        // probability sigmoid(velocity), via an independent draw.
        for (particle, velocity) in self.swarm.iter_mut().zip(&self.velocities) {
            for (bit, &v) in particle.current.bits.iter_mut().zip(velocity) {
                *bit = self.rng.gen::<f64>() < sigmoid(v);
            }
        }
    }

    fn perturb(&mut self) {
        let stride = self.config.mutation_stride;
        let probability = self.config.mutation_probability;
        for (i, particle) in self.swarm.iter_mut().enumerate() {
            if i % stride != 0 {
                continue;
            }
            for bit in &mut particle.current.bits {
                if self.rng.gen::<f64>() < probability {
                    *bit = !*bit;
                }
            }
        }
    }

    fn update_archives(&mut self) {
        for particle in &self.swarm {
            if self.leaders.try_insert(particle.current.clone()) {
                self.results.try_insert(particle.current.clone());
            }
        }
        self.leaders.recompute_crowding();
    }

    fn is_done(&self) -> bool {
        self.evaluations >= self.config.max_evaluations
    }
}

fn bit_value(bit: bool) -> f64 {
    f64::from(u8::from(bit))
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
