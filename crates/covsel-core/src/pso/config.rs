//! Optimizer run configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub const DEFAULT_SWARM_SIZE: usize = 200;
pub const DEFAULT_ARCHIVE_CAPACITY: usize = 100;
pub const DEFAULT_MAX_EVALUATIONS: usize = 1000;
pub const DEFAULT_MUTATION_PROBABILITY: f64 = 0.5;
pub const DEFAULT_MUTATION_STRIDE: usize = 6;

/// Binary-PSO run configuration.
///
/// Validated once at optimizer construction; an invalid configuration
/// never starts a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PsoConfig {
    /// Particles per generation.
    pub swarm_size: usize,
    /// Leaders-archive capacity. Must exceed 2 so binary-tournament
    /// selection has a pool to sample from.
    pub archive_capacity: usize,
    /// Evaluation budget; the run stops once this many candidate
    /// evaluations have been spent.
    pub max_evaluations: usize,
    /// Per-bit flip probability for the perturbation operator.
    pub mutation_probability: f64,
    /// Every `mutation_stride`-th particle is perturbed each generation.
    pub mutation_stride: usize,
    /// Explicit RNG seed for reproducible runs; entropy-seeded when unset.
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            swarm_size: DEFAULT_SWARM_SIZE,
            archive_capacity: DEFAULT_ARCHIVE_CAPACITY,
            max_evaluations: DEFAULT_MAX_EVALUATIONS,
            mutation_probability: DEFAULT_MUTATION_PROBABILITY,
            mutation_stride: DEFAULT_MUTATION_STRIDE,
            seed: None,
        }
    }
}

impl PsoConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.swarm_size == 0 {
            return Err(ConfigError::ZeroSwarmSize);
        }
        if self.archive_capacity <= 2 {
            return Err(ConfigError::ArchiveCapacityTooSmall {
                capacity: self.archive_capacity,
            });
        }
        if self.mutation_stride == 0 {
            return Err(ConfigError::ZeroMutationStride);
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(ConfigError::InvalidMutationProbability {
                value: self.mutation_probability,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PsoConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_swarm() {
        let config = PsoConfig {
            swarm_size: 0,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err(), ConfigError::ZeroSwarmSize);
    }

    #[test]
    fn rejects_tiny_archive() {
        let config = PsoConfig {
            archive_capacity: 2,
            ..Default::default()
        };
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::ArchiveCapacityTooSmall { capacity: 2 }
        );
    }

    #[test]
    fn rejects_out_of_range_mutation_probability() {
        let config = PsoConfig {
            mutation_probability: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::InvalidMutationProbability { .. }
        ));
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: PsoConfig = serde_json::from_str(r#"{"swarm_size": 20}"#).unwrap();
        assert_eq!(config.swarm_size, 20);
        assert_eq!(config.archive_capacity, DEFAULT_ARCHIVE_CAPACITY);
        assert_eq!(config.seed, None);
    }
}
