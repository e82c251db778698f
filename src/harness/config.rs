use crate::primitives::rng::DEFAULT_SEED;
use crate::{Error, Result};

/// Immutable benchmark configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BenchConfig {
    /// Number of timed modular multiplications, and the length of each input array.
    pub mul_ops: usize,
    /// Number of timed exponentiation workloads. Must not exceed `mul_ops`.
    pub exp_ops: usize,
    /// Seed for the input generator.
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            mul_ops: 10_000,
            exp_ops: 1_000,
            seed: DEFAULT_SEED,
        }
    }
}

impl BenchConfig {
    /// Validates the configuration.
    ///
    /// The exponentiation batch reuses the first `exp_ops` entries of the
    /// multiplication inputs, so it cannot be larger.
    pub fn validate(&self) -> Result<()> {
        if self.mul_ops == 0 {
            return Err(Error::InvalidConfig(
                "mul_ops must be greater than 0".to_string(),
            ));
        }

        if self.exp_ops == 0 {
            return Err(Error::InvalidConfig(
                "exp_ops must be greater than 0".to_string(),
            ));
        }

        if self.exp_ops > self.mul_ops {
            return Err(Error::InvalidConfig(format!(
                "exp_ops ({}) must not exceed mul_ops ({})",
                self.exp_ops, self.mul_ops
            )));
        }

        Ok(())
    }
}
