//! Timing harness comparing modular multiplication with exponentiation.
//!
//! Inputs are generated once, up front, from an injected random source. Both
//! batches then run sequentially over the same arrays and the results are
//! summarized as average nanoseconds per operation.

use std::hint::black_box;
use std::time::{Duration, Instant};

use num_bigint::BigUint;
use rand::RngCore;
use tracing::{debug, info};

use crate::Result;
use crate::primitives::{ElementSampler, GroupParams, elgamal_encrypt, mod_mul};

/// Benchmark configuration.
pub mod config;
/// Timing report.
pub mod report;

pub use config::BenchConfig;
pub use report::Report;

/// Pre-generated operands shared by both timed batches.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Inputs {
    /// First multiplicand, and the exponent `x` of the workload.
    pub a: Vec<BigUint>,
    /// Second multiplicand, and the exponent `y` of the workload.
    pub b: Vec<BigUint>,
    /// Message operand `m` of the workload.
    pub c: Vec<BigUint>,
}

impl Inputs {
    fn generate<R: RngCore>(sampler: &ElementSampler, rng: &mut R, len: usize) -> Self {
        let mut a = Vec::with_capacity(len);
        let mut b = Vec::with_capacity(len);
        let mut c = Vec::with_capacity(len);

        // Interleaved so element i of each array comes from consecutive draws.
        for _ in 0..len {
            a.push(sampler.sample(rng));
            b.push(sampler.sample(rng));
            c.push(sampler.sample(rng));
        }

        Self { a, b, c }
    }

    /// Number of entries in each array.
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// Returns `true` if no inputs were generated.
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }
}

/// Single-threaded benchmark run over one group.
#[derive(Debug)]
pub struct Harness {
    group: GroupParams,
    config: BenchConfig,
    inputs: Inputs,
}

impl Harness {
    /// Validates `config` and generates `config.mul_ops` inputs per array.
    ///
    /// Fails with [`crate::Error::InvalidConfig`] before drawing any input if
    /// `exp_ops` exceeds `mul_ops`.
    pub fn new<R: RngCore>(group: GroupParams, config: BenchConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let sampler = ElementSampler::new(&group);
        let started = Instant::now();
        let inputs = Inputs::generate(&sampler, rng, config.mul_ops);
        debug!(
            count = inputs.len(),
            byte_len = sampler.byte_len(),
            elapsed = ?started.elapsed(),
            "Generated benchmark inputs"
        );

        Ok(Self {
            group,
            config,
            inputs,
        })
    }

    /// Returns the group this harness runs over.
    pub fn group(&self) -> &GroupParams {
        &self.group
    }

    /// Returns the configuration this harness was built with.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Returns the pre-generated input arrays.
    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    /// Times `mul_ops` modular multiplications `A[i] * B[i] mod p`.
    pub fn time_multiplication(&self) -> Duration {
        let p = self.group.modulus();
        let start = Instant::now();
        for (a, b) in self.inputs.a.iter().zip(&self.inputs.b) {
            black_box(mod_mul(black_box(a), black_box(b), p));
        }
        start.elapsed()
    }

    /// Times `exp_ops` workloads over the first `exp_ops` inputs.
    pub fn time_exponentiation(&self) -> Duration {
        let p = self.group.modulus();
        let g = self.group.generator();
        let n = self.config.exp_ops;
        let operands = self.inputs.a[..n]
            .iter()
            .zip(&self.inputs.b[..n])
            .zip(&self.inputs.c[..n]);

        let start = Instant::now();
        for ((x, y), m) in operands {
            black_box(elgamal_encrypt(black_box(x), black_box(y), g, p, black_box(m)));
        }
        start.elapsed()
    }

    /// Runs both batches, multiplication first, and averages them.
    pub fn run(&self) -> Report {
        info!(ops = self.config.mul_ops, "Timing modular multiplication");
        let mul_total = self.time_multiplication();
        debug!(total = ?mul_total, "Multiplication batch finished");

        info!(ops = self.config.exp_ops, "Timing exponentiation workload");
        let exp_total = self.time_exponentiation();
        debug!(total = ?exp_total, "Exponentiation batch finished");

        Report::from_totals(
            mul_total,
            self.config.mul_ops,
            exp_total,
            self.config.exp_ops,
        )
    }
}
