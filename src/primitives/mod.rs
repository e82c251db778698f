//! Arithmetic building blocks for the benchmark.
//!
//! - **groups**: Fixed group parameters (RFC 3526 4096-bit MODP)
//! - **rng**: Seeded pseudo-random source
//! - **sampler**: Rejection sampling of group elements
//! - **field**: Modular multiplication and the ElGamal-shaped workload

/// Modular multiplication and exponentiation workloads.
pub mod field;
/// Group parameter definitions.
pub mod groups;
/// Deterministic random number generation.
pub mod rng;
/// Uniform element sampling.
pub mod sampler;

pub use field::{elgamal_encrypt, mod_mul};
pub use groups::{GroupParams, Rfc3526};
pub use rng::BenchRng;
pub use sampler::{ElementSampler, sample_below};
