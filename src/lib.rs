//! Relative cost of modular multiplication versus modular exponentiation.
//!
//! Measures how many 4096-bit modular multiplications cost as much as one
//! ElGamal-shaped exponentiation workload over the RFC 3526 MODP group.
//!
//! - **primitives**: group parameters, seeded sampling and the arithmetic under test
//! - **harness**: configuration, timed batches and the resulting report
//!
//! The arithmetic here is deliberately naive and not constant-time. None of it
//! is suitable for real cryptographic use.

/// Error types.
pub mod error;
/// Timing harness.
pub mod harness;
/// Arithmetic primitives and input generation.
pub mod primitives;

pub use error::Error;
pub use harness::{BenchConfig, Harness, Inputs, Report};
pub use primitives::{
    BenchRng, ElementSampler, GroupParams, Rfc3526, elgamal_encrypt, mod_mul, sample_below,
};

/// Result type alias for this crate.
pub type Result<T> = core::result::Result<T, Error>;
