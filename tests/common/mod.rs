//! Common test utilities shared across integration tests.

use modexp_cost::GroupParams;
use num_bigint::BigUint;

/// Initialize test tracing (call once at the beginning of tests).
///
/// Only logs from this crate are shown. Subsequent calls are ignored.
#[allow(dead_code)]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::new("modexp_cost=debug");

    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(filter)
        .try_init();
}

/// Group over the prime `2^64 - 59`, for fast harness runs.
#[allow(dead_code)]
pub fn small_group() -> GroupParams {
    GroupParams::new(BigUint::from(18_446_744_073_709_551_557u64), BigUint::from(2u32))
        .expect("small test modulus is odd")
}
