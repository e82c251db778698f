//! Uniform sampling of group elements by rejection.

use num_bigint::BigUint;
use num_traits::Zero;
use rand::RngCore;

use crate::primitives::groups::GroupParams;
use crate::{Error, Result};

/// Draws a value uniformly distributed over `[0, bound)`.
///
/// Each attempt fills `byte_len` random bytes, reads them as a big-endian
/// integer and accepts only if the value is strictly less than `bound`.
/// Out-of-range draws are discarded; they are never reduced modulo `bound`.
pub fn sample_below<R: RngCore>(
    rng: &mut R,
    bound: &BigUint,
    byte_len: usize,
) -> Result<BigUint> {
    if bound.is_zero() {
        return Err(Error::InvalidParams(
            "sampling bound must be non-zero".to_string(),
        ));
    }
    if bound.bits() > (byte_len as u64) * 8 {
        return Err(Error::InvalidParams(format!(
            "{byte_len} bytes cannot cover a {}-bit bound",
            bound.bits()
        )));
    }

    let mut buf = vec![0u8; byte_len];
    loop {
        rng.fill_bytes(&mut buf);
        let candidate = BigUint::from_bytes_be(&buf);
        if candidate < *bound {
            return Ok(candidate);
        }
    }
}

/// Samples group elements in `[0, p - 1)`.
///
/// The byte width comes from the modulus, not from the bound, and is fixed
/// for the lifetime of the sampler.
#[derive(Clone, Debug)]
pub struct ElementSampler {
    bound: BigUint,
    byte_len: usize,
}

impl ElementSampler {
    /// Creates a sampler over the order bound of `group`.
    pub fn new(group: &GroupParams) -> Self {
        Self {
            bound: group.order_bound().clone(),
            byte_len: group.byte_len(),
        }
    }

    /// Number of random bytes consumed per attempt.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Draws one group element.
    pub fn sample<R: RngCore>(&self, rng: &mut R) -> BigUint {
        // The bound is p - 1 > 1 and the width is taken from p.
        sample_below(rng, &self.bound, self.byte_len)
            .unwrap_or_else(|_| unreachable!("group order bound is non-zero and fits byte_len"))
    }

    /// Draws a value below an arbitrary bound using this sampler's width.
    pub fn sample_below<R: RngCore>(&self, rng: &mut R, bound: &BigUint) -> Result<BigUint> {
        sample_below(rng, bound, self.byte_len)
    }
}
