use num_bigint::BigUint;
use tracing::debug;

use crate::{Error, Result};

/// RFC 3526 4096-bit MODP prime (group 16), big-endian hex.
const MODP_4096_HEX: &str = concat!(
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD1",
    "29024E088A67CC74020BBEA63B139B22514A08798E3404DD",
    "EF9519B3CD3A431B302B0A6DF25F14374FE1356D6D51C245",
    "E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED",
    "EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3D",
    "C2007CB8A163BF0598DA48361C55D39A69163FA8FD24CF5F",
    "83655D23DCA3AD961C62F356208552BB9ED529077096966D",
    "670C354E4ABC9804F1746C08CA18217C32905E462E36CE3B",
    "E39E772C180E86039B2783A2EC07A28FB5C55DF06F4C52C9",
    "DE2BCBF6955817183995497CEA956AE515D2261898FA0510",
    "15728E5A8AAAC42DAD33170D04507A33A85521ABDF1CBA64",
    "ECFB850458DBEF0A8AEA71575D060C7DB3970F85A6E1E4C7",
    "ABF5AE8CDB0933D71E8C94E04A25619DCEE3D2261AD2EE6B",
    "F12FFA06D98A0864D87602733EC86A64521F2B18177B200C",
    "BBE117577A615D6C770988C0BAD946E208E24FA074E5AB31",
    "43DB5BFCE0FD108E4B82D120A92108011A723C12A787E6D7",
    "88719A10BDBA5B2699C327186AF4E23C1A946834B6150BDA",
    "2583E9CA2AD44CE8DBBBC2DB04DE8EF92E8EFC141FBECAA6",
    "287C59474E6BC05D99B2964FA090C3A2233BA186515BE7ED",
    "1F612970CEE2D7AFB81BDD762170481CD0069127D5B05AA9",
    "93B4EA988D8FDDC186FFB7DC90A6C08F4DF435C934063199",
    "FFFFFFFFFFFFFFFF",
);

/// Generator of the RFC 3526 MODP groups.
const MODP_GENERATOR: u32 = 2;

/// Parameters of a multiplicative cyclic group modulo a large prime.
///
/// The order bound (`p - 1`) and the sampling width (`ceil(bits(p) / 8)`)
/// are derived once at construction and never recomputed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GroupParams {
    modulus: BigUint,
    order_bound: BigUint,
    generator: BigUint,
    byte_len: usize,
}

impl GroupParams {
    /// Creates group parameters from a modulus and generator.
    ///
    /// The modulus must be odd and greater than 2. The generator is not
    /// checked to actually generate the group.
    pub fn new(modulus: BigUint, generator: BigUint) -> Result<Self> {
        if modulus <= BigUint::from(2u32) {
            return Err(Error::InvalidParams(
                "modulus must be greater than 2".to_string(),
            ));
        }
        if !modulus.bit(0) {
            return Err(Error::InvalidParams("modulus must be odd".to_string()));
        }

        let order_bound = &modulus - 1u32;
        let byte_len = usize::try_from(modulus.bits().div_ceil(8)).map_err(|_| {
            Error::InvalidParams("modulus is too large to sample".to_string())
        })?;

        Ok(Self {
            modulus,
            order_bound,
            generator,
            byte_len,
        })
    }

    /// Creates group parameters from a big-endian hex modulus.
    pub fn from_hex(modulus_hex: &str, generator: BigUint) -> Result<Self> {
        let bytes = hex::decode(modulus_hex)
            .map_err(|e| Error::InvalidParams(format!("malformed modulus constant: {e}")))?;
        Self::new(BigUint::from_bytes_be(&bytes), generator)
    }

    /// Returns the prime modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Returns `p - 1`, the exclusive upper bound for sampled elements.
    pub fn order_bound(&self) -> &BigUint {
        &self.order_bound
    }

    /// Returns the group generator `g`.
    pub fn generator(&self) -> &BigUint {
        &self.generator
    }

    /// Returns the bit length of the modulus.
    pub fn bits(&self) -> u64 {
        self.modulus.bits()
    }

    /// Returns the number of random bytes drawn per sampling attempt.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }
}

/// RFC 3526 MODP groups.
#[derive(Clone, Debug)]
pub struct Rfc3526;

impl Rfc3526 {
    /// Returns the 4096-bit MODP group with generator 2.
    pub fn modp_4096() -> Result<GroupParams> {
        let group = GroupParams::from_hex(MODP_4096_HEX, BigUint::from(MODP_GENERATOR))?;
        debug!(
            bits = group.bits(),
            byte_len = group.byte_len(),
            "Loaded RFC 3526 MODP group"
        );
        Ok(group)
    }
}
