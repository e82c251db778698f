use num_bigint::BigUint;

/// Computes `(a * b) mod p` by reducing the full product.
///
/// The unreduced product is up to twice the width of `p`. This is the plain
/// multiply-then-reduce approach with no Montgomery or Barrett form, which is
/// exactly the cost being measured.
pub fn mod_mul(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    let product = a * b;
    product % p
}

/// ElGamal-shaped exponentiation workload.
///
/// Returns `(c1, c2)` with `c1 = g^y mod p`, `s = c1^x mod p` and
/// `c2 = s * m mod p`.
///
/// # Security Note
///
/// This is not an encryption scheme. Inputs are reused across calls and
/// `BigUint::modpow` is not constant-time. It exists only to produce a
/// realistic exponentiation-heavy workload.
pub fn elgamal_encrypt(
    x: &BigUint,
    y: &BigUint,
    g: &BigUint,
    p: &BigUint,
    m: &BigUint,
) -> (BigUint, BigUint) {
    let c1 = g.modpow(y, p);
    let s = c1.modpow(x, p);
    let c2 = mod_mul(&s, m, p);
    (c1, c2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u32) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn mod_mul_small_values() {
        assert_eq!(mod_mul(&big(0), &big(0), &big(5)), big(0));
        assert_eq!(mod_mul(&big(7), &big(9), &big(5)), big(3));
        assert_eq!(mod_mul(&big(22), &big(22), &big(23)), big(1));
    }

    #[test]
    fn mod_mul_operands_above_modulus() {
        // 100 * 200 = 20000 = 869 * 23 + 13
        assert_eq!(mod_mul(&big(100), &big(200), &big(23)), big(13));
    }

    #[test]
    fn elgamal_small_group() {
        let p = big(23);
        let g = big(5);
        let x = big(6);
        let y = big(15);
        let m = big(10);

        let (c1, c2) = elgamal_encrypt(&x, &y, &g, &p, &m);

        // 5^15 mod 23 = 19, 19^6 mod 23 = 2, 2 * 10 mod 23 = 20
        assert_eq!(c1, big(19));
        assert_eq!(c2, big(20));
    }

    #[test]
    fn elgamal_message_above_modulus_is_reduced() {
        let p = big(23);
        let g = big(5);
        let (_, c2_small) = elgamal_encrypt(&big(3), &big(4), &g, &p, &big(7));
        let (_, c2_large) = elgamal_encrypt(&big(3), &big(4), &g, &p, &big(7 + 23 * 5));
        assert_eq!(c2_small, c2_large);
        assert!(c2_large < p);
    }
}
