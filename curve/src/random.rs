use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;

use crate::params::FIELD_BYTES;

/// Sample a uniformly random non-zero scalar below `n` by rejection.
///
/// `n` must be greater than 1 and at most 256 bits wide.
pub fn random_scalar<R: Rng + ?Sized>(rng: &mut R, n: &BigUint) -> BigUint {
    let bits = n.bits();
    let excess = (FIELD_BYTES as u64 * 8).saturating_sub(bits) as u32;

    loop {
        let mut bytes = [0u8; FIELD_BYTES];
        rng.fill(&mut bytes[..]);
        // Mask down to the bit length of n so rejection succeeds quickly.
        let candidate = BigUint::from_bytes_be(&bytes) >> excess;
        if !candidate.is_zero() && candidate < *n {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CurveParams;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_scalar_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for curve in [CurveParams::secp256r1(), CurveParams::secp256k1()] {
            for _ in 0..32 {
                let k = random_scalar(&mut rng, &curve.n);
                assert!(!k.is_zero());
                assert!(k < curve.n);
            }
        }
    }

    #[test]
    fn test_random_scalar_small_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let n = BigUint::from(5u32);
        for _ in 0..16 {
            let k = random_scalar(&mut rng, &n);
            assert!(k >= BigUint::from(1u32) && k < n);
        }
    }

    #[test]
    fn test_random_scalar_deterministic_for_seed() {
        let n = CurveParams::secp256k1().n;
        let a = random_scalar(&mut StdRng::seed_from_u64(9), &n);
        let b = random_scalar(&mut StdRng::seed_from_u64(9), &n);
        assert_eq!(a, b);
    }
}
