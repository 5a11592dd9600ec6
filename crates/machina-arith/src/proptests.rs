//! Property-based tests for the modular arithmetic layer.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::magic::{Magic, SignedMagic};
    use crate::word;
    use crate::zp::Zp64;

    // A spread of prime moduli from tiny to near the 63-bit limit
    const PRIMES: &[u64] = &[
        2,
        3,
        17,
        59,
        257,
        65_537,
        2_147_483_647,          // 2^31 - 1
        1_000_000_007,
        2_305_843_009_213_693_951, // 2^61 - 1
        4_611_686_018_427_387_847, // 2^62 - 57
    ];

    fn any_prime() -> impl Strategy<Value = u64> {
        proptest::sample::select(PRIMES)
    }

    proptest! {
        #[test]
        fn magic_reduce_matches_remainder(p in any_prime(), a in any::<u64>()) {
            let m = Magic::new(p);
            prop_assert_eq!(m.reduce(a), a % p);
        }

        #[test]
        fn magic_reduce_u128_matches_remainder(p in any_prime(), z in any::<u128>()) {
            let m = Magic::new(p);
            prop_assert_eq!(u128::from(m.reduce_u128(z)), z % u128::from(p));
        }

        #[test]
        fn mul_mod_matches_wide_product(p in any_prime(), a in any::<u64>(), b in any::<u64>()) {
            let m = Magic::new(p);
            let a = a % p;
            let b = b % p;
            prop_assert_eq!(
                u128::from(m.mul_mod(a, b)),
                u128::from(a) * u128::from(b) % u128::from(p)
            );
        }

        #[test]
        fn signed_magic_divides_exactly(d in -1_000_000i64..1_000_000, q in -1_000_000i64..1_000_000) {
            prop_assume!(d != 0);
            let m = SignedMagic::new(d);
            prop_assert_eq!(m.div(d * q), q);
        }

        #[test]
        fn normalize_lands_in_range(p in any_prime(), x in any::<i64>()) {
            let ring = Zp64::new(p);
            let r = ring.normalize(x);
            prop_assert!(r < p);
            // r = x (mod p) checked through the signed remainder
            let expected = x.rem_euclid(p as i64) as u64;
            prop_assert_eq!(r, expected);
        }

        #[test]
        fn add_sub_round_trip(p in any_prime(), a in any::<u64>(), b in any::<u64>()) {
            let ring = Zp64::new(p);
            let a = ring.normalize_u64(a);
            let b = ring.normalize_u64(b);
            prop_assert_eq!(ring.sub(ring.add(a, b), b), a);
            prop_assert_eq!(ring.add(ring.sub(a, b), b), a);
        }

        #[test]
        fn inverse_is_multiplicative_inverse(p in any_prime(), a in any::<u64>()) {
            let ring = Zp64::new(p);
            let a = ring.normalize_u64(a);
            prop_assume!(a != 0);
            let u = ring.inv(a).unwrap();
            prop_assert!(u >= 1 && u < p);
            prop_assert_eq!(ring.mul(a, u), 1);
        }

        #[test]
        fn pow_splits_over_exponent_sum(p in any_prime(), a in any::<u64>(), j in 0u64..64, k in 0u64..64) {
            let ring = Zp64::new(p);
            let a = ring.normalize_u64(a);
            prop_assert_eq!(
                ring.pow(a, j + k),
                ring.mul(ring.pow(a, j), ring.pow(a, k))
            );
        }

        #[test]
        fn gcd_divides_both(a in any::<i64>(), b in any::<i64>()) {
            prop_assume!(a != i64::MIN && b != i64::MIN);
            let g = word::gcd(a, b);
            if a != 0 || b != 0 {
                prop_assert!(g > 0);
                prop_assert_eq!(a % g, 0);
                prop_assert_eq!(b % g, 0);
            } else {
                prop_assert_eq!(g, 0);
            }
        }

        #[test]
        fn pow_mod_matches_ring_pow(p in any_prime(), a in any::<u64>(), exp in 0u64..1000) {
            let ring = Zp64::new(p);
            prop_assert_eq!(word::pow_mod(a, exp, ring.magic()), ring.pow(a, exp));
        }
    }
}
