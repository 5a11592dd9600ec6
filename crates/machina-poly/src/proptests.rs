//! Property-based tests for polynomial arithmetic over Z/pZ.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::zp64::PolyZp64;
    use machina_arith::Zp64;

    const PRIMES: &[u64] = &[2, 3, 17, 59, 2_147_483_647];

    fn any_ring() -> impl Strategy<Value = Zp64> {
        proptest::sample::select(PRIMES).prop_map(Zp64::new)
    }

    // Ring plus polynomials drawn over it, the shape every law needs
    fn ring_and_polys(count: usize) -> impl Strategy<Value = (Zp64, Vec<PolyZp64>)> {
        any_ring().prop_flat_map(move |ring| {
            let poly = proptest::collection::vec(any::<i64>(), 1..=12)
                .prop_map(move |coeffs| PolyZp64::from_signed(ring, &coeffs));
            (Just(ring), proptest::collection::vec(poly, count))
        })
    }

    fn check_invariants(poly: &PolyZp64) {
        assert!(poly.degree() == 0 || poly.get(poly.degree()) != 0);
        for i in 0..=poly.degree() {
            assert!(poly.get(i) < poly.ring().modulus());
        }
    }

    proptest! {
        #[test]
        fn add_commutative((_, polys) in ring_and_polys(2)) {
            let (a, b) = (&polys[0], &polys[1]);
            let mut left = a.clone();
            left.add(b);
            let mut right = b.clone();
            right.add(a);
            prop_assert_eq!(&left, &right);
            check_invariants(&left);
        }

        #[test]
        fn add_associative((_, polys) in ring_and_polys(3)) {
            let (a, b, c) = (&polys[0], &polys[1], &polys[2]);
            let mut left = a.clone();
            left.add(b).add(c);
            let mut bc = b.clone();
            bc.add(c);
            let mut right = a.clone();
            right.add(&bc);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn mul_commutative((_, polys) in ring_and_polys(2)) {
            let (a, b) = (&polys[0], &polys[1]);
            let mut left = a.clone();
            left.multiply(b);
            let mut right = b.clone();
            right.multiply(a);
            prop_assert_eq!(&left, &right);
            check_invariants(&left);
        }

        #[test]
        fn mul_associative((_, polys) in ring_and_polys(3)) {
            let (a, b, c) = (&polys[0], &polys[1], &polys[2]);
            let mut left = a.clone();
            left.multiply(b).multiply(c);
            let mut bc = b.clone();
            bc.multiply(c);
            let mut right = a.clone();
            right.multiply(&bc);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn mul_distributes_over_add((_, polys) in ring_and_polys(3)) {
            let (a, b, c) = (&polys[0], &polys[1], &polys[2]);
            let mut sum = b.clone();
            sum.add(c);
            let mut left = a.clone();
            left.multiply(&sum);
            let mut ab = a.clone();
            ab.multiply(b);
            let mut ac = a.clone();
            ac.multiply(c);
            ab.add(&ac);
            prop_assert_eq!(left, ab);
        }

        #[test]
        fn identities((ring, polys) in ring_and_polys(1)) {
            let a = &polys[0];
            let mut with_one = a.clone();
            with_one.multiply(&PolyZp64::one(ring));
            prop_assert_eq!(&with_one, a);

            let mut with_zero = a.clone();
            with_zero.add(&PolyZp64::zero(ring));
            prop_assert_eq!(&with_zero, a);

            let mut cancelled = a.clone();
            cancelled.subtract(a);
            prop_assert!(cancelled.is_zero());

            let mut negated = a.clone();
            negated.negate();
            negated.add(a);
            prop_assert!(negated.is_zero());
        }

        #[test]
        fn square_agrees_with_multiply((_, polys) in ring_and_polys(1)) {
            let a = &polys[0];
            let mut square = a.clone();
            square.square();
            let mut product = a.clone();
            product.multiply(a);
            prop_assert_eq!(&square, &product);
            check_invariants(&square);
        }

        #[test]
        fn multiply_agrees_with_wide_schoolbook((ring, polys) in ring_and_polys(2)) {
            let (a, b) = (&polys[0], &polys[1]);
            let mut product = a.clone();
            product.multiply(b);

            // independent i128 schoolbook
            let p = u128::from(ring.modulus());
            let mut reference = vec![0u128; a.degree() + b.degree() + 1];
            for i in 0..=a.degree() {
                for j in 0..=b.degree() {
                    reference[i + j] =
                        (reference[i + j] + u128::from(a.get(i)) * u128::from(b.get(j))) % p;
                }
            }
            let reference = PolyZp64::from_raw(
                ring,
                reference.into_iter().map(|c| c as u64).collect(),
            );
            prop_assert_eq!(product, reference);
        }

        #[test]
        fn shape_round_trips((_, polys) in ring_and_polys(1), k in 0usize..8) {
            let a = &polys[0];

            // double reversal drops the power of x dividing a
            let mut reversed = a.clone();
            reversed.reverse().reverse();
            let mut expected = a.clone();
            if !a.is_zero() {
                expected.shift_left(a.first_nonzero_index());
            }
            prop_assert_eq!(&reversed, &expected);

            let mut shifted = a.clone();
            shifted.shift_right(k).shift_left(k);
            prop_assert_eq!(&shifted, a);

            let mut truncated = a.clone();
            truncated.truncate(a.degree());
            prop_assert_eq!(&truncated, a);
        }

        #[test]
        fn horner_matches_power_sum((ring, polys) in ring_and_polys(1), x in any::<u64>()) {
            let a = &polys[0];
            let x = ring.normalize_u64(x);
            let mut expected = 0u64;
            for i in 0..=a.degree() {
                expected = ring.add(expected, ring.mul(a.get(i), ring.pow(x, i as u64)));
            }
            prop_assert_eq!(a.evaluate(x), expected);
        }

        #[test]
        fn monic_normalizes_leading_coefficient((_, polys) in ring_and_polys(1)) {
            let a = &polys[0];
            prop_assume!(!a.is_zero());
            let lc = a.lc();
            let mut monic = a.clone();
            monic.monic();
            prop_assert_eq!(monic.lc(), 1);
            monic.scale(lc);
            prop_assert_eq!(&monic, a);
        }

        #[test]
        fn pow_peels_one_factor((_, polys) in ring_and_polys(1), k in 0u64..6) {
            let a = &polys[0];
            let mut left = a.clone();
            left.pow(k + 1);
            let mut right = a.clone();
            right.pow(k);
            right.multiply(a);
            prop_assert_eq!(left, right);

            let mut unit = a.clone();
            unit.pow(0);
            prop_assert!(unit.is_one());
        }

        #[test]
        fn derivative_is_linear((_, polys) in ring_and_polys(2)) {
            let (a, b) = (&polys[0], &polys[1]);
            let mut sum = a.clone();
            sum.add(b);
            sum.derivative();
            let mut da = a.clone();
            da.derivative();
            let mut db = b.clone();
            db.derivative();
            da.add(&db);
            prop_assert_eq!(sum, da);
        }

        #[test]
        fn display_round_trips((ring, polys) in ring_and_polys(1)) {
            let a = &polys[0];
            let reparsed = PolyZp64::parse(ring, &a.to_string()).unwrap();
            prop_assert_eq!(&reparsed, a);
        }
    }
}
