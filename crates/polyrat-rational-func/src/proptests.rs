//! Property-based tests for rational function identities.

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use proptest::prelude::*;
    use polyrat_poly::Polynomial;

    use crate::RationalFunction;

    fn small_coeff() -> impl Strategy<Value = Complex64> {
        (-9i32..=9, -9i32..=9).prop_map(|(re, im)| Complex64::new(f64::from(re), f64::from(im)))
    }

    fn nonzero_coeff() -> impl Strategy<Value = Complex64> {
        small_coeff().prop_filter("coefficient must be non-zero", |c| c.norm() > 0.0)
    }

    // Degree 0-3, possibly zero.
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 1..=4).prop_map(Polynomial::from_vec)
    }

    fn nonzero_poly() -> impl Strategy<Value = Polynomial> {
        (proptest::collection::vec(small_coeff(), 0..=2), nonzero_coeff()).prop_map(|(mut coeffs, lead)| {
            coeffs.push(lead);
            Polynomial::from_vec(coeffs)
        })
    }

    fn small_rf() -> impl Strategy<Value = RationalFunction> {
        (small_poly(), nonzero_poly()).prop_map(|(u, v)| RationalFunction::new(u, v).unwrap())
    }

    proptest! {
        #[test]
        fn rf_scale_invariance(u in small_poly(), v in nonzero_poly(), k in nonzero_coeff()) {
            let f = RationalFunction::new(&u, &v).unwrap();
            let g = RationalFunction::new(u.scale(k), v.scale(k)).unwrap();
            prop_assert_eq!(f, g);
        }

        #[test]
        fn rf_shared_denominator_add(p in small_poly(), q in small_poly(), v in nonzero_poly()) {
            let left = RationalFunction::new(&p, &v).unwrap() + RationalFunction::new(&q, &v).unwrap();
            prop_assert_eq!(left, RationalFunction::new(p.add(&q), &v).unwrap());
        }

        #[test]
        fn rf_shared_denominator_sub(p in small_poly(), q in small_poly(), v in nonzero_poly()) {
            let left = RationalFunction::new(&p, &v).unwrap() - RationalFunction::new(&q, &v).unwrap();
            prop_assert_eq!(left, RationalFunction::new(p.sub(&q), &v).unwrap());
        }

        #[test]
        fn rf_shared_denominator_div(a in small_poly(), b in nonzero_poly(), v in nonzero_poly()) {
            let left = RationalFunction::new(&a, &v)
                .unwrap()
                .div_ref(&RationalFunction::new(&b, &v).unwrap())
                .unwrap();
            prop_assert_eq!(left, RationalFunction::new(&a, &b).unwrap());
        }

        #[test]
        fn rf_add_commutative(a in small_rf(), b in small_rf()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rf_mul_commutative(a in small_rf(), b in small_rf()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn rf_additive_inverse(a in small_rf()) {
            prop_assert!((&a - &a).is_zero());
            prop_assert!((&a + &(-&a)).is_zero());
        }

        #[test]
        fn rf_pos_is_identity(a in small_rf()) {
            prop_assert_eq!(a.pos(), a);
        }

        #[test]
        fn rf_eval_matches_parts(u in small_poly(), v in nonzero_poly(), re in -4i32..=4, im in -4i32..=4) {
            let z = Complex64::new(f64::from(re) + 0.5, f64::from(im) + 0.25);
            let f = RationalFunction::new(&u, &v).unwrap();
            let den = v.eval(z);
            prop_assume!(den.norm() > 1e-6);
            let value = f.eval(z).unwrap();
            let expected = u.eval(z) / den;
            prop_assert!((value - expected).norm() <= 1e-12 * (1.0 + expected.norm()));
        }
    }
}
