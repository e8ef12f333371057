//! Property-based tests for polynomial arithmetic and root finding.

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use proptest::prelude::*;

    use crate::config::LaguerreConfig;
    use crate::dense::Polynomial;

    // Small Gaussian integers keep ring arithmetic exact in f64.
    fn small_coeff() -> impl Strategy<Value = Complex64> {
        (-10i32..=10, -10i32..=10).prop_map(|(re, im)| Complex64::new(f64::from(re), f64::from(im)))
    }

    fn small_point() -> impl Strategy<Value = Complex64> {
        (-5i32..=5, -5i32..=5).prop_map(|(re, im)| Complex64::new(f64::from(re), f64::from(im)))
    }

    // Repeated roots lose accuracy with magnitude, so keep them close in.
    fn tiny_point() -> impl Strategy<Value = Complex64> {
        (-3i32..=3, -3i32..=3).prop_map(|(re, im)| Complex64::new(f64::from(re), f64::from(im)))
    }

    fn nonzero_coeff() -> impl Strategy<Value = Complex64> {
        small_coeff().prop_filter("coefficient must be non-zero", |c| c.norm() > 0.0)
    }

    // Degree 0-4, possibly zero.
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(Polynomial::from_vec)
    }

    // Exactly the given degree range, with a nonzero leading coefficient.
    fn poly_of_degree(degrees: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = Polynomial> {
        degrees
            .prop_flat_map(|n| (proptest::collection::vec(small_coeff(), n), nonzero_coeff()))
            .prop_map(|(mut coeffs, lead)| {
                coeffs.push(lead);
                Polynomial::from_vec(coeffs)
            })
    }

    // Degree 2-6 with a nonzero constant term, so no root sits at the
    // origin, and one interior coefficient pinned near machine epsilon.
    fn poly_with_epsilon_coeff() -> impl Strategy<Value = Polynomial> {
        (2usize..=6)
            .prop_flat_map(|n| {
                (
                    nonzero_coeff(),
                    proptest::collection::vec(small_coeff(), n - 1),
                    nonzero_coeff(),
                    1..n,
                    1i32..=9,
                )
            })
            .prop_map(|(constant, mut middle, lead, k, m)| {
                middle[k - 1] = Complex64::new(f64::from(m) * f64::EPSILON, 0.0);
                let mut coeffs = vec![constant];
                coeffs.append(&mut middle);
                coeffs.push(lead);
                Polynomial::from_vec(coeffs)
            })
    }

    // A quadratic whose leading coefficient is near machine epsilon: one
    // root of order one, one near 1e15.
    fn quadratic_with_epsilon_lead() -> impl Strategy<Value = Polynomial> {
        (nonzero_coeff(), nonzero_coeff(), 1i32..=9).prop_map(|(a0, a1, m)| {
            Polynomial::from_vec(vec![a0, a1, Complex64::new(f64::from(m) * 1e-15, 0.0)])
        })
    }

    fn well_separated(roots: &[Complex64], gap: f64) -> bool {
        roots
            .iter()
            .enumerate()
            .all(|(i, z)| roots[i + 1..].iter().all(|w| (z - w).norm() > gap))
    }

    /// Matches two root lists up to permutation at six significant digits.
    /// `floor` is an absolute allowance for roots at the origin.
    fn roots_agree(a: &[Complex64], b: &[Complex64], floor: f64) -> bool {
        if a.len() != b.len() {
            return false;
        }
        let mut unmatched = b.to_vec();
        for z in a {
            let close = |w: &Complex64| (z - w).norm() <= 1e-6 * z.norm().max(w.norm()) + floor;
            let Some(pos) = unmatched.iter().position(close) else {
                return false;
            };
            unmatched.swap_remove(pos);
        }
        true
    }

    /// Tolerance scale for Vieta checks: bounds the root magnitudes.
    fn root_scale(p: &Polynomial) -> f64 {
        1.0 + p.norm_inf() / p.leading_coeff().norm()
    }

    fn vieta_sum(p: &Polynomial) -> Complex64 {
        let n = p.degree();
        -p.coeff(n - 1) / p.leading_coeff()
    }

    proptest! {
        // Ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
            prop_assert!(a.sub(&a).is_zero());
        }

        #[test]
        fn poly_mul_degree(a in poly_of_degree(0..=4), b in poly_of_degree(0..=4)) {
            // No zero divisors over the complex numbers.
            prop_assert_eq!(a.mul(&b).degree(), a.degree() + b.degree());
        }

        #[test]
        fn poly_pow_matches_repeated_mul(a in poly_of_degree(0..=2), n in 0u32..=4) {
            let expected = (0..n).fold(Polynomial::one(), |acc, _| acc.mul(&a));
            prop_assert_eq!(a.pow(n), expected);
        }

        // Evaluation is a ring homomorphism

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in small_point()) {
            prop_assert_eq!(a.add(&b).eval(x), a.eval(x) + b.eval(x));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in small_point()) {
            prop_assert_eq!(a.mul(&b).eval(x), a.eval(x) * b.eval(x));
        }

        // Calculus

        #[test]
        fn poly_deriv_product_rule(a in small_poly(), b in small_poly()) {
            let left = a.mul(&b).deriv();
            let right = a.deriv().mul(&b).add(&a.mul(&b.deriv()));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_deriv_lowers_degree(a in poly_of_degree(1..=5)) {
            prop_assert_eq!(a.deriv().degree(), a.degree() - 1);
        }

        // Division

        #[test]
        fn poly_div_rem_reconstructs(a in small_poly(), b in poly_of_degree(0..=3)) {
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert!(r.is_zero() || r.degree() < b.degree());
            prop_assert_eq!(q.mul(&b).add(&r), a);
        }

        #[test]
        fn poly_deflate_by_root_is_exact(roots in proptest::collection::vec(small_point(), 1..=4)) {
            let p = Polynomial::from_roots(&roots);
            let q = p.deflate(roots[0]);
            prop_assert_eq!(q, Polynomial::from_roots(&roots[1..]));
        }

        // Root finding: Vieta's formula for the sum of roots

        #[test]
        fn companion_roots_sum(p in poly_of_degree(1..=5)) {
            let roots = p.roots_companion().unwrap();
            prop_assert_eq!(roots.len(), p.degree());
            let sum: Complex64 = roots.iter().sum();
            let tol = 1e-8 * root_scale(&p) * p.degree() as f64;
            prop_assert!((sum - vieta_sum(&p)).norm() <= tol);
        }

        #[test]
        fn laguerre_roots_sum(p in poly_of_degree(1..=5)) {
            let config = LaguerreConfig { polish: false, ..LaguerreConfig::default() };
            let roots = p.roots_laguerre_with(&config).unwrap();
            prop_assert_eq!(roots.len(), p.degree());
            let sum: Complex64 = roots.iter().sum();
            let tol = 1e-8 * root_scale(&p) * p.degree() as f64;
            prop_assert!((sum - vieta_sum(&p)).norm() <= tol);
        }

        // Root finding: the two methods agree as multisets

        #[test]
        fn companion_and_laguerre_agree(p in poly_of_degree(1..=6)) {
            let companion = p.roots_companion().unwrap();
            // Clustered roots are only determined to a fraction of the digits.
            prop_assume!(well_separated(&companion, 1e-2));
            let laguerre = p.roots_laguerre().unwrap();
            prop_assert!(roots_agree(&companion, &laguerre, 1e-9), "{:?} vs {:?}", companion, laguerre);
        }

        #[test]
        fn companion_and_laguerre_agree_with_epsilon_coeff(p in poly_with_epsilon_coeff()) {
            let companion = p.roots_companion().unwrap();
            prop_assume!(well_separated(&companion, 1e-2));
            let laguerre = p.roots_laguerre().unwrap();
            prop_assert!(roots_agree(&companion, &laguerre, 0.0), "{:?} vs {:?}", companion, laguerre);
        }

        #[test]
        fn companion_and_laguerre_agree_with_epsilon_lead(p in quadratic_with_epsilon_lead()) {
            let companion = p.roots_companion().unwrap();
            let laguerre = p.roots_laguerre().unwrap();
            prop_assert!(roots_agree(&companion, &laguerre, 0.0), "{:?} vs {:?}", companion, laguerre);
        }

        #[test]
        fn roots_of_product_of_linear_factors(roots in proptest::collection::vec(tiny_point(), 1..=3)) {
            let p = Polynomial::from_roots(&roots);
            for z in p.roots_companion().unwrap() {
                // Each computed root must sit near one of the inputs.
                let nearest = roots.iter().map(|r| (z - r).norm()).fold(f64::INFINITY, f64::min);
                prop_assert!(nearest < 1e-3);
            }
        }
    }
}
