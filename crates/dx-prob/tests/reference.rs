//! Cross-check the float-factorial PMFs against statrs on pedagogical ranges.

use approx::assert_relative_eq;
use dx_core::{DiscreteModel, HypergeometricParams, PoissonParams};
use dx_prob::{hypergeometric, poisson, support, Hypergeometric, Poisson};
use statrs::distribution::Discrete;

#[test]
fn hypergeometric_matches_statrs() {
    let cases = [(10u64, 5u64, 3u64), (20, 7, 12), (52, 13, 5), (40, 4, 10), (30, 29, 2)];
    for &(big_n, big_k, n) in &cases {
        let reference = statrs::distribution::Hypergeometric::new(big_n, big_k, n).unwrap();
        for pt in support::hypergeometric_points(HypergeometricParams::new(big_n, big_k, n)) {
            assert_relative_eq!(pt.p, reference.pmf(pt.x), epsilon = 1e-9, max_relative = 1e-9);
        }
    }
}

#[test]
fn poisson_matches_statrs() {
    for &rate in &[0.1, 0.5, 1.0, 2.5, 4.0, 7.3, 12.0, 20.0] {
        let reference = statrs::distribution::Poisson::new(rate).unwrap();
        for pt in support::poisson_points(rate) {
            assert_relative_eq!(pt.p, reference.pmf(pt.x), epsilon = 1e-9, max_relative = 1e-9);
        }
    }
}

#[test]
fn model_trait_points_match_free_functions() {
    let h = Hypergeometric::new(HypergeometricParams::new(52, 13, 5));
    assert_eq!(h.points(), support::hypergeometric_points(h.params()));
    assert_relative_eq!(h.pmf(0), hypergeometric::pmf(52, 13, 5, 0));

    let p = Poisson::new(PoissonParams::new(4.0).unwrap());
    assert_eq!(p.points(), support::poisson_points(4.0));
    assert_relative_eq!(p.pmf(4), poisson::pmf(4.0, 4));
}

#[test]
fn hypergeometric_support_mass_is_one() {
    for big_n in 1..=30u64 {
        for big_k in 0..=big_n {
            for n in 0..=big_n {
                let params = HypergeometricParams::new(big_n, big_k, n);
                let total: f64 = support::hypergeometric_points(params).iter().map(|p| p.p).sum();
                assert!((total - 1.0).abs() < 1e-9, "N={big_n} K={big_k} n={n} sum={total}");
            }
        }
    }
}
