//! Poisson distribution utilities.
//!
//! `P(X = x) = e^(−λ) · λ^x / x!`
//!
//! `λ^x / x!` is accumulated as the product `Π λ/i`, so neither `λ^x` nor
//! `x!` is ever formed on its own and every partial product stays finite
//! for `λ <= PoissonParams::MAX_RATE`.

use dx_core::{DiscreteModel, PoissonParams, SupportRange};

use crate::support::poisson_support;

/// PMF of `Poisson(λ = rate)` at `x`.
///
/// `0^0 = 1`, so `pmf(0.0, 0) == 1.0`.
pub fn pmf(rate: f64, x: u64) -> f64 {
    let mut p = (-rate).exp();
    for i in 1..=x {
        p *= rate / i as f64;
        if p == 0.0 {
            break;
        }
    }
    p
}

/// Mean of `Poisson(λ)`: `λ`.
pub fn mean(rate: f64) -> f64 {
    rate
}

/// Variance of `Poisson(λ)`: also `λ`.
pub fn variance(rate: f64) -> f64 {
    rate
}

/// Poisson model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson {
    params: PoissonParams,
}

impl Poisson {
    /// Build a model from validated parameters.
    pub fn new(params: PoissonParams) -> Self {
        Self { params }
    }

    /// Rate `λ`.
    pub fn rate(&self) -> f64 {
        self.params.rate
    }
}

impl DiscreteModel for Poisson {
    fn name(&self) -> &str {
        "poisson"
    }

    fn support(&self) -> SupportRange {
        poisson_support(self.params.rate)
    }

    fn pmf(&self, x: u64) -> f64 {
        pmf(self.params.rate, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rate_four_at_four() {
        let p = pmf(4.0, 4);
        assert!((p - 0.1954).abs() < 1e-3, "p = {}", p);
        assert_relative_eq!(p, (-4.0f64).exp() * 256.0 / 24.0, max_relative = 1e-12);
    }

    #[test]
    fn test_rate_four_sums_to_one() {
        let total: f64 = (0..=40).map(|x| pmf(4.0, x)).sum();
        assert!((total - 1.0).abs() < 1e-6, "sum = {}", total);
    }

    #[test]
    fn test_zero_rate() {
        assert_eq!(pmf(0.0, 0), 1.0);
        assert_eq!(pmf(0.0, 1), 0.0);
        assert_eq!(pmf(0.0, 7), 0.0);
    }

    #[test]
    fn test_p_zero_is_exp_minus_rate() {
        assert_relative_eq!(pmf(3.0, 0), (-3.0f64).exp(), max_relative = 1e-15);
    }

    #[test]
    fn test_values_in_unit_interval() {
        for i in 0..=200 {
            let rate = i as f64 * 0.1;
            for x in 0..=60 {
                let p = pmf(rate, x);
                assert!((0.0..=1.0).contains(&p), "rate={} x={} p={}", rate, x, p);
            }
        }
    }

    #[test]
    fn test_matches_factorial_form() {
        use crate::combinatorics::factorial;
        for &rate in &[0.5_f64, 4.0, 12.5, 30.0] {
            for x in 0..=60u64 {
                let direct = (-rate).exp() * rate.powf(x as f64) / factorial(x as i64);
                assert_relative_eq!(pmf(rate, x), direct, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_max_rate_window_stays_in_unit_interval() {
        let rate = PoissonParams::MAX_RATE;
        let support = poisson_support(rate);
        assert_eq!(support.max_x, 170);
        for x in support {
            let p = pmf(rate, x);
            assert!(p.is_finite() && (0.0..=1.0).contains(&p), "x={} p={}", x, p);
        }
        // window already covers the old overflow region (x >= 168)
        assert!(pmf(rate, 168) > 0.0 && pmf(rate, 168) < 1e-20);
    }

    #[test]
    fn test_huge_x_terminates() {
        assert_eq!(pmf(4.0, u64::MAX), 0.0);
        assert_eq!(pmf(0.0, u64::MAX), 0.0);
    }

    #[test]
    fn test_model_support_and_moments() {
        let m = Poisson::new(PoissonParams::new(2.0).unwrap());
        assert_eq!(m.support(), SupportRange::new(0, 10));
        assert_eq!(m.name(), "poisson");
        assert_eq!(m.rate(), 2.0);
        assert_eq!(mean(2.0), variance(2.0));
        let mu: f64 = (0..=60).map(|x| x as f64 * pmf(2.0, x)).sum();
        assert_relative_eq!(mu, mean(2.0), epsilon = 1e-9);
    }
}
