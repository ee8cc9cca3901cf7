//! Hypergeometric distribution (sampling without replacement).
//!
//! `P(X = x) = C(K, x) · C(N − K, n − x) / C(N, n)`

use dx_core::{DiscreteModel, HypergeometricParams, SupportRange};

use crate::combinatorics::combinations;
use crate::support::{clamp_hypergeometric, hypergeometric_support};

/// PMF of `Hypergeometric(N = population, K = successes, n = draws)` at `x`.
///
/// Returns 0 when `C(N, n)` is 0. Outside the support the numerator's
/// combination counts are 0, so out-of-support `x` (and `K > N`) also yield 0.
pub fn pmf(population: u64, successes: u64, draws: u64, x: u64) -> f64 {
    let (big_n, big_k, n, x) = (population as i64, successes as i64, draws as i64, x as i64);
    let top = combinations(big_k, x) * combinations(big_n - big_k, n - x);
    let bottom = combinations(big_n, n);
    if bottom == 0.0 { 0.0 } else { top / bottom }
}

/// Mean `n·K/N`; 0 for an empty population.
pub fn mean(params: &HypergeometricParams) -> f64 {
    if params.population == 0 {
        return 0.0;
    }
    params.draws as f64 * params.successes as f64 / params.population as f64
}

/// Variance `n·(K/N)·((N−K)/N)·((N−n)/(N−1))`; 0 when `N <= 1`.
pub fn variance(params: &HypergeometricParams) -> f64 {
    if params.population <= 1 {
        return 0.0;
    }
    let big_n = params.population as f64;
    let big_k = params.successes as f64;
    let n = params.draws as f64;
    n * (big_k / big_n) * ((big_n - big_k) / big_n) * ((big_n - n) / (big_n - 1.0))
}

/// Hypergeometric model with clamped parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hypergeometric {
    params: HypergeometricParams,
}

impl Hypergeometric {
    /// Build a model; `K` and `n` above `N` are capped at `N`.
    pub fn new(params: HypergeometricParams) -> Self {
        Self { params: clamp_hypergeometric(params) }
    }

    /// Effective (clamped) parameters.
    pub fn params(&self) -> HypergeometricParams {
        self.params
    }
}

impl DiscreteModel for Hypergeometric {
    fn name(&self) -> &str {
        "hypergeometric"
    }

    fn support(&self) -> SupportRange {
        let p = self.params;
        hypergeometric_support(p.population, p.successes, p.draws)
    }

    fn pmf(&self, x: u64) -> f64 {
        let p = self.params;
        pmf(p.population, p.successes, p.draws, x)
    }
}
