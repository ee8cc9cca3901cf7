//! Plotted supports and point sequences.
//!
//! Hypergeometric support is exact. Poisson support is a display window
//! `[0, max(10, ceil(2.5·λ))]`; for large `λ` it does not cover any fixed
//! share of the mass.

use dx_core::{DistributionParameters, HypergeometricParams, ProbabilityPoint, SupportRange};

use crate::{hypergeometric, poisson};

/// Smallest upper bound of the Poisson window.
pub const POISSON_MIN_UPPER: u64 = 10;

/// Poisson window upper bound as a multiple of `λ`.
pub const POISSON_WINDOW_FACTOR: f64 = 2.5;

/// Cap `K` and `n` at `N`.
pub fn clamp_hypergeometric(params: HypergeometricParams) -> HypergeometricParams {
    let HypergeometricParams { population, successes, draws } = params;
    let clamped = HypergeometricParams {
        population,
        successes: successes.min(population),
        draws: draws.min(population),
    };
    if clamped != params {
        tracing::debug!(
            population,
            successes,
            draws,
            clamped_successes = clamped.successes,
            clamped_draws = clamped.draws,
            "clamped hypergeometric parameters"
        );
    }
    clamped
}

/// `[max(0, n − (N − K)), min(n, K)]` after clamping `K` and `n` to `N`.
pub fn hypergeometric_support(population: u64, successes: u64, draws: u64) -> SupportRange {
    let p = clamp_hypergeometric(HypergeometricParams::new(population, successes, draws));
    let failures = p.population - p.successes;
    SupportRange::new(p.draws.saturating_sub(failures), p.draws.min(p.successes))
}

/// `[0, max(10, ceil(2.5·λ))]`.
pub fn poisson_support(rate: f64) -> SupportRange {
    let upper = (rate * POISSON_WINDOW_FACTOR).ceil();
    let upper = if upper.is_finite() && upper > 0.0 { upper as u64 } else { 0 };
    SupportRange::new(0, upper.max(POISSON_MIN_UPPER))
}

/// Points over the (clamped) hypergeometric support, x ascending.
pub fn hypergeometric_points(params: HypergeometricParams) -> Vec<ProbabilityPoint> {
    let p = clamp_hypergeometric(params);
    hypergeometric_support(p.population, p.successes, p.draws)
        .iter()
        .map(|x| ProbabilityPoint {
            x,
            p: hypergeometric::pmf(p.population, p.successes, p.draws, x),
        })
        .collect()
}

/// Points over the Poisson display window, x ascending.
pub fn poisson_points(rate: f64) -> Vec<ProbabilityPoint> {
    poisson_support(rate).iter().map(|x| ProbabilityPoint { x, p: poisson::pmf(rate, x) }).collect()
}

/// Support for either distribution.
pub fn support(params: &DistributionParameters) -> SupportRange {
    match params {
        DistributionParameters::Hypergeometric(p) => {
            hypergeometric_support(p.population, p.successes, p.draws)
        }
        DistributionParameters::Poisson(p) => poisson_support(p.rate),
    }
}

/// Points for either distribution.
pub fn points(params: &DistributionParameters) -> Vec<ProbabilityPoint> {
    match params {
        DistributionParameters::Hypergeometric(p) => hypergeometric_points(*p),
        DistributionParameters::Poisson(p) => poisson_points(p.rate),
    }
}
