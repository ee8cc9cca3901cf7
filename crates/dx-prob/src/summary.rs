//! Summary scalars for explanation text.

use dx_core::{DistributionParameters, DistributionSummary, HypergeometricParams, Skew};

use crate::support::clamp_hypergeometric;
use crate::{hypergeometric, poisson};

/// Below this rate the Poisson PMF is labelled right-skewed.
pub const SKEW_THRESHOLD: f64 = 3.0;

/// `round(n·K/N)` on clamped parameters; 0 for an empty population.
pub fn expected_successes(params: HypergeometricParams) -> u64 {
    hypergeometric::mean(&clamp_hypergeometric(params)).round() as u64
}

/// `floor(λ)`.
pub fn poisson_mode(rate: f64) -> u64 {
    rate.floor().max(0.0) as u64
}

/// Shape label for `Poisson(λ)`.
pub fn poisson_skew(rate: f64) -> Skew {
    if rate < SKEW_THRESHOLD { Skew::RightSkewed } else { Skew::ApproximatelySymmetric }
}

/// Hypergeometric summary on clamped parameters.
pub fn hypergeometric_summary(params: HypergeometricParams) -> DistributionSummary {
    let p = clamp_hypergeometric(params);
    DistributionSummary::Hypergeometric {
        mean: hypergeometric::mean(&p),
        expected_successes: expected_successes(p),
    }
}

/// Poisson summary.
pub fn poisson_summary(rate: f64) -> DistributionSummary {
    DistributionSummary::Poisson {
        mean: poisson::mean(rate),
        mode: poisson_mode(rate),
        skew: poisson_skew(rate),
    }
}

/// Summary for either distribution.
pub fn summarize(params: &DistributionParameters) -> DistributionSummary {
    match params {
        DistributionParameters::Hypergeometric(p) => hypergeometric_summary(*p),
        DistributionParameters::Poisson(p) => poisson_summary(p.rate),
    }
}
