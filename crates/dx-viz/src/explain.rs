//! Analysis sentences shown next to each chart.

use dx_core::{DistributionParameters, DistributionSummary, Frame, HypergeometricParams, Skew};

/// Hypergeometric analysis text.
pub fn hypergeometric_explanation(params: HypergeometricParams, expected_successes: u64) -> String {
    format!(
        "With a population of {} and {} successes, if you pick {} items, the most likely \
         outcome is getting around {} successes. Notice how the graph shifts as you change \
         the parameters!",
        params.population, params.successes, params.draws, expected_successes
    )
}

/// Long-form shape phrase used in the Poisson text.
pub fn shape_phrase(skew: Skew) -> &'static str {
    match skew {
        Skew::RightSkewed => "skewed to the right (positive skew)",
        Skew::ApproximatelySymmetric => "more symmetrical (bell-shaped)",
    }
}

/// Poisson analysis text.
pub fn poisson_explanation(rate: f64, mode: u64, skew: Skew) -> String {
    format!(
        "With an average rate (\u{03BB}) of {}, the peak of the graph is near {}. The shape is \
         currently {}. As \u{03BB} increases, it looks more like a Normal distribution!",
        rate,
        mode,
        shape_phrase(skew)
    )
}

/// Analysis text for a frame. Falls back to a neutral sentence if the summary
/// does not match the parameters.
pub fn explain(frame: &Frame) -> String {
    match (&frame.parameters, &frame.summary) {
        (
            DistributionParameters::Hypergeometric(p),
            DistributionSummary::Hypergeometric { expected_successes, .. },
        ) => hypergeometric_explanation(*p, *expected_successes),
        (DistributionParameters::Poisson(p), DistributionSummary::Poisson { mode, skew, .. }) => {
            poisson_explanation(p.rate, *mode, *skew)
        }
        _ => format!("{} distribution over {} points.", frame.kind(), frame.points.len()),
    }
}
