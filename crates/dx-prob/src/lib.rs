//! Probability building blocks for discretia.
//!
//! - combinatorics (factorial, combination count)
//! - Hypergeometric and Poisson PMFs
//! - plotted supports and point sequences
//! - summary scalars for explanation text
//!
//! Everything here is a pure function of its inputs.

pub mod combinatorics;
pub mod hypergeometric;
pub mod poisson;
pub mod summary;
pub mod support;

use dx_core::{DistributionParameters, Frame};

pub use hypergeometric::Hypergeometric;
pub use poisson::Poisson;

/// Recompute a full frame (effective parameters, points, summary) from scratch.
///
/// Hypergeometric parameters are clamped first, and the frame carries the
/// clamped values.
pub fn recompute(params: &DistributionParameters) -> Frame {
    let parameters = match params {
        DistributionParameters::Hypergeometric(p) => {
            DistributionParameters::Hypergeometric(support::clamp_hypergeometric(*p))
        }
        DistributionParameters::Poisson(p) => DistributionParameters::Poisson(*p),
    };
    Frame {
        parameters,
        points: support::points(&parameters),
        summary: summary::summarize(&parameters),
    }
}
