//! # dx-core
//!
//! Shared types for discretia: the error enum, distribution parameter values,
//! support ranges, probability points, and the seam traits that connect the
//! numeric core to presentation layers.

#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::{DiscreteModel, RenderTarget};
pub use types::{
    DistributionKind, DistributionParameters, DistributionSummary, Frame, HypergeometricParams,
    PoissonParams, ProbabilityPoint, Skew, SupportRange,
};

/// Crate version, shared by every workspace member.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
