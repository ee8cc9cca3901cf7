//! Common data types for discretia

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Hypergeometric parameters: draw `draws` items without replacement from a
/// population of `population` items, `successes` of which count as a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HypergeometricParams {
    /// Population size `N`.
    pub population: u64,
    /// Success items in the population `K`.
    pub successes: u64,
    /// Sample size `n`.
    pub draws: u64,
}

impl HypergeometricParams {
    /// Create a parameter tuple as supplied by a caller (not yet clamped).
    pub fn new(population: u64, successes: u64, draws: u64) -> Self {
        Self { population, successes, draws }
    }

    /// `true` when `K <= N` and `n <= N`.
    pub fn is_consistent(&self) -> bool {
        self.successes <= self.population && self.draws <= self.population
    }
}

/// Poisson parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoissonParams {
    /// Rate `λ` (mean events per interval).
    pub rate: f64,
}

impl PoissonParams {
    /// Largest accepted rate. The plotted window `[0, ceil(2.5·λ)]` then ends
    /// at x = 170, the last x whose float factorial is finite.
    pub const MAX_RATE: f64 = 68.0;

    /// Validated constructor: `rate` must be finite and in `[0, MAX_RATE]`.
    pub fn new(rate: f64) -> Result<Self> {
        if !rate.is_finite() || rate < 0.0 {
            return Err(Error::Validation(format!("rate must be finite and >= 0, got {}", rate)));
        }
        if rate > Self::MAX_RATE {
            return Err(Error::Validation(format!(
                "rate must be <= {}, got {}",
                Self::MAX_RATE,
                rate
            )));
        }
        Ok(Self { rate })
    }
}

/// Which distribution a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionKind {
    /// Sampling without replacement.
    Hypergeometric,
    /// Event counts at a fixed rate.
    Poisson,
}

impl DistributionKind {
    /// Stable lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            DistributionKind::Hypergeometric => "hypergeometric",
            DistributionKind::Poisson => "poisson",
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for either supported distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "distribution", rename_all = "snake_case")]
pub enum DistributionParameters {
    /// Hypergeometric `(N, K, n)`.
    Hypergeometric(HypergeometricParams),
    /// Poisson `(λ)`.
    Poisson(PoissonParams),
}

impl DistributionParameters {
    /// Distribution kind of these parameters.
    pub fn kind(&self) -> DistributionKind {
        match self {
            DistributionParameters::Hypergeometric(_) => DistributionKind::Hypergeometric,
            DistributionParameters::Poisson(_) => DistributionKind::Poisson,
        }
    }
}

impl From<HypergeometricParams> for DistributionParameters {
    fn from(p: HypergeometricParams) -> Self {
        DistributionParameters::Hypergeometric(p)
    }
}

impl From<PoissonParams> for DistributionParameters {
    fn from(p: PoissonParams) -> Self {
        DistributionParameters::Poisson(p)
    }
}

/// Inclusive integer interval `[min_x, max_x]` over which mass is plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupportRange {
    /// Smallest plotted x.
    pub min_x: u64,
    /// Largest plotted x (inclusive).
    pub max_x: u64,
}

impl SupportRange {
    /// Create a range. `min_x > max_x` yields an empty range.
    pub fn new(min_x: u64, max_x: u64) -> Self {
        Self { min_x, max_x }
    }

    /// Number of integer points in the range.
    pub fn len(&self) -> usize {
        if self.min_x > self.max_x { 0 } else { (self.max_x - self.min_x + 1) as usize }
    }

    /// `true` when the range holds no points.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x
    }

    /// `true` when `x` lies inside the range.
    pub fn contains(&self, x: u64) -> bool {
        (self.min_x..=self.max_x).contains(&x)
    }

    /// Ascending iterator over every x in the range.
    pub fn iter(&self) -> RangeInclusive<u64> {
        self.min_x..=self.max_x
    }
}

impl IntoIterator for SupportRange {
    type Item = u64;
    type IntoIter = RangeInclusive<u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for SupportRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min_x, self.max_x)
    }
}

/// One bar of a chart: `P(X = x) = p`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityPoint {
    /// Outcome.
    pub x: u64,
    /// Probability mass at `x`.
    pub p: f64,
}

impl ProbabilityPoint {
    /// Category label used on the chart's x axis.
    pub fn label(&self) -> String {
        self.x.to_string()
    }
}

/// Qualitative shape of a Poisson PMF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skew {
    /// Long right tail (small `λ`).
    RightSkewed,
    /// Close to bell-shaped.
    ApproximatelySymmetric,
}

impl Skew {
    /// Short human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Skew::RightSkewed => "right-skewed",
            Skew::ApproximatelySymmetric => "approximately symmetric",
        }
    }
}

/// Derived scalars for explanation text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "distribution", rename_all = "snake_case")]
pub enum DistributionSummary {
    /// Hypergeometric summary.
    Hypergeometric {
        /// `n·K/N`.
        mean: f64,
        /// `round(n·K/N)`.
        expected_successes: u64,
    },
    /// Poisson summary.
    Poisson {
        /// `λ`.
        mean: f64,
        /// `floor(λ)`.
        mode: u64,
        /// Shape label.
        skew: Skew,
    },
}

/// One recomputation result pushed to a [`crate::RenderTarget`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Effective (clamped) parameters the points were computed from.
    pub parameters: DistributionParameters,
    /// Points in ascending x order.
    pub points: Vec<ProbabilityPoint>,
    /// Summary scalars.
    pub summary: DistributionSummary,
}

impl Frame {
    /// Distribution kind of the frame.
    pub fn kind(&self) -> DistributionKind {
        self.parameters.kind()
    }

    /// Category labels, aligned with [`Frame::probabilities`].
    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(ProbabilityPoint::label).collect()
    }

    /// Probabilities, aligned with [`Frame::labels`].
    pub fn probabilities(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.p).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_range_iter_and_len() {
        let r = SupportRange::new(2, 5);
        assert_eq!(r.len(), 4);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
        assert!(r.contains(2) && r.contains(5) && !r.contains(6));
        assert_eq!(r.to_string(), "[2, 5]");
    }

    #[test]
    fn test_support_range_empty() {
        let r = SupportRange::new(3, 2);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.into_iter().count(), 0);
    }

    #[test]
    fn test_poisson_params_validation() {
        assert!(PoissonParams::new(0.0).is_ok());
        assert!(PoissonParams::new(4.5).is_ok());
        assert!(PoissonParams::new(-0.1).is_err());
        assert!(PoissonParams::new(f64::NAN).is_err());
        assert!(PoissonParams::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_poisson_params_max_rate() {
        assert!(PoissonParams::new(PoissonParams::MAX_RATE).is_ok());
        assert!(matches!(PoissonParams::new(70.0), Err(Error::Validation(_))));
        let err = PoissonParams::new(1e17).unwrap_err();
        assert!(err.to_string().contains("rate must be <= 68"), "{}", err);
    }

    #[test]
    fn test_parameters_serde_tagged() {
        let p: DistributionParameters = HypergeometricParams::new(52, 13, 5).into();
        let v = serde_json::to_value(p).unwrap();
        assert_eq!(v["distribution"], "hypergeometric");
        assert_eq!(v["population"], 52);

        let back: DistributionParameters = serde_json::from_value(v).unwrap();
        assert_eq!(back, p);
        assert_eq!(back.kind(), DistributionKind::Hypergeometric);
    }

    #[test]
    fn test_frame_labels_and_probabilities_align() {
        let frame = Frame {
            parameters: PoissonParams::new(1.0).unwrap().into(),
            points: vec![ProbabilityPoint { x: 0, p: 0.25 }, ProbabilityPoint { x: 1, p: 0.5 }],
            summary: DistributionSummary::Poisson { mean: 1.0, mode: 1, skew: Skew::RightSkewed },
        };
        assert_eq!(frame.labels(), vec!["0", "1"]);
        assert_eq!(frame.probabilities(), vec![0.25, 0.5]);
        assert_eq!(frame.kind(), DistributionKind::Poisson);
    }

    #[test]
    fn test_hypergeometric_consistency() {
        assert!(HypergeometricParams::new(10, 5, 3).is_consistent());
        assert!(!HypergeometricParams::new(10, 20, 3).is_consistent());
        assert!(!HypergeometricParams::new(10, 5, 11).is_consistent());
    }
}
