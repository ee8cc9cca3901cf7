use dx_core::{
    DistributionKind, DistributionParameters, DistributionSummary, Frame, ProbabilityPoint,
};
use serde::{Deserialize, Serialize};

use crate::explain::explain;

/// Schema tag written into every [`BarChartArtifact`].
pub const BAR_SCHEMA_VERSION: &str = "discretia_bar_v0";

/// Plot-friendly artifact for one distribution bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartArtifact {
    /// Always [`BAR_SCHEMA_VERSION`].
    pub schema_version: String,
    /// Which distribution is plotted.
    pub distribution: DistributionKind,
    /// Effective parameters the bars were computed from.
    pub parameters: DistributionParameters,
    /// Category labels (x values), ascending.
    pub labels: Vec<String>,
    /// Bar heights aligned with `labels`.
    pub probabilities: Vec<f64>,
    /// Same data as `labels`/`probabilities`, as pairs.
    pub points: Vec<ProbabilityPoint>,
    /// Summary scalars.
    pub summary: DistributionSummary,
    /// Analysis text shown under the chart.
    pub explanation: String,
    /// X axis title.
    pub x_label: String,
    /// Y axis title.
    pub y_label: String,
    /// Y axis ceiling.
    pub y_max: f64,
}

/// X axis title for a distribution.
pub fn x_label(kind: DistributionKind) -> &'static str {
    match kind {
        DistributionKind::Hypergeometric => "Number of Successes (x)",
        DistributionKind::Poisson => "Number of Events (x)",
    }
}

/// Default y axis ceiling: 1.0 for hypergeometric, 0.5 for poisson.
pub fn base_y_max(kind: DistributionKind) -> f64 {
    match kind {
        DistributionKind::Hypergeometric => 1.0,
        DistributionKind::Poisson => 0.5,
    }
}

/// Base ceiling, raised to the next 0.1 above the tallest bar when exceeded.
pub fn y_max(kind: DistributionKind, probabilities: &[f64]) -> f64 {
    let base = base_y_max(kind);
    let tallest = probabilities.iter().copied().filter(|p| p.is_finite()).fold(0.0_f64, f64::max);
    if tallest > base { ((tallest * 10.0).ceil() / 10.0).min(1.0) } else { base }
}

impl BarChartArtifact {
    /// Build an artifact from a recomputed frame.
    pub fn from_frame(frame: &Frame) -> Self {
        let kind = frame.kind();
        let mut labels = Vec::with_capacity(frame.points.len());
        let mut probabilities = Vec::with_capacity(frame.points.len());
        for p in &frame.points {
            labels.push(p.label());
            probabilities.push(p.p);
        }
        let y_max = y_max(kind, &probabilities);

        Self {
            schema_version: BAR_SCHEMA_VERSION.to_string(),
            distribution: kind,
            parameters: frame.parameters,
            labels,
            probabilities,
            points: frame.points.clone(),
            summary: frame.summary,
            explanation: explain(frame),
            x_label: x_label(kind).to_string(),
            y_label: "Probability".to_string(),
            y_max,
        }
    }

    /// Recompute from parameters and build the artifact.
    pub fn compute(params: &DistributionParameters) -> Self {
        Self::from_frame(&dx_prob::recompute(params))
    }
}

impl From<Frame> for BarChartArtifact {
    fn from(frame: Frame) -> Self {
        Self::from_frame(&frame)
    }
}
