//! Core traits for discretia
//!
//! The numeric core (dx-prob) implements [`DiscreteModel`]; presentation
//! layers (dx-viz, dx-cli) implement [`RenderTarget`]. Data only flows from
//! the former into the latter.

use crate::types::{Frame, ProbabilityPoint, SupportRange};
use crate::Result;

/// A discrete distribution with a finite plotted support.
pub trait DiscreteModel: Send + Sync {
    /// Distribution name (e.g., "hypergeometric").
    fn name(&self) -> &str;

    /// Plotted support.
    fn support(&self) -> SupportRange;

    /// Probability mass at `x`.
    fn pmf(&self, x: u64) -> f64;

    /// One point per x in [`DiscreteModel::support`], x ascending.
    fn points(&self) -> Vec<ProbabilityPoint> {
        self.support().iter().map(|x| ProbabilityPoint { x, p: self.pmf(x) }).collect()
    }
}

/// Sink for recomputed frames.
///
/// Implementations never hand state back to the caller.
pub trait RenderTarget {
    /// Present one frame.
    fn present(&mut self, frame: &Frame) -> Result<()>;
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        (**self).present(frame)
    }
}

/// An absent target accepts and drops every frame.
impl<T: RenderTarget> RenderTarget for Option<T> {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        match self {
            Some(target) => target.present(frame),
            None => Ok(()),
        }
    }
}

/// Fan-out: the first target sees each frame before the second.
impl<A: RenderTarget, B: RenderTarget> RenderTarget for (A, B) {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        self.0.present(frame)?;
        self.1.present(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DistributionSummary, PoissonParams, Skew};

    struct Flat;

    impl DiscreteModel for Flat {
        fn name(&self) -> &str {
            "flat"
        }

        fn support(&self) -> SupportRange {
            SupportRange::new(1, 4)
        }

        fn pmf(&self, _x: u64) -> f64 {
            0.25
        }
    }

    #[derive(Default)]
    struct Count(usize);

    impl RenderTarget for Count {
        fn present(&mut self, _frame: &Frame) -> Result<()> {
            self.0 += 1;
            Ok(())
        }
    }

    #[test]
    fn test_default_points_follow_support() {
        let pts = Flat.points();
        assert_eq!(pts.iter().map(|p| p.x).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert!((pts.iter().map(|p| p.p).sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_render_target_through_mut_ref() {
        let mut c = Count::default();
        let frame = Frame {
            parameters: PoissonParams::new(0.5).unwrap().into(),
            points: Flat.points(),
            summary: DistributionSummary::Poisson { mean: 0.5, mode: 0, skew: Skew::RightSkewed },
        };
        fn push_twice<R: RenderTarget>(mut target: R, frame: &Frame) {
            target.present(frame).unwrap();
            target.present(frame).unwrap();
        }
        push_twice(&mut c, &frame);
        assert_eq!(c.0, 2);
    }

    #[test]
    fn test_fan_out_and_optional_targets() {
        let frame = Frame {
            parameters: PoissonParams::new(0.5).unwrap().into(),
            points: Flat.points(),
            summary: DistributionSummary::Poisson { mean: 0.5, mode: 0, skew: Skew::RightSkewed },
        };
        let mut both = (Count::default(), Some(Count::default()));
        both.present(&frame).unwrap();
        assert_eq!((both.0 .0, both.1.as_ref().map(|c| c.0)), (1, Some(1)));

        let mut none: Option<Count> = None;
        assert!(none.present(&frame).is_ok());
    }
}
