use dx_core::{
    DistributionKind, DistributionParameters, Error, HypergeometricParams, PoissonParams,
    RenderTarget, Result,
};
use serde::{Deserialize, Serialize};

/// Current value of every parameter control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderState {
    /// Population size `N`.
    pub population: u64,
    /// Successes in the population `K`.
    pub successes: u64,
    /// Sample size `n`.
    pub draws: u64,
    /// Poisson rate `λ`.
    pub rate: f64,
}

impl Default for SliderState {
    fn default() -> Self {
        Self { population: 52, successes: 13, draws: 5, rate: 4.0 }
    }
}

impl SliderState {
    /// Hypergeometric parameters as currently set.
    pub fn hypergeometric(&self) -> HypergeometricParams {
        HypergeometricParams::new(self.population, self.successes, self.draws)
    }

    /// Poisson parameters; fails for a negative, non-finite or too large rate.
    pub fn poisson(&self) -> Result<PoissonParams> {
        PoissonParams::new(self.rate)
    }
}

/// One user edit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterChange {
    /// Set `N`.
    Population(u64),
    /// Set `K`.
    Successes(u64),
    /// Set `n`.
    Draws(u64),
    /// Set `λ`.
    Rate(f64),
}

impl ParameterChange {
    /// Distribution recomputed after this change.
    pub fn kind(&self) -> DistributionKind {
        match self {
            ParameterChange::Rate(_) => DistributionKind::Poisson,
            _ => DistributionKind::Hypergeometric,
        }
    }
}

/// Applies parameter changes and pushes a freshly recomputed frame per change.
#[derive(Debug)]
pub struct Session<T: RenderTarget> {
    state: SliderState,
    target: T,
}

impl<T: RenderTarget> Session<T> {
    /// Start a session; the initial state must already hold a valid rate.
    pub fn new(state: SliderState, target: T) -> Result<Self> {
        state.poisson()?;
        Ok(Self { state, target })
    }

    /// Current slider values (clamped values written back).
    pub fn state(&self) -> SliderState {
        self.state
    }

    /// Borrow the target.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Push the hypergeometric frame, then the poisson frame.
    pub fn render_all(&mut self) -> Result<()> {
        self.render(DistributionKind::Hypergeometric)?;
        self.render(DistributionKind::Poisson)
    }

    /// Apply one change and push the affected distribution only.
    ///
    /// A rejected change leaves the state untouched and pushes nothing.
    pub fn apply(&mut self, change: ParameterChange) -> Result<()> {
        match change {
            ParameterChange::Population(v) => self.state.population = v,
            ParameterChange::Successes(v) => self.state.successes = v,
            ParameterChange::Draws(v) => self.state.draws = v,
            ParameterChange::Rate(v) => {
                PoissonParams::new(v)?;
                self.state.rate = v;
            }
        }
        tracing::debug!(?change, "parameter change");
        self.render(change.kind())
    }

    /// Initial render, then every change in order. Returns frames pushed.
    pub fn run<I>(&mut self, changes: I) -> Result<usize>
    where
        I: IntoIterator<Item = ParameterChange>,
    {
        self.render_all()?;
        let mut pushed = 2;
        for (i, change) in changes.into_iter().enumerate() {
            self.apply(change).map_err(|e| match e {
                Error::Validation(msg) => Error::Validation(format!("event {}: {}", i, msg)),
                other => other,
            })?;
            pushed += 1;
        }
        Ok(pushed)
    }

    /// Finish and hand back the target.
    pub fn into_target(self) -> T {
        self.target
    }

    fn render(&mut self, kind: DistributionKind) -> Result<()> {
        let params: DistributionParameters = match kind {
            DistributionKind::Hypergeometric => self.state.hypergeometric().into(),
            DistributionKind::Poisson => self.state.poisson()?.into(),
        };
        let frame = dx_prob::recompute(&params);
        if let DistributionParameters::Hypergeometric(p) = frame.parameters {
            self.state.successes = p.successes;
            self.state.draws = p.draws;
        }
        self.target.present(&frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::targets::FrameRecorder;
    use dx_core::DistributionSummary;

    #[test]
    fn test_initial_render_pushes_both() {
        let mut s = Session::new(SliderState::default(), FrameRecorder::new()).unwrap();
        s.render_all().unwrap();
        let frames = &s.target().frames;
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].kind(), DistributionKind::Hypergeometric);
        assert_eq!(frames[0].labels(), vec!["0", "1", "2", "3", "4", "5"]);
        assert_eq!(frames[1].kind(), DistributionKind::Poisson);
        assert_eq!(frames[1].points.len(), 11);
    }

    #[test]
    fn test_change_recomputes_only_affected_distribution() {
        let mut s = Session::new(SliderState::default(), FrameRecorder::new()).unwrap();
        s.apply(ParameterChange::Rate(8.0)).unwrap();
        s.apply(ParameterChange::Draws(10)).unwrap();
        let frames = &s.into_target().frames;
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].kind(), DistributionKind::Poisson);
        assert_eq!(frames[0].points.len(), 21);
        assert_eq!(frames[1].kind(), DistributionKind::Hypergeometric);
        assert_eq!(frames[1].points.len(), 11);
    }

    #[test]
    fn test_clamped_values_written_back() {
        let mut s = Session::new(SliderState::default(), FrameRecorder::new()).unwrap();
        s.apply(ParameterChange::Population(4)).unwrap();
        let st = s.state();
        assert_eq!((st.population, st.successes, st.draws), (4, 4, 4));
        let frame = s.target().last().unwrap();
        assert_eq!(frame.points.len(), 1);
        assert!(matches!(
            frame.summary,
            DistributionSummary::Hypergeometric { expected_successes: 4, .. }
        ));

        // Growing N back does not restore the old K and n.
        s.apply(ParameterChange::Population(52)).unwrap();
        assert_eq!(s.state().successes, 4);
    }

    #[test]
    fn test_rejected_rate_leaves_state() {
        let mut s = Session::new(SliderState::default(), FrameRecorder::new()).unwrap();
        assert!(s.apply(ParameterChange::Rate(-1.0)).is_err());
        assert!(s.apply(ParameterChange::Rate(1e17)).is_err());
        assert_eq!(s.state().rate, 4.0);
        assert!(s.target().frames.is_empty());

        let bad = SliderState { rate: f64::NAN, ..SliderState::default() };
        assert!(Session::new(bad, FrameRecorder::new()).is_err());
    }

    #[test]
    fn test_run_counts_frames_and_reports_event_index() {
        let mut s = Session::new(SliderState::default(), FrameRecorder::new()).unwrap();
        let n = s
            .run(vec![ParameterChange::Successes(26), ParameterChange::Rate(1.5)])
            .unwrap();
        assert_eq!(n, 4);
        assert_eq!(s.target().frames.len(), 4);

        let err = s.run(vec![ParameterChange::Rate(2.0), ParameterChange::Rate(-3.0)]).unwrap_err();
        assert!(err.to_string().contains("event 1"), "{}", err);
    }

    #[test]
    fn test_change_serde_shape() {
        let c: ParameterChange = serde_json::from_str(r#"{"rate": 2.5}"#).unwrap();
        assert_eq!(c, ParameterChange::Rate(2.5));
        let v = serde_json::to_value(ParameterChange::Population(30)).unwrap();
        assert_eq!(v["population"], 30);
    }
}
