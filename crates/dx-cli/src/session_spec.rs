//! Session script v0 (YAML) parsing + semantic validation.
//!
//! A session script stands in for a user dragging the sliders: an initial
//! slider state followed by an ordered list of parameter changes.
//!
//! ```yaml
//! schema_version: discretia_session_v0
//! initial: { population: 52, successes: 13, draws: 5, rate: 4.0 }
//! events:
//!   - population: 20
//!   - rate: 2.5
//! ```

use anyhow::Result;
use dx_core::PoissonParams;
use dx_viz::{ParameterChange, SliderState};
use serde::Deserialize;
use std::path::Path;

pub const SESSION_V0: &str = "discretia_session_v0";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionSpecV0 {
    pub schema_version: String,
    #[serde(default)]
    pub initial: SliderState,
    #[serde(default)]
    pub events: Vec<ParameterChange>,
}

pub fn read_session_spec(path: &Path) -> Result<SessionSpecV0> {
    let bytes = std::fs::read(path)?;
    parse_session_spec(&bytes)
}

pub fn parse_session_spec(bytes: &[u8]) -> Result<SessionSpecV0> {
    // YAML parser can also read JSON (YAML is a superset).
    let probe: serde_yaml_ng::Value = serde_yaml_ng::from_slice(bytes)?;
    let schema_version = probe.get("schema_version").and_then(|v| v.as_str());
    match schema_version {
        Some(SESSION_V0) => {}
        Some(other) => anyhow::bail!("unsupported schema_version: {other} (expected {SESSION_V0})"),
        None => anyhow::bail!("missing schema_version (expected {SESSION_V0})"),
    }

    let spec: SessionSpecV0 = serde_yaml_ng::from_slice(bytes)?;
    spec.validate()?;
    Ok(spec)
}

impl SessionSpecV0 {
    pub fn validate(&self) -> Result<()> {
        if let Err(e) = PoissonParams::new(self.initial.rate) {
            anyhow::bail!("initial.rate: {e}");
        }
        for (i, event) in self.events.iter().enumerate() {
            if let ParameterChange::Rate(r) = event {
                if let Err(e) = PoissonParams::new(*r) {
                    anyhow::bail!("events[{i}].rate: {e}");
                }
            }
        }
        Ok(())
    }
}
