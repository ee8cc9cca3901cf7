//! SVG rendering for discretia bar chart artifacts.
//!
//! Input is the JSON emitted by `dx-viz` (`discretia_bar_v0`); output is a
//! self-contained SVG document styled by a [`config::VizConfig`].

pub mod canvas;
pub mod color;
pub mod config;
pub mod header;
pub mod layout;
pub mod output;
pub mod plots;
pub mod primitives;
pub mod text;
pub mod theme;

use config::VizConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown artifact kind: {0}")]
    UnknownKind(String),
    #[error("deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
    #[error("unsupported schema version: {0}")]
    Schema(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("layout error: {0}")]
    Layout(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Artifact kinds accepted by [`render_svg`].
pub const KINDS: &[&str] = &["bar"];

/// Render an artifact JSON to SVG string.
pub fn render_svg(artifact_json: &str, kind: &str, config: &VizConfig) -> Result<String> {
    let svg = match kind {
        "bar" | "hypergeometric" | "poisson" => {
            let art: dx_viz::BarChartArtifact = serde_json::from_str(artifact_json)?;
            if art.schema_version != dx_viz::BAR_SCHEMA_VERSION {
                return Err(RenderError::Schema(art.schema_version));
            }
            if kind != "bar" && kind != art.distribution.as_str() {
                return Err(RenderError::UnknownKind(format!(
                    "{kind} (artifact is {})",
                    art.distribution
                )));
            }
            plots::bar::render(&art, config)?
        }
        other => return Err(RenderError::UnknownKind(other.to_string())),
    };
    Ok(svg)
}

/// Render an artifact JSON to a file (format inferred from extension; only
/// `.svg` is supported).
pub fn render_to_file(
    artifact_json: &str,
    kind: &str,
    path: &std::path::Path,
    config: &VizConfig,
) -> Result<()> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("svg");
    match ext {
        "svg" => output::svg::save_svg(&render_svg(artifact_json, kind, config)?, path),
        other => Err(RenderError::UnknownKind(format!("format: {other}"))),
    }
}
