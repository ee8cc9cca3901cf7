//! Render target that writes one SVG per presented frame.

use std::path::{Path, PathBuf};

use dx_core::{Frame, RenderTarget};
use dx_viz::BarChartArtifact;
use dx_viz_render::config::VizConfig;

pub struct SvgDirTarget {
    dir: PathBuf,
    config: VizConfig,
    written: Vec<PathBuf>,
}

impl SvgDirTarget {
    pub fn new(dir: &Path, config: VizConfig) -> anyhow::Result<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self { dir: dir.to_path_buf(), config, written: Vec::new() })
    }

    /// Paths written so far, in frame order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl RenderTarget for SvgDirTarget {
    fn present(&mut self, frame: &Frame) -> dx_core::Result<()> {
        let artifact = BarChartArtifact::from_frame(frame);
        let svg = dx_viz_render::plots::bar::render(&artifact, &self.config)
            .map_err(|e| dx_core::Error::Computation(format!("svg render: {e}")))?;
        // frame_000_hypergeometric.svg, frame_001_poisson.svg, ...
        let name = format!("frame_{:03}_{}.svg", self.written.len(), frame.kind());
        let path = self.dir.join(name);
        std::fs::write(&path, svg)?;
        tracing::debug!(path = %path.display(), "wrote frame");
        self.written.push(path);
        Ok(())
    }
}
