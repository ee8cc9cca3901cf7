use std::io::Write;

use dx_core::{Frame, RenderTarget, Result};

use crate::chart::BarChartArtifact;

/// Keeps every presented frame in memory.
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    /// Frames in presentation order.
    pub frames: Vec<Frame>,
}

impl FrameRecorder {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent frame, if any.
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl RenderTarget for FrameRecorder {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

/// Writes one [`BarChartArtifact`] per line as compact JSON.
#[derive(Debug)]
pub struct JsonLinesTarget<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonLinesTarget<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of lines written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and return the inner writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }

    /// Flush and drop the writer.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> RenderTarget for JsonLinesTarget<W> {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        let artifact = BarChartArtifact::from_frame(frame);
        serde_json::to_writer(&mut self.writer, &artifact)?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dx_core::{HypergeometricParams, PoissonParams};

    #[test]
    fn test_recorder_keeps_order() {
        let mut rec = FrameRecorder::new();
        rec.present(&dx_prob::recompute(&HypergeometricParams::new(10, 5, 3).into())).unwrap();
        rec.present(&dx_prob::recompute(&PoissonParams::new(2.0).unwrap().into())).unwrap();
        assert_eq!(rec.frames.len(), 2);
        assert_eq!(rec.last().unwrap().kind().as_str(), "poisson");
    }

    #[test]
    fn test_json_lines_one_artifact_per_line() {
        let mut target = JsonLinesTarget::new(Vec::new());
        target.present(&dx_prob::recompute(&HypergeometricParams::new(10, 5, 3).into())).unwrap();
        target.present(&dx_prob::recompute(&PoissonParams::new(2.0).unwrap().into())).unwrap();
        assert_eq!(target.written(), 2);

        let bytes = target.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["distribution"], "hypergeometric");
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["labels"].as_array().unwrap().len(), 11);
    }

    #[test]
    fn test_finish_flushes_buffered_writer() {
        let mut buf = Vec::new();
        let mut target = JsonLinesTarget::new(std::io::BufWriter::new(&mut buf));
        target.present(&dx_prob::recompute(&PoissonParams::new(1.0).unwrap().into())).unwrap();
        target.finish().unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with('\n'));
    }
}
