use crate::canvas::Canvas;
use crate::config::VizConfig;
use crate::layout::axes::Axis;
use crate::primitives::TextStyle;

/// Rectangular plot area within the canvas.
#[derive(Debug, Clone, Copy)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Compute auto-margins from axis labels and config.
    ///
    /// `header` and `footer` reserve extra space above and below the axes
    /// (title, explanation text).
    pub fn auto(
        canvas: &Canvas,
        y_axis: &Axis,
        x_axis: &Axis,
        config: &VizConfig,
        header: f64,
        footer: f64,
    ) -> Self {
        let tick_style = TextStyle { size: config.font.tick_size, ..Default::default() };
        let label_style = TextStyle { size: config.font.label_size, ..Default::default() };
        let outward = config.axes.tick_direction != "in";
        let tick_out = if outward { config.axes.tick_length } else { 0.0 };

        // Left margin: y-axis tick labels + axis label + padding
        let mut left = 12.0 + tick_out;
        left += y_tick_label_width(canvas, y_axis, config) + 6.0;
        if !y_axis.label.is_empty() {
            left += label_style.size + 8.0; // axis label (rotated)
        }

        // Bottom margin: x-axis tick labels + axis label + padding
        let mut bottom = 10.0 + tick_out + tick_style.size + 6.0 + footer;
        if !x_axis.label.is_empty() {
            bottom += label_style.size + 8.0;
        }

        let top = 12.0 + header;
        let right = 15.0;

        let width = canvas.width - left - right;
        let height = canvas.height - top - bottom;

        Self { left, top, width: width.max(50.0), height: height.max(50.0) }
    }
}

/// Widest y tick label at the configured tick size.
pub fn y_tick_label_width(canvas: &Canvas, y_axis: &Axis, config: &VizConfig) -> f64 {
    let tick_style = TextStyle { size: config.font.tick_size, ..Default::default() };
    y_axis
        .tick_labels
        .iter()
        .map(|l| canvas.measure_text(l, &tick_style).width)
        .fold(0.0_f64, f64::max)
}
