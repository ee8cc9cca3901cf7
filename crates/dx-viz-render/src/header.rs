use crate::canvas::Canvas;
use crate::config::VizConfig;
use crate::layout::margins::PlotArea;
use crate::primitives::*;
use crate::text::wrap_text;

/// Vertical space the title occupies above the plot area (0 when hidden).
pub fn title_height(config: &VizConfig) -> f64 {
    if config.chart.show_title { config.font.title_size + 10.0 } else { 0.0 }
}

/// Draw the chart title centred above the plot area.
pub fn draw_title(canvas: &mut Canvas, area: &PlotArea, title: &str, config: &VizConfig) {
    if !config.chart.show_title || title.is_empty() {
        return;
    }
    let style = TextStyle {
        size: config.font.title_size,
        color: config.colors.text,
        weight: config.font.title_weight,
        anchor: TextAnchor::Middle,
        baseline: TextBaseline::Alphabetic,
    };
    canvas.text(area.left + area.width / 2.0, area.top - 10.0, title, &style);
}

fn caption_style(config: &VizConfig) -> TextStyle {
    TextStyle { size: config.font.size, color: config.colors.text, ..Default::default() }
}

/// Wrap caption text to the figure width.
pub fn caption_lines(text: &str, config: &VizConfig) -> Vec<String> {
    if !config.chart.show_explanation {
        return Vec::new();
    }
    wrap_text(text, &caption_style(config), config.figure.width - 30.0)
}

/// Vertical space `lines` need below the axes.
pub fn caption_height(lines: &[String], config: &VizConfig) -> f64 {
    if lines.is_empty() { 0.0 } else { lines.len() as f64 * config.font.size * 1.3 + 8.0 }
}

/// Draw pre-wrapped caption lines, left-aligned, starting at baseline `y`.
pub fn draw_caption(canvas: &mut Canvas, lines: &[String], y: f64, config: &VizConfig) {
    let style = caption_style(config);
    let line_height = config.font.size * 1.3;
    for (i, line) in lines.iter().enumerate() {
        canvas.text(15.0, y + i as f64 * line_height, line, &style);
    }
}
