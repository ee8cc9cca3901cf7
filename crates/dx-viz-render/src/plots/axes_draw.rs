use crate::canvas::Canvas;
use crate::config::VizConfig;
use crate::layout::axes::Axis;
use crate::layout::margins::{PlotArea, y_tick_label_width};
use crate::primitives::*;

/// Horizontal grid lines at the y ticks. Drawn before the data.
pub fn draw_grid(canvas: &mut Canvas, area: &PlotArea, y_axis: &Axis, config: &VizConfig) {
    if !config.grid.show {
        return;
    }
    let grid_style = LineStyle::dashed(config.grid.color.with_alpha(config.grid.alpha), 0.5);
    for &val in &y_axis.tick_positions {
        let py = y_axis.data_to_pixel(val, area.bottom(), area.top);
        if py < area.top - 0.5 || py > area.bottom() + 0.5 {
            continue;
        }
        canvas.line(area.left, py, area.right(), py, &grid_style);
    }
}

/// Every `stride`-th x label is drawn so neighbouring labels never overlap.
fn x_label_stride(canvas: &Canvas, area: &PlotArea, x_axis: &Axis, style: &TextStyle) -> usize {
    let slot = x_axis.unit_length(area.left, area.right());
    let widest = x_axis
        .tick_labels
        .iter()
        .map(|l| canvas.measure_text(l, style).width)
        .fold(0.0_f64, f64::max);
    if slot <= 0.0 { 1 } else { ((widest + 4.0) / slot).ceil().max(1.0) as usize }
}

/// Draw axis lines, ticks, tick labels and axis titles.
pub fn draw_axes(
    canvas: &mut Canvas,
    area: &PlotArea,
    x_axis: &Axis,
    y_axis: &Axis,
    config: &VizConfig,
) {
    let frame_color = config.colors.text;
    let frame_style = LineStyle::solid(frame_color, 0.8);
    let tick_style_line = LineStyle::solid(frame_color, 0.6);

    let inward = config.axes.tick_direction == "in";
    let tl = config.axes.tick_length;
    let tick_out = if inward { 0.0 } else { tl };

    // Axis lines
    canvas.line(area.left, area.bottom(), area.right(), area.bottom(), &frame_style);
    canvas.line(area.left, area.top, area.left, area.bottom(), &frame_style);
    if config.axes.show_top_ticks {
        canvas.line(area.left, area.top, area.right(), area.top, &frame_style);
    }
    if config.axes.show_right_ticks {
        canvas.line(area.right(), area.top, area.right(), area.bottom(), &frame_style);
    }

    let tick_label_style = TextStyle {
        size: config.font.tick_size,
        color: frame_color,
        anchor: TextAnchor::Middle,
        baseline: TextBaseline::Hanging,
        ..Default::default()
    };

    // --- X axis ticks ---
    let stride = x_label_stride(canvas, area, x_axis, &tick_label_style);
    for (i, &val) in x_axis.tick_positions.iter().enumerate() {
        let px = x_axis.data_to_pixel(val, area.left, area.right());
        if px < area.left - 0.5 || px > area.right() + 0.5 {
            continue;
        }

        let dir = if inward { -1.0 } else { 1.0 };
        canvas.line(px, area.bottom(), px, area.bottom() + dir * tl, &tick_style_line);
        if config.axes.show_top_ticks {
            canvas.line(px, area.top, px, area.top - dir * tl, &tick_style_line);
        }

        if i % stride == 0 {
            if let Some(label) = x_axis.tick_labels.get(i) {
                canvas.text(px, area.bottom() + tick_out + 3.0, label, &tick_label_style);
            }
        }
    }

    // --- Y axis ticks ---
    let y_tick_label_style = TextStyle {
        size: config.font.tick_size,
        color: frame_color,
        anchor: TextAnchor::End,
        baseline: TextBaseline::Central,
        ..Default::default()
    };

    for (i, &val) in y_axis.tick_positions.iter().enumerate() {
        let py = y_axis.data_to_pixel(val, area.bottom(), area.top);
        if py < area.top - 0.5 || py > area.bottom() + 0.5 {
            continue;
        }

        let dir = if inward { 1.0 } else { -1.0 };
        canvas.line(area.left, py, area.left + dir * tl, py, &tick_style_line);
        if config.axes.show_right_ticks {
            canvas.line(area.right(), py, area.right() - dir * tl, py, &tick_style_line);
        }

        if let Some(label) = y_axis.tick_labels.get(i) {
            canvas.text(area.left - tick_out - 4.0, py, label, &y_tick_label_style);
        }
    }

    // --- Axis labels ---
    let label_style = TextStyle {
        size: config.font.label_size,
        color: frame_color,
        anchor: TextAnchor::Middle,
        baseline: TextBaseline::Hanging,
        ..Default::default()
    };

    if !x_axis.label.is_empty() {
        let label_y = area.bottom() + tick_out + config.font.tick_size + 10.0;
        canvas.text(area.left + area.width / 2.0, label_y, &x_axis.label, &label_style);
    }

    if !y_axis.label.is_empty() {
        let label_x = area.left
            - tick_out
            - y_tick_label_width(canvas, y_axis, config)
            - 10.0
            - config.font.label_size / 2.0;
        let label_y = area.top + area.height / 2.0;
        let style = TextStyle { baseline: TextBaseline::Central, ..label_style };
        canvas.text_rotated(label_x, label_y, &y_axis.label, &style, -90.0);
    }
}
