use dx_core::DistributionParameters;
use dx_viz::BarChartArtifact;

use crate::canvas::Canvas;
use crate::config::VizConfig;
use crate::header::{caption_height, caption_lines, draw_caption, draw_title, title_height};
use crate::layout::axes::Axis;
use crate::layout::margins::PlotArea;
use crate::plots::axes_draw::{draw_axes, draw_grid};
use crate::primitives::*;
use crate::RenderError;

/// Title line, e.g. "Hypergeometric Distribution (N = 52, K = 13, n = 5)".
pub fn chart_title(artifact: &BarChartArtifact) -> String {
    match artifact.parameters {
        DistributionParameters::Hypergeometric(p) => format!(
            "Hypergeometric Distribution (N = {}, K = {}, n = {})",
            p.population, p.successes, p.draws
        ),
        DistributionParameters::Poisson(p) => {
            format!("Poisson Distribution (\u{03BB} = {})", p.rate)
        }
    }
}

fn check(artifact: &BarChartArtifact) -> crate::Result<()> {
    if artifact.labels.len() != artifact.probabilities.len() {
        return Err(RenderError::Layout(format!(
            "labels ({}) and probabilities ({}) differ in length",
            artifact.labels.len(),
            artifact.probabilities.len()
        )));
    }
    if let Some(p) = artifact.probabilities.iter().find(|p| !p.is_finite() || **p < 0.0) {
        return Err(RenderError::Layout(format!("bar height must be finite and >= 0, got {p}")));
    }
    if !(artifact.y_max.is_finite() && artifact.y_max > 0.0) {
        return Err(RenderError::Layout(format!("y_max must be > 0, got {}", artifact.y_max)));
    }
    Ok(())
}

/// Render one distribution as a bar chart; one `<rect>` per support point
/// inside `<g class="bars">`.
pub fn render(artifact: &BarChartArtifact, config: &VizConfig) -> crate::Result<String> {
    check(artifact)?;

    let color = config.bar_color(artifact.distribution);
    let mut bar_style = Style::filled(color.with_alpha(config.colors.bar_alpha));
    if config.colors.bar_border_width > 0.0 {
        bar_style = bar_style.with_stroke(color, config.colors.bar_border_width);
    }

    let y_axis = Axis::bounded_linear(0.0, artifact.y_max, config.axes.target_y_ticks)
        .with_label(artifact.y_label.as_str());
    let x_axis = Axis::categories(&artifact.labels).with_label(artifact.x_label.as_str());

    let caption = caption_lines(&artifact.explanation, config);
    let footer = caption_height(&caption, config);

    let mut canvas = Canvas::new(config.figure.width, config.figure.height)?
        .with_font_family(config.font.family.as_str())
        .with_background(config.colors.background);
    let area = PlotArea::auto(&canvas, &y_axis, &x_axis, config, title_height(config), footer);

    draw_title(&mut canvas, &area, &chart_title(artifact), config);
    draw_grid(&mut canvas, &area, &y_axis, config);

    let slot = x_axis.unit_length(area.left, area.right());
    let bar_w = slot * config.chart.bar_width_ratio;
    let value_style = TextStyle {
        size: config.font.tick_size * 0.9,
        color: config.colors.text,
        anchor: TextAnchor::Middle,
        baseline: TextBaseline::Alphabetic,
        ..Default::default()
    };

    canvas.begin_group("bars");
    for (i, (label, &p)) in artifact.labels.iter().zip(&artifact.probabilities).enumerate() {
        let cx = x_axis.data_to_pixel(i as f64, area.left, area.right());
        let top = y_axis.data_to_pixel(p.min(artifact.y_max), area.bottom(), area.top);
        let tooltip = format!("P(X = {label}) = {p:.4}");
        let height = area.bottom() - top;
        canvas.rect_titled(cx - bar_w / 2.0, top, bar_w, height, &bar_style, &tooltip);
    }
    canvas.end_group();

    if let Some(min) = config.chart.value_label_min {
        for (i, &p) in artifact.probabilities.iter().enumerate() {
            if p < min {
                continue;
            }
            let cx = x_axis.data_to_pixel(i as f64, area.left, area.right());
            let top = y_axis.data_to_pixel(p.min(artifact.y_max), area.bottom(), area.top);
            canvas.text(cx, top - 3.0, &format!("{p:.3}"), &value_style);
        }
    }

    draw_axes(&mut canvas, &area, &x_axis, &y_axis, config);

    if !caption.is_empty() {
        let y = config.figure.height - footer + 4.0 + config.font.size;
        draw_caption(&mut canvas, &caption, y, config);
    }

    Ok(canvas.finish_svg())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dx_core::{HypergeometricParams, PoissonParams};

    fn bars_in(svg: &str) -> usize {
        let start = svg.find(r#"<g class="bars">"#).expect("bars group");
        let end = start + svg[start..].find("</g>").expect("closed group");
        svg[start..end].matches("<rect").count()
    }

    #[test]
    fn one_bar_per_support_point() {
        let art = BarChartArtifact::compute(&HypergeometricParams::new(52, 13, 5).into());
        let svg = render(&art, &VizConfig::default()).unwrap();
        assert_eq!(bars_in(&svg), 6);
        assert!(svg.contains("rgba(76,175,80,0.600)"));
        assert!(svg.contains("Number of Successes (x)"));
        assert!(svg.contains("Hypergeometric Distribution (N = 52, K = 13, n = 5)"));
    }

    #[test]
    fn poisson_bars_are_blue() {
        let art = BarChartArtifact::compute(&PoissonParams::new(4.0).unwrap().into());
        let svg = render(&art, &VizConfig::default()).unwrap();
        assert_eq!(bars_in(&svg), 11);
        assert!(svg.contains("rgba(33,150,243,0.600)"));
        assert!(svg.contains("<title>P(X = 4) = 0.1954</title>"));
        assert!(svg.contains("Poisson Distribution (\u{03BB} = 4)"));
    }

    #[test]
    fn wide_support_still_one_bar_each() {
        let art = BarChartArtifact::compute(&PoissonParams::new(60.0).unwrap().into());
        let svg = render(&art, &VizConfig::default()).unwrap();
        assert_eq!(bars_in(&svg), 151);
    }

    #[test]
    fn classroom_theme_adds_caption_and_values() {
        let config = crate::theme::BuiltinTheme::Classroom.base_config();
        let art = BarChartArtifact::compute(&HypergeometricParams::new(10, 5, 3).into());
        let svg = render(&art, &config).unwrap();
        assert!(svg.contains(">With a population of 10 and 5 successes,"));
        assert!(svg.contains(">0.417</text>"));
    }

    #[test]
    fn minimal_theme_hides_title() {
        let config = crate::theme::BuiltinTheme::Minimal.base_config();
        let art = BarChartArtifact::compute(&HypergeometricParams::new(10, 5, 3).into());
        let svg = render(&art, &config).unwrap();
        assert!(!svg.contains("Hypergeometric Distribution"));
        assert_eq!(bars_in(&svg), 4);
    }

    #[test]
    fn rejects_misaligned_artifact() {
        let mut art = BarChartArtifact::compute(&PoissonParams::new(1.0).unwrap().into());
        art.probabilities.pop();
        assert!(matches!(render(&art, &VizConfig::default()), Err(RenderError::Layout(_))));

        let mut art = BarChartArtifact::compute(&PoissonParams::new(1.0).unwrap().into());
        art.y_max = 0.0;
        assert!(render(&art, &VizConfig::default()).is_err());
    }
}
