use std::fmt::Write as FmtWrite;

use crate::color::Color;
use crate::primitives::*;
use crate::text::{TextMetrics, measure_text};

/// An SVG element stored for deferred rendering.
#[derive(Debug, Clone)]
enum SvgElement {
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        style: Style,
        title: Option<String>,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        style: LineStyle,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        style: TextStyle,
        rotate: Option<f64>,
    },
    Group {
        class: String,
        children: Vec<SvgElement>,
    },
}

/// Immediate-mode SVG canvas. Coordinates in points (1pt = 1/72").
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    font_family: String,
    background: Color,
    elements: Vec<SvgElement>,
    group: Option<(String, Vec<SvgElement>)>,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> crate::Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(crate::RenderError::Layout(format!(
                "invalid canvas size {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            font_family: "Helvetica, Arial, sans-serif".into(),
            background: Color::rgb(255, 255, 255),
            elements: Vec::new(),
            group: None,
        })
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    // --- Drawing primitives ---

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, style: &Style) {
        self.push(SvgElement::Rect { x, y, w, h, style: style.clone(), title: None });
    }

    /// Rectangle with a hover tooltip.
    pub fn rect_titled(&mut self, x: f64, y: f64, w: f64, h: f64, style: &Style, title: &str) {
        self.push(SvgElement::Rect {
            x,
            y,
            w,
            h,
            style: style.clone(),
            title: Some(title.to_string()),
        });
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &LineStyle) {
        self.push(SvgElement::Line { x1, y1, x2, y2, style: style.clone() });
    }

    pub fn text(&mut self, x: f64, y: f64, content: &str, style: &TextStyle) {
        self.push(SvgElement::Text {
            x,
            y,
            content: content.to_string(),
            style: style.clone(),
            rotate: None,
        });
    }

    pub fn text_rotated(&mut self, x: f64, y: f64, content: &str, style: &TextStyle, angle: f64) {
        self.push(SvgElement::Text {
            x,
            y,
            content: content.to_string(),
            style: style.clone(),
            rotate: Some(angle),
        });
    }

    // --- Groups ---

    /// Collect subsequent elements into `<g class="...">` until [`Canvas::end_group`].
    pub fn begin_group(&mut self, class: &str) {
        self.end_group();
        self.group = Some((class.to_string(), Vec::new()));
    }

    pub fn end_group(&mut self) {
        if let Some((class, children)) = self.group.take() {
            self.elements.push(SvgElement::Group { class, children });
        }
    }

    // --- Text measurement ---

    pub fn measure_text(&self, content: &str, style: &TextStyle) -> TextMetrics {
        measure_text(content, style)
    }

    // --- SVG output ---

    fn push(&mut self, elem: SvgElement) {
        match &mut self.group {
            Some((_, children)) => children.push(elem),
            None => self.elements.push(elem),
        }
    }

    pub fn finish_svg(mut self) -> String {
        self.end_group();

        let mut out = String::with_capacity(16 * 1024);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{f}">"#,
            w = self.width,
            h = self.height,
            f = escape(&self.font_family),
        );

        let _ = writeln!(
            out,
            r#"<rect width="{}" height="{}" fill="{}" />"#,
            self.width,
            self.height,
            self.background.to_svg_fill()
        );

        for elem in &self.elements {
            render_element(&mut out, elem);
        }

        out.push_str("</svg>\n");
        out
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

// `write!` into a String cannot fail.
fn render_element(out: &mut String, elem: &SvgElement) {
    match elem {
        SvgElement::Rect { x, y, w, h, style, title } => {
            let _ = write!(out, r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}""#);
            write_style_attrs(out, style);
            match title {
                Some(t) => {
                    let _ = writeln!(out, "><title>{}</title></rect>", escape(t));
                }
                None => out.push_str(" />\n"),
            }
        }
        SvgElement::Line { x1, y1, x2, y2, style } => {
            let _ = write!(out, r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}""#);
            write_line_attrs(out, style);
            out.push_str(" />\n");
        }
        SvgElement::Text { x, y, content, style, rotate } => {
            let _ = write!(out, r#"<text x="{x:.2}" y="{y:.2}" font-size="{:.1}""#, style.size);
            let _ = write!(out, r#" fill="{}""#, style.color.to_svg_fill());
            let _ = write!(out, r#" text-anchor="{}""#, style.anchor.as_str());
            let _ = write!(out, r#" dominant-baseline="{}""#, style.baseline.as_str());
            if style.weight == FontWeight::Bold {
                out.push_str(r#" font-weight="bold""#);
            }
            if let Some(angle) = rotate {
                let _ = write!(out, r#" transform="rotate({angle:.1},{x:.2},{y:.2})""#);
            }
            out.push('>');
            out.push_str(&escape(content));
            out.push_str("</text>\n");
        }
        SvgElement::Group { class, children } => {
            let _ = writeln!(out, r#"<g class="{}">"#, escape(class));
            for child in children {
                render_element(out, child);
            }
            out.push_str("</g>\n");
        }
    }
}

fn write_style_attrs(out: &mut String, style: &Style) {
    match &style.fill {
        Some(fill) => {
            let _ = write!(out, r#" fill="{}""#, fill.to_svg_fill());
        }
        None => out.push_str(r#" fill="none""#),
    }
    if let Some(stroke) = &style.stroke {
        let _ = write!(out, r#" stroke="{}""#, stroke.to_svg_fill());
        let _ = write!(out, r#" stroke-width="{:.2}""#, style.stroke_width);
    }
    if (style.opacity - 1.0).abs() > 1e-4 {
        let _ = write!(out, r#" opacity="{:.3}""#, style.opacity);
    }
}

fn write_line_attrs(out: &mut String, style: &LineStyle) {
    let _ = write!(out, r#" stroke="{}""#, style.color.to_svg_fill());
    let _ = write!(out, r#" stroke-width="{:.2}""#, style.width);
    if let Some(dash) = &style.dash {
        let _ = write!(out, r#" stroke-dasharray="{dash}""#);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_canvas() {
        let svg = Canvas::new(100.0, 50.0).unwrap().finish_svg();
        assert!(svg.contains("width=\"100\""));
        assert!(svg.contains("height=\"50\""));
        assert!(svg.contains(r##"fill="#ffffff""##));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn rejects_degenerate_size() {
        assert!(Canvas::new(0.0, 50.0).is_err());
        assert!(Canvas::new(f64::NAN, 50.0).is_err());
    }

    #[test]
    fn rect_rendering() {
        let mut c = Canvas::new(200.0, 100.0).unwrap();
        c.rect(10.0, 20.0, 50.0, 30.0, &Style::filled(Color::hex("#ff0000")));
        let svg = c.finish_svg();
        assert!(svg.contains(r##"fill="#ff0000""##));
        assert!(svg.contains("width=\"50.00\""));
    }

    #[test]
    fn bordered_rect_rendering() {
        let mut c = Canvas::new(200.0, 100.0).unwrap();
        let green = Color::hex("#4CAF50");
        let style = Style::filled(green.with_alpha(0.6)).with_stroke(green, 1.0);
        c.rect(0.0, 0.0, 10.0, 10.0, &style);
        let svg = c.finish_svg();
        assert!(svg.contains(r#"fill="rgba(76,175,80,0.600)""#));
        assert!(svg.contains(r##"stroke="#4caf50" stroke-width="1.00""##));
    }

    #[test]
    fn titled_rect_and_escaping() {
        let mut c = Canvas::new(200.0, 100.0).unwrap();
        c.rect_titled(0.0, 0.0, 5.0, 5.0, &Style::default(), "P(X < 3) & more");
        let svg = c.finish_svg();
        assert!(svg.contains("<title>P(X &lt; 3) &amp; more</title></rect>"));
    }

    #[test]
    fn groups_wrap_children() {
        let mut c = Canvas::new(200.0, 100.0).unwrap();
        c.begin_group("bars");
        c.rect(0.0, 0.0, 1.0, 1.0, &Style::default());
        c.rect(2.0, 0.0, 1.0, 1.0, &Style::default());
        c.end_group();
        c.text(10.0, 20.0, "after", &TextStyle::default());
        let svg = c.finish_svg();
        let g = svg.find(r#"<g class="bars">"#).unwrap();
        let end = svg.find("</g>").unwrap();
        assert_eq!(svg[g..end].matches("<rect").count(), 2);
        assert!(svg.find("after").unwrap() > end);
    }

    #[test]
    fn text_rendering() {
        let mut c = Canvas::new(200.0, 100.0).unwrap().with_font_family("Inter");
        c.text(10.0, 20.0, "Hello World", &TextStyle::default());
        let svg = c.finish_svg();
        assert!(svg.contains(">Hello World</text>"));
        assert!(svg.contains("font-family=\"Inter\""));
    }
}
