use crate::primitives::{FontWeight, TextStyle};

#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
    pub ascent: f64,
}

/// Advance width of one glyph in em units, approximating a Helvetica-like face.
fn advance_em(ch: char) -> f64 {
    match ch {
        'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' => 0.25,
        ' ' | 'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' | '-' => 0.33,
        'm' | 'w' | 'M' | 'W' | '@' => 0.85,
        '0'..='9' => 0.556,
        c if c.is_ascii_uppercase() => 0.68,
        c if c.is_ascii() => 0.52,
        _ => 0.6,
    }
}

/// Measure text width and height in points from per-glyph advance estimates.
pub fn measure_text(text: &str, style: &TextStyle) -> TextMetrics {
    let em: f64 = text.chars().map(advance_em).sum();
    let weight = if style.weight == FontWeight::Bold { 1.07 } else { 1.0 };
    let ascent = style.size * 0.77;
    TextMetrics { width: em * style.size * weight, height: style.size * 1.2, ascent }
}

/// Greedy word wrap into lines no wider than `max_width`.
///
/// A single word wider than `max_width` gets a line of its own.
pub fn wrap_text(text: &str, style: &TextStyle, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if measure_text(&candidate, style).width <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
