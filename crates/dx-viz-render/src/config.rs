use dx_core::DistributionKind;
use serde::{Deserialize, Serialize};
use serde_yaml_ng::Value;

use crate::color::{BLUE_500, Color, GREEN_500, SLATE_700};
use crate::primitives::FontWeight;
use crate::theme::BuiltinTheme;

/// Top-level visualization configuration (YAML or programmatic).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    pub theme: String,
    pub figure: FigureConfig,
    pub font: FontConfig,
    pub axes: AxesConfig,
    pub grid: GridConfig,
    pub colors: ColorsConfig,
    pub chart: ChartConfig,
}

impl Default for VizConfig {
    fn default() -> Self {
        BuiltinTheme::Discretia.base_config()
    }
}

impl VizConfig {
    /// Opaque bar color for a distribution; alpha comes from `colors.bar_alpha`.
    pub fn bar_color(&self, kind: DistributionKind) -> Color {
        match kind {
            DistributionKind::Hypergeometric => self.colors.hypergeometric,
            DistributionKind::Poisson => self.colors.poisson,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 518.4,  // 7.2" * 72
            height: 302.4, // 4.2" * 72
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub family: String,
    pub size: f64,
    pub label_size: f64,
    pub tick_size: f64,
    pub title_size: f64,
    pub title_weight: FontWeight,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "Helvetica, Arial, sans-serif".into(),
            size: 10.0,
            label_size: 11.0,
            tick_size: 8.5,
            title_size: 12.0,
            title_weight: FontWeight::Bold,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesConfig {
    pub tick_direction: String,
    pub show_top_ticks: bool,
    pub show_right_ticks: bool,
    pub tick_length: f64,
    pub target_y_ticks: usize,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            tick_direction: "out".into(),
            show_top_ticks: false,
            show_right_ticks: false,
            tick_length: 4.0,
            target_y_ticks: 6,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub show: bool,
    pub color: Color,
    pub alpha: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { show: true, color: Color::hex("#CBD5E1"), alpha: 0.55 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub hypergeometric: Color,
    pub poisson: Color,
    pub bar_alpha: f64,
    pub bar_border_width: f64,
    pub text: Color,
    pub background: Color,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            hypergeometric: Color::hex(GREEN_500),
            poisson: Color::hex(BLUE_500),
            bar_alpha: 0.6,
            bar_border_width: 1.0,
            text: Color::hex(SLATE_700),
            background: Color::rgb(255, 255, 255),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Bar width as a fraction of the category slot.
    pub bar_width_ratio: f64,
    pub show_title: bool,
    pub show_explanation: bool,
    /// Print `p` above bars at least this tall; `None` disables labels.
    pub value_label_min: Option<f64>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            bar_width_ratio: 0.8,
            show_title: true,
            show_explanation: false,
            value_label_min: None,
        }
    }
}

/// Resolve a VizConfig from an optional theme name and optional YAML overrides.
///
/// Priority: user YAML overrides → base config of `theme` (or of the YAML's own
/// `theme:` key) → default theme. Overrides merge key by key into the base, so
/// a partial YAML only touches the fields it names.
pub fn resolve_config(theme: Option<&str>, user_yaml: Option<&str>) -> crate::Result<VizConfig> {
    let overrides: Option<Value> = user_yaml
        .map(serde_yaml_ng::from_str)
        .transpose()
        .map_err(|e| crate::RenderError::Config(e.to_string()))?
        .filter(|v: &Value| !v.is_null());

    let theme_name = theme
        .map(str::to_string)
        .or_else(|| overrides.as_ref()?.get("theme")?.as_str().map(str::to_string));
    let base = match theme_name.as_deref() {
        Some(name) => BuiltinTheme::parse(name)
            .ok_or_else(|| crate::RenderError::Config(format!("unknown theme: {name}")))?
            .base_config(),
        None => VizConfig::default(),
    };

    let Some(overrides) = overrides else {
        return Ok(base);
    };
    if !overrides.is_mapping() {
        return Err(crate::RenderError::Config("config must be a YAML mapping".into()));
    }

    let mut merged =
        serde_yaml_ng::to_value(&base).map_err(|e| crate::RenderError::Config(e.to_string()))?;
    merge_values(&mut merged, overrides);
    let mut config: VizConfig =
        serde_yaml_ng::from_value(merged).map_err(|e| crate::RenderError::Config(e.to_string()))?;
    if let Some(name) = theme_name {
        config.theme = name;
    }
    validate(&config)?;
    Ok(config)
}

fn merge_values(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Mapping(base), Value::Mapping(over)) => {
            for (k, v) in over {
                match base.get_mut(&k) {
                    Some(slot) => merge_values(slot, v),
                    None => {
                        base.insert(k, v);
                    }
                }
            }
        }
        (slot, v) => *slot = v,
    }
}

fn validate(config: &VizConfig) -> crate::Result<()> {
    let bad = |msg: String| Err(crate::RenderError::Config(msg));
    if !(config.figure.width > 0.0 && config.figure.height > 0.0) {
        return bad(format!(
            "figure size must be positive, got {}x{}",
            config.figure.width, config.figure.height
        ));
    }
    if !(0.0..=1.0).contains(&config.colors.bar_alpha) {
        return bad(format!("colors.bar_alpha must be in [0, 1], got {}", config.colors.bar_alpha));
    }
    if !(config.chart.bar_width_ratio > 0.0 && config.chart.bar_width_ratio <= 1.0) {
        return bad(format!(
            "chart.bar_width_ratio must be in (0, 1], got {}",
            config.chart.bar_width_ratio
        ));
    }
    Ok(())
}
