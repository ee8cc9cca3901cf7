use crate::color::Color;
use crate::config::*;

/// Built-in theme presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinTheme {
    Discretia,
    Minimal,
    Classroom,
}

impl BuiltinTheme {
    pub const ALL: [BuiltinTheme; 3] = [Self::Discretia, Self::Minimal, Self::Classroom];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "discretia" | "default" => Some(Self::Discretia),
            "minimal" => Some(Self::Minimal),
            "classroom" => Some(Self::Classroom),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Discretia => "discretia",
            Self::Minimal => "minimal",
            Self::Classroom => "classroom",
        }
    }

    pub fn base_config(self) -> VizConfig {
        match self {
            Self::Discretia => discretia(),
            Self::Minimal => minimal(),
            Self::Classroom => classroom(),
        }
    }
}

fn discretia() -> VizConfig {
    VizConfig {
        theme: "discretia".into(),
        figure: FigureConfig::default(),
        font: FontConfig::default(),
        axes: AxesConfig::default(),
        grid: GridConfig::default(),
        colors: ColorsConfig::default(),
        chart: ChartConfig::default(),
    }
}

fn minimal() -> VizConfig {
    VizConfig {
        theme: "minimal".into(),
        figure: FigureConfig { width: 432.0, height: 259.2 },
        font: FontConfig {
            size: 9.0,
            label_size: 10.0,
            tick_size: 8.0,
            title_size: 10.0,
            ..FontConfig::default()
        },
        grid: GridConfig { show: false, ..GridConfig::default() },
        colors: ColorsConfig {
            bar_border_width: 0.0,
            text: Color::rgb(0, 0, 0),
            ..ColorsConfig::default()
        },
        chart: ChartConfig { show_title: false, ..ChartConfig::default() },
        ..discretia()
    }
}

fn classroom() -> VizConfig {
    VizConfig {
        theme: "classroom".into(),
        figure: FigureConfig { width: 640.0, height: 400.0 },
        font: FontConfig {
            size: 12.0,
            label_size: 13.0,
            tick_size: 11.0,
            title_size: 15.0,
            ..FontConfig::default()
        },
        axes: AxesConfig { tick_length: 5.0, target_y_ticks: 11, ..AxesConfig::default() },
        grid: GridConfig { alpha: 0.8, ..GridConfig::default() },
        chart: ChartConfig {
            show_explanation: true,
            value_label_min: Some(0.01),
            ..ChartConfig::default()
        },
        ..discretia()
    }
}
