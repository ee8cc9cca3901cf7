/// Axis configuration with tick generation and data→pixel mapping.
#[derive(Debug, Clone)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub label: String,
    pub tick_positions: Vec<f64>,
    pub tick_labels: Vec<String>,
}

impl Axis {
    /// Linear axis spanning exactly `[min, max]` with "nice number" ticks inside it.
    pub fn bounded_linear(min: f64, max: f64, target_ticks: usize) -> Self {
        let max = if max > min { max } else { min + 1.0 };
        let step = nice_step((max - min) / (target_ticks.max(2) - 1) as f64);
        let first = (min / step - 1e-9).ceil() as i64;
        let last = (max / step + 1e-9).floor() as i64;

        let mut ticks = Vec::new();
        let mut labels = Vec::new();
        for k in first..=last {
            let v = k as f64 * step;
            ticks.push(v);
            labels.push(format_tick(v, step));
        }

        Self { min, max, label: String::new(), tick_positions: ticks, tick_labels: labels }
    }

    /// Category axis: one slot per label, slot `i` centred on `i`.
    pub fn categories(labels: &[String]) -> Self {
        let n = labels.len().max(1) as f64;
        Self {
            min: -0.5,
            max: n - 0.5,
            label: String::new(),
            tick_positions: (0..labels.len()).map(|i| i as f64).collect(),
            tick_labels: labels.to_vec(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Map a data value to pixel coordinate.
    pub fn data_to_pixel(&self, value: f64, px_min: f64, px_max: f64) -> f64 {
        let frac = (value - self.min) / (self.max - self.min);
        px_min + frac * (px_max - px_min)
    }

    /// Pixel length of one data unit.
    pub fn unit_length(&self, px_min: f64, px_max: f64) -> f64 {
        (px_max - px_min).abs() / (self.max - self.min)
    }
}

fn nice_step(rough: f64) -> f64 {
    let exp = rough.abs().log10().floor();
    let frac = rough / 10.0_f64.powf(exp);
    let nice_frac = if frac <= 1.5 {
        1.0
    } else if frac <= 3.5 {
        2.0
    } else if frac <= 7.5 {
        5.0
    } else {
        10.0
    };
    nice_frac * 10.0_f64.powf(exp)
}

fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize };
    if decimals == 0 {
        // Avoid "-0"
        let v = if value.abs() < step * 0.01 { 0.0 } else { value };
        format!("{}", v.round() as i64)
    } else {
        format!("{:.prec$}", value, prec = decimals)
    }
}
