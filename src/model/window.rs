use std::ops::RangeInclusive;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImageHandle(String);

impl DecodedImageHandle {
    pub fn new(reference: String) -> Self {
        Self(reference)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowParameters {
    pub center: f64,
    pub width: f64,
}

impl WindowParameters {
    pub const DEFAULT_CENTER: f64 = 40.0;
    pub const DEFAULT_WIDTH: f64 = 400.0;

    pub fn new(center: f64, width: f64) -> Self {
        Self { center, width }
    }

    pub fn center_label(&self) -> String {
        format_level(self.center)
    }

    pub fn width_label(&self) -> String {
        format_level(self.width)
    }
}

impl Default for WindowParameters {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CENTER, Self::DEFAULT_WIDTH)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowBounds {
    pub center: RangeInclusive<f64>,
    pub width: RangeInclusive<f64>,
}

impl WindowBounds {
    pub const MIN_WIDTH: f64 = 1.0;

    /// Center spans the source intensity range; width spans up to the full
    /// range, never less than the server's suggested width.
    pub fn from_intensity_range(min_value: f64, max_value: f64, suggested_width: f64) -> Self {
        let (low, high) = if min_value <= max_value {
            (min_value, max_value)
        } else {
            (max_value, min_value)
        };
        let widest = (high - low).max(suggested_width).max(Self::MIN_WIDTH);
        Self {
            center: low..=high,
            width: Self::MIN_WIDTH..=widest,
        }
    }
}

fn format_level(value: f64) -> String {
    let rounded = value.round();
    if rounded == 0.0 {
        // avoid "-0"
        "0".to_string()
    } else {
        format!("{rounded:.0}")
    }
}
