//! Weight range and salience scaling.

use crate::types::{KeywordItem, LayoutConfig};

/// Value range of one keyword set, computed once per layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScaler {
    pub min: f64,
    pub max: f64,
}

impl ValueScaler {
    /// Range over all items; both ends are 0 for an empty list.
    pub fn from_items(items: &[KeywordItem]) -> Self {
        if items.is_empty() {
            return Self { min: 0.0, max: 0.0 };
        }
        let (min, max) = items.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), item| (lo.min(item.value), hi.max(item.value)),
        );
        Self { min, max }
    }

    /// Salience in [0, 1]. A flat range maps everything to 1 so
    /// equal-weight sets render at full size.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 1.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    pub fn font_size(&self, value: f64, config: &LayoutConfig) -> f64 {
        font_size_for(self.normalize(value), config)
    }
}

/// Concave size curve: `min + s^exp * (max - min)`.
pub fn font_size_for(salience: f64, config: &LayoutConfig) -> f64 {
    let range = config.max_font_size - config.min_font_size;
    config.min_font_size + salience.powf(config.size_exponent) * range
}
