//! Salience to palette colour quantization.

use crate::types::LayoutConfig;

/// Maps salience onto an ordered low-to-high palette.
///
/// The first colour covers `[0, floor]`. The remaining colours split
/// `(floor, 1]` into equal bands, and a salience must strictly exceed
/// a band's lower edge to reach it.
#[derive(Debug, Clone)]
pub struct ColorMapper<'a> {
    palette: &'a [String],
    floor: f64,
    step: f64,
}

impl<'a> ColorMapper<'a> {
    /// Caller guarantees at least two colours (see `LayoutConfig::validate`).
    pub fn new(palette: &'a [String], floor: f64) -> Self {
        let bands = palette.len().saturating_sub(1).max(1);
        Self {
            palette,
            floor,
            step: (1.0 - floor) / bands as f64,
        }
    }

    pub fn from_config(config: &'a LayoutConfig) -> Self {
        Self::new(&config.color_palette, config.color_floor)
    }

    pub fn index_for(&self, salience: f64) -> usize {
        let mut index = 0;
        for k in 0..self.palette.len().saturating_sub(1) {
            let threshold = self.floor + k as f64 * self.step;
            if salience > threshold {
                index = k + 1;
            } else {
                break;
            }
        }
        index
    }

    pub fn color_for(&self, salience: f64) -> &'a str {
        let palette = self.palette;
        palette
            .get(self.index_for(salience))
            .map(String::as_str)
            .unwrap_or("")
    }
}
