//! Data types for the keyword layout JSON interchange format.
//!
//! Every struct here derives Serialize + Deserialize so it can
//! round-trip through the host boundary. Field names are camelCase
//! on the wire.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

// -- Input ---------------------------------------------------------

/// A keyword and its relative weight. Texts need not be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordItem {
    pub text: String,
    pub value: f64,
}

impl KeywordItem {
    pub fn new(text: impl Into<String>, value: f64) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }
}

/// Container size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(LayoutError::InvalidContainer {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Spiral start point, in percent of the container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

// -- Configuration -------------------------------------------------

fn default_min_font_size() -> f64 {
    10.0
}
fn default_max_font_size() -> f64 {
    34.0
}
fn default_size_exponent() -> f64 {
    0.5
}
fn default_margin() -> f64 {
    3.0
}
fn default_max_placement_attempts() -> u32 {
    2000
}
fn default_spiral_angle_step() -> f64 {
    0.1
}
fn default_spiral_radius_step() -> f64 {
    2.0
}
fn default_rotation_range_degrees() -> f64 {
    15.0
}
fn default_rotation_probability() -> f64 {
    0.3
}
fn default_color_floor() -> f64 {
    0.25
}
fn default_bold_threshold() -> f64 {
    0.6
}

/// Low to high salience.
pub fn default_color_palette() -> Vec<String> {
    ["#F1F0FB", "#E5DEFF", "#D6BCFA", "#7E69AB", "#9b87f5", "#8B5CF6"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    #[serde(default = "default_min_font_size")]
    pub min_font_size: f64,
    #[serde(default = "default_max_font_size")]
    pub max_font_size: f64,
    /// Exponent applied to salience before sizing. Values below 1
    /// keep low-weight words legible.
    #[serde(default = "default_size_exponent")]
    pub size_exponent: f64,
    /// Inflation applied on every side of each word box, in pixels.
    #[serde(default = "default_margin")]
    pub margin: f64,
    #[serde(default = "default_max_placement_attempts")]
    pub max_placement_attempts: u32,
    #[serde(default = "default_spiral_angle_step")]
    pub spiral_angle_step: f64,
    /// Radius gained per radian of spiral angle.
    #[serde(default = "default_spiral_radius_step")]
    pub spiral_radius_step: f64,
    #[serde(default)]
    pub rotation_enabled: bool,
    #[serde(default = "default_rotation_range_degrees")]
    pub rotation_range_degrees: f64,
    #[serde(default = "default_rotation_probability")]
    pub rotation_probability: f64,
    #[serde(default = "default_color_palette")]
    pub color_palette: Vec<String>,
    #[serde(default = "default_color_floor")]
    pub color_floor: f64,
    #[serde(default = "default_bold_threshold")]
    pub bold_threshold: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<Anchor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_font_size: default_min_font_size(),
            max_font_size: default_max_font_size(),
            size_exponent: default_size_exponent(),
            margin: default_margin(),
            max_placement_attempts: default_max_placement_attempts(),
            spiral_angle_step: default_spiral_angle_step(),
            spiral_radius_step: default_spiral_radius_step(),
            rotation_enabled: false,
            rotation_range_degrees: default_rotation_range_degrees(),
            rotation_probability: default_rotation_probability(),
            color_palette: default_color_palette(),
            color_floor: default_color_floor(),
            bold_threshold: default_bold_threshold(),
            anchor: None,
            random_seed: None,
        }
    }
}

impl LayoutConfig {
    /// Deterministic config with the given seed and no rotation.
    pub fn seeded(seed: u64) -> Self {
        Self {
            random_seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let fail = |msg: String| Err(LayoutError::InvalidConfig(msg));
        let finite = [
            ("minFontSize", self.min_font_size),
            ("maxFontSize", self.max_font_size),
            ("sizeExponent", self.size_exponent),
            ("margin", self.margin),
            ("spiralAngleStep", self.spiral_angle_step),
            ("spiralRadiusStep", self.spiral_radius_step),
            ("rotationRangeDegrees", self.rotation_range_degrees),
            ("rotationProbability", self.rotation_probability),
            ("colorFloor", self.color_floor),
            ("boldThreshold", self.bold_threshold),
        ];
        for (name, v) in finite {
            if !v.is_finite() {
                return fail(format!("{name} must be finite, got {v}"));
            }
        }
        if self.min_font_size <= 0.0 {
            return fail(format!(
                "minFontSize must be positive, got {}",
                self.min_font_size
            ));
        }
        if self.min_font_size > self.max_font_size {
            return fail(format!(
                "minFontSize {} exceeds maxFontSize {}",
                self.min_font_size, self.max_font_size
            ));
        }
        if self.size_exponent <= 0.0 || self.size_exponent > 1.0 {
            return fail(format!(
                "sizeExponent must be in (0, 1], got {}",
                self.size_exponent
            ));
        }
        if self.margin < 0.0 {
            return fail(format!("margin must be >= 0, got {}", self.margin));
        }
        if self.max_placement_attempts == 0 {
            return fail("maxPlacementAttempts must be at least 1".into());
        }
        if self.spiral_angle_step <= 0.0 {
            return fail(format!(
                "spiralAngleStep must be positive, got {}",
                self.spiral_angle_step
            ));
        }
        if self.spiral_radius_step < 0.0 {
            return fail(format!(
                "spiralRadiusStep must be >= 0, got {}",
                self.spiral_radius_step
            ));
        }
        if !(0.0..=1.0).contains(&self.rotation_probability) {
            return fail(format!(
                "rotationProbability must be in [0, 1], got {}",
                self.rotation_probability
            ));
        }
        if self.rotation_range_degrees < 0.0 {
            return fail(format!(
                "rotationRangeDegrees must be >= 0, got {}",
                self.rotation_range_degrees
            ));
        }
        if let Some(anchor) = self.anchor {
            let in_range = |v: f64| v.is_finite() && (0.0..=100.0).contains(&v);
            if !in_range(anchor.x) || !in_range(anchor.y) {
                return fail(format!(
                    "anchor must be within 0..=100 percent, got ({}, {})",
                    anchor.x, anchor.y
                ));
            }
        }
        if self.color_palette.len() < 2 {
            return fail(format!(
                "colorPalette needs at least 2 colors, got {}",
                self.color_palette.len()
            ));
        }
        if !(0.0..1.0).contains(&self.color_floor) {
            return fail(format!(
                "colorFloor must be in [0, 1), got {}",
                self.color_floor
            ));
        }
        Ok(())
    }
}

// -- Output --------------------------------------------------------

/// A placed word. Coordinates and box size are percentages of the
/// container; `x`/`y` is the centre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedWord {
    pub text: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub font_size: f64,
    pub color: String,
    pub rotation_degrees: f64,
    pub z_index: u32,
    pub bold: bool,
    /// Placed by random fallback after the spiral budget ran out.
    /// May overlap other words.
    #[serde(default)]
    pub degraded: bool,
}

/// Words in descending-value order (the order they were placed).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudLayout {
    pub words: Vec<PlacedWord>,
    #[serde(default)]
    pub degraded_placements: u32,
}

impl CloudLayout {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

// -- Engine I/O ----------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutParams {
    #[serde(default)]
    pub keywords: Vec<KeywordItem>,
    pub container: ContainerSize,
    #[serde(default)]
    pub config: LayoutConfig,
}

// -- Tests ---------------------------------------------------------
