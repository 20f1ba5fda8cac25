//! Keyword cloud layout engine.
//!
//! One pass sorts keywords by descending weight, sizes each word from
//! its salience, finds it a spot on the spiral and annotates colour,
//! rotation and stacking order. A pass is pure apart from the seeded
//! generator it creates for itself.

use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::debug;

use crate::collision::CollisionIndex;
use crate::color::ColorMapper;
use crate::error::LayoutError;
use crate::prng::Pcg32;
use crate::scale::ValueScaler;
use crate::spiral::{BoxSize, SpiralPlacer};
use crate::types::{
    CloudLayout, ContainerSize, KeywordItem, LayoutConfig, LayoutParams,
    PlacedWord,
};

const CHAR_WIDTH_RATIO: f64 = 0.6;
const LINE_HEIGHT_RATIO: f64 = 1.2;

/// Rough text footprint from character count and font size.
pub fn estimate_box(text: &str, font_size: f64) -> BoxSize {
    BoxSize {
        width: text.chars().count() as f64 * font_size * CHAR_WIDTH_RATIO,
        height: font_size * LINE_HEIGHT_RATIO,
    }
}

fn validate_items(items: &[KeywordItem]) -> Result<(), LayoutError> {
    for (index, item) in items.iter().enumerate() {
        if !item.value.is_finite() || item.value < 0.0 {
            return Err(LayoutError::InvalidValue {
                index,
                text: item.text.clone(),
                value: item.value,
            });
        }
    }
    Ok(())
}

/// Input indices ordered by descending value; ties keep input order.
/// Values are validated finite, and `-0.0` ties with `0.0`.
fn placement_order(items: &[KeywordItem]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| {
        items[b]
            .value
            .partial_cmp(&items[a].value)
            .unwrap_or(Ordering::Equal)
    });
    order
}

fn anchor_px(config: &LayoutConfig, container: ContainerSize) -> (f64, f64) {
    match config.anchor {
        Some(a) => (
            a.x / 100.0 * container.width,
            a.y / 100.0 * container.height,
        ),
        None => (container.width / 2.0, container.height / 2.0),
    }
}

fn rotation(config: &LayoutConfig, rng: &mut Pcg32) -> f64 {
    if !config.rotation_enabled || !rng.chance(config.rotation_probability) {
        return 0.0;
    }
    let range = config.rotation_range_degrees;
    rng.next_range(-range, range)
}

/// Lay out `items` in a container of the given pixel size.
///
/// Returns words in placement order (descending value). Never drops a
/// word: when the spiral budget is exhausted the word is placed at a
/// random in-bounds point and counted in `degraded_placements`.
pub fn layout(
    items: &[KeywordItem],
    container: ContainerSize,
    config: &LayoutConfig,
) -> Result<CloudLayout, LayoutError> {
    config.validate()?;
    container.validate()?;
    validate_items(items)?;

    if items.is_empty() {
        debug!("no keywords, empty layout");
        return Ok(CloudLayout::default());
    }

    let scaler = ValueScaler::from_items(items);
    let colors = ColorMapper::from_config(config);
    let placer = SpiralPlacer::new(config);
    let anchor = anchor_px(config, container);
    let mut collisions =
        CollisionIndex::with_capacity(config.margin, items.len());
    let mut rng = Pcg32::from_optional_seed(config.random_seed, 0);

    let mut words = Vec::with_capacity(items.len());
    let mut degraded_placements = 0u32;

    for (rank, &i) in placement_order(items).iter().enumerate() {
        let item = &items[i];
        let salience = scaler.normalize(item.value);
        let font_size = scaler.font_size(item.value, config);
        let size = estimate_box(&item.text, font_size);

        let placement = placer.place(
            size,
            rank,
            container,
            anchor,
            &collisions,
            &mut rng,
        );
        collisions.accept(placement.bbox(size));
        if placement.degraded {
            degraded_placements += 1;
        }

        words.push(PlacedWord {
            text: item.text.clone(),
            value: item.value,
            x: placement.x / container.width * 100.0,
            y: placement.y / container.height * 100.0,
            width: size.width / container.width * 100.0,
            height: size.height / container.height * 100.0,
            font_size,
            color: colors.color_for(salience).to_string(),
            rotation_degrees: rotation(config, &mut rng),
            z_index: (salience * 100.0).floor() as u32,
            bold: salience > config.bold_threshold,
            degraded: placement.degraded,
        });
    }

    debug!(
        words = words.len(),
        width = container.width,
        height = container.height,
        degraded_placements,
        "layout complete"
    );

    Ok(CloudLayout {
        words,
        degraded_placements,
    })
}

pub fn layout_params(
    params: &LayoutParams,
) -> Result<CloudLayout, LayoutError> {
    layout(&params.keywords, params.container, &params.config)
}

/// Independent layouts (one per container), computed in parallel.
/// Results keep the input order.
pub fn layout_batch(
    batch: &[LayoutParams],
) -> Vec<Result<CloudLayout, LayoutError>> {
    batch.par_iter().map(layout_params).collect()
}

/// Takes a JSON `LayoutParams` and returns a JSON `CloudLayout`.
pub fn layout_from_json(params_json: &str) -> Result<String, LayoutError> {
    let params: LayoutParams = serde_json::from_str(params_json)?;
    let result = layout_params(&params)?;
    Ok(serde_json::to_string(&result)?)
}
