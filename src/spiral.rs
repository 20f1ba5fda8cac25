//! Archimedean spiral search for a free word position.
//!
//! Candidates are walked outward from an anchor point, clamped into
//! the container, and tested against the collision index. When the
//! attempt budget runs out the word gets a uniformly random in-bounds
//! position instead, so every word is always placed.

use tracing::{trace, warn};

use crate::collision::{BoundingBox, CollisionIndex};
use crate::prng::Pcg32;
use crate::types::{ContainerSize, LayoutConfig};

/// Estimated on-screen box of a word, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSize {
    pub width: f64,
    pub height: f64,
}

/// Result of one placement search. `x`/`y` is the centre in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub attempts: u32,
    pub degraded: bool,
}

impl Placement {
    pub fn bbox(&self, size: BoxSize) -> BoundingBox {
        BoundingBox::centered(self.x, self.y, size.width, size.height)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SpiralPlacer {
    angle_step: f64,
    radius_step: f64,
    max_attempts: u32,
    margin: f64,
}

impl SpiralPlacer {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            angle_step: config.spiral_angle_step,
            radius_step: config.spiral_radius_step,
            max_attempts: config.max_placement_attempts,
            margin: config.margin,
        }
    }

    /// Find a centre for a box of `size` that does not collide with
    /// anything in `index`, starting the spiral at `anchor` (pixels).
    pub fn place(
        &self,
        size: BoxSize,
        index: usize,
        container: ContainerSize,
        anchor: (f64, f64),
        collisions: &CollisionIndex,
        rng: &mut Pcg32,
    ) -> Placement {
        let (cx, cy) = anchor;
        let mut angle = 0.0_f64;
        let mut radius = 0.0_f64;

        for attempt in 0..self.max_attempts {
            let x = clamp_axis(
                cx + angle.cos() * radius,
                size.width / 2.0,
                self.margin,
                container.width,
            );
            let y = clamp_axis(
                cy + angle.sin() * radius,
                size.height / 2.0,
                self.margin,
                container.height,
            );
            let candidate =
                BoundingBox::centered(x, y, size.width, size.height);
            if !collisions.test(&candidate) {
                trace!(index, attempts = attempt + 1, x, y, "spiral hit");
                return Placement {
                    x,
                    y,
                    attempts: attempt + 1,
                    degraded: false,
                };
            }
            angle += self.angle_step;
            radius += self.radius_step * self.angle_step;
        }

        let (x_lo, x_hi) =
            axis_bounds(size.width / 2.0, self.margin, container.width);
        let (y_lo, y_hi) =
            axis_bounds(size.height / 2.0, self.margin, container.height);
        let x = rng.next_range(x_lo, x_hi);
        let y = rng.next_range(y_lo, y_hi);
        warn!(
            index,
            attempts = self.max_attempts,
            x,
            y,
            "placement budget exhausted, using random fallback"
        );
        Placement {
            x,
            y,
            attempts: self.max_attempts,
            degraded: true,
        }
    }
}

/// Allowed centre range on one axis. Collapses to the midpoint when
/// the box plus margins does not fit.
fn axis_bounds(half: f64, margin: f64, extent: f64) -> (f64, f64) {
    let lo = half + margin;
    let hi = extent - half - margin;
    if lo > hi {
        let mid = extent / 2.0;
        (mid, mid)
    } else {
        (lo, hi)
    }
}

fn clamp_axis(value: f64, half: f64, margin: f64, extent: f64) -> f64 {
    let (lo, hi) = axis_bounds(half, margin, extent);
    value.clamp(lo, hi)
}
