//! Axis-aligned bounding box collision for placed words.
//!
//! Boxes live in container pixel space with the origin at the top
//! left. The index is a flat list scanned linearly per query, which
//! is O(n^2) over a full layout and fine for clouds of a few hundred
//! words.

/// Axis-aligned rectangle, `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn centered(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self {
            x: cx - width / 2.0,
            y: cy - height / 2.0,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Grown by `margin` on every side.
    pub fn inflate(&self, margin: f64) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + 2.0 * margin,
            height: self.height + 2.0 * margin,
        }
    }

    /// True if the interiors intersect.
    /// Touching (shared edge or corner) is NOT counted as overlap.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        !(self.right() <= other.x
            || other.right() <= self.x
            || self.bottom() <= other.y
            || other.bottom() <= self.y)
    }
}

/// Boxes accepted so far in one layout pass, stored inflated.
#[derive(Debug, Clone)]
pub struct CollisionIndex {
    margin: f64,
    boxes: Vec<BoundingBox>,
}

impl CollisionIndex {
    pub fn new(margin: f64) -> Self {
        Self {
            margin,
            boxes: Vec::new(),
        }
    }

    pub fn with_capacity(margin: f64, capacity: usize) -> Self {
        Self {
            margin,
            boxes: Vec::with_capacity(capacity),
        }
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Stored (inflated) boxes in acceptance order.
    pub fn boxes(&self) -> &[BoundingBox] {
        &self.boxes
    }

    /// True if `candidate`, inflated by the margin, overlaps any
    /// accepted box.
    pub fn test(&self, candidate: &BoundingBox) -> bool {
        let inflated = candidate.inflate(self.margin);
        self.boxes.iter().any(|b| b.overlaps(&inflated))
    }

    pub fn accept(&mut self, bbox: BoundingBox) {
        self.boxes.push(bbox.inflate(self.margin));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separated_no_overlap() {
        let a = BoundingBox::centered(0.0, 0.0, 5.0, 2.5);
        let b = BoundingBox::centered(10.0, 0.0, 5.0, 2.5);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn overlapping() {
        let a = BoundingBox::centered(0.0, 0.0, 5.0, 2.5);
        let b = BoundingBox::centered(3.0, 0.0, 5.0, 2.5);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn touching_no_overlap() {
        let a = BoundingBox::centered(0.0, 0.0, 5.0, 2.5);
        let b = BoundingBox::centered(5.0, 0.0, 5.0, 2.5);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn touching_corner_no_overlap() {
        let a = BoundingBox::centered(0.0, 0.0, 5.0, 2.5);
        let b = BoundingBox::centered(5.0, 2.5, 5.0, 2.5);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn contained_overlaps() {
        let outer = BoundingBox::centered(0.0, 0.0, 10.0, 10.0);
        let inner = BoundingBox::centered(1.0, 1.0, 2.0, 2.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn inflate_grows_every_side() {
        let b = BoundingBox::centered(10.0, 10.0, 4.0, 2.0).inflate(1.0);
        let expected = BoundingBox {
            x: 7.0,
            y: 8.0,
            width: 6.0,
            height: 4.0,
        };
        assert_eq!(b, expected);
        assert_eq!(b.center(), (10.0, 10.0));
    }

    #[test]
    fn margin_blocks_near_miss() {
        let mut index = CollisionIndex::new(2.0);
        index.accept(BoundingBox::centered(0.0, 0.0, 10.0, 10.0));
        // 1px gap: fine without margin, blocked with 2px on each box.
        let near = BoundingBox::centered(11.0, 0.0, 10.0, 10.0);
        assert!(index.test(&near));
        let far = BoundingBox::centered(14.0, 0.0, 10.0, 10.0);
        assert!(!index.test(&far));
    }

    #[test]
    fn empty_index_accepts_anything() {
        let index = CollisionIndex::new(5.0);
        assert!(index.is_empty());
        assert!(!index.test(&BoundingBox::centered(0.0, 0.0, 100.0, 100.0)));
    }

    #[test]
    fn accept_stores_inflated() {
        let mut index = CollisionIndex::with_capacity(3.0, 4);
        index.accept(BoundingBox::centered(50.0, 50.0, 10.0, 10.0));
        assert_eq!(index.len(), 1);
        assert_eq!(index.boxes()[0].width, 16.0);
        assert_eq!(index.margin(), 3.0);
    }
}
