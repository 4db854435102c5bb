use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in working-image pixels.
///
/// The max corner is exclusive, so a rectangle covering the single pixel
/// `(3, 4)` is `Rect::new(3, 4, 4, 5)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Rect {
    /// Build a rectangle from two corners, swapping coordinates if needed so
    /// that `min <= max` on both axes.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min_x: x0.min(x1),
            min_y: y0.min(y1),
            max_x: x0.max(x1),
            max_y: y0.max(y1),
        }
    }

    #[inline]
    pub fn dx(&self) -> i32 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn dy(&self) -> i32 {
        self.max_y - self.min_y
    }

    #[inline]
    pub fn area(&self) -> i64 {
        self.dx() as i64 * self.dy() as i64
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }

    /// True when the two rectangles share a non-empty intersection.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }

    /// True when every corner lies inside `[0, width] x [0, height]`.
    pub fn within(&self, width: usize, height: usize) -> bool {
        let (w, h) = (width as i64, height as i64);
        let inside = |v: i32, limit: i64| v >= 0 && (v as i64) <= limit;
        inside(self.min_x, w) && inside(self.max_x, w) && inside(self.min_y, h) && inside(self.max_y, h)
    }
}

/// Bounded-mode score of a caller-supplied rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRegion {
    /// Position of the rectangle in the caller's input list.
    pub index: usize,
    /// Mean edge intensity of the cropped region (0..=255).
    pub score: f64,
}

/// Minimum region size along one axis.
///
/// Values `>= 1` are absolute pixels of the original image, values below 1
/// are fractions of the original dimension.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinSize(pub f64);

impl MinSize {
    pub fn pixels(px: f64) -> Self {
        Self(px)
    }

    pub fn fraction(f: f64) -> Self {
        Self(f)
    }

    /// Size in original-image pixels.
    pub fn resolve(self, original_extent: usize) -> f64 {
        if self.0 < 1.0 {
            original_extent as f64 * self.0
        } else {
            self.0
        }
    }
}

impl Default for MinSize {
    fn default() -> Self {
        Self(1.0)
    }
}
