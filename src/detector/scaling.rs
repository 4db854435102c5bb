//! Mapping between original-image and working-image resolution.
//!
//! - Minimum region sizes are specified against the original image (absolute
//!   pixels or fractions) and must follow the working resolution the edge map
//!   is computed at.
//! - Bounded-mode rectangles arrive in original-image pixels.
use crate::image::WorkingImage;
use crate::types::{MinSize, Rect};

/// Scale factors from the original image to the working image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorkingScale {
    pub scale_x: f64,
    pub scale_y: f64,
}

impl WorkingScale {
    pub fn of(image: &WorkingImage) -> Self {
        Self::from_dimensions(
            image.width(),
            image.height(),
            image.original_width(),
            image.original_height(),
        )
    }

    pub fn from_dimensions(
        working_width: usize,
        working_height: usize,
        original_width: usize,
        original_height: usize,
    ) -> Self {
        let ratio = |working: usize, original: usize| {
            if original > 0 {
                working as f64 / original as f64
            } else {
                1.0
            }
        };
        Self {
            scale_x: ratio(working_width, original_width),
            scale_y: ratio(working_height, original_height),
        }
    }

    /// Map an original-image rectangle into working pixels, truncating.
    pub fn rect_to_working(&self, rect: &Rect) -> Rect {
        let sx = |v: i32| (v as f64 * self.scale_x) as i32;
        let sy = |v: i32| (v as f64 * self.scale_y) as i32;
        Rect::new(sx(rect.min_x), sy(rect.min_y), sx(rect.max_x), sy(rect.max_y))
    }
}

/// Minimum width/height in working pixels.
///
/// Both sizes are rescaled with the horizontal factor; downscaling preserves
/// the aspect ratio so the two factors only differ by rounding.
pub fn resolve_min_sizes(image: &WorkingImage, min_width: MinSize, min_height: MinSize) -> (usize, usize) {
    let scale = WorkingScale::of(image).scale_x;
    let width = min_width.resolve(image.original_width()) * scale;
    let height = min_height.resolve(image.original_height()) * scale;
    (width.max(0.0) as usize, height.max(0.0) as usize)
}
