//! Edge maps consumed by the region detector.
//!
//! The detector never computes gradients itself. It asks an [`EdgeDetector`]
//! for a binary-valued edge map (0 = no edge, non-zero = edge) at a given
//! sensitivity and works on the thresholded mask from there.
//!
//! - [`CannyEdgeDetector`] is the production implementation: a box blur whose
//!   kernel scales with the image, followed by Canny hysteresis from
//!   `imageproc`.
//! - Tests plug in synthetic detectors to drive the threshold sweep
//!   deterministically.

pub mod canny;

pub use canny::{blur_kernel_size, box_radius, CannyEdgeDetector};

use image::GrayImage;

/// Source of edge maps at a requested sensitivity.
///
/// Implementations are shared across threads by the parallel scorer.
pub trait EdgeDetector: Send + Sync {
    /// Edge map of `image` using `low_threshold` and a high threshold of
    /// `low_threshold * ratio`.
    fn edge_map(&self, image: &GrayImage, low_threshold: f32, ratio: f32) -> GrayImage;
}

impl<T: EdgeDetector + ?Sized> EdgeDetector for &T {
    fn edge_map(&self, image: &GrayImage, low_threshold: f32, ratio: f32) -> GrayImage {
        (**self).edge_map(image, low_threshold, ratio)
    }
}

/// Mean pixel value of a grayscale image, 0 for an empty image.
pub fn mean_intensity(image: &GrayImage) -> f64 {
    let raw = image.as_raw();
    if raw.is_empty() {
        return 0.0;
    }
    let sum: u64 = raw.iter().map(|&v| v as u64).sum();
    sum as f64 / raw.len() as f64
}
