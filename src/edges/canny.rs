//! Blur + Canny edge detection on top of `imageproc`.
//!
//! The blur kernel is `min(width, height) / blur_divisor` pixels wide, so the
//! amount of smoothing follows the image size. Kernels of one pixel or less
//! skip the blur entirely.
//!
//! The box filter is centred, so its width is always odd: an even kernel `k`
//! becomes a `k + 1` box (radius `k / 2`), an odd one keeps its width.
use super::EdgeDetector;
use image::GrayImage;
use imageproc::edges::canny;
use imageproc::filter::box_filter;
use log::trace;

/// Canny edge detector with size-proportional box blur.
#[derive(Clone, Copy, Debug)]
pub struct CannyEdgeDetector {
    /// Divisor applied to the shorter image side to get the blur kernel.
    pub blur_divisor: u32,
}

impl Default for CannyEdgeDetector {
    fn default() -> Self {
        Self { blur_divisor: 20 }
    }
}

impl CannyEdgeDetector {
    pub fn new(blur_divisor: u32) -> Self {
        Self { blur_divisor }
    }

    /// Blur `image` with the size-proportional box kernel.
    pub fn blur(&self, image: &GrayImage) -> GrayImage {
        let kernel = blur_kernel_size(image.width(), image.height(), self.blur_divisor);
        if kernel <= 1 {
            return image.clone();
        }
        let radius = box_radius(kernel);
        box_filter(image, radius, radius)
    }
}

impl EdgeDetector for CannyEdgeDetector {
    fn edge_map(&self, image: &GrayImage, low_threshold: f32, ratio: f32) -> GrayImage {
        if image.width() == 0 || image.height() == 0 {
            return GrayImage::new(image.width(), image.height());
        }
        let blurred = self.blur(image);
        let high_threshold = low_threshold * ratio;
        trace!(
            "CannyEdgeDetector::edge_map {}x{} low={} high={}",
            image.width(),
            image.height(),
            low_threshold,
            high_threshold
        );
        canny(&blurred, low_threshold, high_threshold)
    }
}

/// Blur kernel size for a `width × height` image.
#[inline]
pub fn blur_kernel_size(width: u32, height: u32, divisor: u32) -> u32 {
    if divisor == 0 {
        return 0;
    }
    width.min(height) / divisor
}

/// Radius of the centred box approximating a `kernel`-wide blur.
#[inline]
pub fn box_radius(kernel: u32) -> u32 {
    kernel / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn step_image(width: u32, height: u32, split_x: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, _| if x < split_x { Luma([20]) } else { Luma([230]) })
    }

    #[test]
    fn kernel_follows_shorter_side() {
        assert_eq!(blur_kernel_size(800, 600, 20), 30);
        assert_eq!(blur_kernel_size(19, 400, 20), 0);
        assert_eq!(blur_kernel_size(100, 100, 0), 0);
    }

    #[test]
    fn box_width_rounds_even_kernels_up() {
        // 800x600 working image: kernel 30, 31-wide box.
        let kernel = blur_kernel_size(800, 600, 20);
        assert_eq!(2 * box_radius(kernel) + 1, 31);
        assert_eq!(2 * box_radius(31) + 1, 31);
        assert_eq!(box_radius(2), 1);
    }

    #[test]
    fn blur_with_tiny_kernel_is_identity() {
        let img = step_image(30, 30, 15);
        assert_eq!(CannyEdgeDetector::default().blur(&img), img);
    }

    #[test]
    fn flat_image_has_no_edges() {
        let img = GrayImage::from_pixel(64, 64, Luma([128]));
        let edges = CannyEdgeDetector::default().edge_map(&img, 3.0, 3.0);
        assert!(edges.as_raw().iter().all(|&v| v == 0));
    }

    #[test]
    fn step_produces_edges_near_the_split() {
        let img = step_image(64, 64, 32);
        let edges = CannyEdgeDetector::default().edge_map(&img, 3.0, 3.0);
        let hits: Vec<u32> = (0..64)
            .filter(|&x| edges.get_pixel(x, 32)[0] != 0)
            .collect();
        assert!(!hits.is_empty(), "expected an edge response on the step");
        assert!(
            hits.iter().all(|&x| (24..=40).contains(&x)),
            "edge responses should stay near the step, got {:?}",
            hits
        );
    }
}
