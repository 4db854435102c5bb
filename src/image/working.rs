//! Downscaled grayscale image the detector works on.
//!
//! Detection runs at a bounded resolution. The working image keeps the
//! original dimensions around so size thresholds and caller coordinates can
//! be mapped into working pixels.
use crate::error::{Error, Result};
use crate::types::Rect;
use image::imageops::{self, FilterType};
use image::GrayImage;
use log::debug;

/// Default bound on the longer side of the working image.
pub const DEFAULT_MAX_SIZE: u32 = 800;

#[derive(Clone, Debug)]
pub struct WorkingImage {
    gray: GrayImage,
    original_width: usize,
    original_height: usize,
}

impl WorkingImage {
    /// Wrap a grayscale image, downscaling it when either side exceeds
    /// `max_size`. The aspect ratio of the original is preserved.
    pub fn from_gray(gray: GrayImage, max_size: u32) -> Result<Self> {
        let (ow, oh) = gray.dimensions();
        if ow == 0 || oh == 0 {
            return Err(Error::EmptyImage {
                width: ow as usize,
                height: oh as usize,
            });
        }
        let (w, h) = fit_within(ow, oh, max_size);
        let gray = if (w, h) == (ow, oh) {
            gray
        } else {
            debug!("WorkingImage::from_gray resize {}x{} -> {}x{}", ow, oh, w, h);
            imageops::resize(&gray, w, h, FilterType::Triangle)
        };
        Ok(Self {
            gray,
            original_width: ow as usize,
            original_height: oh as usize,
        })
    }

    pub fn gray(&self) -> &GrayImage {
        &self.gray
    }

    pub fn width(&self) -> usize {
        self.gray.width() as usize
    }

    pub fn height(&self) -> usize {
        self.gray.height() as usize
    }

    pub fn original_width(&self) -> usize {
        self.original_width
    }

    pub fn original_height(&self) -> usize {
        self.original_height
    }

    /// Copy out the pixels covered by `rect`.
    ///
    /// `index` only labels the error when the rectangle is empty or leaves
    /// the image.
    pub fn crop(&self, index: usize, rect: &Rect) -> Result<GrayImage> {
        let (w, h) = (self.width(), self.height());
        if rect.is_empty() || !rect.within(w, h) {
            return Err(Error::InvalidBounds {
                index,
                rect: *rect,
                width: w,
                height: h,
            });
        }
        Ok(imageops::crop_imm(
            &self.gray,
            rect.min_x as u32,
            rect.min_y as u32,
            rect.dx() as u32,
            rect.dy() as u32,
        )
        .to_image())
    }
}

/// Target dimensions for an aspect-preserving downscale.
pub fn fit_within(width: u32, height: u32, max_size: u32) -> (u32, u32) {
    let ratio = width as f64 / height as f64;
    let (mut w, mut h) = (width, height);
    if w > max_size {
        w = max_size;
        h = (max_size as f64 / ratio) as u32;
    }
    if h > max_size {
        w = (max_size as f64 * ratio) as u32;
        h = max_size;
    }
    (w.max(1), h.max(1))
}
