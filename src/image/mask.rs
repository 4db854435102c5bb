//! Owned binary mask derived from an edge map.
//!
//! Members are stored as `1`, everything else as `0`, in row-major order.
use super::traits::ImageView;
use crate::error::{Error, Result};
use image::GrayImage;
use serde::Deserialize;

/// Selects which edge-map pixels become mask members.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskPolarity {
    /// Pixels without an edge response are members.
    #[default]
    EdgeFree,
    /// Pixels with an edge response are members.
    Edge,
}

#[derive(Clone, Debug)]
pub struct BinaryMask {
    pub w: usize,
    pub h: usize,
    pub data: Vec<u8>,
}

impl BinaryMask {
    /// Build a mask from a `w × h` boolean grid given in row-major order.
    pub fn from_fn(w: usize, h: usize, mut member: impl FnMut(usize, usize) -> bool) -> Result<Self> {
        if w == 0 || h == 0 {
            return Err(Error::EmptyImage { width: w, height: h });
        }
        let mut data = vec![0u8; w * h];
        for y in 0..h {
            for x in 0..w {
                data[y * w + x] = member(x, y) as u8;
            }
        }
        Ok(Self { w, h, data })
    }

    /// Threshold an edge map (0 = no edge) into a mask.
    pub fn from_edge_map(edges: &GrayImage, polarity: MaskPolarity) -> Result<Self> {
        let (w, h) = (edges.width() as usize, edges.height() as usize);
        if w == 0 || h == 0 {
            return Err(Error::EmptyImage { width: w, height: h });
        }
        let data = edges
            .as_raw()
            .iter()
            .map(|&v| match polarity {
                MaskPolarity::EdgeFree => (v == 0) as u8,
                MaskPolarity::Edge => (v != 0) as u8,
            })
            .collect();
        Ok(Self { w, h, data })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.w + x] != 0
    }

    pub fn member_count(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

impl ImageView for BinaryMask {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}
