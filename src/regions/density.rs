use crate::error::{Error, Result};
use crate::image::{BinaryMask, ImageView, ImageViewMut};

/// Largest all-member square ending at each pixel.
///
/// A value `k` at `(x, y)` guarantees a `k × k` square of mask members whose
/// bottom-right corner is `(x, y)`. Row 0 and column 0 hold the raw mask
/// value since there is nothing to look back at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DensityTable {
    pub(crate) w: usize,
    pub(crate) h: usize,
    pub(crate) data: Vec<u32>,
}

impl DensityTable {
    /// Build the table for `mask`. Cells are evaluated row-major since each
    /// one depends on its left, upper and upper-left neighbours.
    pub fn build(mask: &BinaryMask) -> Result<Self> {
        let (w, h) = (mask.width(), mask.height());
        if w == 0 || h == 0 || mask.data.len() != w * h {
            return Err(Error::EmptyImage { width: w, height: h });
        }

        let mut data = vec![0u32; w * h];
        for (x, cell) in data[..w].iter_mut().enumerate() {
            *cell = mask.get(x, 0) as u32;
        }
        for y in 1..h {
            data[y * w] = mask.get(0, y) as u32;
        }

        for y in 1..h {
            let (prev, curr) = data.split_at_mut(y * w);
            let up_row = &prev[(y - 1) * w..];
            let mask_row = mask.row(y);
            for x in 1..w {
                if mask_row[x] == 0 {
                    continue;
                }
                let left = curr[x - 1];
                let up = up_row[x];
                let up_left = up_row[x - 1];
                curr[x] = left.min(up).min(up_left) + 1;
            }
        }

        Ok(Self { w, h, data })
    }

    /// Wrap precomputed values, e.g. a table saved by a tool.
    pub fn from_raw(w: usize, h: usize, data: Vec<u32>) -> Result<Self> {
        if w == 0 || h == 0 || data.len() != w * h {
            return Err(Error::EmptyImage { width: w, height: h });
        }
        Ok(Self { w, h, data })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.data[y * self.w + x]
    }

    /// Largest value and its first position in row-major order.
    pub fn peak(&self) -> (usize, usize, u32) {
        let mut best = (0, 0, 0);
        for (idx, &v) in self.data.iter().enumerate() {
            if v > best.2 {
                best = (idx % self.w, idx / self.w, v);
            }
        }
        best
    }
}

impl ImageView for DensityTable {
    type Pixel = u32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u32] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for DensityTable {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u32] {
        let start = y * self.w;
        &mut self.data[start..start + self.w]
    }
}
