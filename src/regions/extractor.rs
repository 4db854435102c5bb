//! Greedy rectangle extraction from a density table.
//!
//! The table is scanned bottom-to-top, right-to-left. Every cell holding a
//! local maximum (its west neighbour is not larger) seeds a square of its own
//! size. The square is widened over identical squares to the left, then over
//! slightly smaller squares whose size is within `similarity_ratio` of the
//! seed, shrinking the rectangle height to the smaller square. Claimed cells
//! are zeroed so later seeds cannot reuse them.
//!
//! Cells right of a claim keep their square sizes, so a later seed can grow
//! back into an earlier rectangle. Such a seed is skipped even when its
//! rectangle is larger: within one pass the first claim in scan order wins.
use super::density::DensityTable;
use crate::error::{Error, Result};
use crate::image::ImageViewMut;
use crate::types::Rect;
use log::{trace, warn};
use serde::Deserialize;

/// Tunables of a single extraction pass. Sizes are in working pixels.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct ExtractorParams {
    /// Minimum width offset (rectangle width minus one) to accept.
    pub min_width: usize,
    /// Minimum height offset (rectangle height minus one) to accept.
    pub min_height: usize,
    /// Smallest accepted `neighbour / seed` square size ratio.
    pub similarity_ratio: f64,
}

impl Default for ExtractorParams {
    fn default() -> Self {
        Self {
            min_width: 0,
            min_height: 0,
            similarity_ratio: 0.6,
        }
    }
}

pub struct RegionExtractor {
    params: ExtractorParams,
}

impl RegionExtractor {
    pub fn new(params: ExtractorParams) -> Self {
        Self { params }
    }

    /// Extract rectangles in scan order. The table is consumed: claimed cells
    /// are zeroed while scanning, leaving it meaningless afterwards.
    pub fn extract(&self, mut table: DensityTable) -> Result<Vec<Rect>> {
        let (w, h) = (table.w, table.h);
        let mut rects: Vec<Rect> = Vec::new();

        for y in (1..h).rev() {
            for x in (1..w).rev() {
                let curr = table.get(x, y);
                let west = table.get(x - 1, y);
                if curr <= 1 || west > curr {
                    continue;
                }

                let (x_offset, y_offset) = self.grow(&table, x, y, curr);
                if x_offset < self.params.min_width || y_offset < self.params.min_height {
                    continue;
                }

                if x_offset > x || y_offset > y {
                    warn!(
                        "RegionExtractor::extract negative origin at ({}, {}) offsets=({}, {})",
                        x, y, x_offset, y_offset
                    );
                    return Err(Error::Internal(format!(
                        "claimed region at ({x}, {y}) with offsets ({x_offset}, {y_offset}) starts outside the table"
                    )));
                }

                let rect = Rect::new(
                    (x - x_offset) as i32,
                    (y - y_offset) as i32,
                    (x + 1) as i32,
                    (y + 1) as i32,
                );
                // Stale square sizes next to an earlier claim can reach into it.
                if rects.iter().any(|r| r.overlaps(&rect)) {
                    trace!("RegionExtractor::extract seed ({}, {}) overlaps a claim", x, y);
                    continue;
                }

                table.fill_window(x - x_offset, y - y_offset, x, y, 0);
                trace!("RegionExtractor::extract seed ({}, {}) size={} -> {:?}", x, y, curr, rect);
                rects.push(rect);
            }
        }

        Ok(rects)
    }

    /// Width and height offsets of the rectangle seeded at `(x, y)`.
    fn grow(&self, table: &DensityTable, x: usize, y: usize, curr: u32) -> (usize, usize) {
        let row = &table.data[y * table.w..(y + 1) * table.w];
        let mut x_offset = curr as usize - 1;
        let mut y_offset = curr as usize - 1;

        // Identical squares directly to the left.
        x_offset += row[..x].iter().rev().take_while(|&&n| n == curr).count();

        // Slightly smaller squares beyond the claimed span.
        let mut xw = x as isize - x_offset as isize - 1;
        while xw >= 0 {
            let n = row[xw as usize];
            if !is_similar(curr, n, self.params.similarity_ratio) {
                break;
            }
            y_offset = n as usize - 1;
            x_offset += 1;
            xw -= 1;
        }

        (x_offset, y_offset)
    }
}

/// True when a neighbouring square of size `n` may extend a seed of size
/// `curr`: strictly smaller, but at least `curr * ratio`.
#[inline]
pub fn is_similar(curr: u32, n: u32, ratio: f64) -> bool {
    n > 0 && n < curr && curr as f64 * ratio <= n as f64
}
