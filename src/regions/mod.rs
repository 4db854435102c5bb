//! Region extraction primitives.
//!
//! - [`DensityTable`]: per-pixel size of the largest all-member square ending
//!   there.
//! - [`RegionExtractor`]: turns local maxima of the table into rectangles,
//!   consuming the table as it claims cells.
//! - [`filter_overlap`]: greedy largest-first non-overlap filter.
//!
//! [`extract_regions`] chains the first two for one binary mask.

pub mod density;
pub mod extractor;
pub mod overlap;

pub use density::DensityTable;
pub use extractor::{is_similar, ExtractorParams, RegionExtractor};
pub use overlap::{filter_overlap, sort_by_area_desc};

use crate::error::Result;
use crate::image::BinaryMask;
use crate::types::Rect;

/// Density table + extraction for one mask, in scan order.
pub fn extract_regions(mask: &BinaryMask, params: ExtractorParams) -> Result<Vec<Rect>> {
    let table = DensityTable::build(mask)?;
    RegionExtractor::new(params).extract(table)
}
