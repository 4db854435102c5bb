#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod types;

// Building blocks, public for tools and tests.
pub mod config;
pub mod edges;
pub mod regions;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{RegionDetector, RegionScorer, ScoreParams, SearchParams};
pub use crate::diagnostics::SearchReport;
pub use crate::error::{Error, Result};
pub use crate::types::{MinSize, Rect, ScoredRegion};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use region_finder::prelude::*;
///
/// # fn main() -> region_finder::Result<()> {
/// let gray = ::image::GrayImage::new(640, 480);
/// let image = WorkingImage::from_gray(gray, 800)?;
/// let detector = RegionDetector::new(SearchParams::default());
/// let regions = detector.search(&image, 3, MinSize::pixels(40.0), MinSize::pixels(40.0))?;
/// println!("found {} regions", regions.len());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::WorkingImage;
    pub use crate::{MinSize, Rect, RegionDetector, RegionScorer, ScoreParams, SearchParams};
}
