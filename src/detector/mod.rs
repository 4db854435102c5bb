//! Region detector orchestrating the threshold sweep and bounded scoring.
//!
//! Overview
//! - `pipeline`: [`RegionDetector`] runs edge detection at increasing
//!   thresholds, extracts rectangles from each mask and merges them into a
//!   non-overlapping, area-ranked candidate set.
//! - `scorer`: [`RegionScorer`] ranks caller-supplied rectangles by the mean
//!   edge intensity of their crops (bounded mode).
//! - [`params`]: configuration shared by the library and the CLI.
//! - [`scaling`]: original ↔ working resolution helpers.
//!
//! Key ideas
//! - Sizes and coordinates supplied by callers refer to the original image;
//!   detection happens on a downscaled working copy.
//! - All tunables (similarity ratio, blur divisor, threshold sweep bounds)
//!   are plain parameters so tests can swap them out together with the edge
//!   source.

pub mod params;
mod pipeline;
pub mod scaling;
mod scorer;

pub use params::{ScoreParams, SearchParams};
pub use pipeline::RegionDetector;
pub use scaling::{resolve_min_sizes, WorkingScale};
pub use scorer::RegionScorer;

#[cfg(test)]
mod tests;
