//! Multi-threshold region search.
//!
//! The [`RegionDetector`] sweeps the edge-detection threshold from low to
//! high. Low thresholds give few, large and stable regions; higher ones give
//! more, smaller and noisier regions. Each pass is merged into a running
//! candidate set that is re-sorted by area and re-filtered for overlap, and
//! the sweep stops as soon as the requested number of regions is reached.
//!
//! Typical usage:
//! ```no_run
//! use region_finder::image::io::load_working_image;
//! use region_finder::{MinSize, RegionDetector, SearchParams};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), String> {
//! let image = load_working_image(Path::new("photo.jpg"), 800)?;
//! let detector = RegionDetector::new(SearchParams::default());
//! let regions = detector
//!     .search(&image, 3, MinSize::fraction(0.2), MinSize::pixels(200.0))
//!     .map_err(|e| e.to_string())?;
//! for r in regions {
//!     println!("{:?}", r);
//! }
//! # Ok(())
//! # }
//! ```
use super::params::SearchParams;
use super::scaling::resolve_min_sizes;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{InputDescriptor, SearchReport, ThresholdPass, TimingBreakdown};
use crate::edges::{CannyEdgeDetector, EdgeDetector};
use crate::error::{Error, Result};
use crate::image::{BinaryMask, WorkingImage};
use crate::regions::{filter_overlap, sort_by_area_desc, DensityTable, ExtractorParams, RegionExtractor};
use crate::types::{MinSize, Rect};
use log::debug;
use std::time::Instant;

/// Region search over a working image.
///
/// The detector only holds configuration, so one instance can serve many
/// images, from several threads if needed. Every call owns its own masks,
/// tables and candidate buffers.
pub struct RegionDetector<E = CannyEdgeDetector> {
    params: SearchParams,
    edges: E,
}

impl RegionDetector<CannyEdgeDetector> {
    /// Detector using Canny edges with the configured blur divisor.
    pub fn new(params: SearchParams) -> Self {
        let edges = CannyEdgeDetector::new(params.blur_divisor);
        Self { params, edges }
    }
}

impl<E: EdgeDetector> RegionDetector<E> {
    /// Detector using a custom edge source.
    pub fn with_edge_detector(params: SearchParams, edges: E) -> Self {
        Self { params, edges }
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Find up to `amount` non-overlapping regions, largest first.
    ///
    /// Fewer regions are returned when the sweep runs out of thresholds.
    pub fn search(
        &self,
        image: &WorkingImage,
        amount: usize,
        min_width: MinSize,
        min_height: MinSize,
    ) -> Result<Vec<Rect>> {
        Ok(self
            .search_with_diagnostics(image, amount, min_width, min_height)?
            .regions)
    }

    /// Same as [`search`](Self::search) and report every threshold pass.
    pub fn search_with_diagnostics(
        &self,
        image: &WorkingImage,
        amount: usize,
        min_width: MinSize,
        min_height: MinSize,
    ) -> Result<SearchReport> {
        let total_start = Instant::now();
        let amount = amount.max(1);
        let (min_width_px, min_height_px) = resolve_min_sizes(image, min_width, min_height);
        debug!(
            "RegionDetector::search start w={} h={} amount={} min={}x{}",
            image.width(),
            image.height(),
            amount,
            min_width_px,
            min_height_px
        );

        let extractor = RegionExtractor::new(ExtractorParams {
            min_width: min_width_px,
            min_height: min_height_px,
            similarity_ratio: self.params.similarity_ratio,
        });

        let mut timings = TimingBreakdown::default();
        let mut passes: Vec<ThresholdPass> = Vec::new();
        let mut candidates: Vec<Rect> = Vec::new();
        let mut candidates_seen = 0usize;
        let mut target_reached = false;

        for threshold in self.params.thresholds() {
            let pass_start = Instant::now();

            let mask = self.edge_mask(image, threshold)?;
            let mask_members = mask.member_count();
            let table = DensityTable::build(&mask)?;
            drop(mask);

            let mut found = extractor.extract(table)?;
            sort_by_area_desc(&mut found);
            let extracted = found.len();
            candidates_seen += extracted;

            candidates.extend(found);
            sort_by_area_desc(&mut candidates);
            let merged = candidates.len();
            candidates = filter_overlap(&candidates, amount);

            let pass_ms = elapsed_ms(pass_start);
            timings.push(format!("threshold {threshold}"), pass_ms);
            debug!(
                "RegionDetector::search t={} members={} extracted={} merged={} kept={}",
                threshold,
                mask_members,
                extracted,
                merged,
                candidates.len()
            );
            passes.push(ThresholdPass {
                threshold,
                mask_members,
                extracted,
                candidates_seen,
                merged,
                kept: candidates.len(),
                elapsed_ms: pass_ms,
            });

            if candidates.len() >= amount {
                target_reached = true;
                break;
            }
        }

        candidates.truncate(amount);
        timings.total_ms = elapsed_ms(total_start);
        debug!(
            "RegionDetector::search done regions={} passes={} target_reached={} total_ms={:.3}",
            candidates.len(),
            passes.len(),
            target_reached,
            timings.total_ms
        );

        Ok(SearchReport {
            regions: candidates,
            input: InputDescriptor {
                width: image.width(),
                height: image.height(),
                original_width: image.original_width(),
                original_height: image.original_height(),
                amount,
                min_width_px,
                min_height_px,
            },
            passes,
            target_reached,
            timings,
        })
    }

    /// Edge-detect the working image at `threshold` and threshold the result.
    fn edge_mask(&self, image: &WorkingImage, threshold: f32) -> Result<BinaryMask> {
        let edge_map = self
            .edges
            .edge_map(image.gray(), threshold, self.params.edge_ratio);
        if edge_map.dimensions() != image.gray().dimensions() {
            return Err(Error::Internal(format!(
                "edge map is {}x{}, expected {}x{}",
                edge_map.width(),
                edge_map.height(),
                image.width(),
                image.height()
            )));
        }
        BinaryMask::from_edge_map(&edge_map, self.params.polarity)
    }
}
