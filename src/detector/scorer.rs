//! Bounded mode: rank caller-supplied rectangles by edge density.
//!
//! Each rectangle is cropped out of the working image, edge-detected on its
//! own and scored by the mean intensity of the edge map. Results are sorted
//! ascending, so the calmest region comes first (e.g. to place an overlay).
use super::params::ScoreParams;
use super::scaling::WorkingScale;
use crate::edges::{mean_intensity, CannyEdgeDetector, EdgeDetector};
use crate::error::Result;
use crate::image::WorkingImage;
use crate::types::{Rect, ScoredRegion};
use image::GrayImage;
use log::debug;

pub struct RegionScorer<E = CannyEdgeDetector> {
    params: ScoreParams,
    edges: E,
}

impl RegionScorer<CannyEdgeDetector> {
    pub fn new(params: ScoreParams) -> Self {
        let edges = CannyEdgeDetector::new(params.blur_divisor);
        Self { params, edges }
    }
}

impl<E: EdgeDetector> RegionScorer<E> {
    pub fn with_edge_detector(params: ScoreParams, edges: E) -> Self {
        Self { params, edges }
    }

    /// Score rectangles given in working-image pixels.
    ///
    /// Every rectangle is bounds-checked before any work is done; a single
    /// invalid one fails the whole batch.
    pub fn score(&self, image: &WorkingImage, candidates: &[Rect]) -> Result<Vec<ScoredRegion>> {
        let crops = candidates
            .iter()
            .enumerate()
            .map(|(index, rect)| image.crop(index, rect))
            .collect::<Result<Vec<GrayImage>>>()?;

        let mut scores = self.score_crops(crops);
        scores.sort_by(|a, b| (a.score * a.score).total_cmp(&(b.score * b.score)));
        debug!(
            "RegionScorer::score candidates={} order={:?}",
            scores.len(),
            scores.iter().map(|s| s.index).collect::<Vec<_>>()
        );
        Ok(scores)
    }

    /// Edge map of every crop, in input order, as the scorer sees it.
    pub fn crop_edge_maps(&self, image: &WorkingImage, candidates: &[Rect]) -> Result<Vec<GrayImage>> {
        candidates
            .iter()
            .enumerate()
            .map(|(index, rect)| {
                let crop = image.crop(index, rect)?;
                Ok(self
                    .edges
                    .edge_map(&crop, self.params.threshold, self.params.edge_ratio))
            })
            .collect()
    }

    /// Score rectangles given in original-image pixels.
    pub fn score_original(&self, image: &WorkingImage, candidates: &[Rect]) -> Result<Vec<ScoredRegion>> {
        let scale = WorkingScale::of(image);
        let mapped: Vec<Rect> = candidates.iter().map(|r| scale.rect_to_working(r)).collect();
        self.score(image, &mapped)
    }

    fn score_one(&self, index: usize, crop: &GrayImage) -> ScoredRegion {
        let edge_map = self
            .edges
            .edge_map(crop, self.params.threshold, self.params.edge_ratio);
        ScoredRegion {
            index,
            score: mean_intensity(&edge_map),
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn score_crops(&self, crops: Vec<GrayImage>) -> Vec<ScoredRegion> {
        crops
            .iter()
            .enumerate()
            .map(|(index, crop)| self.score_one(index, crop))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn score_crops(&self, crops: Vec<GrayImage>) -> Vec<ScoredRegion> {
        use rayon::prelude::*;
        crops
            .par_iter()
            .enumerate()
            .map(|(index, crop)| self.score_one(index, crop))
            .collect()
    }
}
