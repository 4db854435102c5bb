//! Parameter types configuring the threshold sweep and the bounded scorer.
//!
//! Defaults reproduce the behaviour the service has always shipped with:
//! Canny thresholds 3, 6, ..., 33 with a high/low ratio of 3, a blur kernel of
//! one twentieth of the shorter side and a 0.6 square similarity ratio.

use crate::image::MaskPolarity;
use serde::Deserialize;

/// Upper bound on the number of passes a sweep may run.
pub const MAX_THRESHOLD_PASSES: usize = 256;

/// Parameters of the multi-threshold region search.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// First Canny low threshold.
    pub threshold_start: f32,
    /// Increment between passes.
    pub threshold_step: f32,
    /// Exclusive upper bound of the low threshold.
    pub threshold_ceiling: f32,
    /// High/low Canny threshold ratio.
    pub edge_ratio: f32,
    /// Divisor of the shorter image side giving the blur kernel size.
    pub blur_divisor: u32,
    /// Smallest accepted neighbour/seed square ratio during extraction.
    pub similarity_ratio: f64,
    /// Which edge-map pixels the extractor grows regions over.
    pub polarity: MaskPolarity,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            threshold_start: 3.0,
            threshold_step: 3.0,
            threshold_ceiling: 36.0,
            edge_ratio: 3.0,
            blur_divisor: 20,
            similarity_ratio: 0.6,
            polarity: MaskPolarity::EdgeFree,
        }
    }
}

impl SearchParams {
    /// Low thresholds visited by the sweep, in order.
    ///
    /// The sweep ends at the first threshold when the step is non-positive,
    /// not finite or too small to move the threshold, and never runs more
    /// than [`MAX_THRESHOLD_PASSES`] passes.
    pub fn thresholds(&self) -> Vec<f32> {
        let mut out = Vec::new();
        let mut t = self.threshold_start;
        while t < self.threshold_ceiling && out.len() < MAX_THRESHOLD_PASSES {
            out.push(t);
            let next = t + self.threshold_step;
            if !next.is_finite() || next <= t {
                break;
            }
            t = next;
        }
        out
    }
}

/// Parameters of the bounded-mode scorer.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ScoreParams {
    /// Canny low threshold applied to every crop.
    pub threshold: f32,
    /// High/low Canny threshold ratio.
    pub edge_ratio: f32,
    /// Divisor of the shorter crop side giving the blur kernel size.
    pub blur_divisor: u32,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            threshold: 3.0,
            edge_ratio: 3.0,
            blur_divisor: 20,
        }
    }
}
