use super::timing::TimingBreakdown;
use crate::types::Rect;
use serde::Serialize;

/// Result of [`RegionDetector::search_with_diagnostics`](crate::RegionDetector).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    /// Final regions, largest first, at most `amount` of them.
    pub regions: Vec<Rect>,
    pub input: InputDescriptor,
    pub passes: Vec<ThresholdPass>,
    /// True when the sweep collected `amount` regions before running out of
    /// thresholds.
    pub target_reached: bool,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub original_width: usize,
    pub original_height: usize,
    pub amount: usize,
    /// Minimum width offset in working pixels after scaling.
    pub min_width_px: usize,
    /// Minimum height offset in working pixels after scaling.
    pub min_height_px: usize,
}

/// One edge-detection threshold of the sweep.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdPass {
    pub threshold: f32,
    /// Mask members at this threshold.
    pub mask_members: usize,
    /// Rectangles extracted by this pass alone.
    pub extracted: usize,
    /// Rectangles extracted by all passes so far.
    pub candidates_seen: usize,
    /// Size of the candidate set before overlap filtering.
    pub merged: usize,
    /// Size of the candidate set after overlap filtering.
    pub kept: usize,
    pub elapsed_ms: f64,
}

impl SearchReport {
    /// One-line-per-pass text summary for logs and the CLI.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "input {}x{} (original {}x{}) amount={} min={}x{}\n",
            self.input.width,
            self.input.height,
            self.input.original_width,
            self.input.original_height,
            self.input.amount,
            self.input.min_width_px,
            self.input.min_height_px
        );
        for pass in &self.passes {
            out.push_str(&format!(
                "  t={:>5.1} members={:>7} extracted={:>4} merged={:>4} kept={:>3} ({:.2} ms)\n",
                pass.threshold,
                pass.mask_members,
                pass.extracted,
                pass.merged,
                pass.kept,
                pass.elapsed_ms
            ));
        }
        out.push_str(&format!(
            "regions={} target_reached={} total={:.2} ms",
            self.regions.len(),
            self.target_reached,
            self.timings.total_ms
        ));
        out
    }
}
