//! Serializable diagnostics returned next to detection results.
//!
//! `SearchReport` is the main entry point: it carries the final regions plus
//! one `ThresholdPass` per edge threshold the sweep ran, so tools can see why
//! a search stopped where it did.

pub mod search;
pub mod timing;

pub use search::{InputDescriptor, SearchReport, ThresholdPass};
pub use timing::{StageTiming, TimingBreakdown};
