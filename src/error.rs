//! Library error type.
//!
//! Errors are per call: a failed search or scoring run leaves no state behind,
//! so callers can simply report them and move on.
use crate::types::Rect;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The image or mask has no pixels.
    #[error("image has zero area ({width}x{height})")]
    EmptyImage { width: usize, height: usize },

    /// A caller-supplied rectangle is empty or lies outside the image.
    #[error("invalid bounds for rectangle {index} {rect:?} in {width}x{height} image")]
    InvalidBounds {
        index: usize,
        rect: Rect,
        width: usize,
        height: usize,
    },

    /// Internal bookkeeping produced an impossible rectangle.
    #[error("internal invariant violated: {0}")]
    Internal(String),

    #[error("image decoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
