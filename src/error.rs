//! Layout failure taxonomy.
//!
//! Every error is raised synchronously at the point of detection and
//! propagates to the caller unchanged; there is no retry or partial-output
//! recovery anywhere in the layout pipeline.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A wrap width of zero was requested.
    #[error("wrap width must be positive")]
    InvalidWidth,

    /// A fill string that is neither empty (the "omit this row" sentinel)
    /// nor exactly one character.
    #[error("fill must be a single character, got {0:?}")]
    InvalidFill(String),

    /// The configured width cannot hold the border markers of a filler row.
    #[error("width {width} too small for border markers ({need} required)")]
    WidthTooSmall { width: usize, need: usize },

    /// No room remains for body content between the left and right markers.
    #[error("width {width} leaves no room for content")]
    NoRoom { width: usize },
}
