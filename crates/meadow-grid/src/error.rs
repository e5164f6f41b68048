//! Grid construction error type.

use thiserror::Error;

/// Errors produced while building a [`TileGrid`][crate::TileGrid].
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,

    #[error("row {row} has width {got}, expected {expected}")]
    RaggedRow { row: usize, expected: usize, got: usize },

    #[error("unknown glyph {glyph:?} at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: usize, y: usize },

    #[error("grid has no floor cells")]
    NoFloor,

    #[error("grid of {width}x{height} exceeds the addressable cell range")]
    TooLarge { width: usize, height: usize },
}

pub type GridResult<T> = Result<T, GridError>;
