//! Error types for grid access and direction parsing.

use thiserror::Error;

/// Errors returned by fallible [`Grid`](crate::Grid) writes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The position lies outside the grid.
    #[error("position ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
        /// Grid width.
        width: i32,
        /// Grid height.
        height: i32,
    },
}

/// A string that is not one of the eight compass names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown compass direction {name:?}")]
pub struct ParseDirectionError {
    /// The rejected input.
    pub name: String,
}
