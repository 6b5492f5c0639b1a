//! Error types for world construction.
//!
//! Only configuration mistakes are errors. Everything that can go wrong while
//! a turn resolves (blocked moves, empty targets, too little energy) is an
//! ordinary failed action handled by the penalty path.

use elife_grid::GridError;
use thiserror::Error;

/// Result alias for fallible world operations.
pub type Result<T> = std::result::Result<T, WorldError>;

/// Errors raised while building a world.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorldError {
    /// The map has no rows, or its rows are empty.
    #[error("map is empty")]
    EmptyMap,

    /// A row's length differs from the first row's.
    #[error("map row {row} has {found} cells, expected {expected}")]
    RaggedMap {
        /// Zero-based row index.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A map character has no legend entry.
    #[error("no legend entry for {glyph:?} at ({x}, {y})")]
    UnknownGlyph {
        /// The unmapped character.
        glyph: char,
        /// Column.
        x: usize,
        /// Row.
        y: usize,
    },

    /// The legend tried to map a character reserved for empty cells.
    #[error("{glyph:?} is reserved and cannot be a legend key")]
    ReservedGlyph {
        /// The reserved character.
        glyph: char,
    },

    /// The map is too large to address with grid coordinates.
    #[error("map of {width}x{height} cells is too large")]
    MapTooLarge {
        /// Row length.
        width: usize,
        /// Number of rows.
        height: usize,
    },

    /// An energy constant is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A grid write failed.
    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}
