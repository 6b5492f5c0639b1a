//! # elife-grid
//!
//! Fixed-size 2D grid substrate for the elife ecosystem simulation.
//!
//! The crate provides the spatial primitives the turn engine is built on:
//!
//! - [`Vector`]: immutable integer coordinates
//! - [`Direction`]: the eight compass directions with a constant offset table
//! - [`DirectionSet`]: a compact set of directions, iterated in compass order
//! - [`Grid`]: dense, bounds-checked storage of optional cell contents
//!
//! ## Quick Start
//!
//! ```
//! use elife_grid::{Direction, Grid, Vector};
//!
//! let mut grid: Grid<char> = Grid::new(3, 3);
//! let centre = Vector::new(1, 1);
//! grid.set(centre, Some('O')).unwrap();
//!
//! let north = centre.plus(Direction::North.offset());
//! assert!(grid.is_inside(north));
//! assert!(grid.is_empty_at(north));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod direction;
pub mod error;
pub mod grid;
pub mod vector;

pub use direction::{Direction, DirectionSet};
pub use error::{GridError, ParseDirectionError};
pub use grid::Grid;
pub use vector::Vector;
