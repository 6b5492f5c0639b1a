//! Dense, fixed-size 2D storage of optional cell contents.
//!
//! A [`Grid`] never changes size after construction. Every accessor is
//! bounds-checked: reads outside the grid return `None` and writes outside the
//! grid return [`GridError::OutOfBounds`], so callers never index out of range.
//!
//! # Iteration
//!
//! [`Grid::iter`] walks occupied cells in row-major order (`y` outer, `x`
//! inner). Because it borrows the grid, cell contents cannot change while it
//! runs. Callers that need to mutate while walking should iterate
//! [`Grid::positions`] and re-read each cell.

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::vector::Vector;

/// A dense `width x height` grid where each cell holds at most one `T`.
///
/// # Example
///
/// ```
/// use elife_grid::{Grid, Vector};
///
/// let mut grid: Grid<char> = Grid::new(3, 2);
/// grid.set(Vector::new(2, 1), Some('x')).unwrap();
///
/// assert!(grid.is_inside(Vector::new(2, 1)));
/// assert!(!grid.is_inside(Vector::new(3, 0)));
/// assert_eq!(grid.get(Vector::new(2, 1)), Some(&'x'));
/// assert_eq!(grid.get(Vector::new(-1, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid<T> {
    width: i32,
    height: i32,
    cells: Vec<Option<T>>,
}

impl<T> Grid<T> {
    /// Creates an empty grid.
    ///
    /// Negative dimensions are clamped to zero.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let size = usize::try_from(width).unwrap_or(0) * usize::try_from(height).unwrap_or(0);
        let mut cells = Vec::with_capacity(size);
        cells.resize_with(size, || None);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Grid width in cells.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Returns `true` if `pos` lies within the grid.
    #[must_use]
    pub const fn is_inside(&self, pos: Vector) -> bool {
        pos.x() >= 0 && pos.x() < self.width && pos.y() >= 0 && pos.y() < self.height
    }

    /// Returns the contents of the cell at `pos`.
    ///
    /// Returns `None` if the cell is empty or `pos` is outside the grid.
    #[must_use]
    pub fn get(&self, pos: Vector) -> Option<&T> {
        self.index_of(pos).and_then(|i| self.cells[i].as_ref())
    }

    /// Returns mutable access to the contents of the cell at `pos`.
    #[must_use]
    pub fn get_mut(&mut self, pos: Vector) -> Option<&mut T> {
        self.index_of(pos).and_then(|i| self.cells[i].as_mut())
    }

    /// Returns `true` if `pos` is inside the grid and holds nothing.
    #[must_use]
    pub fn is_empty_at(&self, pos: Vector) -> bool {
        self.index_of(pos).is_some_and(|i| self.cells[i].is_none())
    }

    /// Replaces the contents of the cell at `pos`, returning the old contents.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is outside the grid. The
    /// grid is left unchanged in that case.
    pub fn set(&mut self, pos: Vector, value: Option<T>) -> Result<Option<T>, GridError> {
        let index = self.index_of(pos).ok_or(GridError::OutOfBounds {
            x: pos.x(),
            y: pos.y(),
            width: self.width,
            height: self.height,
        })?;
        Ok(std::mem::replace(&mut self.cells[index], value))
    }

    /// Empties the cell at `pos`, returning whatever it held.
    ///
    /// Positions outside the grid hold nothing, so this returns `None` for them.
    pub fn take(&mut self, pos: Vector) -> Option<T> {
        self.index_of(pos).and_then(|i| self.cells[i].take())
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterates every in-bounds position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Vector> {
        let width = self.width;
        let height = self.height;
        (0..height).flat_map(move |y| (0..width).map(move |x| Vector::new(x, y)))
    }

    /// Iterates occupied cells in row-major order, skipping empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (Vector, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.as_ref().map(|value| (self.index_to_pos(i), value)))
    }

    /// Calls `f` once for every occupied cell, in row-major order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T, Vector),
    {
        for (pos, value) in self.iter() {
            f(value, pos);
        }
    }

    /// Iterates one row of cells, including empty ones.
    ///
    /// Rows outside the grid yield nothing.
    pub fn row(&self, y: i32) -> impl Iterator<Item = Option<&T>> + '_ {
        let range = if y >= 0 && y < self.height {
            let start = self.linear(0, y);
            start..start + self.width_usize()
        } else {
            0..0
        };
        self.cells[range].iter().map(Option::as_ref)
    }

    /// Converts a linear cell index back to a position.
    #[must_use]
    pub fn index_to_pos(&self, index: usize) -> Vector {
        let width = self.width_usize().max(1);
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let (x, y) = ((index % width) as i32, (index / width) as i32);
        Vector::new(x, y)
    }

    /// Converts a position to its linear index (`x + width * y`), if inside.
    #[must_use]
    pub fn index_of(&self, pos: Vector) -> Option<usize> {
        self.is_inside(pos).then(|| self.linear(pos.x(), pos.y()))
    }

    // Caller guarantees (x, y) is inside.
    #[allow(clippy::cast_sign_loss)]
    fn linear(&self, x: i32, y: i32) -> usize {
        x as usize + self.width_usize() * y as usize
    }

    #[allow(clippy::cast_sign_loss)]
    const fn width_usize(&self) -> usize {
        self.width as usize
    }
}
