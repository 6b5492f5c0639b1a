//! `View` provides an entity's read-only perception of its neighbourhood.
//!
//! A [`View`] is built for one entity for one decision. It exposes the eight
//! cells around the entity and nothing else.
//!
//! # Immutability
//!
//! `View` holds only a shared borrow of the grid. Decision rules receive
//! `&View`, so they can look but never write: every grid change goes through an
//! [`Action`](crate::action::Action) and the resolver.
//!
//! # Glyphs
//!
//! Neighbouring cells are reported as characters:
//! - [`OFF_BOARD_GLYPH`] (`'#'`) for positions outside the grid
//! - [`EMPTY_GLYPH`] (`' '`) for empty cells
//! - the occupant's origin character otherwise
//!
//! Off-board cells therefore look exactly like walls drawn with `#`.
//!
//! # Example
//!
//! ```
//! use elife_core::entity::{Body, Entity, EntityId};
//! use elife_core::entity::components::PlantState;
//! use elife_core::view::View;
//! use elife_grid::{Direction, Grid, Vector};
//!
//! let mut grid = Grid::new(2, 1);
//! grid.set(
//!     Vector::new(1, 0),
//!     Some(Entity::new(EntityId::new(0), '*', Body::Plant(PlantState::new(3.0)))),
//! )
//! .unwrap();
//!
//! let view = View::new(&grid, Vector::new(0, 0));
//! assert_eq!(view.look(Direction::East), '*');
//! assert_eq!(view.look(Direction::West), '#');
//! ```

use elife_grid::{Direction, DirectionSet, Grid, Vector};
use rand::Rng;

use crate::entity::{Entity, EntityKind};
pub use crate::legend::EMPTY_GLYPH;

/// Glyph reported for positions outside the grid.
pub const OFF_BOARD_GLYPH: char = '#';

/// Read-only sensor over the grid, centred on one position.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    grid: &'a Grid<Entity>,
    origin: Vector,
}

impl<'a> View<'a> {
    /// Creates a view centred on `origin`.
    #[must_use]
    pub const fn new(grid: &'a Grid<Entity>, origin: Vector) -> Self {
        Self { grid, origin }
    }

    /// Returns the position this view is centred on.
    #[must_use]
    pub const fn position(&self) -> Vector {
        self.origin
    }

    /// Returns the glyph of the neighbouring cell in `direction`.
    #[must_use]
    pub fn look(&self, direction: Direction) -> char {
        let target = self.origin.plus(direction.offset());
        if self.grid.is_inside(target) {
            self.grid.get(target).map_or(EMPTY_GLYPH, Entity::origin)
        } else {
            OFF_BOARD_GLYPH
        }
    }

    /// Returns the kind of the neighbour in `direction`.
    ///
    /// `None` for empty and off-board cells.
    #[must_use]
    pub fn look_kind(&self, direction: Direction) -> Option<EntityKind> {
        self.neighbour(direction).map(Entity::kind)
    }

    /// Returns the neighbouring entity in `direction`, if any.
    #[must_use]
    pub fn neighbour(&self, direction: Direction) -> Option<&'a Entity> {
        self.grid.get(self.origin.plus(direction.offset()))
    }

    /// Returns every direction whose neighbour renders as `glyph`.
    #[must_use]
    pub fn find_all(&self, glyph: char) -> DirectionSet {
        Direction::ALL
            .into_iter()
            .filter(|d| self.look(*d) == glyph)
            .collect()
    }

    /// Picks uniformly at random among [`find_all`](Self::find_all) results.
    pub fn find<R: Rng + ?Sized>(&self, glyph: char, rng: &mut R) -> Option<Direction> {
        pick(self.find_all(glyph), rng)
    }

    /// Returns every direction whose neighbour is of `kind`.
    #[must_use]
    pub fn find_all_kind(&self, kind: EntityKind) -> DirectionSet {
        Direction::ALL
            .into_iter()
            .filter(|d| self.look_kind(*d) == Some(kind))
            .collect()
    }

    /// Picks uniformly at random among [`find_all_kind`](Self::find_all_kind)
    /// results.
    pub fn find_kind<R: Rng + ?Sized>(&self, kind: EntityKind, rng: &mut R) -> Option<Direction> {
        pick(self.find_all_kind(kind), rng)
    }
}

fn pick<R: Rng + ?Sized>(candidates: DirectionSet, rng: &mut R) -> Option<Direction> {
    if candidates.is_empty() {
        return None;
    }
    candidates.nth(rng.gen_range(0..candidates.len()))
}
