//! Decision rule for plants.

use rand::Rng;

use crate::action::Action;
use crate::entity::PlantState;
use crate::view::{View, EMPTY_GLYPH};

/// A plant spreads only when its energy is strictly above this.
pub const SPREAD_ABOVE: f64 = 15.0;

/// A plant grows only when its energy is strictly below this.
pub const GROW_BELOW: f64 = 20.0;

/// Chooses a plant's action.
///
/// Above [`SPREAD_ABOVE`] a plant reproduces into a random empty neighbour.
/// Failing that, below [`GROW_BELOW`] it grows. Otherwise it idles.
pub fn decide<R: Rng + ?Sized>(state: &PlantState, view: &View<'_>, rng: &mut R) -> Option<Action> {
    if state.energy > SPREAD_ABOVE {
        if let Some(direction) = view.find(EMPTY_GLYPH, rng) {
            return Some(Action::Reproduce { direction });
        }
    }
    (state.energy < GROW_BELOW).then_some(Action::Grow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Body, Entity, EntityId};
    use elife_grid::{Direction, Grid, Vector};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn boxed_in() -> Grid<Entity> {
        let mut grid = Grid::new(3, 3);
        let mut id = 0;
        for pos in grid.positions().collect::<Vec<_>>() {
            if pos != Vector::new(1, 1) {
                grid.set(pos, Some(Entity::new(EntityId::new(id), '#', Body::Wall)))
                    .unwrap();
                id += 1;
            }
        }
        grid
    }

    #[test]
    fn low_energy_grows() {
        let grid = Grid::new(3, 3);
        let view = View::new(&grid, Vector::new(1, 1));
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(decide(&PlantState::new(5.0), &view, &mut rng), Some(Action::Grow));
    }

    #[test]
    fn rich_plant_with_space_reproduces() {
        let mut grid = boxed_in();
        grid.take(Vector::new(2, 1));
        let view = View::new(&grid, Vector::new(1, 1));
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            decide(&PlantState::new(16.0), &view, &mut rng),
            Some(Action::Reproduce {
                direction: Direction::East
            })
        );
    }

    #[test]
    fn rich_plant_without_space_grows() {
        let grid = boxed_in();
        let view = View::new(&grid, Vector::new(1, 1));
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(decide(&PlantState::new(16.0), &view, &mut rng), Some(Action::Grow));
    }

    #[test]
    fn saturated_plant_without_space_idles() {
        let grid = boxed_in();
        let view = View::new(&grid, Vector::new(1, 1));
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(decide(&PlantState::new(20.0), &view, &mut rng), None);
    }

    #[test]
    fn threshold_energy_does_not_spread() {
        let grid = Grid::new(3, 3);
        let view = View::new(&grid, Vector::new(1, 1));
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(decide(&PlantState::new(15.0), &view, &mut rng), Some(Action::Grow));
    }
}
