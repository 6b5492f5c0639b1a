//! Reproduce handler: place an offspring in an empty neighbour.

use elife_grid::Vector;

use crate::action::{Action, ActionKind};
use crate::entity::{Entity, EntityKind};

use super::{check_destination, ActionHandler, ResolutionContext};

/// Handles [`Action::Reproduce`].
///
/// The offspring is built from the legend using the parent's origin glyph, so
/// it has the parent's kind and its kind's default starting energy. The parent
/// must hold strictly more than twice that energy, and pays exactly twice that
/// energy on success.
///
/// # Preconditions
///
/// 1. The destination is inside the grid and empty
/// 2. The parent carries energy
/// 3. The parent's glyph is in the legend
/// 4. Parent energy > 2 x offspring energy
///
/// Every check that needs no randomness runs before the offspring is drawn, so
/// a blocked or unmapped parent leaves the random source untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReproduceHandler;

impl ActionHandler for ReproduceHandler {
    fn handles(&self) -> ActionKind {
        ActionKind::Reproduce
    }

    fn apply(&self, ctx: &mut ResolutionContext<'_>, from: Vector, action: &Action) -> bool {
        let Some(dest) = check_destination(ctx.grid, action, from) else {
            return false;
        };
        let Some(parent) = ctx.grid.get(from) else {
            return false;
        };
        let (origin, Some(available)) = (parent.origin(), parent.energy()) else {
            return false;
        };
        if !ctx.grid.is_empty_at(dest)
            || !ctx.legend.kind_for(origin).is_some_and(EntityKind::has_energy)
        {
            return false;
        }
        // only the energy check below depends on the drawn body
        let Some(body) = ctx.legend.body_for(origin, ctx.energy, &mut *ctx.rng) else {
            return false;
        };
        let Some(cost) = body.energy().map(|energy| 2.0 * energy) else {
            return false;
        };
        if available <= cost {
            return false;
        }

        if let Some(energy) = ctx.grid.get_mut(from).and_then(Entity::energy_mut) {
            *energy -= cost;
        }
        let offspring = Entity::new(ctx.ids.allocate(), origin, body);
        // dest was bounds-checked and found empty above
        ctx.grid.set(dest, Some(offspring)).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::test_support::Harness;
    use elife_grid::Direction;
    use proptest::prelude::*;
    use rand::RngCore;

    fn spawn(direction: Direction) -> Action {
        Action::Reproduce { direction }
    }

    #[test]
    fn rich_eater_spawns_default_offspring() {
        let mut h = Harness::new(3, 1);
        let parent = h.eater(1, 0, 61.0);
        assert!(h.apply(&ReproduceHandler, 1, 0, spawn(Direction::East)));

        assert_eq!(h.energy_at(1, 0), Some(21.0));
        let child = h.grid.get(Vector::new(2, 0)).unwrap();
        assert_eq!(child.origin(), 'O');
        assert_eq!(child.kind(), EntityKind::PlantEater);
        assert_eq!(child.energy(), Some(20.0));
        assert_ne!(child.id(), parent);
    }

    #[test]
    fn exactly_twice_default_is_not_enough() {
        let mut h = Harness::new(2, 1);
        h.eater(0, 0, 40.0);
        assert!(!h.apply(&ReproduceHandler, 0, 0, spawn(Direction::East)));
        assert_eq!(h.energy_at(0, 0), Some(40.0));
        assert!(h.grid.is_empty_at(Vector::new(1, 0)));
    }

    #[test]
    fn occupied_destination_blocks_reproduction() {
        let mut h = Harness::new(2, 1);
        h.eater(0, 0, 100.0);
        h.wall(1, 0);
        assert!(!h.apply(&ReproduceHandler, 0, 0, spawn(Direction::East)));
        assert_eq!(h.energy_at(0, 0), Some(100.0));
    }

    #[test]
    fn blocked_reproduction_leaves_rng_untouched() {
        let mut h = Harness::new(2, 1);
        h.plant(0, 0, 16.0);
        h.wall(1, 0);
        let mut untouched = h.rng.clone();

        assert!(!h.apply(&ReproduceHandler, 0, 0, spawn(Direction::East)));
        assert_eq!(h.rng.next_u64(), untouched.next_u64());
    }

    #[test]
    fn plant_offspring_energy_is_drawn_from_default_range() {
        let mut h = Harness::new(2, 1);
        h.plant(0, 0, 16.0);
        assert!(h.apply(&ReproduceHandler, 0, 0, spawn(Direction::East)));

        let child = h.grid.get(Vector::new(1, 0)).unwrap().energy().unwrap();
        assert!((3.0..7.0).contains(&child));
        let parent = h.energy_at(0, 0).unwrap();
        assert!((parent - (16.0 - 2.0 * child)).abs() < 1e-9);
    }

    #[test]
    fn offspring_keeps_custom_glyph() {
        let mut h = Harness::new(2, 1);
        h.legend = crate::legend::Legend::new([('v', EntityKind::Plant)]).unwrap();
        h.put(
            0,
            0,
            'v',
            crate::entity::Body::Plant(crate::entity::PlantState::new(30.0)),
        );
        assert!(h.apply(&ReproduceHandler, 0, 0, spawn(Direction::East)));
        assert_eq!(h.grid.get(Vector::new(1, 0)).unwrap().origin(), 'v');
    }

    #[test]
    fn unmapped_glyph_cannot_reproduce() {
        let mut h = Harness::new(2, 1);
        h.legend = crate::legend::Legend::new([('#', EntityKind::Wall)]).unwrap();
        h.eater(0, 0, 100.0);
        assert!(!h.apply(&ReproduceHandler, 0, 0, spawn(Direction::East)));
    }

    proptest! {
        #[test]
        fn reproduce_requires_more_than_twice_default(energy in 0.0f64..100.0) {
            let mut h = Harness::new(2, 1);
            h.eater(0, 0, energy);
            let ok = h.apply(&ReproduceHandler, 0, 0, spawn(Direction::East));
            prop_assert_eq!(ok, energy > 40.0);
            let after = h.energy_at(0, 0).unwrap();
            if ok {
                prop_assert!((after - (energy - 40.0)).abs() < 1e-9);
                prop_assert_eq!(h.energy_at(1, 0), Some(20.0));
            } else {
                prop_assert!((after - energy).abs() < 1e-9);
            }
        }
    }
}
