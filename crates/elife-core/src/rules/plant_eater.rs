//! Decision rule for plant-eaters.

use rand::Rng;

use crate::action::Action;
use crate::entity::{EntityKind, PlantEaterState};
use crate::view::{View, EMPTY_GLYPH};

/// A plant-eater reproduces only when its energy is strictly above this.
pub const REPRODUCE_ABOVE: f64 = 60.0;

/// Chooses a plant-eater's action.
///
/// Priority order: reproduce into an empty neighbour when above
/// [`REPRODUCE_ABOVE`], eat an adjacent plant, step into an empty neighbour,
/// idle. The empty neighbour is drawn once and shared by the reproduce and move
/// branches.
pub fn decide<R: Rng + ?Sized>(
    state: &PlantEaterState,
    view: &View<'_>,
    rng: &mut R,
) -> Option<Action> {
    let space = view.find(EMPTY_GLYPH, rng);
    if state.energy > REPRODUCE_ABOVE {
        if let Some(direction) = space {
            return Some(Action::Reproduce { direction });
        }
    }
    if let Some(direction) = view.find_kind(EntityKind::Plant, rng) {
        return Some(Action::Eat { direction });
    }
    space.map(|direction| Action::Move { direction })
}
