//! Decision rule for bouncing critters.

use elife_grid::Direction;
use rand::Rng;

use crate::action::Action;
use crate::entity::BouncingCritterState;
use crate::view::{View, EMPTY_GLYPH};

/// Heading used when a blocked critter has no empty neighbour at all.
pub const FALLBACK_DIRECTION: Direction = Direction::South;

/// Chooses a bouncing critter's action and updates its heading.
///
/// If the cell ahead is not empty the critter turns to a random empty
/// neighbour, or to [`FALLBACK_DIRECTION`] if there is none. It always
/// proposes a move along its (possibly new) heading.
pub fn decide<R: Rng + ?Sized>(
    state: &mut BouncingCritterState,
    view: &View<'_>,
    rng: &mut R,
) -> Option<Action> {
    if view.look(state.direction) != EMPTY_GLYPH {
        state.direction = view.find(EMPTY_GLYPH, rng).unwrap_or(FALLBACK_DIRECTION);
    }
    Some(Action::Move {
        direction: state.direction,
    })
}
