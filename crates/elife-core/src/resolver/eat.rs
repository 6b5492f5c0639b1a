//! Eat handler: absorb a neighbour's energy.

use elife_grid::Vector;

use crate::action::{Action, ActionKind};
use crate::entity::Entity;

use super::{check_destination, ActionHandler, ResolutionContext};

/// Handles [`Action::Eat`].
///
/// Succeeds when the destination holds an energy-bearing entity and the eater
/// carries energy itself. The eater gains all of the target's energy and the
/// target is removed from the grid. Walls and bouncing critters carry no
/// energy and cannot be eaten.
#[derive(Debug, Clone, Copy, Default)]
pub struct EatHandler;

impl ActionHandler for EatHandler {
    fn handles(&self) -> ActionKind {
        ActionKind::Eat
    }

    fn apply(&self, ctx: &mut ResolutionContext<'_>, from: Vector, action: &Action) -> bool {
        let Some(dest) = check_destination(ctx.grid, action, from) else {
            return false;
        };
        let Some(gain) = ctx.grid.get(dest).and_then(Entity::energy) else {
            return false;
        };
        let Some(energy) = ctx.grid.get_mut(from).and_then(Entity::energy_mut) else {
            return false;
        };
        *energy += gain;
        ctx.grid.take(dest);
        true
    }
}
