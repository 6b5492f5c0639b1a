//! Move handler: relocation into an empty neighbour.

use elife_grid::Vector;

use crate::action::{Action, ActionKind};

use super::{check_destination, ActionHandler, ResolutionContext};

/// Handles [`Action::Move`].
///
/// # Preconditions
///
/// 1. The destination is inside the grid and empty
/// 2. An energy-bearing mover has more than
///    [`move_threshold`](crate::config::EnergyConfig::move_threshold) energy
///
/// On success the mover pays
/// [`move_cost`](crate::config::EnergyConfig::move_cost) (if it carries
/// energy), its old cell is vacated and the destination holds the same entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveHandler;

impl ActionHandler for MoveHandler {
    fn handles(&self) -> ActionKind {
        ActionKind::Move
    }

    fn apply(&self, ctx: &mut ResolutionContext<'_>, from: Vector, action: &Action) -> bool {
        let Some(dest) = check_destination(ctx.grid, action, from) else {
            return false;
        };
        if !ctx.grid.is_empty_at(dest) {
            return false;
        }
        let Some(mover) = ctx.grid.get(from) else {
            return false;
        };
        if mover
            .energy()
            .is_some_and(|energy| energy <= ctx.energy.move_threshold)
        {
            return false;
        }

        let Some(mut mover) = ctx.grid.take(from) else {
            return false;
        };
        if let Some(energy) = mover.energy_mut() {
            *energy -= ctx.energy.move_cost;
        }
        // dest was bounds-checked and found empty above
        ctx.grid.set(dest, Some(mover)).is_ok()
    }
}
