//! Grow handler: energy gain in place.

use elife_grid::Vector;

use crate::action::{Action, ActionKind};
use crate::entity::Entity;

use super::{ActionHandler, ResolutionContext};

/// Handles [`Action::Grow`].
///
/// Growing always succeeds. Energy-bearing actors gain
/// [`EnergyConfig::grow_gain`](crate::config::EnergyConfig::grow_gain); actors
/// without energy are unaffected.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrowHandler;

impl ActionHandler for GrowHandler {
    fn handles(&self) -> ActionKind {
        ActionKind::Grow
    }

    fn apply(&self, ctx: &mut ResolutionContext<'_>, from: Vector, _action: &Action) -> bool {
        if let Some(energy) = ctx.grid.get_mut(from).and_then(Entity::energy_mut) {
            *energy += ctx.energy.grow_gain;
        }
        true
    }
}
