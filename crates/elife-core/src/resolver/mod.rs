//! Action resolution.
//!
//! Handlers validate a proposed [`Action`] against the grid and the actor's
//! energy, and apply it if it is legal. They are the only code that mutates the
//! grid during a turn.
//!
//! # Architecture
//!
//! Each handler declares the action kind it handles via
//! [`ActionHandler::handles()`]. The [`ActionResolver`] is an immutable dispatch
//! table from kind to handler, built once per world:
//! 1. The world asks an entity for an action
//! 2. The resolver routes it to the handler for its kind
//! 3. The handler mutates the grid and returns `true`, or leaves everything
//!    untouched and returns `false`
//!
//! # Invariants
//!
//! - A handler that returns `false` MUST NOT have mutated the grid or any
//!   entity. It may have drawn from the random source
//! - Handlers MUST bounds-check destinations (see [`check_destination`])
//! - Failure is an ordinary outcome, never an error or panic
//!
//! # Available Handlers
//!
//! - [`GrowHandler`]: gain energy in place
//! - [`MoveHandler`]: step into an empty neighbour
//! - [`EatHandler`]: absorb an energy-bearing neighbour
//! - [`ReproduceHandler`]: place an offspring in an empty neighbour

mod eat;
mod grow;
mod movement;
mod reproduce;

pub use eat::EatHandler;
pub use grow::GrowHandler;
pub use movement::MoveHandler;
pub use reproduce::ReproduceHandler;

use std::collections::BTreeMap;
use std::fmt;

use elife_grid::{Grid, Vector};
use rand::RngCore;

use crate::action::{Action, ActionKind};
use crate::config::EnergyConfig;
use crate::entity::{Entity, IdAllocator};
use crate::legend::Legend;

// =============================================================================
// Resolution Context
// =============================================================================

/// Everything a handler may read or write while applying one action.
pub struct ResolutionContext<'a> {
    /// The world's grid.
    pub grid: &'a mut Grid<Entity>,
    /// Legend used to build offspring.
    pub legend: &'a Legend,
    /// Energy economy.
    pub energy: &'a EnergyConfig,
    /// Random source for offspring construction.
    pub rng: &'a mut dyn RngCore,
    /// Id source for offspring.
    pub ids: &'a mut IdAllocator,
}

impl fmt::Debug for ResolutionContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionContext")
            .field("grid", &format!("{}x{}", self.grid.width(), self.grid.height()))
            .field("legend", self.legend)
            .field("energy", self.energy)
            .field("ids", self.ids)
            .finish_non_exhaustive()
    }
}

/// Resolves the destination cell of a directed action.
///
/// Returns `None` if the action has no direction or the target lies outside
/// the grid.
#[must_use]
pub fn check_destination(grid: &Grid<Entity>, action: &Action, from: Vector) -> Option<Vector> {
    let dest = from.plus(action.direction()?.offset());
    grid.is_inside(dest).then_some(dest)
}

// =============================================================================
// ActionHandler
// =============================================================================

/// Validates and applies one kind of action.
///
/// # Example
///
/// ```
/// use elife_core::action::{Action, ActionKind};
/// use elife_core::resolver::{ActionHandler, ResolutionContext};
/// use elife_grid::Vector;
///
/// struct Refuse;
///
/// impl ActionHandler for Refuse {
///     fn handles(&self) -> ActionKind {
///         ActionKind::Grow
///     }
///
///     fn apply(&self, _ctx: &mut ResolutionContext<'_>, _from: Vector, _action: &Action) -> bool {
///         false
///     }
/// }
/// ```
pub trait ActionHandler: Send + Sync {
    /// Returns the action kind this handler applies.
    fn handles(&self) -> ActionKind;

    /// Applies `action` for the entity at `from`.
    ///
    /// Returns `true` if the action took effect. On `false` the grid and every
    /// entity are unchanged, though the random source may have advanced.
    fn apply(&self, ctx: &mut ResolutionContext<'_>, from: Vector, action: &Action) -> bool;
}

// =============================================================================
// ActionResolver
// =============================================================================

/// Outcome of routing one action through the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The handler applied the action.
    Applied,
    /// The handler refused the action.
    Rejected,
    /// No handler is registered for the action's kind.
    Unhandled,
}

impl Resolution {
    /// Returns `true` for [`Resolution::Applied`].
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Dispatch table from action kind to handler.
pub struct ActionResolver {
    handlers: BTreeMap<ActionKind, Box<dyn ActionHandler>>,
}

impl fmt::Debug for ActionResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionResolver")
            .field("handles", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ActionResolver {
    /// Creates a resolver with no handlers. Every action is unhandled.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }

    /// Creates a resolver with the four built-in handlers.
    #[must_use]
    pub fn standard() -> Self {
        Self::empty()
            .with_handler(Box::new(GrowHandler))
            .with_handler(Box::new(MoveHandler))
            .with_handler(Box::new(EatHandler))
            .with_handler(Box::new(ReproduceHandler))
    }

    /// Registers `handler` for its kind, replacing any existing handler.
    #[must_use]
    pub fn with_handler(mut self, handler: Box<dyn ActionHandler>) -> Self {
        self.handlers.insert(handler.handles(), handler);
        self
    }

    /// Removes the handler for `kind`.
    #[must_use]
    pub fn without(mut self, kind: ActionKind) -> Self {
        self.handlers.remove(&kind);
        self
    }

    /// Returns `true` if a handler is registered for `kind`.
    #[must_use]
    pub fn handles(&self, kind: ActionKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Routes `action` to its handler.
    pub fn resolve(
        &self,
        ctx: &mut ResolutionContext<'_>,
        from: Vector,
        action: &Action,
    ) -> Resolution {
        match self.handlers.get(&action.kind()) {
            None => Resolution::Unhandled,
            Some(handler) if handler.apply(ctx, from, action) => Resolution::Applied,
            Some(_) => Resolution::Rejected,
        }
    }
}

impl Default for ActionResolver {
    fn default() -> Self {
        Self::standard()
    }
}

// =============================================================================
// Test Support
// =============================================================================


#[cfg(test)]
mod tests {
    use super::test_support::Harness;
    use super::*;
    use elife_grid::Direction;

    #[test]
    fn handler_is_object_safe() {
        fn _accepts_boxed(_handler: Box<dyn ActionHandler>) {}
        fn _accepts_slice(_handlers: &[Box<dyn ActionHandler>]) {}
    }

    #[test]
    fn standard_resolver_handles_every_kind() {
        let resolver = ActionResolver::standard();
        for kind in ActionKind::ALL {
            assert!(resolver.handles(kind), "missing handler for {kind}");
        }
    }

    #[test]
    fn without_removes_handler() {
        let resolver = ActionResolver::standard().without(ActionKind::Move);
        assert!(!resolver.handles(ActionKind::Move));
        assert!(resolver.handles(ActionKind::Grow));
    }

    #[test]
    fn unhandled_action_touches_nothing() {
        let mut h = Harness::new(3, 3);
        h.eater(1, 1, 20.0);
        let resolver = ActionResolver::empty();
        let outcome = h.resolve(
            &resolver,
            1,
            1,
            Action::Move {
                direction: Direction::North,
            },
        );
        assert_eq!(outcome, Resolution::Unhandled);
        assert_eq!(h.energy_at(1, 1), Some(20.0));
        assert!(h.grid.is_empty_at(Vector::new(1, 0)));
    }

    #[test]
    fn resolve_distinguishes_applied_and_rejected() {
        let mut h = Harness::new(3, 3);
        h.eater(1, 1, 20.0);
        h.wall(1, 0);
        let resolver = ActionResolver::standard();

        let blocked = h.resolve(
            &resolver,
            1,
            1,
            Action::Move {
                direction: Direction::North,
            },
        );
        assert_eq!(blocked, Resolution::Rejected);

        let grown = h.resolve(&resolver, 1, 1, Action::Grow);
        assert_eq!(grown, Resolution::Applied);
        assert!(grown.is_applied());
    }

    #[test]
    fn destination_off_board_is_none() {
        let h = Harness::new(2, 2);
        let action = Action::Move {
            direction: Direction::NorthWest,
        };
        assert_eq!(check_destination(&h.grid, &action, Vector::new(0, 0)), None);
        assert_eq!(
            check_destination(&h.grid, &action, Vector::new(1, 1)),
            Some(Vector::new(0, 0))
        );
        assert_eq!(check_destination(&h.grid, &Action::Grow, Vector::new(1, 1)), None);
    }
}
