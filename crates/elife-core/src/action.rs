//! Actions proposed by entities.
//!
//! An [`Action`] is a proposal, not an effect: decision rules emit it, and the
//! [`ActionResolver`](crate::resolver::ActionResolver) decides whether it
//! happens. The enum is the complete action vocabulary of the simulation.
//!
//! # Example
//!
//! ```
//! use elife_core::action::{Action, ActionKind};
//! use elife_grid::Direction;
//!
//! let action = Action::Move { direction: Direction::East };
//! assert_eq!(action.kind(), ActionKind::Move);
//! assert_eq!(action.direction(), Some(Direction::East));
//!
//! assert_eq!(Action::Grow.direction(), None);
//! ```

use std::fmt;

use elife_grid::Direction;
use serde::{Deserialize, Serialize};

/// A proposed effect an entity wants applied this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Step into the adjacent cell in `direction`.
    Move {
        /// Where to step.
        direction: Direction,
    },
    /// Consume the occupant of the adjacent cell in `direction`.
    Eat {
        /// Where the food is.
        direction: Direction,
    },
    /// Gain energy in place.
    Grow,
    /// Place an offspring in the adjacent cell in `direction`.
    Reproduce {
        /// Where the offspring goes.
        direction: Direction,
    },
}

impl Action {
    /// Returns the tag of this action.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::Move { .. } => ActionKind::Move,
            Self::Eat { .. } => ActionKind::Eat,
            Self::Grow => ActionKind::Grow,
            Self::Reproduce { .. } => ActionKind::Reproduce,
        }
    }

    /// Returns the target direction, or `None` for actions without one.
    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        match self {
            Self::Move { direction } | Self::Eat { direction } | Self::Reproduce { direction } => {
                Some(*direction)
            }
            Self::Grow => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction() {
            Some(direction) => write!(f, "{} {direction}", self.kind()),
            None => write!(f, "{}", self.kind()),
        }
    }
}

/// Action tags, used to route actions to their handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// [`Action::Move`]
    Move,
    /// [`Action::Eat`]
    Eat,
    /// [`Action::Grow`]
    Grow,
    /// [`Action::Reproduce`]
    Reproduce,
}

impl ActionKind {
    /// All action kinds.
    pub const ALL: [Self; 4] = [Self::Move, Self::Eat, Self::Grow, Self::Reproduce];
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move => write!(f, "move"),
            Self::Eat => write!(f, "eat"),
            Self::Grow => write!(f, "grow"),
            Self::Reproduce => write!(f, "reproduce"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_variants() {
        let direction = Direction::North;
        assert_eq!(Action::Move { direction }.kind(), ActionKind::Move);
        assert_eq!(Action::Eat { direction }.kind(), ActionKind::Eat);
        assert_eq!(Action::Grow.kind(), ActionKind::Grow);
        assert_eq!(Action::Reproduce { direction }.kind(), ActionKind::Reproduce);
    }

    #[test]
    fn display_includes_direction() {
        let action = Action::Reproduce {
            direction: Direction::SouthWest,
        };
        assert_eq!(action.to_string(), "reproduce sw");
        assert_eq!(Action::Grow.to_string(), "grow");
    }

    #[test]
    fn action_serializes_with_type_tag() {
        let action = Action::Eat {
            direction: Direction::NorthEast,
        };
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#"{"type":"eat","direction":"ne"}"#);

        let back: Action = serde_json::from_str(r#"{"type":"grow"}"#).unwrap();
        assert_eq!(back, Action::Grow);
    }

    #[test]
    fn unknown_direction_fails_to_deserialize() {
        let result: Result<Action, _> = serde_json::from_str(r#"{"type":"move","direction":"up"}"#);
        assert!(result.is_err());
    }
}
