//! Per-variant entity state.
//!
//! Each struct holds everything one kind of entity carries between turns. The
//! decision rules in [`crate::rules`] read these, and the resolver adjusts the
//! energy fields.

use elife_grid::Direction;
use serde::{Deserialize, Serialize};

/// State carried by a plant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlantState {
    /// Stored energy. Plants grow it and spend it on offspring.
    pub energy: f64,
}

impl PlantState {
    /// Creates plant state with the given energy.
    #[must_use]
    pub const fn new(energy: f64) -> Self {
        Self { energy }
    }
}

/// State carried by a plant-eater.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlantEaterState {
    /// Stored energy. Gained by eating plants, spent on moving and offspring.
    pub energy: f64,
}

impl PlantEaterState {
    /// Creates plant-eater state with the given energy.
    #[must_use]
    pub const fn new(energy: f64) -> Self {
        Self { energy }
    }
}

/// State carried by a bouncing critter.
///
/// Bouncing critters have no energy; they wander forever. The heading is
/// updated by the critter's own decision rule whenever its way is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BouncingCritterState {
    /// Current heading.
    pub direction: Direction,
}

impl BouncingCritterState {
    /// Creates critter state heading in `direction`.
    #[must_use]
    pub const fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_are_serializable() {
        let plant = PlantState::new(4.5);
        let json = serde_json::to_string(&plant).unwrap();
        let back: PlantState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plant);

        let critter = BouncingCritterState::new(Direction::West);
        let json = serde_json::to_string(&critter).unwrap();
        assert_eq!(json, r#"{"direction":"w"}"#);
    }
}
