//! Configuration for worlds and their energy economy.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WorldError};

/// Energy economy constants.
///
/// The defaults are the classic values: growing yields half a unit, a step
/// costs one unit and is only allowed above one unit, and an idle or failed
/// turn costs a fifth of a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyConfig {
    /// Energy gained by a successful Grow.
    pub grow_gain: f64,
    /// Energy spent by a successful Move.
    pub move_cost: f64,
    /// A mover's energy must be strictly above this to move.
    pub move_threshold: f64,
    /// Energy lost when a turn produces no action or a failed one.
    pub idle_cost: f64,
    /// Lower bound (inclusive) of a new plant's energy.
    pub plant_energy_min: f64,
    /// Upper bound (exclusive) of a new plant's energy.
    pub plant_energy_max: f64,
    /// Energy of a new plant-eater.
    pub plant_eater_energy: f64,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            grow_gain: 0.5,
            move_cost: 1.0,
            move_threshold: 1.0,
            idle_cost: 0.2,
            plant_energy_min: 3.0,
            plant_energy_max: 7.0,
            plant_eater_energy: 20.0,
        }
    }
}

impl EnergyConfig {
    /// Draws a starting energy for a new plant.
    ///
    /// A degenerate range (`max <= min`) always yields `plant_energy_min`.
    pub fn plant_energy<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.plant_energy_max > self.plant_energy_min {
            rng.gen_range(self.plant_energy_min..self.plant_energy_max)
        } else {
            self.plant_energy_min
        }
    }

    /// Fixes plant starting energy to a single value.
    #[must_use]
    pub fn with_fixed_plant_energy(mut self, energy: f64) -> Self {
        self.plant_energy_min = energy;
        self.plant_energy_max = energy;
        self
    }

    /// Checks that the economy keeps every living entity above zero energy.
    ///
    /// Constants must be finite and non-negative. New entities must start with
    /// positive energy. A move may not cost more than the mover must hold.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("grow_gain", self.grow_gain),
            ("move_cost", self.move_cost),
            ("move_threshold", self.move_threshold),
            ("idle_cost", self.idle_cost),
            ("plant_energy_min", self.plant_energy_min),
            ("plant_energy_max", self.plant_energy_max),
            ("plant_eater_energy", self.plant_eater_energy),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(WorldError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("plant_energy_min", self.plant_energy_min),
            ("plant_eater_energy", self.plant_eater_energy),
        ] {
            if value <= 0.0 {
                return Err(WorldError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.move_cost > self.move_threshold {
            return Err(WorldError::InvalidConfig(format!(
                "move_cost ({}) must not exceed move_threshold ({})",
                self.move_cost, self.move_threshold
            )));
        }
        Ok(())
    }
}

/// Configuration for a [`World`](crate::world::World).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Energy economy.
    pub energy: EnergyConfig,
    /// Seed for the world's random source. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl WorldConfig {
    /// Creates a default config with a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Replaces the energy economy.
    #[must_use]
    pub fn with_energy(mut self, energy: EnergyConfig) -> Self {
        self.energy = energy;
        self
    }
}
