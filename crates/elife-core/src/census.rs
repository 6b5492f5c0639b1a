//! Population and energy snapshot of a world.
//!
//! A [`Census`] is a plain data record built from the grid between turns. It is
//! what a driving loop or an external dashboard reads instead of walking the
//! grid itself.

use std::collections::BTreeMap;

use elife_grid::Grid;
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityKind};

/// Aggregate figures for one entity kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KindStats {
    /// Number of live entities of this kind.
    pub count: usize,
    /// Summed energy. Always `0.0` for kinds without energy.
    pub total_energy: f64,
}

impl KindStats {
    /// Mean energy per entity, or `None` if there are none.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_energy(&self) -> Option<f64> {
        (self.count > 0).then(|| self.total_energy / self.count as f64)
    }
}

/// Snapshot of who lives in a world.
///
/// # Example
///
/// ```
/// use elife_core::config::WorldConfig;
/// use elife_core::entity::EntityKind;
/// use elife_core::legend::Legend;
/// use elife_core::world::World;
///
/// let world = World::new(&["#O#", "# #"], Legend::standard(), WorldConfig::with_seed(1)).unwrap();
/// let census = world.census();
///
/// assert_eq!(census.count('#'), 4);
/// assert_eq!(census.count('O'), 1);
/// assert_eq!(census.kind(EntityKind::PlantEater).mean_energy(), Some(20.0));
/// assert_eq!(census.total, 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Census {
    /// Number of turns the world had taken when the census was taken.
    pub turn: u64,
    /// Live entities per origin glyph.
    pub population: BTreeMap<char, usize>,
    /// Live entities and energy per kind.
    pub kinds: BTreeMap<EntityKind, KindStats>,
    /// Total number of live entities.
    pub total: usize,
}

impl Census {
    /// Counts every entity on `grid`.
    #[must_use]
    pub fn from_grid(grid: &Grid<Entity>, turn: u64) -> Self {
        let mut census = Self {
            turn,
            ..Self::default()
        };
        for (_, entity) in grid.iter() {
            *census.population.entry(entity.origin()).or_default() += 1;
            let stats = census.kinds.entry(entity.kind()).or_default();
            stats.count += 1;
            stats.total_energy += entity.energy().unwrap_or(0.0);
            census.total += 1;
        }
        census
    }

    /// Number of live entities drawn with `glyph`.
    #[must_use]
    pub fn count(&self, glyph: char) -> usize {
        self.population.get(&glyph).copied().unwrap_or(0)
    }

    /// Figures for `kind`. Absent kinds report zeroes.
    #[must_use]
    pub fn kind(&self, kind: EntityKind) -> KindStats {
        self.kinds.get(&kind).copied().unwrap_or_default()
    }

    /// Returns `true` if no critter of any kind is alive.
    #[must_use]
    pub fn is_extinct(&self) -> bool {
        self.kinds
            .iter()
            .all(|(kind, stats)| !kind.is_critter() || stats.count == 0)
    }
}
