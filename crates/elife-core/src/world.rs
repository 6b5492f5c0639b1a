//! The world: grid ownership and turn resolution.
//!
//! A [`World`] owns the grid, the legend, the energy economy, the action
//! resolver and the random source. [`World::turn`] advances the ecosystem by
//! one synchronous turn:
//!
//! 1. **ROSTER**: record the id of every critter present at turn start
//! 2. **WALK**: visit cells in row-major order; each rostered critter not yet
//!    seen this turn is lifted out of its cell, asked for an action through a
//!    [`View`], and put back
//! 3. **RESOLVE**: route the action through the [`ActionResolver`]
//! 4. **PENALTY**: an absent, unhandled or rejected action costs
//!    [`idle_cost`](crate::config::EnergyConfig::idle_cost); an entity left
//!    with no energy is removed
//!
//! # Turn Order
//!
//! An entity acts at most once per turn. A critter that moves into a cell the
//! walk has not reached yet is skipped there, and offspring created during a
//! turn are not on its roster, so they first act on the next turn.
//!
//! # Determinism
//!
//! All randomness flows from one [`ChaCha8Rng`]. Two worlds built from the same
//! map, legend and seed produce identical renderings turn after turn.
//!
//! # Example
//!
//! ```
//! use elife_core::config::WorldConfig;
//! use elife_core::legend::Legend;
//! use elife_core::world::World;
//!
//! let plan = ["#####", "#   #", "# O #", "#  *#", "#####"];
//! let mut world = World::new(&plan, Legend::standard(), WorldConfig::with_seed(7)).unwrap();
//!
//! assert_eq!(world.rows(), plan);
//!
//! let report = world.turn();
//! assert_eq!(report.turn, 1);
//! assert_eq!(world.turns(), 1);
//! ```

use std::collections::HashSet;
use std::fmt;

use elife_grid::{Grid, Vector};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::action::{Action, ActionKind};
use crate::census::Census;
use crate::config::WorldConfig;
use crate::entity::{Entity, EntityId, IdAllocator};
use crate::error::{Result, WorldError};
use crate::legend::{Legend, EMPTY_GLYPH};
use crate::resolver::{ActionResolver, Resolution, ResolutionContext};
use crate::view::View;

// =============================================================================
// TurnReport
// =============================================================================

/// Summary of one turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// One-based index of the turn this report describes.
    pub turn: u64,
    /// Critters that were asked for an action.
    pub acted: usize,
    /// Actions that took effect.
    pub succeeded: usize,
    /// Critters that took the penalty path.
    pub penalised: usize,
    /// Offspring placed.
    pub births: usize,
    /// Entities removed for running out of energy.
    pub deaths: usize,
    /// Entities removed by being eaten.
    pub eaten: usize,
}

// =============================================================================
// World
// =============================================================================

/// A grid ecosystem and its turn engine.
pub struct World {
    grid: Grid<Entity>,
    legend: Legend,
    config: WorldConfig,
    resolver: ActionResolver,
    rng: ChaCha8Rng,
    ids: IdAllocator,
    turns: u64,
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("World")
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("entities", &self.grid.occupied())
            .field("legend", &self.legend)
            .field("config", &self.config)
            .field("resolver", &self.resolver)
            .field("turns", &self.turns)
            .finish_non_exhaustive()
    }
}

impl World {
    /// Builds a world from map rows.
    ///
    /// Every row must have the same number of characters. A space is an empty
    /// cell; every other character must be in `legend`.
    ///
    /// # Errors
    ///
    /// - [`WorldError::InvalidConfig`] if the energy economy is invalid
    /// - [`WorldError::EmptyMap`] if there are no rows or the rows are empty
    /// - [`WorldError::RaggedMap`] if a row's length differs from the first
    /// - [`WorldError::UnknownGlyph`] if a character has no legend entry
    /// - [`WorldError::MapTooLarge`] if the map cannot be addressed
    pub fn new<S: AsRef<str>>(rows: &[S], legend: Legend, config: WorldConfig) -> Result<Self> {
        config.energy.validate()?;

        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        let height = rows.len();
        if width == 0 {
            return Err(WorldError::EmptyMap);
        }
        let too_large = WorldError::MapTooLarge { width, height };
        let grid_width = i32::try_from(width).map_err(|_| too_large.clone())?;
        let grid_height = i32::try_from(height).map_err(|_| too_large)?;

        let mut rng = config
            .seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        let mut ids = IdAllocator::new();
        let mut grid = Grid::new(grid_width, grid_height);

        for ((y, row), grid_y) in rows.iter().enumerate().zip(0..) {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(WorldError::RaggedMap {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for ((x, glyph), grid_x) in row.chars().enumerate().zip(0..) {
                if glyph == EMPTY_GLYPH {
                    continue;
                }
                let entity = legend
                    .spawn(glyph, ids.allocate(), &config.energy, &mut rng)
                    .ok_or(WorldError::UnknownGlyph { glyph, x, y })?;
                grid.set(Vector::new(grid_x, grid_y), Some(entity))?;
            }
        }

        info!(
            width,
            height,
            entities = grid.occupied(),
            seed = ?config.seed,
            "world created"
        );

        Ok(Self {
            grid,
            legend,
            config,
            resolver: ActionResolver::standard(),
            rng,
            ids,
            turns: 0,
        })
    }

    /// Builds a world with the standard legend and a fixed seed.
    ///
    /// # Errors
    ///
    /// See [`World::new`].
    pub fn from_rows(rows: &[&str], seed: u64) -> Result<Self> {
        Self::new(rows, Legend::standard(), WorldConfig::with_seed(seed))
    }

    /// Builds a world from a plan with one row per line.
    ///
    /// A single trailing newline is ignored.
    ///
    /// # Errors
    ///
    /// See [`World::new`].
    pub fn parse(plan: &str, legend: Legend, config: WorldConfig) -> Result<Self> {
        let plan = plan.strip_suffix('\n').unwrap_or(plan);
        let rows: Vec<&str> = plan.split('\n').collect();
        Self::new(&rows, legend, config)
    }

    /// Replaces the action resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: ActionResolver) -> Self {
        self.resolver = resolver;
        self
    }

    // =========================================================================
    // Turn
    // =========================================================================

    /// Advances the world by one turn.
    pub fn turn(&mut self) -> TurnReport {
        let roster: HashSet<EntityId> = self
            .grid
            .iter()
            .filter(|(_, entity)| entity.is_critter())
            .map(|(_, entity)| entity.id())
            .collect();
        let mut acted = HashSet::with_capacity(roster.len());
        let mut report = TurnReport {
            turn: self.turns + 1,
            ..TurnReport::default()
        };

        for pos in self.grid.positions() {
            let Some(entity) = self.grid.get(pos) else {
                continue;
            };
            let id = entity.id();
            if !roster.contains(&id) || !acted.insert(id) {
                continue;
            }

            let Some(mut actor) = self.grid.take(pos) else {
                continue;
            };
            let action = actor.decide(&View::new(&self.grid, pos), &mut self.rng);
            let restored = self.grid.set(pos, Some(actor));
            debug_assert!(matches!(restored, Ok(None)));

            report.acted += 1;
            self.let_act(pos, action, &mut report);
        }

        self.turns += 1;
        debug!(
            turn = report.turn,
            acted = report.acted,
            succeeded = report.succeeded,
            penalised = report.penalised,
            births = report.births,
            deaths = report.deaths,
            eaten = report.eaten,
            "turn complete"
        );
        report
    }

    /// Runs `count` turns and returns their reports.
    pub fn run(&mut self, count: usize) -> Vec<TurnReport> {
        (0..count).map(|_| self.turn()).collect()
    }

    fn let_act(&mut self, pos: Vector, action: Option<Action>, report: &mut TurnReport) {
        let resolution = action.as_ref().map(|action| {
            let mut ctx = ResolutionContext {
                grid: &mut self.grid,
                legend: &self.legend,
                energy: &self.config.energy,
                rng: &mut self.rng,
                ids: &mut self.ids,
            };
            self.resolver.resolve(&mut ctx, pos, action)
        });

        trace!(
            x = pos.x(),
            y = pos.y(),
            action = ?action,
            outcome = ?resolution,
            "resolved"
        );

        if let (Some(action), Some(Resolution::Applied)) = (action, resolution) {
            report.succeeded += 1;
            match action.kind() {
                ActionKind::Reproduce => report.births += 1,
                ActionKind::Eat => report.eaten += 1,
                ActionKind::Move | ActionKind::Grow => {}
            }
            return;
        }

        report.penalised += 1;
        let idle_cost = self.config.energy.idle_cost;
        let Some(energy) = self.grid.get_mut(pos).and_then(Entity::energy_mut) else {
            return;
        };
        *energy -= idle_cost;
        if *energy <= 0.0 {
            self.grid.take(pos);
            report.deaths += 1;
            trace!(x = pos.x(), y = pos.y(), "starved");
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Renders each row as a string of origin glyphs, spaces for empty cells.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        (0..self.grid.height())
            .map(|y| {
                self.grid
                    .row(y)
                    .map(|cell| cell.map_or(EMPTY_GLYPH, Entity::origin))
                    .collect()
            })
            .collect()
    }

    /// Renders the grid with rows joined by `separator`.
    #[must_use]
    pub fn render_with(&self, separator: &str) -> String {
        self.rows().join(separator)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Takes a population and energy snapshot.
    #[must_use]
    pub fn census(&self) -> Census {
        Census::from_grid(&self.grid, self.turns)
    }

    /// Returns the grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid<Entity> {
        &self.grid
    }

    /// Returns the grid for scenario setup between turns.
    #[must_use]
    pub fn grid_mut(&mut self) -> &mut Grid<Entity> {
        &mut self.grid
    }

    /// Returns the legend.
    #[must_use]
    pub const fn legend(&self) -> &Legend {
        &self.legend
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Number of turns taken so far.
    #[must_use]
    pub const fn turns(&self) -> u64 {
        self.turns
    }

    /// Returns the entity at `pos`, if any.
    #[must_use]
    pub fn entity_at(&self, pos: Vector) -> Option<&Entity> {
        self.grid.get(pos)
    }

    /// Grid width in cells.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.grid.width()
    }

    /// Grid height in cells.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.grid.height()
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_rows_without_trailing_newline() {
        let world = World::from_rows(&["#*", " O"], 0).unwrap();
        assert_eq!(world.to_string(), "#*\n O");
        assert_eq!(world.render_with("|"), "#*| O");
    }

    #[test]
    fn parse_splits_lines() {
        let world = World::parse("##\n# \n", Legend::standard(), WorldConfig::with_seed(0)).unwrap();
        assert_eq!(world.width(), 2);
        assert_eq!(world.height(), 2);
        assert_eq!(world.rows(), vec!["##", "# "]);
    }

    #[test]
    fn walls_never_act() {
        let mut world = World::from_rows(&["###", "# #", "###"], 0).unwrap();
        let report = world.turn();
        assert_eq!(report.acted, 0);
        assert_eq!(report.penalised, 0);
    }

    #[test]
    fn report_serializes() {
        let report = TurnReport {
            turn: 2,
            births: 1,
            ..TurnReport::default()
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: TurnReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn debug_summarizes_instead_of_dumping_grid() {
        let world = World::from_rows(&["O"], 0).unwrap();
        let debug = format!("{world:?}");
        assert!(debug.contains("entities: 1"));
        assert!(!debug.contains("cells"));
    }
}
