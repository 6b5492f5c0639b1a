//! # elife-core
//!
//! Turn-resolution engine for a grid ecosystem.
//!
//! A fixed-size world holds walls, plants, plant-eaters and bouncing critters.
//! Every turn each critter looks at its eight neighbours, proposes one action,
//! and the world resolves that action against an energy economy.
//!
//! ## Architecture
//!
//! - **Entities**: a closed [`Body`](entity::Body) enum with per-variant state
//! - **Rules**: one decision function per variant, reading a [`View`]
//! - **Resolvers**: one [`ActionHandler`](resolver::ActionHandler) per action
//!   kind, the only code that mutates the grid
//!
//! Rules propose and handlers dispose. A rule never writes to the grid, and a
//! handler that refuses an action leaves everything untouched.
//!
//! ## Usage
//!
//! ```
//! use elife_core::{Legend, World, WorldConfig};
//!
//! let plan = [
//!     "############",
//!     "#     #    #",
//!     "#   *    O #",
//!     "#  ***     #",
//!     "############",
//! ];
//! let mut world = World::new(&plan, Legend::standard(), WorldConfig::with_seed(42)).unwrap();
//!
//! for _ in 0..10 {
//!     world.turn();
//! }
//!
//! let census = world.census();
//! assert_eq!(census.turn, 10);
//! assert_eq!(census.count('#'), 31);
//! println!("{world}");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export the grid substrate
pub use elife_grid;

pub mod action;
pub mod census;
pub mod config;
pub mod entity;
pub mod error;
pub mod legend;
pub mod resolver;
pub mod rules;
pub mod view;
pub mod world;

#[cfg(test)]
mod tests;

pub use action::{Action, ActionKind};
pub use census::{Census, KindStats};
pub use config::{EnergyConfig, WorldConfig};
pub use entity::{Body, Entity, EntityId, EntityKind};
pub use error::{Result, WorldError};
pub use legend::Legend;
pub use resolver::{ActionHandler, ActionResolver, Resolution, ResolutionContext};
pub use view::View;
pub use world::{TurnReport, World};
