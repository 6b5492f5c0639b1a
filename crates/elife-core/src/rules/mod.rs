//! Per-variant decision rules.
//!
//! A decision rule reads a [`View`](crate::view::View) and the entity's own
//! state and returns the action it wants this turn, or `None` to idle. Rules
//! may update entity-owned state (a critter's heading) but never the grid.
//!
//! # Available Rules
//!
//! - [`plant`]: grow in place, spread into empty neighbours when rich
//! - [`plant_eater`]: reproduce when rich, otherwise eat, otherwise wander
//! - [`bouncing`]: walk straight, pick a new heading when blocked
//!
//! Walls have no rule.

pub mod bouncing;
pub mod plant;
pub mod plant_eater;
