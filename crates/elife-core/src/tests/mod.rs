//! End-to-end tests for the turn engine.
//!
//! - `determinism.rs`: same seed and map give identical runs
//! - `integration.rs`: full turns through rules, resolver and penalty path
//! - `helpers.rs`: world builders and grid accessors

mod determinism;
mod helpers;
