//! World builders and accessors shared by the end-to-end tests.

use elife_grid::{Direction, Vector};

use crate::config::{EnergyConfig, WorldConfig};
use crate::entity::{Body, BouncingCritterState};
use crate::legend::Legend;
use crate::world::World;

/// The classic valley map.
pub const VALLEY: [&str; 12] = [
    "############################",
    "#####                 ######",
    "##   ***                **##",
    "#   *##**         **  O  *##",
    "#    ***     O    ##**    *#",
    "#       O         ##***    #",
    "#                 ##**     #",
    "#   O       #*             #",
    "#*          #**       O    #",
    "#***        ##**    O    **#",
    "##****     ###***       *###",
    "############################",
];

/// Installs a test-writer subscriber so `RUST_LOG`-style output shows up
/// under `cargo test -- --nocapture`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Default economy with every new plant starting at `plant_energy`.
pub fn fixed_config(seed: u64, plant_energy: f64) -> WorldConfig {
    WorldConfig::with_seed(seed)
        .with_energy(EnergyConfig::default().with_fixed_plant_energy(plant_energy))
}

/// Builds a world with the standard legend and plants starting at 3.
pub fn world(rows: &[&str]) -> World {
    World::new(rows, Legend::standard(), fixed_config(0, 3.0)).unwrap()
}

/// Energy of the entity at `(x, y)`.
pub fn energy_at(world: &World, x: i32, y: i32) -> Option<f64> {
    world.entity_at(Vector::new(x, y)).and_then(|e| e.energy())
}

/// Overwrites the energy of the entity at `(x, y)`.
pub fn set_energy(world: &mut World, x: i32, y: i32, energy: f64) {
    let slot = world
        .grid_mut()
        .get_mut(Vector::new(x, y))
        .and_then(|e| e.energy_mut())
        .expect("energy-bearing entity");
    *slot = energy;
}

/// Points the bouncing critter at `(x, y)` in `direction`.
pub fn set_heading(world: &mut World, x: i32, y: i32, direction: Direction) {
    let entity = world
        .grid_mut()
        .get_mut(Vector::new(x, y))
        .expect("critter present");
    *entity.body_mut() = Body::BouncingCritter(BouncingCritterState::new(direction));
}

/// Returns `true` if the energy values are within rounding of each other.
pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
