//! Determinism and conservation tests.
//!
//! Same seed and same map must give identical runs, and every turn must
//! account for each entity that appears or disappears.

use proptest::prelude::*;

use crate::config::WorldConfig;
use crate::legend::Legend;
use crate::world::World;

use super::helpers::VALLEY;

fn valley(seed: u64) -> World {
    World::new(&VALLEY, Legend::standard(), WorldConfig::with_seed(seed)).unwrap()
}

#[test]
fn same_seed_same_run() {
    let mut a = valley(42);
    let mut b = valley(42);

    for _ in 0..50 {
        assert_eq!(a.turn(), b.turn());
        assert_eq!(a.rows(), b.rows());
    }
    assert_eq!(a.census(), b.census());
}

#[test]
fn different_seeds_diverge() {
    let mut reference = valley(0);
    reference.run(20);

    let diverged = (1..=5).any(|seed| {
        let mut other = valley(seed);
        other.run(20);
        other.rows() != reference.rows()
    });
    assert!(diverged);
}

#[test]
fn census_snapshot_is_stable_json() {
    let mut a = valley(9);
    let mut b = valley(9);
    a.run(10);
    b.run(10);

    let json_a = serde_json::to_string(&a.census()).unwrap();
    let json_b = serde_json::to_string(&b.census()).unwrap();
    assert_eq!(json_a, json_b);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn every_turn_balances_its_books(seed in any::<u64>()) {
        let mut world = valley(seed);
        for _ in 0..5 {
            let before = world.census();
            let walls = before.count('#');
            let report = world.turn();
            let after = world.census();

            prop_assert!(report.acted <= before.total - walls);
            prop_assert_eq!(report.acted, report.succeeded + report.penalised);
            prop_assert_eq!(
                after.total + report.deaths + report.eaten,
                before.total + report.births
            );
            for (_, entity) in world.grid().iter() {
                if let Some(energy) = entity.energy() {
                    prop_assert!(energy > 0.0, "{} left with {energy}", entity.id());
                }
            }
        }
    }
}
