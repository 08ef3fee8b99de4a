//! Load tests for lift_core: dispatch throughput over large fleets.

use lift_core::scenario::{build_fleet, FleetParams};
use std::time::Instant;

#[test]
#[ignore] // Only run explicitly: cargo test --package lift_core --test load_tests -- --ignored
fn test_dispatch_throughput_large_fleet() {
    let params = FleetParams::default()
        .with_seed(42)
        .with_num_lifts(100_000)
        .with_num_floors(200);
    let fleet = build_fleet(&params).expect("fleet");

    let queries = 1_000;
    let start = Instant::now();
    let mut found = 0;
    for floor in 0..queries {
        if fleet
            .find_nearest_available_empty_lift(floor % 200)
            .is_some()
        {
            found += 1;
        }
    }
    let duration = start.elapsed();
    let queries_per_sec = queries as f64 / duration.as_secs_f64();
    println!(
        "Dispatch load test: {} queries over {} lifts in {:.2}s ({:.0} queries/sec)",
        queries,
        fleet.num_lifts(),
        duration.as_secs_f64(),
        queries_per_sec
    );

    assert_eq!(found, queries);
    assert!(
        queries_per_sec > 100.0,
        "Should answer >100 queries/sec, got {:.0}",
        queries_per_sec
    );
}
