//! Build a demo fleet, print a status card per lift and answer one floor call.
//!
//! Run with: cargo run -p lift_core --example fleet_demo -- --floor 3
//! Set RUST_LOG=debug to see fleet construction and dispatch logging.

use std::path::PathBuf;
use std::process::exit;

use bevy_ecs::prelude::World;
use clap::Parser;
use lift_core::dispatch::{DispatchAlgorithmKind, DispatchAlgorithmResource};
use lift_core::fleet::Fleet;
use lift_core::scenario::{build_session, FleetParams};

#[derive(Parser)]
#[command(name = "fleet_demo", about = "Dispatch an available lift to a floor call")]
struct Args {
    /// Floor the passenger is waiting on
    #[arg(long, default_value_t = 0)]
    floor: i64,
    /// Number of lifts in the building
    #[arg(long)]
    lifts: Option<u32>,
    /// Number of floors in the building
    #[arg(long)]
    floors: Option<u32>,
    /// Seed for a reproducible fleet
    #[arg(long)]
    seed: Option<u64>,
    /// Dispatch algorithm: nearest or earliest
    #[arg(long)]
    algorithm: Option<DispatchAlgorithmKind>,
    /// JSON params file; command-line values override it
    #[arg(long)]
    params: Option<PathBuf>,
}

fn load_params(args: &Args) -> Result<FleetParams, lift_core::FleetError> {
    let mut params = match &args.params {
        Some(path) => FleetParams::from_json_file(path)?,
        None => FleetParams::default(),
    };
    if let Some(lifts) = args.lifts {
        params = params.with_num_lifts(lifts);
    }
    if let Some(floors) = args.floors {
        params = params.with_num_floors(floors);
    }
    if let Some(seed) = args.seed {
        params = params.with_seed(seed);
    }
    if let Some(algorithm) = args.algorithm {
        params = params.with_dispatch_algorithm(algorithm);
    }
    Ok(params)
}

fn print_status(fleet: &Fleet) {
    println!("--- Lift status ({} lifts, {} floors) ---", fleet.num_lifts(), fleet.num_floors());
    for lift in fleet.lifts() {
        println!(
            "  Lift #{:<3} floor {:<4} {:<12} passengers {}/{}  available: {}",
            lift.id(),
            lift.current_floor(),
            lift.state_display(),
            lift.passengers(),
            lift.capacity(),
            if lift.is_available() { "YES" } else { "NO" },
        );
    }
    let snapshot = fleet.snapshot();
    println!(
        "  {} of {} lifts available, load {:.0}%",
        snapshot.lifts_available,
        snapshot.lifts_total,
        snapshot.load_factor() * 100.0
    );
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let params = match load_params(&args) {
        Ok(params) => params,
        Err(error) => {
            eprintln!("error: {error}");
            exit(2);
        }
    };

    let mut world = World::new();
    if let Err(error) = build_session(&mut world, &params) {
        eprintln!("error: {error}");
        exit(2);
    }

    let fleet = world.resource::<Fleet>();
    print_status(fleet);

    if let Err(error) = fleet.validate_floor(args.floor) {
        eprintln!("Invalid floor number: {error}");
        exit(1);
    }

    let algorithm = world.resource::<DispatchAlgorithmResource>();
    println!("\n--- Result ({} dispatch) ---", algorithm.name());
    match fleet.dispatch(&**algorithm, args.floor) {
        Some(result) => {
            println!("Dispatched lift:  Lift #{}", result.lift.id());
            println!("Current position: floor {}", result.lift.current_floor());
            println!("Your floor:       floor {}", args.floor);
            println!("Time to reach:    {} floors", result.floors);
        }
        None => {
            println!("No available lift found. All lifts are busy or occupied.");
        }
    }
}
