#![allow(dead_code)]

use bevy_ecs::prelude::World;
use lift_core::dispatch::DispatchAlgorithmResource;
use lift_core::fleet::Fleet;
use lift_core::scenario::{build_session, FleetParams};

/// World holding a seeded session.
pub fn session_world(params: &FleetParams) -> World {
    let mut world = World::new();
    build_session(&mut world, params).expect("session params should be valid");
    world
}

/// Dispatch through whatever session the world currently holds.
pub fn session_dispatch(world: &World, floor: i64) -> Option<(u32, u64)> {
    let fleet = world.resource::<Fleet>();
    let algorithm = world.resource::<DispatchAlgorithmResource>();
    fleet
        .dispatch(&**algorithm, floor)
        .map(|result| (result.lift.id(), result.floors))
}
