use bevy_ecs::prelude::World;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dispatch::{
    DispatchAlgorithmKind, DispatchAlgorithmResource, EarliestArrivalDispatch,
    NearestAvailableDispatch,
};
use crate::error::FleetError;
use crate::fleet::Fleet;
use crate::scenario::params::FleetParams;

/// RNG for a fleet build: seeded when the params carry a seed.
pub fn fleet_rng(params: &FleetParams) -> StdRng {
    match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn build_fleet(params: &FleetParams) -> Result<Fleet, FleetError> {
    let mut rng = fleet_rng(params);
    build_fleet_with_rng(params, &mut rng)
}

pub fn build_fleet_with_rng<R: Rng>(
    params: &FleetParams,
    rng: &mut R,
) -> Result<Fleet, FleetError> {
    params.validate()?;
    Fleet::from_spawner(&params.spawner_config(), rng)
}

pub fn create_dispatch_algorithm(kind: DispatchAlgorithmKind) -> DispatchAlgorithmResource {
    match kind {
        DispatchAlgorithmKind::Nearest => {
            DispatchAlgorithmResource::new(Box::new(NearestAvailableDispatch))
        }
        DispatchAlgorithmKind::Earliest => {
            DispatchAlgorithmResource::new(Box::new(EarliestArrivalDispatch))
        }
    }
}

/// Replace the session held in `world` with a freshly built fleet.
///
/// The fleet is built before anything is inserted, so a configuration error
/// leaves the previous session untouched.
pub fn build_session(world: &mut World, params: &FleetParams) -> Result<(), FleetError> {
    let fleet = build_fleet(params)?;
    let algorithm = create_dispatch_algorithm(params.dispatch_algorithm);
    debug!(
        "new session: {} lifts, dispatch={}",
        fleet.num_lifts(),
        algorithm.name()
    );
    world.insert_resource(fleet);
    world.insert_resource(algorithm);
    Ok(())
}
