//! Lift spawner: populate a fleet with randomized demo lifts.
//!
//! The random source is supplied by the caller, so the same configuration and
//! seed always produce the same lifts. Idle lifts are always spawned empty,
//! which keeps every generated idle lift available for dispatch.

use rand::Rng;

use crate::distributions::StateWeights;
use crate::error::FleetError;
use crate::fleet::{validate_dimensions, DEFAULT_MAX_CAPACITY};
use crate::lift::{Lift, LiftState};

/// Configuration for a lift spawner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiftSpawnerConfig {
    /// Number of lifts to generate; ids are `0..num_lifts`.
    pub num_lifts: u32,
    /// Floors are drawn uniformly from `[0, num_floors)`.
    pub num_floors: u32,
    /// Capacity of every lift. Busy lifts carry `[0, max_capacity]` passengers.
    pub max_capacity: u32,
    pub state_weights: StateWeights,
}

impl LiftSpawnerConfig {
    pub fn new(num_lifts: u32, num_floors: u32) -> Self {
        Self {
            num_lifts,
            num_floors,
            max_capacity: DEFAULT_MAX_CAPACITY,
            state_weights: StateWeights::default(),
        }
    }

    pub fn validate(&self) -> Result<(), FleetError> {
        validate_dimensions(self.num_lifts, self.num_floors, self.max_capacity)?;
        self.state_weights.validate()
    }
}

/// Generate one lift with the given id. `config` must already be validated.
fn spawn_lift<R: Rng>(id: u32, config: &LiftSpawnerConfig, rng: &mut R) -> Lift {
    let floor = rng.gen_range(0..config.num_floors);
    let state = config.state_weights.sample(rng);
    let passengers = if state == LiftState::Idle {
        0
    } else {
        rng.gen_range(0..=config.max_capacity)
    };
    Lift::new(id, floor, state, config.max_capacity, passengers)
}

/// Generate `num_lifts` lifts in index order.
pub fn spawn_lifts<R: Rng>(
    config: &LiftSpawnerConfig,
    rng: &mut R,
) -> Result<Vec<Lift>, FleetError> {
    config.validate()?;
    Ok((0..config.num_lifts)
        .map(|id| spawn_lift(id, config, rng))
        .collect())
}
