//! The fleet: every lift under management plus the building it serves.
//!
//! A fleet is built once per session and replaced wholesale on
//! re-initialization. All queries are read-only scans in fleet order.

use std::collections::HashSet;

use bevy_ecs::prelude::Resource;
use log::debug;
use rand::Rng;

use crate::dispatch::{
    closest_available, DispatchAlgorithm, DispatchResult, EarliestLift, NearestLift,
};
use crate::error::FleetError;
use crate::lift::Lift;
use crate::spawner::{spawn_lifts, LiftSpawnerConfig};
use crate::telemetry::FleetSnapshot;

/// Capacity used when a fleet is configured without one.
pub const DEFAULT_MAX_CAPACITY: u32 = 10;

/// Reject degenerate fleets before any lift is built.
pub fn validate_dimensions(
    num_lifts: u32,
    num_floors: u32,
    max_capacity: u32,
) -> Result<(), FleetError> {
    if num_lifts == 0 {
        return Err(FleetError::ZeroLifts);
    }
    if num_floors == 0 {
        return Err(FleetError::ZeroFloors);
    }
    if max_capacity == 0 {
        return Err(FleetError::ZeroCapacity);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Resource)]
pub struct Fleet {
    lifts: Vec<Lift>,
    num_floors: u32,
    max_capacity: u32,
}

impl Fleet {
    /// Build a fleet from an explicit lift list.
    ///
    /// Every lift must sit on a floor in `[0, num_floors)`, have a capacity
    /// equal to `max_capacity`, carry at most that many passengers and use an
    /// id not seen earlier in the list.
    pub fn from_lifts(
        num_floors: u32,
        max_capacity: u32,
        lifts: Vec<Lift>,
    ) -> Result<Self, FleetError> {
        let num_lifts = u32::try_from(lifts.len()).unwrap_or(u32::MAX);
        validate_dimensions(num_lifts, num_floors, max_capacity)?;

        let mut seen = HashSet::with_capacity(lifts.len());
        for lift in &lifts {
            if !seen.insert(lift.id()) {
                return Err(FleetError::DuplicateLiftId(lift.id()));
            }
            if lift.current_floor() >= num_floors {
                return Err(FleetError::LiftOutOfRange {
                    id: lift.id(),
                    reason: format!(
                        "floor {} is outside 0..{num_floors}",
                        lift.current_floor()
                    ),
                });
            }
            if lift.capacity() != max_capacity {
                return Err(FleetError::LiftOutOfRange {
                    id: lift.id(),
                    reason: format!(
                        "capacity {} differs from the fleet capacity {max_capacity}",
                        lift.capacity()
                    ),
                });
            }
            if lift.passengers() > lift.capacity() {
                return Err(FleetError::LiftOutOfRange {
                    id: lift.id(),
                    reason: format!(
                        "{} passengers exceed capacity {}",
                        lift.passengers(),
                        lift.capacity()
                    ),
                });
            }
        }

        Ok(Self {
            lifts,
            num_floors,
            max_capacity,
        })
    }

    /// Build a randomized demo fleet with the default state weights.
    pub fn initialize_random<R: Rng>(
        num_lifts: u32,
        num_floors: u32,
        max_capacity: u32,
        rng: &mut R,
    ) -> Result<Self, FleetError> {
        let config = LiftSpawnerConfig {
            max_capacity,
            ..LiftSpawnerConfig::new(num_lifts, num_floors)
        };
        Self::from_spawner(&config, rng)
    }

    /// Build a randomized fleet from a full spawner configuration.
    pub fn from_spawner<R: Rng>(
        config: &LiftSpawnerConfig,
        rng: &mut R,
    ) -> Result<Self, FleetError> {
        let lifts = spawn_lifts(config, rng)?;
        let fleet = Self {
            lifts,
            num_floors: config.num_floors,
            max_capacity: config.max_capacity,
        };
        debug!(
            "initialized fleet: {} lifts over {} floors, {} available",
            fleet.num_lifts(),
            fleet.num_floors,
            fleet.count_available()
        );
        Ok(fleet)
    }

    pub fn lifts(&self) -> &[Lift] {
        &self.lifts
    }

    pub fn lift(&self, id: u32) -> Option<&Lift> {
        self.lifts.iter().find(|lift| lift.id() == id)
    }

    pub fn num_lifts(&self) -> usize {
        self.lifts.len()
    }

    pub fn num_floors(&self) -> u32 {
        self.num_floors
    }

    pub fn max_capacity(&self) -> u32 {
        self.max_capacity
    }

    /// Check a query floor against the building. Queries themselves accept any
    /// floor; callers that take floors from user input validate here first.
    pub fn validate_floor(&self, floor: i64) -> Result<u32, FleetError> {
        u32::try_from(floor)
            .ok()
            .filter(|floor| *floor < self.num_floors)
            .ok_or(FleetError::FloorOutOfRange {
                floor,
                num_floors: self.num_floors,
            })
    }

    pub fn available_lifts(&self) -> impl Iterator<Item = &Lift> + '_ {
        self.lifts.iter().filter(|lift| lift.is_available())
    }

    pub fn count_available(&self) -> usize {
        self.available_lifts().count()
    }

    /// Nearest idle, empty lift to `request_floor`; the first lift in fleet
    /// order wins ties.
    pub fn find_nearest_available_empty_lift(&self, request_floor: i64) -> Option<NearestLift> {
        closest_available(&self.lifts, request_floor).map(NearestLift::from)
    }

    /// Lift expected to reach a passenger waiting at `current_floor` first.
    /// Time is the number of floors to traverse.
    pub fn find_earliest_lift(&self, current_floor: i64) -> Option<EarliestLift> {
        closest_available(&self.lifts, current_floor).map(EarliestLift::from)
    }

    pub fn dispatch(
        &self,
        algorithm: &dyn DispatchAlgorithm,
        request_floor: i64,
    ) -> Option<DispatchResult> {
        algorithm.select(&self.lifts, request_floor)
    }

    pub fn snapshot(&self) -> FleetSnapshot {
        FleetSnapshot::capture(&self.lifts)
    }
}
