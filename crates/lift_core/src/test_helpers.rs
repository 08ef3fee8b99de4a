//! Test helpers for building literal fleets.
//!
//! Dispatch tests construct fleets explicitly rather than relying on the
//! randomized initializer, so results are fully determined by the fixture.

use crate::fleet::{Fleet, DEFAULT_MAX_CAPACITY};
use crate::lift::{Lift, LiftState};

/// Floor count used by fixture fleets.
pub const TEST_NUM_FLOORS: u32 = 20;

/// A lift with the default capacity.
pub fn test_lift(id: u32, floor: u32, state: LiftState, passengers: u32) -> Lift {
    Lift::new(id, floor, state, DEFAULT_MAX_CAPACITY, passengers)
}

/// An idle, empty (available) lift.
pub fn idle_lift(id: u32, floor: u32) -> Lift {
    test_lift(id, floor, LiftState::Idle, 0)
}

/// Build a fixture fleet over `TEST_NUM_FLOORS` floors.
///
/// # Panics
///
/// Panics if the lifts do not form a valid fleet.
pub fn test_fleet(lifts: Vec<Lift>) -> Fleet {
    Fleet::from_lifts(TEST_NUM_FLOORS, DEFAULT_MAX_CAPACITY, lifts)
        .expect("fixture lifts should form a valid fleet")
}

/// Build a fixture fleet from `(floor, state, passengers)` rows; ids follow row order.
pub fn fleet_from_rows(rows: &[(u32, LiftState, u32)]) -> Fleet {
    test_fleet(
        rows.iter()
            .enumerate()
            .map(|(id, &(floor, state, passengers))| test_lift(id as u32, floor, state, passengers))
            .collect(),
    )
}
