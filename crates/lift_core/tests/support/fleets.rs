#![allow(dead_code)]

use lift_core::fleet::{Fleet, DEFAULT_MAX_CAPACITY};
use lift_core::lift::{Lift, LiftState};
use lift_core::test_helpers::TEST_NUM_FLOORS;

/// Builder for literal fleet fixtures. Ids follow insertion order.
#[derive(Clone, Debug)]
pub struct FleetBuilder {
    num_floors: u32,
    max_capacity: u32,
    lifts: Vec<Lift>,
}

impl Default for FleetBuilder {
    fn default() -> Self {
        Self {
            num_floors: TEST_NUM_FLOORS,
            max_capacity: DEFAULT_MAX_CAPACITY,
            lifts: Vec::new(),
        }
    }
}

impl FleetBuilder {
    /// Create a fresh builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_floors(mut self, num_floors: u32) -> Self {
        self.num_floors = num_floors;
        self
    }

    /// Add a lift in any state with the given occupancy.
    pub fn lift(mut self, floor: u32, state: LiftState, passengers: u32) -> Self {
        let id = self.lifts.len() as u32;
        self.lifts
            .push(Lift::new(id, floor, state, self.max_capacity, passengers));
        self
    }

    /// Add an idle, empty lift.
    pub fn idle(self, floor: u32) -> Self {
        self.lift(floor, LiftState::Idle, 0)
    }

    /// Add a lift that is busy with passengers on board.
    pub fn occupied(self, floor: u32, passengers: u32) -> Self {
        self.lift(floor, LiftState::Occupied, passengers)
    }

    pub fn build(self) -> Fleet {
        Fleet::from_lifts(self.num_floors, self.max_capacity, self.lifts)
            .expect("fixture fleet should be valid")
    }
}
