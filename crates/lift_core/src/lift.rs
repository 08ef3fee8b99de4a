//! Lift entities: per-car position, motion state and occupancy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Motion/occupancy state of a single car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiftState {
    Idle,
    MovingUp,
    MovingDown,
    Occupied,
}

impl LiftState {
    /// Every state, in the order the fleet initializer weights them.
    pub const ALL: [LiftState; 4] = [
        LiftState::Idle,
        LiftState::Occupied,
        LiftState::MovingUp,
        LiftState::MovingDown,
    ];

    /// Upper-case label used by status displays.
    pub fn label(self) -> &'static str {
        match self {
            LiftState::Idle => "IDLE",
            LiftState::MovingUp => "MOVING UP",
            LiftState::MovingDown => "MOVING DOWN",
            LiftState::Occupied => "OCCUPIED",
        }
    }
}

impl fmt::Display for LiftState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One elevator car.
///
/// Fields are fixed at construction; a fleet is re-initialized as a whole
/// rather than mutated lift by lift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lift {
    id: u32,
    current_floor: u32,
    state: LiftState,
    capacity: u32,
    passengers: u32,
}

impl Lift {
    pub fn new(
        id: u32,
        current_floor: u32,
        state: LiftState,
        capacity: u32,
        passengers: u32,
    ) -> Self {
        Self {
            id,
            current_floor,
            state,
            capacity,
            passengers,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn current_floor(&self) -> u32 {
        self.current_floor
    }

    pub fn state(&self) -> LiftState {
        self.state
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn passengers(&self) -> u32 {
        self.passengers
    }

    pub fn is_empty(&self) -> bool {
        self.passengers == 0
    }

    /// A car can be dispatched only when it is idle and carrying nobody.
    /// An idle car with leftover passengers is not available.
    pub fn is_available(&self) -> bool {
        self.state == LiftState::Idle && self.is_empty()
    }

    pub fn state_display(&self) -> &'static str {
        self.state.label()
    }

    /// Floors between this car and `floor`. Any integer is accepted.
    pub fn floors_from(&self, floor: i64) -> u64 {
        (i64::from(self.current_floor) - floor).unsigned_abs()
    }
}

impl fmt::Display for Lift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lift #{} @ floor {} [{}] {}/{}",
            self.id, self.current_floor, self.state, self.passengers, self.capacity
        )
    }
}
