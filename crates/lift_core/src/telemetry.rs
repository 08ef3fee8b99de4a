use serde::{Deserialize, Serialize};

use crate::lift::{Lift, LiftState};

/// Point-in-time counts over a fleet, for status displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetSnapshot {
    pub lifts_total: usize,
    pub lifts_available: usize,
    pub lifts_idle: usize,
    pub lifts_moving_up: usize,
    pub lifts_moving_down: usize,
    pub lifts_occupied: usize,
    pub passengers_total: u64,
    pub capacity_total: u64,
}

impl FleetSnapshot {
    pub fn capture(lifts: &[Lift]) -> Self {
        let mut snapshot = Self {
            lifts_total: lifts.len(),
            ..Default::default()
        };
        for lift in lifts {
            match lift.state() {
                LiftState::Idle => snapshot.lifts_idle += 1,
                LiftState::MovingUp => snapshot.lifts_moving_up += 1,
                LiftState::MovingDown => snapshot.lifts_moving_down += 1,
                LiftState::Occupied => snapshot.lifts_occupied += 1,
            }
            if lift.is_available() {
                snapshot.lifts_available += 1;
            }
            snapshot.passengers_total += u64::from(lift.passengers());
            snapshot.capacity_total += u64::from(lift.capacity());
        }
        snapshot
    }

    pub fn count_for(&self, state: LiftState) -> usize {
        match state {
            LiftState::Idle => self.lifts_idle,
            LiftState::MovingUp => self.lifts_moving_up,
            LiftState::MovingDown => self.lifts_moving_down,
            LiftState::Occupied => self.lifts_occupied,
        }
    }

    /// Share of total capacity currently in use, in `[0, 1]`.
    pub fn load_factor(&self) -> f64 {
        if self.capacity_total == 0 {
            return 0.0;
        }
        self.passengers_total as f64 / self.capacity_total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_states_and_availability() {
        let lifts = [
            Lift::new(0, 0, LiftState::Idle, 10, 0),
            Lift::new(1, 1, LiftState::Idle, 10, 2),
            Lift::new(2, 2, LiftState::MovingUp, 10, 3),
            Lift::new(3, 3, LiftState::Occupied, 10, 5),
        ];
        let snapshot = FleetSnapshot::capture(&lifts);
        assert_eq!(snapshot.lifts_total, 4);
        assert_eq!(snapshot.lifts_idle, 2);
        assert_eq!(snapshot.lifts_available, 1);
        assert_eq!(snapshot.count_for(LiftState::MovingUp), 1);
        assert_eq!(snapshot.count_for(LiftState::MovingDown), 0);
        assert_eq!(snapshot.passengers_total, 10);
        assert_eq!(snapshot.capacity_total, 40);
        assert!((snapshot.load_factor() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn empty_snapshot_has_zero_load() {
        assert_eq!(FleetSnapshot::capture(&[]).load_factor(), 0.0);
    }
}
