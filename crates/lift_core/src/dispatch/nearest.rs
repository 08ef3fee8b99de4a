use log::trace;

use crate::lift::Lift;

use super::algorithm::DispatchAlgorithm;
use super::types::DispatchResult;

/// Closest available lift by floor distance.
///
/// Scans in fleet order and only replaces the running best on a strictly
/// smaller distance, so the first lift seen wins ties.
pub fn closest_available(lifts: &[Lift], request_floor: i64) -> Option<DispatchResult> {
    let mut best: Option<DispatchResult> = None;

    for lift in lifts.iter().filter(|lift| lift.is_available()) {
        let floors = lift.floors_from(request_floor);
        match best {
            Some(current) if floors >= current.floors => {}
            _ => best = Some(DispatchResult { lift: *lift, floors }),
        }
    }

    trace!(
        "closest available lift for floor {request_floor}: {:?}",
        best.map(|result| (result.lift.id(), result.floors))
    );
    best
}

/// Assigns the nearest idle, empty lift to a call.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestAvailableDispatch;

impl DispatchAlgorithm for NearestAvailableDispatch {
    fn name(&self) -> &'static str {
        "nearest"
    }

    fn select(&self, lifts: &[Lift], request_floor: i64) -> Option<DispatchResult> {
        closest_available(lifts, request_floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lift::LiftState;

    fn idle(id: u32, floor: u32) -> Lift {
        Lift::new(id, floor, LiftState::Idle, 10, 0)
    }

    #[test]
    fn selects_closer_lift_regardless_of_order() {
        let lifts = [idle(0, 9), idle(1, 3), idle(2, 12)];
        let result = closest_available(&lifts, 4).expect("available lift");
        assert_eq!(result.lift.id(), 1);
        assert_eq!(result.floors, 1);
    }

    #[test]
    fn first_seen_wins_equal_distance() {
        // Lift 0 is below the call and lift 1 above, both two floors away.
        let lifts = [idle(0, 3), idle(1, 7)];
        let result = closest_available(&lifts, 5).expect("available lift");
        assert_eq!(result.lift.id(), 0);
        assert_eq!(result.floors, 2);
    }

    #[test]
    fn skips_unavailable_lifts() {
        let lifts = [
            Lift::new(0, 5, LiftState::Occupied, 10, 4),
            Lift::new(1, 5, LiftState::Idle, 10, 1),
            Lift::new(2, 5, LiftState::MovingUp, 10, 0),
            idle(3, 0),
        ];
        let result = closest_available(&lifts, 5).expect("available lift");
        assert_eq!(result.lift.id(), 3);
        assert_eq!(result.floors, 5);
    }

    #[test]
    fn empty_fleet_has_no_match() {
        assert_eq!(closest_available(&[], 0), None);
    }

    #[test]
    fn out_of_range_floor_still_measures_distance() {
        let lifts = [idle(0, 2)];
        let result = closest_available(&lifts, 1_000).expect("available lift");
        assert_eq!(result.floors, 998);
    }
}
