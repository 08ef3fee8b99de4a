use crate::lift::Lift;

use super::algorithm::DispatchAlgorithm;
use super::nearest::closest_available;
use super::types::DispatchResult;

/// Estimates which lift reaches a waiting passenger first.
///
/// Arrival time is approximated by the floor distance; there is no speed,
/// acceleration or direction-reversal model. The answer therefore matches
/// `NearestAvailableDispatch`, including its first-seen tie-break.
#[derive(Debug, Default, Clone, Copy)]
pub struct EarliestArrivalDispatch;

impl DispatchAlgorithm for EarliestArrivalDispatch {
    fn name(&self) -> &'static str {
        "earliest"
    }

    fn select(&self, lifts: &[Lift], request_floor: i64) -> Option<DispatchResult> {
        closest_available(lifts, request_floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::NearestAvailableDispatch;
    use crate::lift::LiftState;

    #[test]
    fn agrees_with_nearest_dispatch() {
        let lifts = [
            Lift::new(0, 8, LiftState::Idle, 10, 0),
            Lift::new(1, 1, LiftState::MovingDown, 10, 2),
            Lift::new(2, 4, LiftState::Idle, 10, 0),
            Lift::new(3, 6, LiftState::Idle, 10, 0),
        ];
        for floor in 0..10 {
            assert_eq!(
                EarliestArrivalDispatch.select(&lifts, floor),
                NearestAvailableDispatch.select(&lifts, floor),
                "floor {floor}"
            );
        }
    }
}
