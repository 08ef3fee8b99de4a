use crate::lift::Lift;

/// A selected lift and the number of floors it has to travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub lift: Lift,
    pub floors: u64,
}

/// Answer to a nearest-available-empty-lift query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearestLift {
    pub lift: Lift,
    pub distance: u64,
}

/// Answer to an earliest-lift query. `time` is measured in floors to traverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarliestLift {
    pub lift: Lift,
    pub time: u64,
}

impl From<DispatchResult> for NearestLift {
    fn from(result: DispatchResult) -> Self {
        Self {
            lift: result.lift,
            distance: result.floors,
        }
    }
}

impl From<DispatchResult> for EarliestLift {
    fn from(result: DispatchResult) -> Self {
        Self {
            lift: result.lift,
            time: result.floors,
        }
    }
}
