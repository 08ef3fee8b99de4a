use crate::lift::Lift;

use super::types::DispatchResult;

/// Trait for dispatch algorithms that pick a lift for a floor call.
///
/// Implementations are read-only scans: selecting a lift never moves it or
/// changes its state.
///
/// # Examples
///
/// ```rust
/// use lift_core::dispatch::{DispatchAlgorithm, NearestAvailableDispatch};
/// use lift_core::lift::{Lift, LiftState};
///
/// let lifts = [Lift::new(0, 5, LiftState::Idle, 10, 0)];
/// let result = NearestAvailableDispatch.select(&lifts, 2).expect("available lift");
/// assert_eq!(result.lift.id(), 0);
/// assert_eq!(result.floors, 3);
/// ```
pub trait DispatchAlgorithm: Send + Sync {
    /// Short name used in logs and configuration.
    fn name(&self) -> &'static str;

    /// Select a lift for a call at `request_floor`.
    ///
    /// # Arguments
    ///
    /// * `lifts` - The fleet's lifts, in fleet order
    /// * `request_floor` - Floor the call was made from. Not range-checked;
    ///   callers validate against the building first
    ///
    /// # Returns
    ///
    /// `Some(result)` with an available lift, or `None` when no lift is
    /// available. Running out of lifts is a normal outcome, not an error.
    fn select(&self, lifts: &[Lift], request_floor: i64) -> Option<DispatchResult>;
}
