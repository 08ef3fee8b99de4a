//! Probability distributions used by the fleet initializer.
//!
//! The only randomized decision is which state each generated lift starts in.
//! Weights are kept raw (they need not sum to one) and drawn with a running
//! remainder, so the selection order is the enumeration order of the items.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::FleetError;
use crate::lift::LiftState;

/// Pick one of `items` with probability proportional to `weights`.
///
/// Draws `r` uniformly from `[0, total)` and subtracts each weight in order
/// until the remainder is `<= 0`. When floating-point drift leaves nothing
/// selected, the last item is returned. A non-positive or non-finite total
/// also yields the last item. Returns `None` only when `items` is empty.
pub fn weighted_choice<'a, T, R: Rng>(
    items: &'a [T],
    weights: &[f64],
    rng: &mut R,
) -> Option<&'a T> {
    let last = items.last()?;
    let total: f64 = weights.iter().take(items.len()).sum();
    if !total.is_finite() || total <= 0.0 {
        return Some(last);
    }

    pick(items, weights, rng.gen_range(0.0..total))
}

/// Walk `items` subtracting weights from the draw `r`; the first item that
/// brings the remainder to `<= 0` wins. A remainder still positive after the
/// last weight selects the last item.
fn pick<'a, T>(items: &'a [T], weights: &[f64], r: f64) -> Option<&'a T> {
    let last = items.last()?;
    let mut remainder = r;
    for (item, weight) in items.iter().zip(weights) {
        remainder -= weight;
        if remainder <= 0.0 {
            return Some(item);
        }
    }
    Some(last)
}

/// Relative likelihood of each starting state for generated lifts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateWeights {
    pub idle: f64,
    pub occupied: f64,
    pub moving_up: f64,
    pub moving_down: f64,
}

impl Default for StateWeights {
    fn default() -> Self {
        Self {
            idle: 0.50,
            occupied: 0.20,
            moving_up: 0.15,
            moving_down: 0.15,
        }
    }
}

impl StateWeights {
    /// Weights in `LiftState::ALL` order.
    pub fn as_array(&self) -> [f64; 4] {
        [self.idle, self.occupied, self.moving_up, self.moving_down]
    }

    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }

    pub fn validate(&self) -> Result<(), FleetError> {
        for (state, weight) in LiftState::ALL.iter().zip(self.as_array()) {
            if !weight.is_finite() || weight < 0.0 {
                return Err(FleetError::InvalidStateWeights(format!(
                    "weight for {state} must be a finite non-negative number, got {weight}"
                )));
            }
        }
        if self.total() <= 0.0 {
            return Err(FleetError::InvalidStateWeights(
                "weights must not all be zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Draw a starting state.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> LiftState {
        weighted_choice(&LiftState::ALL, &self.as_array(), rng)
            .copied()
            .unwrap_or(LiftState::MovingDown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_items_yield_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let items: [u8; 0] = [];
        assert_eq!(weighted_choice(&items, &[], &mut rng), None);
    }

    #[test]
    fn single_positive_weight_always_wins() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = ["a", "b", "c"];
        for _ in 0..100 {
            assert_eq!(weighted_choice(&items, &[0.0, 1.0, 0.0], &mut rng), Some(&"b"));
        }
    }

    #[test]
    fn zero_total_falls_back_to_last() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = [1, 2, 3];
        assert_eq!(weighted_choice(&items, &[0.0, 0.0, 0.0], &mut rng), Some(&3));
    }

    #[test]
    fn draw_on_a_boundary_selects_the_earlier_item() {
        let items = ["a", "b", "c"];
        let weights = [0.25, 0.5, 0.25];
        assert_eq!(pick(&items, &weights, 0.0), Some(&"a"));
        assert_eq!(pick(&items, &weights, 0.25), Some(&"a"));
        assert_eq!(pick(&items, &weights, 0.5), Some(&"b"));
        assert_eq!(pick(&items, &weights, 0.75), Some(&"b"));
        assert_eq!(pick(&items, &weights, 0.875), Some(&"c"));
    }

    #[test]
    fn positive_residual_falls_back_to_last() {
        let items = ["a", "b", "c"];
        let weights = [0.25, 0.5, 0.125];
        assert_eq!(pick(&items, &weights, 0.875 + 1e-9), Some(&"c"));
        assert_eq!(pick(&items, &weights, 2.0), Some(&"c"));
        // Fewer weights than items: the unweighted tail is only reachable
        // through the fallback.
        assert_eq!(pick(&[1, 2, 3], &[0.5], 0.75), Some(&3));
    }

    #[test]
    fn default_weights_are_valid() {
        let weights = StateWeights::default();
        assert!(weights.validate().is_ok());
        assert!((weights.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn negative_weight_is_rejected() {
        let weights = StateWeights {
            occupied: -0.1,
            ..Default::default()
        };
        assert!(matches!(
            weights.validate(),
            Err(FleetError::InvalidStateWeights(_))
        ));
    }

    #[test]
    fn all_zero_weights_are_rejected() {
        let weights = StateWeights {
            idle: 0.0,
            occupied: 0.0,
            moving_up: 0.0,
            moving_down: 0.0,
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn idle_only_weights_sample_idle() {
        let weights = StateWeights {
            idle: 1.0,
            occupied: 0.0,
            moving_up: 0.0,
            moving_down: 0.0,
        };
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(weights.sample(&mut rng), LiftState::Idle);
        }
    }
}
