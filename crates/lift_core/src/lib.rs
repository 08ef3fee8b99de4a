//! Elevator fleet model and dispatch.
//!
//! A [`fleet::Fleet`] owns its [`lift::Lift`]s; dispatch queries pick the
//! closest idle, empty lift for a floor call without changing any state.

pub mod dispatch;
pub mod distributions;
pub mod error;
pub mod fleet;
pub mod lift;
pub mod scenario;
pub mod spawner;
pub mod telemetry;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use error::FleetError;
pub use fleet::Fleet;
pub use lift::{Lift, LiftState};
