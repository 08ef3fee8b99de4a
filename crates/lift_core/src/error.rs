use std::fmt;

/// Errors raised while configuring or validating a fleet.
///
/// A query that finds no available lift is not an error; searches return `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum FleetError {
    ZeroLifts,
    ZeroFloors,
    ZeroCapacity,
    InvalidStateWeights(String),
    LiftOutOfRange { id: u32, reason: String },
    DuplicateLiftId(u32),
    FloorOutOfRange { floor: i64, num_floors: u32 },
    Config(String),
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::ZeroLifts => write!(f, "a fleet needs at least one lift"),
            FleetError::ZeroFloors => write!(f, "a fleet needs at least one floor"),
            FleetError::ZeroCapacity => write!(f, "lift capacity must be positive"),
            FleetError::InvalidStateWeights(message) => {
                write!(f, "invalid state weights: {message}")
            }
            FleetError::LiftOutOfRange { id, reason } => write!(f, "lift #{id}: {reason}"),
            FleetError::DuplicateLiftId(id) => write!(f, "lift id {id} appears more than once"),
            FleetError::FloorOutOfRange { floor, num_floors } => write!(
                f,
                "floor {floor} is outside the building (valid floors: 0..{num_floors})"
            ),
            FleetError::Config(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for FleetError {}

impl From<serde_json::Error> for FleetError {
    fn from(err: serde_json::Error) -> Self {
        FleetError::Config(format!("failed to parse fleet params: {err}"))
    }
}
