pub mod algorithm;
pub mod earliest;
pub mod nearest;
pub mod types;

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::error::FleetError;

pub use algorithm::DispatchAlgorithm;
pub use earliest::EarliestArrivalDispatch;
pub use nearest::{closest_available, NearestAvailableDispatch};
pub use types::{DispatchResult, EarliestLift, NearestLift};

/// Which dispatch algorithm a session uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchAlgorithmKind {
    #[default]
    Nearest,
    Earliest,
}

impl DispatchAlgorithmKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DispatchAlgorithmKind::Nearest => "nearest",
            DispatchAlgorithmKind::Earliest => "earliest",
        }
    }
}

impl std::str::FromStr for DispatchAlgorithmKind {
    type Err = FleetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "nearest" => Ok(DispatchAlgorithmKind::Nearest),
            "earliest" => Ok(DispatchAlgorithmKind::Earliest),
            other => Err(FleetError::Config(format!(
                "unknown dispatch algorithm `{other}`, expected `nearest` or `earliest`"
            ))),
        }
    }
}

/// Resource wrapper for the dispatch algorithm trait object.
#[derive(Resource)]
pub struct DispatchAlgorithmResource(pub Box<dyn DispatchAlgorithm>);

impl DispatchAlgorithmResource {
    pub fn new(algorithm: Box<dyn DispatchAlgorithm>) -> Self {
        Self(algorithm)
    }
}

impl std::ops::Deref for DispatchAlgorithmResource {
    type Target = dyn DispatchAlgorithm;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
