use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dispatch::DispatchAlgorithmKind;
use crate::distributions::StateWeights;
use crate::error::FleetError;
use crate::fleet::{validate_dimensions, DEFAULT_MAX_CAPACITY};
use crate::spawner::LiftSpawnerConfig;

/// Default number of lifts in a demo building.
const DEFAULT_NUM_LIFTS: u32 = 4;

/// Default number of floors in a demo building.
const DEFAULT_NUM_FLOORS: u32 = 10;

/// Everything needed to build a fleet session.
///
/// Missing fields fall back to their defaults when loaded from JSON, so a
/// params file only has to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetParams {
    pub num_lifts: u32,
    pub num_floors: u32,
    pub max_capacity: u32,
    /// Seed for the fleet RNG. If None, the fleet is drawn from entropy.
    pub seed: Option<u64>,
    pub state_weights: StateWeights,
    pub dispatch_algorithm: DispatchAlgorithmKind,
}

impl Default for FleetParams {
    fn default() -> Self {
        Self {
            num_lifts: DEFAULT_NUM_LIFTS,
            num_floors: DEFAULT_NUM_FLOORS,
            max_capacity: DEFAULT_MAX_CAPACITY,
            seed: None,
            state_weights: StateWeights::default(),
            dispatch_algorithm: DispatchAlgorithmKind::default(),
        }
    }
}

impl FleetParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_num_lifts(mut self, num_lifts: u32) -> Self {
        self.num_lifts = num_lifts;
        self
    }

    pub fn with_num_floors(mut self, num_floors: u32) -> Self {
        self.num_floors = num_floors;
        self
    }

    pub fn with_max_capacity(mut self, max_capacity: u32) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    pub fn with_state_weights(mut self, state_weights: StateWeights) -> Self {
        self.state_weights = state_weights;
        self
    }

    pub fn with_dispatch_algorithm(mut self, kind: DispatchAlgorithmKind) -> Self {
        self.dispatch_algorithm = kind;
        self
    }

    pub fn validate(&self) -> Result<(), FleetError> {
        validate_dimensions(self.num_lifts, self.num_floors, self.max_capacity)?;
        self.state_weights.validate()
    }

    pub fn spawner_config(&self) -> LiftSpawnerConfig {
        LiftSpawnerConfig {
            num_lifts: self.num_lifts,
            num_floors: self.num_floors,
            max_capacity: self.max_capacity,
            state_weights: self.state_weights,
        }
    }

    /// Parse and validate params from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, FleetError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, FleetError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|error| {
            FleetError::Config(format!("failed to read {}: {error}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String, FleetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
