//! Simulation run parameters
//!
//! Loaded from an optional JSON file; any field left out falls back to the
//! default run (1000 trials, 100 agents, 10 steps).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;
use crate::sim::Position;

/// Parameters of one Monte Carlo run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of independent trials
    pub trials: u64,
    /// Agents sampled per trial (fewer if a collision ends the trial early)
    pub agents_per_trial: u64,
    /// Random-walk steps per trajectory (must be at least 1)
    pub steps: usize,
    /// Total simulated time span
    pub horizon: f64,
    /// Strict proximity threshold for a collision
    pub threshold: f64,
    /// Where the ego trajectory starts
    pub ego_start: Position,
    /// Where every agent trajectory starts
    pub agent_start: Position,
    /// RNG seed; drawn from OS entropy when absent
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            agents_per_trial: DEFAULT_AGENTS_PER_TRIAL,
            steps: DEFAULT_STEPS,
            horizon: HORIZON,
            threshold: COLLISION_THRESHOLD,
            ego_start: EGO_START.into(),
            agent_start: AGENT_START.into(),
            seed: None,
        }
    }
}

impl SimConfig {
    /// Default run with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Reject parameters that would silently produce degenerate output
    pub fn validate(&self) -> Result<(), SimError> {
        if self.steps == 0 {
            return Err(SimError::InvalidConfig("steps must be at least 1"));
        }
        if !self.horizon.is_finite() || self.horizon <= 0.0 {
            return Err(SimError::InvalidConfig("horizon must be finite and positive"));
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(SimError::InvalidConfig("threshold must be finite and non-negative"));
        }
        if !self.ego_start.is_finite() {
            return Err(SimError::InvalidConfig("ego_start must be finite"));
        }
        if !self.agent_start.is_finite() {
            return Err(SimError::InvalidConfig("agent_start must be finite"));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SimError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
