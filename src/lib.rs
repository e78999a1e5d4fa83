//! Collision Odds - Monte Carlo collision probability for drifting agents
//!
//! Core modules:
//! - `sim`: Trajectory generation, collision testing and the trial loop
//! - `config`: Run parameters with validation and JSON loading
//! - `error`: Error taxonomy shared by the whole crate

pub mod config;
pub mod error;
pub mod sim;

pub use config::SimConfig;
pub use error::SimError;
pub use sim::{Simulation, SimulationResult};

/// Simulation constants
pub mod consts {
    /// Total simulated time span of every trajectory
    pub const HORIZON: f64 = 10.0;
    /// Two poses closer than this (strictly) count as a collision
    pub const COLLISION_THRESHOLD: f64 = 0.005;

    /// Per-axis step magnitude is drawn uniformly from [STEP_MIN, STEP_MAX)
    pub const STEP_MIN: f64 = 1.0;
    pub const STEP_MAX: f64 = 2.0;

    /// Default run parameters
    pub const DEFAULT_TRIALS: u64 = 1000;
    pub const DEFAULT_AGENTS_PER_TRIAL: u64 = 100;
    pub const DEFAULT_STEPS: usize = 10;

    /// Start positions (x, y)
    pub const EGO_START: (f64, f64) = (-1.0, 0.0);
    pub const AGENT_START: (f64, f64) = (0.0, 0.0);
}
