//! Monte Carlo trial loop
//!
//! One ego trajectory is sampled per run and reused unchanged across every
//! trial. Each trial then samples agents one at a time and stops at the first
//! agent that collides with the ego.

use std::fmt;

use serde::Serialize;

use super::collision::first_contact;
use super::source::{RngState, StepSource, UniformSteps};
use super::trajectory::Trajectory;
use crate::config::SimConfig;
use crate::error::SimError;

/// Aggregate outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationResult {
    /// Trials run
    pub trials: u64,
    /// Trials containing at least one collision
    pub collisions: u64,
    /// Agent trajectories actually generated
    pub agents_sampled: u64,
    /// `collisions / trials`, or 0.0 for an empty run
    pub probability: f64,
}

impl SimulationResult {
    fn new(trials: u64, collisions: u64, agents_sampled: u64) -> Self {
        let probability = if trials == 0 {
            0.0
        } else {
            collisions as f64 / trials as f64
        };
        Self {
            trials,
            collisions,
            agents_sampled,
            probability,
        }
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "odds= {}", self.probability)
    }
}

/// Outcome of a single trial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialOutcome {
    /// Slot and step index of the first collision, if any
    pub contact: Option<(u64, usize)>,
    /// Agents generated before the trial ended
    pub agents_sampled: u64,
}

impl TrialOutcome {
    pub fn collided(&self) -> bool {
        self.contact.is_some()
    }
}

/// Run one trial against a fixed ego trajectory
pub fn run_trial<S: StepSource + ?Sized>(
    ego: &Trajectory,
    config: &SimConfig,
    source: &mut S,
) -> Result<TrialOutcome, SimError> {
    for slot in 0..config.agents_per_trial {
        let agent = Trajectory::generate(config.agent_start, config.steps, config.horizon, source);
        if let Some(step) = first_contact(ego, &agent, config.threshold)? {
            return Ok(TrialOutcome {
                contact: Some((slot, step)),
                agents_sampled: slot + 1,
            });
        }
    }
    Ok(TrialOutcome {
        contact: None,
        agents_sampled: config.agents_per_trial,
    })
}

/// Estimate the collision probability with draws from `source`
///
/// The config is not validated here; [`Simulation::new`] does that.
pub fn estimate<S: StepSource + ?Sized>(
    config: &SimConfig,
    source: &mut S,
) -> Result<SimulationResult, SimError> {
    let ego = Trajectory::generate(config.ego_start, config.steps, config.horizon, source);

    let mut collisions = 0;
    let mut agents_sampled = 0;
    for trial in 0..config.trials {
        let outcome = run_trial(&ego, config, source)?;
        agents_sampled += outcome.agents_sampled;
        if let Some((slot, step)) = outcome.contact {
            log::debug!("Trial {trial}: agent {slot} collided at step {step}");
            collisions += 1;
        }
    }

    Ok(SimulationResult::new(config.trials, collisions, agents_sampled))
}

/// A validated config paired with its seeded generator
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    rng_state: RngState,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let rng_state = RngState::from_option(config.seed);
        Ok(Self { config, rng_state })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Seed actually used (reported so entropy-seeded runs can be replayed)
    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }

    /// Run every trial from a fresh generator
    pub fn run(&self) -> Result<SimulationResult, SimError> {
        log::info!(
            "Running {} trials x {} agents, {} steps, threshold {} (seed {})",
            self.config.trials,
            self.config.agents_per_trial,
            self.config.steps,
            self.config.threshold,
            self.rng_state.seed
        );
        let mut source = UniformSteps::new(self.rng_state.to_rng());
        let result = estimate(&self.config, &mut source)?;
        log::info!(
            "{} of {} trials collided ({} agents sampled)",
            result.collisions,
            result.trials,
            result.agents_sampled
        );
        Ok(result)
    }
}
