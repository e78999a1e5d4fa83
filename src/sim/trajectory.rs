//! Time-discretized agent paths
//!
//! A trajectory with `n` steps holds `n + 1` positions: the start position at
//! index 0 followed by one position per random-walk update.

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::source::StepSource;
use crate::consts::HORIZON;

/// One sampled path, read-only once built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    poses: Vec<Position>,
}

impl Trajectory {
    /// Sample a path over the fixed simulation horizon
    pub fn new<S: StepSource + ?Sized>(start: Position, steps: usize, source: &mut S) -> Self {
        Self::generate(start, steps, HORIZON, source)
    }

    /// Sample a path of `steps` updates spread evenly over `horizon` time units
    ///
    /// Consumes two draws from `source` per step. A step count of zero yields
    /// just the start position.
    pub fn generate<S: StepSource + ?Sized>(
        start: Position,
        steps: usize,
        horizon: f64,
        source: &mut S,
    ) -> Self {
        let mut poses = Vec::with_capacity(steps + 1);
        poses.push(start);
        if steps == 0 {
            return Self { poses };
        }

        let dt = horizon / steps as f64;
        let mut pose = start;
        for _ in 0..steps {
            pose.update(dt, source);
            poses.push(pose);
        }
        Self { poses }
    }

    /// Wrap an already recorded sequence of positions
    pub fn from_positions(poses: Vec<Position>) -> Self {
        Self { poses }
    }

    /// Number of positions (step count + 1 for generated paths)
    #[inline]
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// Number of random-walk steps taken
    pub fn steps(&self) -> usize {
        self.poses.len().saturating_sub(1)
    }

    pub fn poses(&self) -> &[Position] {
        &self.poses
    }

    pub fn start(&self) -> Option<&Position> {
        self.poses.first()
    }

    pub fn end(&self) -> Option<&Position> {
        self.poses.last()
    }
}
