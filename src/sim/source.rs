//! Random step sources
//!
//! Every position update pulls its step magnitudes from a [`StepSource`]
//! passed in by the caller. Production runs use [`UniformSteps`] over a seeded
//! PCG generator; tests swap in deterministic stubs.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{STEP_MAX, STEP_MIN};

/// Supplier of per-axis step magnitudes
pub trait StepSource {
    /// Next step magnitude
    fn draw(&mut self) -> f64;
}

/// Any `FnMut() -> f64` closure is a step source (handy for scripted tests)
impl<F: FnMut() -> f64> StepSource for F {
    fn draw(&mut self) -> f64 {
        (self)()
    }
}

/// Uniform draws over [STEP_MIN, STEP_MAX) from any `rand` generator
#[derive(Debug, Clone)]
pub struct UniformSteps<R> {
    rng: R,
}

impl<R: Rng> UniformSteps<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformSteps<Pcg32> {
    /// Seeded PCG source
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngState::new(seed).to_rng())
    }
}

impl<R: Rng> StepSource for UniformSteps<R> {
    #[inline]
    fn draw(&mut self) -> f64 {
        self.rng.random_range(STEP_MIN..STEP_MAX)
    }
}

/// Always returns the same magnitude
#[derive(Debug, Clone, Copy)]
pub struct ConstantSteps(pub f64);

impl StepSource for ConstantSteps {
    #[inline]
    fn draw(&mut self) -> f64 {
        self.0
    }
}

/// Seed record for reproducing a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Use the configured seed, or draw one from OS entropy if absent
    pub fn from_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::new(rand::random()),
        }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_range() {
        let mut source = UniformSteps::seeded(7);
        for _ in 0..10_000 {
            let v = source.draw();
            assert!((STEP_MIN..STEP_MAX).contains(&v), "draw {v} out of range");
        }
    }

    #[test]
    fn test_seeded_sources_match() {
        let mut a = UniformSteps::seeded(42);
        let mut b = UniformSteps::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.draw().to_bits(), b.draw().to_bits());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = UniformSteps::seeded(1);
        let mut b = UniformSteps::seeded(2);
        let same = (0..32).all(|_| a.draw() == b.draw());
        assert!(!same);
    }

    #[test]
    fn test_rng_state_keeps_explicit_seed() {
        assert_eq!(RngState::from_option(Some(99)).seed, 99);
    }

    #[test]
    fn test_constant_steps() {
        let mut source = ConstantSteps(1.5);
        assert_eq!(source.draw(), 1.5);
        assert_eq!(source.draw(), 1.5);
    }
}
