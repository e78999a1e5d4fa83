//! Collision simulation module
//!
//! All numeric work lives here. Randomness only enters through a
//! [`StepSource`] handed in by the caller:
//! - Seeded RNG only (entropy is turned into an explicit seed first)
//! - Single-threaded, fixed iteration order
//! - No I/O or printing

pub mod collision;
pub mod driver;
pub mod position;
pub mod source;
pub mod trajectory;

pub use collision::{first_contact, is_collision};
pub use driver::{Simulation, SimulationResult, TrialOutcome, estimate, run_trial};
pub use position::Position;
pub use source::{ConstantSteps, RngState, StepSource, UniformSteps};
pub use trajectory::Trajectory;
