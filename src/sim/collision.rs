//! Step-by-step proximity test between two trajectories
//!
//! Poses are compared only at matching time indices. The scan stops at the
//! first index whose separation is strictly below the threshold.

use super::trajectory::Trajectory;
use crate::error::SimError;

/// Index of the first step where `a` and `b` are closer than `threshold`
///
/// Fails with [`SimError::LengthMismatch`] if the trajectories were built
/// with different step counts.
pub fn first_contact(
    a: &Trajectory,
    b: &Trajectory,
    threshold: f64,
) -> Result<Option<usize>, SimError> {
    if a.len() != b.len() {
        return Err(SimError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    Ok(a
        .poses()
        .iter()
        .zip(b.poses())
        .position(|(pa, pb)| pa.difference(pb).distance() < threshold))
}

/// Whether `a` and `b` ever come within `threshold` of each other
pub fn is_collision(a: &Trajectory, b: &Trajectory, threshold: f64) -> Result<bool, SimError> {
    Ok(first_contact(a, b, threshold)?.is_some())
}
