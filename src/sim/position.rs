//! 2D position with a drifting random-walk update
//!
//! Each update adds a non-negative displacement on both axes, so paths always
//! drift toward increasing x and y.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::source::StepSource;

/// A point in the plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Advance by one random step over `dt` time units
    ///
    /// Draws two magnitudes from `source` (x first, then y), scales each by
    /// `dt` and adds them to the coordinates.
    pub fn update<S: StepSource + ?Sized>(&mut self, dt: f64, source: &mut S) {
        let dx = source.draw();
        let dy = source.draw();
        self.x += dx * dt;
        self.y += dy * dt;
    }

    /// Componentwise difference `self - other`
    #[inline]
    pub fn difference(&self, other: &Position) -> Position {
        Position::new(self.x - other.x, self.y - other.y)
    }

    /// Euclidean norm (distance from the origin)
    #[inline]
    pub fn distance(&self) -> f64 {
        self.as_vec().length()
    }

    /// Distance between two positions
    #[inline]
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.difference(other).distance()
    }

    #[inline]
    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl std::ops::Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        self.difference(&rhs)
    }
}
