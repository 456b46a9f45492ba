//! Euler angle triples.

use serde::{Deserialize, Serialize};
use vrot_math::Axis;

/// Rotation magnitudes about X, Y and Z, in radians.
///
/// Components are always indexed by axis, not by position in the rotation
/// order: `y` is the angle about Y whether Y is rotated first or last.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    /// Angle about X in radians.
    pub x: f64,
    /// Angle about Y in radians.
    pub y: f64,
    /// Angle about Z in radians.
    pub z: f64,
}

impl EulerAngles {
    /// Angles in radians.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// All-zero angles (identity rotation).
    pub fn zero() -> Self {
        Self::default()
    }

    /// Angles given in degrees.
    pub fn from_degrees(degrees: [f64; 3]) -> Self {
        Self::new(
            degrees[0].to_radians(),
            degrees[1].to_radians(),
            degrees[2].to_radians(),
        )
    }

    /// Angles converted to degrees.
    pub fn to_degrees(&self) -> [f64; 3] {
        [self.x.to_degrees(), self.y.to_degrees(), self.z.to_degrees()]
    }

    /// Angle about `axis`.
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Copy with the angle about `axis` replaced.
    pub fn with(mut self, axis: Axis, angle: f64) -> Self {
        match axis {
            Axis::X => self.x = angle,
            Axis::Y => self.y = angle,
            Axis::Z => self.z = angle,
        }
        self
    }

    /// Every component negated.
    ///
    /// Paired with [`RotationOrder::reversed`](crate::RotationOrder::reversed)
    /// this gives the inverse rotation.
    pub fn negated(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f64; 3]> for EulerAngles {
    fn from(radians: [f64; 3]) -> Self {
        Self::new(radians[0], radians[1], radians[2])
    }
}
