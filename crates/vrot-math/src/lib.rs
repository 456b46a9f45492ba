#![warn(missing_docs)]

//! Math types for the vrot geometry tools.
//!
//! Thin wrappers around nalgebra providing the shared vocabulary of the
//! rotation and circumsphere crates: points, vectors, unit directions,
//! 3x3 rotation matrices, coordinate axes and tolerance constants.

use nalgebra::{Matrix3, Unit, Vector3};
use serde::{Deserialize, Serialize};

mod rotate;

pub use rotate::{AxisRotator, QuaternionRotator, Rodrigues};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A 3x3 matrix, used for pure rotations.
pub type Mat3 = Matrix3<f64>;

/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// All three axes in component order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis (0, 1 or 2).
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit vector along this axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::x(),
            Axis::Y => Vec3::y(),
            Axis::Z => Vec3::z(),
        }
    }

    /// Single-letter label, as shown next to the axis arrow.
    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }

    /// Elementary rotation about this axis by `angle` radians.
    pub fn rotation(self, angle: f64) -> Mat3 {
        match self {
            Axis::X => rotation_x(angle),
            Axis::Y => rotation_y(angle),
            Axis::Z => rotation_z(angle),
        }
    }
}

/// Rotation about the X axis by `angle` radians.
pub fn rotation_x(angle: f64) -> Mat3 {
    let (s, c) = angle.sin_cos();
    let mut m = Mat3::identity();
    m[(1, 1)] = c;
    m[(1, 2)] = -s;
    m[(2, 1)] = s;
    m[(2, 2)] = c;
    m
}

/// Rotation about the Y axis by `angle` radians.
pub fn rotation_y(angle: f64) -> Mat3 {
    let (s, c) = angle.sin_cos();
    let mut m = Mat3::identity();
    m[(0, 0)] = c;
    m[(0, 2)] = s;
    m[(2, 0)] = -s;
    m[(2, 2)] = c;
    m
}

/// Rotation about the Z axis by `angle` radians.
pub fn rotation_z(angle: f64) -> Mat3 {
    let (s, c) = angle.sin_cos();
    let mut m = Mat3::identity();
    m[(0, 0)] = c;
    m[(0, 1)] = -s;
    m[(1, 0)] = s;
    m[(1, 1)] = c;
    m
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance.
    pub linear: f64,
    /// Smallest pivot magnitude accepted by the linear solvers.
    pub pivot: f64,
}

impl Tolerance {
    /// Default tolerances (1e-6 linear, 1e-9 pivot).
    pub const DEFAULT: Self = Self {
        linear: 1e-6,
        pivot: 1e-9,
    };

    /// Check if a candidate pivot is too small to divide by.
    pub fn is_singular_pivot(&self, pivot: f64) -> bool {
        pivot.abs() < self.pivot
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
