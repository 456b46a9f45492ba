//! The rigid body being rotated and the axis triad drawn with it.

use vrot_math::{Axis, Point3, Vec3};

use crate::angles::EulerAngles;
use crate::order::RotationOrder;
use crate::rotation::{apply_rotation, rotate_vector};

/// Number of vertices in a [`PolyModel`].
pub const MODEL_VERTICES: usize = 7;

/// A paper airplane: two planar faces sharing the edge at vertex 3.
///
/// Vertices `0..4` form the wing (a closed quad whose first and last
/// vertex coincide at the nose), vertices `3..7` the keel hanging below it.
/// Topology is fixed; only coordinates change under rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyModel {
    /// Vertex positions.
    pub vertices: [Point3; MODEL_VERTICES],
}

impl PolyModel {
    /// The paper airplane, nose at `+X`, translated by `offset`.
    pub fn paper_airplane(offset: Vec3) -> Self {
        let raw = [
            [1.0, 0.0, 0.0],
            [-1.0, 1.0, 0.0],
            [-1.0, -1.0, 0.0],
            [1.0, 0.0, 0.0],
            [-1.0, 0.0, -0.5],
            [-1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
        ];
        Self {
            vertices: raw.map(|[x, y, z]| Point3::new(x, y, z) + offset),
        }
    }

    /// Wing polygon.
    pub fn wing(&self) -> &[Point3] {
        &self.vertices[0..4]
    }

    /// Keel polygon.
    pub fn keel(&self) -> &[Point3] {
        &self.vertices[3..7]
    }

    /// Both faces, wing first.
    pub fn faces(&self) -> [&[Point3]; 2] {
        [self.wing(), self.keel()]
    }

    /// Every vertex rotated about the origin.
    pub fn rotated(&self, angles: &EulerAngles, order: RotationOrder) -> Self {
        Self {
            vertices: self.vertices.map(|v| apply_rotation(&v, angles, order)),
        }
    }
}

impl Default for PolyModel {
    fn default() -> Self {
        Self::paper_airplane(Vec3::zeros())
    }
}

/// Final pose of `model` after rotating by `angles` in `order`.
pub fn compute_final_pose(
    model: &PolyModel,
    angles: &EulerAngles,
    order: RotationOrder,
) -> PolyModel {
    model.rotated(angles, order)
}

/// Unit axis vectors of the body frame, anchored at `origin`.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTriad {
    /// Where the arrows are drawn from.
    pub origin: Point3,
    /// Body X, Y and Z directions.
    pub axes: [Vec3; 3],
}

impl AxisTriad {
    /// World-aligned triad at `origin`.
    pub fn new(origin: Point3) -> Self {
        Self {
            origin,
            axes: Axis::ALL.map(Axis::unit),
        }
    }

    /// Direction of `axis` in this triad.
    pub fn axis(&self, axis: Axis) -> Vec3 {
        self.axes[axis.index()]
    }

    /// Triad with every axis rotated; the origin stays put.
    pub fn rotated(&self, angles: &EulerAngles, order: RotationOrder) -> Self {
        Self {
            origin: self.origin,
            axes: self.axes.map(|a| rotate_vector(&a, angles, order)),
        }
    }
}

impl Default for AxisTriad {
    fn default() -> Self {
        Self::new(Point3::origin())
    }
}
