//! Circle traced by spinning a point about an axis.

use std::f64::consts::TAU;

use vrot_math::{AxisRotator, Dir3, Point3, QuaternionRotator, Tolerance, Vec3};

use crate::error::{CircumError, Result};

/// Lazily generated closed loop of `steps + 1` points.
///
/// Point `i` is `center + rotate(axis, start_offset, 2π·i/steps)`, so the
/// first and last points coincide. Each point is a pure function of its
/// index; cloning the iterator restarts it from wherever it was.
#[derive(Debug, Clone)]
pub struct CircularTrace<R = QuaternionRotator> {
    axis: Dir3,
    start_offset: Vec3,
    center: Point3,
    steps: usize,
    next: usize,
    rotator: R,
}

impl CircularTrace<QuaternionRotator> {
    /// Trace rotating with unit quaternions.
    pub fn new(axis: &Vec3, start_offset: &Vec3, center: &Point3, steps: usize) -> Result<Self> {
        Self::with_rotator(axis, start_offset, center, steps, QuaternionRotator)
    }
}

impl<R: AxisRotator> CircularTrace<R> {
    /// Trace using a caller-supplied rotation primitive.
    ///
    /// `axis` need not be normalized but must not be zero.
    pub fn with_rotator(
        axis: &Vec3,
        start_offset: &Vec3,
        center: &Point3,
        steps: usize,
        rotator: R,
    ) -> Result<Self> {
        let axis = Dir3::try_new(*axis, Tolerance::DEFAULT.linear).ok_or_else(|| {
            CircumError::InvalidArgument("trace axis must be non-zero".to_string())
        })?;
        Ok(Self {
            axis,
            start_offset: *start_offset,
            center: *center,
            steps,
            next: 0,
            rotator,
        })
    }

    /// Rotation angle of point `i`.
    pub fn angle(&self, i: usize) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            TAU * i as f64 / self.steps as f64
        }
    }

    /// Point `i` of the loop, independent of iteration state.
    pub fn point_at(&self, i: usize) -> Point3 {
        self.center + self.rotator.rotate(&self.axis, &self.start_offset, self.angle(i))
    }

    /// Total number of points (`steps + 1`).
    pub fn total(&self) -> usize {
        self.steps + 1
    }
}

impl<R: AxisRotator> Iterator for CircularTrace<R> {
    type Item = Point3;

    fn next(&mut self) -> Option<Point3> {
        if self.next >= self.total() {
            return None;
        }
        let p = self.point_at(self.next);
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl<R: AxisRotator> ExactSizeIterator for CircularTrace<R> {}

/// Materialized [`CircularTrace`].
pub fn circular_trace(
    axis: &Vec3,
    start_offset: &Vec3,
    center: &Point3,
    steps: usize,
) -> Result<Vec<Point3>> {
    Ok(CircularTrace::new(axis, start_offset, center, steps)?.collect())
}
