//! Rotation of a vector about an arbitrary axis through the origin.

use nalgebra::UnitQuaternion;

use crate::{Dir3, Vec3};

/// Rotates a vector about a unit axis.
///
/// Implementations must follow the right-hand rule: a positive angle turns
/// counter-clockwise when looking down the axis toward the origin.
pub trait AxisRotator {
    /// Rotate `v` about `axis` by `angle` radians.
    fn rotate(&self, axis: &Dir3, v: &Vec3, angle: f64) -> Vec3;
}

/// Closed-form Rodrigues' rotation formula.
///
/// `v·cosθ + (k×v)·sinθ + k·(k·v)·(1−cosθ)`
#[derive(Debug, Clone, Copy, Default)]
pub struct Rodrigues;

impl AxisRotator for Rodrigues {
    fn rotate(&self, axis: &Dir3, v: &Vec3, angle: f64) -> Vec3 {
        let (s, c) = angle.sin_cos();
        let k = axis.as_ref();
        v * c + k.cross(v) * s + k * (k.dot(v) * (1.0 - c))
    }
}

/// Rotation through a unit quaternion `q · v · q*`.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuaternionRotator;

impl AxisRotator for QuaternionRotator {
    fn rotate(&self, axis: &Dir3, v: &Vec3, angle: f64) -> Vec3 {
        UnitQuaternion::from_axis_angle(axis, angle) * v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_quarter_turn_about_z() {
        let axis = Dir3::new_normalize(Vec3::z());
        let rotators: [&dyn AxisRotator; 2] = [&Rodrigues, &QuaternionRotator];
        for rotator in rotators {
            let r = rotator.rotate(&axis, &Vec3::x(), PI / 2.0);
            assert_abs_diff_eq!(r, Vec3::y(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_half_turn_about_diagonal() {
        // 180° about (1,1,0) swaps x and y and negates z.
        let axis = Dir3::new_normalize(Vec3::new(1.0, 1.0, 0.0));
        let r = Rodrigues.rotate(&axis, &Vec3::new(1.0, 0.0, 2.0), PI);
        assert_abs_diff_eq!(r, Vec3::new(0.0, 1.0, -2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_rodrigues_matches_quaternion() {
        let axis = Dir3::new_normalize(Vec3::new(0.3, -1.2, 0.8));
        let v = Vec3::new(-2.0, 0.5, 1.7);
        for i in 0..16 {
            let angle = i as f64 * 0.45 - 3.0;
            let a = Rodrigues.rotate(&axis, &v, angle);
            let b = QuaternionRotator.rotate(&axis, &v, angle);
            assert_abs_diff_eq!(a, b, epsilon = 1e-12);
            assert_abs_diff_eq!(a.norm(), v.norm(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_vector_on_axis_is_fixed() {
        let axis = Dir3::new_normalize(Vec3::new(1.0, 2.0, 3.0));
        let v = axis.into_inner() * 4.0;
        let r = QuaternionRotator.rotate(&axis, &v, 1.1);
        assert_abs_diff_eq!(r, v, epsilon = 1e-12);
    }
}
