//! Closed-form Euler rotation matrices.

use vrot_math::{Mat3, Point3, Vec3};

use crate::angles::EulerAngles;
use crate::order::RotationOrder;

/// Rotation matrix of `angles` applied intrinsically in `order`.
///
/// Each arm is the expanded product of the three elementary rotations, e.g.
/// `XYZ` is `Rx(x) · Ry(y) · Rz(z)`. No gimbal-lock handling: every entry is
/// a bounded sum of sine/cosine products and stays defined for any input.
pub fn rotation_matrix(angles: &EulerAngles, order: RotationOrder) -> Mat3 {
    let (sx, cx) = angles.x.sin_cos();
    let (sy, cy) = angles.y.sin_cos();
    let (sz, cz) = angles.z.sin_cos();

    match order {
        RotationOrder::XYZ => Mat3::new(
            cy * cz,
            -cy * sz,
            sy,
            sx * sy * cz + cx * sz,
            -sx * sy * sz + cx * cz,
            -sx * cy,
            -cx * sy * cz + sx * sz,
            cx * sy * sz + sx * cz,
            cx * cy,
        ),
        RotationOrder::XZY => Mat3::new(
            cy * cz,
            -sz,
            sy * cz,
            cx * cy * sz + sx * sy,
            cx * cz,
            cx * sy * sz - sx * cy,
            sx * cy * sz - cx * sy,
            sx * cz,
            sx * sy * sz + cx * cy,
        ),
        RotationOrder::YXZ => Mat3::new(
            sx * sy * sz + cy * cz,
            sx * sy * cz - cy * sz,
            cx * sy,
            cx * sz,
            cx * cz,
            -sx,
            sx * cy * sz - sy * cz,
            sx * cy * cz + sy * sz,
            cx * cy,
        ),
        RotationOrder::YZX => Mat3::new(
            cy * cz,
            -cx * cy * sz + sx * sy,
            sx * cy * sz + cx * sy,
            sz,
            cx * cz,
            -sx * cz,
            -sy * cz,
            cx * sy * sz + sx * cy,
            -sx * sy * sz + cx * cy,
        ),
        RotationOrder::ZXY => Mat3::new(
            -sx * sy * sz + cy * cz,
            -cx * sz,
            sx * cy * sz + sy * cz,
            sx * sy * cz + cy * sz,
            cx * cz,
            -sx * cy * cz + sy * sz,
            -cx * sy,
            sx,
            cx * cy,
        ),
        RotationOrder::ZYX => Mat3::new(
            cy * cz,
            sx * sy * cz - cx * sz,
            cx * sy * cz + sx * sz,
            cy * sz,
            sx * sy * sz + cx * cz,
            cx * sy * sz - sx * cz,
            -sy,
            sx * cy,
            cx * cy,
        ),
    }
}

/// Rotate `point` about the origin by `angles` in `order`.
pub fn apply_rotation(point: &Point3, angles: &EulerAngles, order: RotationOrder) -> Point3 {
    Point3::from(rotation_matrix(angles, order) * point.coords)
}

/// Rotate a free vector by `angles` in `order`.
pub fn rotate_vector(v: &Vec3, angles: &EulerAngles, order: RotationOrder) -> Vec3 {
    rotation_matrix(angles, order) * v
}
