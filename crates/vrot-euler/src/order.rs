//! The six Tait-Bryan rotation orders.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use vrot_math::Axis;

use crate::error::EulerError;

/// Axis sequence of an intrinsic Euler rotation.
///
/// `XYZ` rotates about X first, then about the once-rotated Y, then about the
/// twice-rotated Z. The resulting matrix is `Rx · Ry · Rz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[allow(clippy::upper_case_acronyms)]
pub enum RotationOrder {
    /// X, then Y, then Z.
    #[default]
    XYZ,
    /// X, then Z, then Y.
    XZY,
    /// Y, then X, then Z.
    YXZ,
    /// Y, then Z, then X.
    YZX,
    /// Z, then X, then Y.
    ZXY,
    /// Z, then Y, then X.
    ZYX,
}

impl RotationOrder {
    /// Every order, in index order.
    pub const ALL: [RotationOrder; 6] = [
        RotationOrder::XYZ,
        RotationOrder::XZY,
        RotationOrder::YXZ,
        RotationOrder::YZX,
        RotationOrder::ZXY,
        RotationOrder::ZYX,
    ];

    /// The axes in the order they are rotated about.
    pub fn axes(self) -> [Axis; 3] {
        use Axis::{X, Y, Z};
        match self {
            RotationOrder::XYZ => [X, Y, Z],
            RotationOrder::XZY => [X, Z, Y],
            RotationOrder::YXZ => [Y, X, Z],
            RotationOrder::YZX => [Y, Z, X],
            RotationOrder::ZXY => [Z, X, Y],
            RotationOrder::ZYX => [Z, Y, X],
        }
    }

    /// The order with the axis sequence reversed.
    ///
    /// Rotating by negated angles in the reversed order undoes a rotation.
    pub fn reversed(self) -> Self {
        match self {
            RotationOrder::XYZ => RotationOrder::ZYX,
            RotationOrder::XZY => RotationOrder::YZX,
            RotationOrder::YXZ => RotationOrder::ZXY,
            RotationOrder::YZX => RotationOrder::XZY,
            RotationOrder::ZXY => RotationOrder::YXZ,
            RotationOrder::ZYX => RotationOrder::XYZ,
        }
    }

    /// Stable index of this order (0..6).
    pub fn index(self) -> u8 {
        match self {
            RotationOrder::XYZ => 0,
            RotationOrder::XZY => 1,
            RotationOrder::YXZ => 2,
            RotationOrder::YZX => 3,
            RotationOrder::ZXY => 4,
            RotationOrder::ZYX => 5,
        }
    }

    /// Name of this order, e.g. `"ZXY"`.
    pub fn as_str(self) -> &'static str {
        match self {
            RotationOrder::XYZ => "XYZ",
            RotationOrder::XZY => "XZY",
            RotationOrder::YXZ => "YXZ",
            RotationOrder::YZX => "YZX",
            RotationOrder::ZXY => "ZXY",
            RotationOrder::ZYX => "ZYX",
        }
    }
}

impl fmt::Display for RotationOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RotationOrder {
    type Err = EulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        RotationOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == upper)
            .ok_or_else(|| EulerError::InvalidOrder(s.to_string()))
    }
}

impl TryFrom<u8> for RotationOrder {
    type Error = EulerError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        RotationOrder::ALL
            .get(index as usize)
            .copied()
            .ok_or_else(|| EulerError::InvalidOrder(index.to_string()))
    }
}

impl TryFrom<String> for RotationOrder {
    type Error = EulerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RotationOrder> for String {
    fn from(order: RotationOrder) -> Self {
        order.as_str().to_string()
    }
}
