#![warn(missing_docs)]

//! Euler-angle rotation engine for the vrot tools.
//!
//! Rotates a small rigid model (the paper airplane) through an Euler
//! rotation given as three angles and one of the six Tait-Bryan axis orders,
//! and animates the rotation one axis at a time.
//!
//! # Example
//!
//! ```
//! use vrot_euler::{compute_final_pose, EulerAngles, PolyModel, RotationOrder};
//!
//! let model = PolyModel::default();
//! let angles = EulerAngles::from_degrees([20.0, 30.0, 40.0]);
//! let pose = compute_final_pose(&model, &angles, RotationOrder::ZXY);
//! assert_eq!(pose.vertices.len(), 7);
//! ```

mod angles;
mod animation;
mod animator;
mod error;
mod model;
mod order;
mod rotation;

pub use angles::EulerAngles;
pub use animation::AnimationState;
pub use animator::{
    AnimationOutcome, Animator, AnimatorSettings, ControlKey, Frame, FrameSink, InputSource,
    NoInput, StopReason,
};
pub use error::{EulerError, Result};
pub use model::{compute_final_pose, AxisTriad, PolyModel, MODEL_VERTICES};
pub use order::RotationOrder;
pub use rotation::{apply_rotation, rotate_vector, rotation_matrix};
