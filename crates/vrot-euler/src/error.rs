//! Error types for the Euler rotation engine.

use thiserror::Error;

/// Errors that can occur while configuring or driving a rotation.
#[derive(Error, Debug)]
pub enum EulerError {
    /// Rotation order is not one of the six Tait-Bryan sequences.
    #[error("invalid rotation order: {0} (expected one of XYZ, XZY, YXZ, YZX, ZXY, ZYX)")]
    InvalidOrder(String),

    /// Animation speed must be finite and non-negative.
    #[error("invalid animation speed: {0}")]
    InvalidSpeed(f64),

    /// Target angles must be finite.
    #[error("invalid target angles: {0:?} (every component must be finite)")]
    InvalidTarget([f64; 3]),

    /// Renderer or input source failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rotation engine operations.
pub type Result<T> = std::result::Result<T, EulerError>;
