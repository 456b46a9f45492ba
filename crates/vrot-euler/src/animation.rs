//! Per-axis sweep of an Euler rotation, one frame at a time.

use tracing::debug;
use vrot_math::Axis;

use crate::angles::EulerAngles;
use crate::error::{EulerError, Result};
use crate::order::RotationOrder;

/// Progress of a sequential per-axis sweep toward a target orientation.
///
/// Axes are driven one at a time in the order's sequence: `ZXY` turns Z all
/// the way to its target, then X, then Y. Angles are kept in degrees, the
/// unit the speed is expressed in.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    order: RotationOrder,
    current: [f64; 3],
    target: [f64; 3],
    speed: f64,
    cursor: usize,
}

impl AnimationState {
    /// Start a sweep from zero toward `target_degrees`.
    ///
    /// `speed` is in degrees per step; `0.0` starts paused. Every target
    /// component must be finite, otherwise the sweep could never land on it.
    pub fn new(target_degrees: [f64; 3], order: RotationOrder, speed: f64) -> Result<Self> {
        check_speed(speed)?;
        if !target_degrees.iter().all(|t| t.is_finite()) {
            return Err(EulerError::InvalidTarget(target_degrees));
        }
        Ok(Self {
            order,
            current: [0.0; 3],
            target: target_degrees,
            speed,
            cursor: 0,
        })
    }

    /// Rotation order being animated.
    pub fn order(&self) -> RotationOrder {
        self.order
    }

    /// Current per-axis angles in degrees, indexed by axis.
    pub fn current_degrees(&self) -> [f64; 3] {
        self.current
    }

    /// Target per-axis angles in degrees, indexed by axis.
    pub fn target_degrees(&self) -> [f64; 3] {
        self.target
    }

    /// Current pose as radians.
    pub fn current_angles(&self) -> EulerAngles {
        EulerAngles::from_degrees(self.current)
    }

    /// Target pose as radians.
    pub fn target_angles(&self) -> EulerAngles {
        EulerAngles::from_degrees(self.target)
    }

    /// Degrees advanced per step; zero while paused.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Whether the sweep is paused.
    pub fn is_paused(&self) -> bool {
        self.speed == 0.0
    }

    /// Position in the order's axis sequence (3 once finished).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Axis currently being swept, or `None` once every axis is done.
    pub fn active_axis(&self) -> Option<Axis> {
        self.order.axes().get(self.cursor).copied()
    }

    /// Whether every axis has reached its target.
    pub fn is_finished(&self) -> bool {
        self.cursor >= 3
    }

    /// Same state with a different speed.
    pub fn with_speed(mut self, speed: f64) -> Result<Self> {
        check_speed(speed)?;
        self.speed = speed;
        Ok(self)
    }

    /// Pause if running, or resume at `rate` degrees per step if paused.
    pub fn toggle_pause(mut self, rate: f64) -> Result<Self> {
        check_speed(rate)?;
        self.speed = if self.is_paused() { rate } else { 0.0 };
        debug!(speed = self.speed, "animation pause toggled");
        Ok(self)
    }

    /// Advance one frame.
    ///
    /// Moves the active axis toward its target by `speed`, clamping on
    /// overshoot. When the axis lands on its target the cursor moves to the
    /// next axis in the sequence. A finished state is returned unchanged.
    pub fn step(mut self) -> Self {
        let Some(axis) = self.active_axis() else {
            return self;
        };
        let i = axis.index();
        let (cur, tgt) = (self.current[i], self.target[i]);

        let next = if cur < tgt {
            (cur + self.speed).min(tgt)
        } else if cur > tgt {
            (cur - self.speed).max(tgt)
        } else {
            tgt
        };
        self.current[i] = next;

        if next == tgt {
            self.cursor += 1;
            debug!(
                axis = axis.label(),
                angle = tgt,
                remaining = 3 - self.cursor,
                "axis reached target"
            );
        }
        self
    }
}

fn check_speed(speed: f64) -> Result<()> {
    if speed.is_finite() && speed >= 0.0 {
        Ok(())
    } else {
        Err(EulerError::InvalidSpeed(speed))
    }
}
