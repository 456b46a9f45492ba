//! Cooperative frame loop driving an [`AnimationState`] to completion.

use std::io;
use std::time::Duration;

use tracing::{debug, info};
use vrot_math::{Axis, Vec3};

use crate::animation::AnimationState;
use crate::error::{EulerError, Result};
use crate::model::{AxisTriad, PolyModel};
use crate::order::RotationOrder;

/// Logical keys polled once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKey {
    /// Start the sweep, or pause/resume it.
    TogglePause,
    /// Abandon the sweep.
    Stop,
}

/// Non-blocking source of control key state.
pub trait InputSource {
    /// Collect whatever input arrived since the last frame.
    fn refresh(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Whether `key` was pressed since the last refresh.
    fn is_pressed(&self, key: ControlKey) -> bool;
}

/// Input source that never reports a key press.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn is_pressed(&self, _key: ControlKey) -> bool {
        false
    }
}

/// Consumer of animation frames.
pub trait FrameSink {
    /// Display `frame`, then wait up to `hold` before returning.
    fn present(&mut self, frame: &Frame, hold: Duration) -> io::Result<()>;
}

/// Everything a renderer needs to draw one step of the sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Sequence number, starting at 0.
    pub index: usize,
    /// Rotation order being animated.
    pub order: RotationOrder,
    /// Model in its final orientation.
    pub target_pose: PolyModel,
    /// Model in its current orientation.
    pub pose: PolyModel,
    /// Body axes in the current orientation.
    pub triad: AxisTriad,
    /// Axis that was swept during this step.
    pub active_axis: Axis,
    /// Current angles in degrees.
    pub current_degrees: [f64; 3],
    /// Target angles in degrees.
    pub target_degrees: [f64; 3],
    /// Whether the sweep is paused.
    pub paused: bool,
}

impl Frame {
    /// Rotated direction of the active axis.
    pub fn active_vector(&self) -> Vec3 {
        self.triad.axis(self.active_axis)
    }

    /// Key help shown under the plot.
    pub fn instructions(&self) -> &'static str {
        "[F1/Space]: Start/Pause, [Esc/q]: Stop"
    }

    /// Target angle caption.
    pub fn target_label(&self) -> String {
        let [x, y, z] = self.target_degrees;
        format!("Target Euler Angle: {x:.1}, {y:.1}, {z:.1} ({})", self.order)
    }
}

/// Timing and rate of an [`Animator`].
#[derive(Debug, Clone)]
pub struct AnimatorSettings {
    /// Degrees per step while running.
    pub speed: f64,
    /// Wait for a toggle before moving.
    pub start_paused: bool,
    /// Hold after an ordinary frame.
    pub frame_hold: Duration,
    /// Hold after a frame that completed an axis.
    pub axis_hold: Duration,
    /// Give up after this many frames.
    pub max_frames: Option<usize>,
}

impl Default for AnimatorSettings {
    fn default() -> Self {
        Self {
            speed: 2.0,
            start_paused: true,
            frame_hold: Duration::from_millis(100),
            axis_hold: Duration::from_secs(1),
            max_frames: None,
        }
    }
}

/// Why [`Animator::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every axis reached its target.
    Completed,
    /// The stop key was pressed.
    Stopped,
    /// `max_frames` ran out.
    FrameLimit,
}

/// Result of running an animation.
#[derive(Debug, Clone)]
pub struct AnimationOutcome {
    /// Why the loop ended.
    pub reason: StopReason,
    /// Frames handed to the sink.
    pub frames: usize,
    /// State after the last step.
    pub state: AnimationState,
}

/// Drives a rotation sweep, handing each frame to a [`FrameSink`].
pub struct Animator {
    model: PolyModel,
    triad: AxisTriad,
    target_pose: PolyModel,
    initial: AnimationState,
    settings: AnimatorSettings,
}

impl Animator {
    /// Animate `model` toward `target_degrees` in `order`.
    pub fn new(
        model: PolyModel,
        target_degrees: [f64; 3],
        order: RotationOrder,
        settings: AnimatorSettings,
    ) -> Result<Self> {
        if !(settings.speed.is_finite() && settings.speed > 0.0) {
            return Err(EulerError::InvalidSpeed(settings.speed));
        }
        let initial_speed = if settings.start_paused { 0.0 } else { settings.speed };
        let initial = AnimationState::new(target_degrees, order, initial_speed)?;
        let target_pose = model.rotated(&initial.target_angles(), order);
        Ok(Self {
            model,
            triad: AxisTriad::default(),
            target_pose,
            initial,
            settings,
        })
    }

    /// The model in its final orientation.
    pub fn target_pose(&self) -> &PolyModel {
        &self.target_pose
    }

    /// Frame describing `state` after sweeping `active_axis`.
    pub fn frame(&self, index: usize, state: &AnimationState, active_axis: Axis) -> Frame {
        let angles = state.current_angles();
        let order = state.order();
        Frame {
            index,
            order,
            target_pose: self.target_pose.clone(),
            pose: self.model.rotated(&angles, order),
            triad: self.triad.rotated(&angles, order),
            active_axis,
            current_degrees: state.current_degrees(),
            target_degrees: state.target_degrees(),
            paused: state.is_paused(),
        }
    }

    /// Run the loop until completion, a stop key, or the frame limit.
    ///
    /// Each iteration steps the state, presents the frame, and then polls
    /// `input`. Input is not consulted after the final frame.
    pub fn run<S, I>(&self, sink: &mut S, input: &mut I) -> Result<AnimationOutcome>
    where
        S: FrameSink + ?Sized,
        I: InputSource + ?Sized,
    {
        let mut state = self.initial.clone();
        let mut frames = 0;
        info!(
            order = %state.order(),
            target = ?state.target_degrees(),
            "starting rotation sweep"
        );

        let reason = loop {
            // Last axis again once finished, so the frame still names one.
            let axis = state
                .active_axis()
                .unwrap_or(state.order().axes()[2]);
            let cursor = state.cursor();
            state = state.step();

            let hold = if state.cursor() != cursor {
                self.settings.axis_hold
            } else {
                self.settings.frame_hold
            };
            sink.present(&self.frame(frames, &state, axis), hold)?;
            frames += 1;

            if state.is_finished() {
                break StopReason::Completed;
            }

            input.refresh()?;
            if input.is_pressed(ControlKey::TogglePause) {
                state = state.toggle_pause(self.settings.speed)?;
            }
            if input.is_pressed(ControlKey::Stop) {
                break StopReason::Stopped;
            }
            if self.settings.max_frames.is_some_and(|max| frames >= max) {
                break StopReason::FrameLimit;
            }
        };

        debug!(?reason, frames, "rotation sweep ended");
        Ok(AnimationOutcome {
            reason,
            frames,
            state,
        })
    }
}
