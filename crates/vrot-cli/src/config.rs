//! TOML configuration with the same defaults as the built-in demo scenes.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use vrot_circum::SceneSettings;
use vrot_euler::{AnimatorSettings, RotationOrder};
use vrot_math::Point3;

/// Whole configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub euler: EulerConfig,
    pub sphere: SphereConfig,
}

/// `[euler]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EulerConfig {
    /// Target angles in degrees about X, Y, Z.
    pub angles: [f64; 3],
    pub order: RotationOrder,
    /// Degrees per frame while running.
    pub speed: f64,
    pub start_paused: bool,
    pub frame_ms: u64,
    pub axis_ms: u64,
}

impl Default for EulerConfig {
    fn default() -> Self {
        Self {
            angles: [20.0, 30.0, 40.0],
            order: RotationOrder::XYZ,
            speed: 2.0,
            start_paused: true,
            frame_ms: 100,
            axis_ms: 1000,
        }
    }
}

impl EulerConfig {
    pub fn animator_settings(&self) -> AnimatorSettings {
        AnimatorSettings {
            speed: self.speed,
            start_paused: self.start_paused,
            frame_hold: Duration::from_millis(self.frame_ms),
            axis_hold: Duration::from_millis(self.axis_ms),
            max_frames: None,
        }
    }
}

/// `[sphere]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SphereConfig {
    pub a: [f64; 3],
    pub b: [f64; 3],
    pub c: [f64; 3],
    pub trace_steps: usize,
    pub grid_spacing: f64,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            a: [-2.0, 1.0, 0.0],
            b: [0.0, 1.0, 0.7],
            c: [1.0, 0.0, 0.0],
            trace_steps: 200,
            grid_spacing: 1.0,
        }
    }
}

impl SphereConfig {
    pub fn points(&self) -> [Point3; 3] {
        [self.a.into(), self.b.into(), self.c.into()]
    }

    pub fn scene_settings(&self) -> SceneSettings {
        SceneSettings {
            trace_steps: self.trace_steps,
            grid_spacing: self.grid_spacing,
            ..SceneSettings::default()
        }
    }
}

impl Config {
    /// Read `path`, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
