//! Headless output: plain text for people, JSON for scripts.

use std::fmt;
use std::io;
use std::time::Duration;

use serde::Serialize;
use vrot_circum::CircumScene;
use vrot_euler::{
    rotation_matrix, AnimationOutcome, EulerAngles, Frame, FrameSink, PolyModel, RotationOrder,
    StopReason,
};
use vrot_math::Point3;

fn xyz(p: &Point3) -> [f64; 3] {
    [p.x, p.y, p.z]
}

/// Frame sink that draws nothing and never waits.
#[derive(Debug, Default)]
pub struct HeadlessSink {
    pub last: Option<Frame>,
}

impl FrameSink for HeadlessSink {
    fn present(&mut self, frame: &Frame, _hold: Duration) -> io::Result<()> {
        tracing::trace!(
            index = frame.index,
            axis = frame.active_axis.label(),
            current = ?frame.current_degrees,
            "frame"
        );
        self.last = Some(frame.clone());
        Ok(())
    }
}

/// Result of a rotation sweep.
#[derive(Debug, Serialize)]
pub struct EulerReport {
    pub order: RotationOrder,
    pub target_degrees: [f64; 3],
    pub final_degrees: [f64; 3],
    pub matrix: [[f64; 3]; 3],
    pub final_pose: Vec<[f64; 3]>,
    pub frames: usize,
    pub completed: bool,
}

impl EulerReport {
    pub fn new(model: &PolyModel, outcome: &AnimationOutcome) -> Self {
        let state = &outcome.state;
        let order = state.order();
        let angles = EulerAngles::from_degrees(state.target_degrees());
        let m = rotation_matrix(&angles, order);
        Self {
            order,
            target_degrees: state.target_degrees(),
            final_degrees: state.current_degrees(),
            matrix: [0, 1, 2].map(|r| [m[(r, 0)], m[(r, 1)], m[(r, 2)]]),
            final_pose: model.rotated(&angles, order).vertices.iter().map(xyz).collect(),
            frames: outcome.frames,
            completed: outcome.reason == StopReason::Completed,
        }
    }
}

impl fmt::Display for EulerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.target_degrees;
        writeln!(f, "Order:  {}", self.order)?;
        writeln!(f, "Target: {x:.1}, {y:.1}, {z:.1} deg")?;
        writeln!(
            f,
            "Frames: {} ({})",
            self.frames,
            if self.completed { "completed" } else { "stopped" }
        )?;
        writeln!(f, "Matrix:")?;
        for row in &self.matrix {
            writeln!(f, "  {:>9.5} {:>9.5} {:>9.5}", row[0], row[1], row[2])?;
        }
        writeln!(f, "Final pose:")?;
        for (i, v) in self.final_pose.iter().enumerate() {
            writeln!(f, "  {i}: {:>8.4} {:>8.4} {:>8.4}", v[0], v[1], v[2])?;
        }
        Ok(())
    }
}

/// Circumsphere of three points.
#[derive(Debug, Serialize)]
pub struct SphereReport {
    pub points: [[f64; 3]; 3],
    pub center: [f64; 3],
    pub radius: f64,
    pub centroid: [f64; 3],
    pub unit_normal: [f64; 3],
    pub view_extent: f64,
    pub trace: Vec<[f64; 3]>,
}

impl SphereReport {
    pub fn new(scene: &CircumScene) -> Self {
        let t = &scene.triangle;
        let n = scene.unit_normal();
        Self {
            points: [xyz(&t.a), xyz(&t.b), xyz(&t.c)],
            center: xyz(&scene.sphere.center),
            radius: scene.sphere.radius,
            centroid: xyz(&scene.centroid),
            unit_normal: [n.x, n.y, n.z],
            view_extent: scene.view_extent,
            trace: scene.trace.iter().map(xyz).collect(),
        }
    }
}

impl fmt::Display for SphereReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, p) in ["A", "B", "C"].iter().zip(&self.points) {
            writeln!(f, "{name}: {:.3}, {:.3}, {:.3}", p[0], p[1], p[2])?;
        }
        let [px, py, pz] = self.center;
        writeln!(f, "Center: {px:.6}, {py:.6}, {pz:.6}")?;
        writeln!(f, "Radius: {:.6}", self.radius)?;
        let [gx, gy, gz] = self.centroid;
        writeln!(f, "Center of gravity: {gx:.3}, {gy:.3}, {gz:.3}")?;
        let [nx, ny, nz] = self.unit_normal;
        writeln!(f, "Normal: {nx:.3}, {ny:.3}, {nz:.3}")?;
        writeln!(f, "Trace points: {}", self.trace.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use vrot_circum::SceneSettings;
    use vrot_euler::{Animator, AnimatorSettings, NoInput};

    fn sweep(order: RotationOrder) -> (PolyModel, AnimationOutcome) {
        let model = PolyModel::default();
        let settings = AnimatorSettings {
            start_paused: false,
            frame_hold: Duration::ZERO,
            axis_hold: Duration::ZERO,
            ..AnimatorSettings::default()
        };
        let animator = Animator::new(model.clone(), [20.0, 30.0, 40.0], order, settings).unwrap();
        let mut sink = HeadlessSink::default();
        let outcome = animator.run(&mut sink, &mut NoInput).unwrap();
        assert_eq!(sink.last.map(|f| f.index + 1), Some(outcome.frames));
        (model, outcome)
    }

    #[test]
    fn test_euler_report_matches_final_pose() {
        let (model, outcome) = sweep(RotationOrder::XYZ);
        let report = EulerReport::new(&model, &outcome);
        assert!(report.completed);
        assert_eq!(report.final_degrees, [20.0, 30.0, 40.0]);
        // 20/2 + 30/2 + 40/2 frames.
        assert_eq!(report.frames, 45);
        let nose = report.final_pose[0];
        let m = report.matrix;
        for (i, row) in m.iter().enumerate() {
            assert_abs_diff_eq!(nose[i], row[0], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_euler_report_json() {
        let (model, outcome) = sweep(RotationOrder::ZYX);
        let json = serde_json::to_value(EulerReport::new(&model, &outcome)).unwrap();
        assert_eq!(json["order"], "ZYX");
        assert_eq!(json["final_pose"].as_array().unwrap().len(), 7);
        assert_eq!(json["completed"], true);
    }

    #[test]
    fn test_sphere_report() {
        let scene = CircumScene::analyze(
            &Point3::new(-2.0, 1.0, 0.0),
            &Point3::new(0.0, 1.0, 0.7),
            &Point3::new(1.0, 0.0, 0.0),
            &SceneSettings::default(),
        )
        .unwrap();
        let report = SphereReport::new(&scene);
        assert_eq!(report.trace.len(), 201);
        assert_abs_diff_eq!(report.radius, scene.sphere.radius);
        let text = report.to_string();
        assert!(text.contains("Radius:"));
        assert!(text.starts_with("A: -2.000, 1.000, 0.000"));
    }
}
