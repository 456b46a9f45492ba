//! Everything needed to draw the circumsphere of three points.

use tracing::{debug, warn};
use vrot_math::{Point3, Vec3};

use crate::circumcenter::{CircumSphere, Triangle3};
use crate::error::{CircumError, Result};
use crate::plane::{scaled_normal, supporting_plane, SupportingPlane};
use crate::sphere::SphereSurface;
use crate::trace::CircularTrace;

/// Sampling density of a [`CircumScene`].
#[derive(Debug, Clone, Copy)]
pub struct SceneSettings {
    /// Segments in the circular trace (the trace has one more point).
    pub trace_steps: usize,
    /// Spacing between plane grid nodes, widened when the plane would need
    /// more than [`MAX_GRID_NODES`](crate::MAX_GRID_NODES) per axis.
    pub grid_spacing: f64,
    /// Longitude lines of the sphere surface.
    pub sphere_longitudes: usize,
    /// Latitude lines of the sphere surface.
    pub sphere_latitudes: usize,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            trace_steps: 200,
            grid_spacing: 1.0,
            sphere_longitudes: 20,
            sphere_latitudes: 20,
        }
    }
}

/// Circumsphere, supporting plane and trace for one triangle.
#[derive(Debug, Clone)]
pub struct CircumScene {
    /// Input points.
    pub triangle: Triangle3,
    /// Circumcenter and radius.
    pub sphere: CircumSphere,
    /// Center of gravity of the input points.
    pub centroid: Point3,
    /// Normal drawn at the circumcenter, length `0.5 · (r + 1)`.
    pub normal: Vec3,
    /// Plane sampled around the circumcenter; `None` for a vertical plane.
    pub plane: Option<SupportingPlane>,
    /// Sampled sphere surface.
    pub surface: SphereSurface,
    /// Point A swept once around the normal through the circumcenter.
    pub trace: Vec<Point3>,
    /// Half-width of a cube centered at the origin that holds the scene.
    pub view_extent: f64,
}

impl CircumScene {
    /// Solve and sample the scene for `a`, `b`, `c`.
    pub fn analyze(a: &Point3, b: &Point3, c: &Point3, settings: &SceneSettings) -> Result<Self> {
        let triangle = Triangle3::new(*a, *b, *c);
        let sphere = CircumSphere::from_triangle(&triangle)?;
        let p = sphere.center;
        let size = sphere.radius + 1.0;

        let normal = scaled_normal(a, b, c, size)?;
        let plane = match supporting_plane(a, b, c, &p, size, settings.grid_spacing) {
            Ok(plane) => Some(plane),
            Err(CircumError::VerticalPlane(cos_z)) => {
                warn!(cos_z, "supporting plane is vertical, skipping height grid");
                None
            }
            Err(e) => return Err(e),
        };

        let trace =
            CircularTrace::new(&normal, &(triangle.a - p), &p, settings.trace_steps)?.collect();
        let surface =
            SphereSurface::sample(&sphere, settings.sphere_longitudes, settings.sphere_latitudes);
        let view_extent = p.coords.amax() + sphere.radius + 1.0;

        debug!(radius = sphere.radius, view_extent, "circumsphere scene ready");
        Ok(Self {
            triangle,
            sphere,
            centroid: triangle.centroid(),
            normal,
            plane,
            surface,
            trace,
            view_extent,
        })
    }

    /// Normal at the circumcenter scaled to unit length.
    pub fn unit_normal(&self) -> Vec3 {
        self.normal.normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn reference() -> CircumScene {
        CircumScene::analyze(
            &Point3::new(-2.0, 1.0, 0.0),
            &Point3::new(0.0, 1.0, 0.7),
            &Point3::new(1.0, 0.0, 0.0),
            &SceneSettings::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_reference_scene() {
        let scene = reference();
        let s = scene.sphere;
        for v in [scene.triangle.a, scene.triangle.b, scene.triangle.c] {
            assert_abs_diff_eq!((v - s.center).norm(), s.radius, epsilon = 1e-6);
        }
        assert_abs_diff_eq!(scene.normal.norm(), 0.5 * (s.radius + 1.0), epsilon = 1e-12);
        assert!(scene.plane.is_some());
        assert_eq!(scene.surface.rows.len(), 20);
    }

    #[test]
    fn test_trace_passes_through_all_points() {
        // A − P spun about the normal is the circumcircle itself.
        let scene = reference();
        assert_eq!(scene.trace.len(), 201);
        assert_abs_diff_eq!(scene.trace[0], scene.triangle.a, epsilon = 1e-9);
        for v in [scene.triangle.b, scene.triangle.c] {
            let nearest = scene
                .trace
                .iter()
                .map(|p| (p - v).norm())
                .fold(f64::INFINITY, f64::min);
            // 200 segments on a circle of radius ~1.6 are ~0.05 apart.
            assert!(nearest < 0.05, "nearest trace point {nearest} away");
        }
        for p in &scene.trace {
            assert_abs_diff_eq!(
                scene.unit_normal().dot(&(p - scene.sphere.center)),
                0.0,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_view_extent_contains_sphere() {
        let scene = reference();
        let c = scene.sphere.center;
        let r = scene.sphere.radius;
        for i in 0..3 {
            assert!(c[i].abs() + r <= scene.view_extent);
        }
    }

    #[test]
    fn test_vertical_plane_keeps_scene() {
        let scene = CircumScene::analyze(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(2.0, 0.0, 0.0),
            &Point3::new(0.0, 0.0, 2.0),
            &SceneSettings::default(),
        )
        .unwrap();
        assert!(scene.plane.is_none());
        assert_abs_diff_eq!(scene.sphere.center, Point3::new(1.0, 0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_small_triangle_scene() {
        let a = Point3::new(0.2, 0.1, 0.0);
        let b = a + Vec3::new(3e-4, 0.0, 0.0);
        let c = a + Vec3::new(0.0, 3e-4, 1e-5);
        let scene = CircumScene::analyze(&a, &b, &c, &SceneSettings::default()).unwrap();
        let s = scene.sphere;
        for v in [a, b, c] {
            assert_abs_diff_eq!((v - s.center).norm(), s.radius, epsilon = 1e-12);
        }
        assert!(s.radius < 3e-4);
        assert!(scene.plane.is_some());
    }

    #[test]
    fn test_large_coordinates_keep_grid_bounded() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1e5, 0.0, 0.0);
        let c = Point3::new(0.0, 1e5, 1.0);
        let scene = CircumScene::analyze(&a, &b, &c, &SceneSettings::default()).unwrap();
        let s = scene.sphere;
        for v in [a, b, c] {
            assert_abs_diff_eq!((v - s.center).norm(), s.radius, epsilon = 1e-6 * s.radius);
        }
        let grid = &scene.plane.expect("plane is nearly horizontal").grid;
        assert!(grid.xs.len() <= crate::MAX_GRID_NODES);
        assert!(grid.ys.len() <= crate::MAX_GRID_NODES);
        assert_eq!(scene.trace.len(), 201);
    }

    #[test]
    fn test_collinear_points_fail() {
        let err = CircumScene::analyze(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(2.0, 0.0, 0.0),
            &SceneSettings::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CircumError::SingularSystem { .. }));
    }
}
