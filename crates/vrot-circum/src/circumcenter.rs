//! Circumcenter and circumscribed sphere of three points.

use tracing::debug;
use vrot_math::{Point3, Tolerance, Vec3};

use crate::error::{CircumError, Result};
use crate::gauss::{solve_linear3, Augmented3};

/// Three points in space; the solver expects them to be non-collinear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle3 {
    /// First point.
    pub a: Point3,
    /// Second point.
    pub b: Point3,
    /// Third point.
    pub c: Point3,
}

impl Triangle3 {
    /// Triangle through `a`, `b` and `c`.
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self { a, b, c }
    }

    /// Unnormalized normal `(B − A) × (C − A)`.
    pub fn normal(&self) -> Vec3 {
        (self.b - self.a).cross(&(self.c - self.a))
    }

    /// Center of gravity of the three points.
    pub fn centroid(&self) -> Point3 {
        Point3::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// Length of the longer edge leaving `a`; the unit of the local frame.
    pub fn scale(&self) -> f64 {
        (self.b - self.a).norm().max((self.c - self.a).norm())
    }

    /// Normal of the triangle in the local frame: `(B − A) × (C − A) / scale²`.
    ///
    /// Its length does not change when the triangle is scaled, so it can be
    /// compared against a fixed tolerance.
    pub fn relative_normal(&self) -> Vec3 {
        let s = self.scale();
        if s == 0.0 {
            return Vec3::zeros();
        }
        self.normal() / (s * s)
    }

    /// Whether the points are too close to collinear to span a plane.
    pub fn is_degenerate(&self, tol: &Tolerance) -> bool {
        tol.is_singular_pivot(self.relative_normal().norm())
    }

    /// The equidistance and coplanarity equations for the circumcenter.
    ///
    /// Unknowns are `q = (P − A) / scale`, so the coefficients stay near unit
    /// size whatever the size of the triangle. Rows: `|PA| = |PB|`,
    /// `|PA| = |PC|`, and `n·(P − A) = 0`.
    pub fn circumcenter_system(&self) -> Augmented3 {
        let s = self.scale();
        let inv = if s == 0.0 { 0.0 } else { 1.0 / s };
        let u = (self.b - self.a) * inv;
        let v = (self.c - self.a) * inv;
        let n = u.cross(&v);
        [
            [2.0 * u.x, 2.0 * u.y, 2.0 * u.z, u.norm_squared()],
            [2.0 * v.x, 2.0 * v.y, 2.0 * v.z, v.norm_squared()],
            [n.x, n.y, n.z, 0.0],
        ]
    }

    /// Point equidistant from all three vertices, in their plane.
    pub fn circumcenter(&self) -> Result<Point3> {
        if self.is_degenerate(&Tolerance::DEFAULT) {
            return Err(CircumError::SingularSystem {
                column: 2,
                pivot: self.relative_normal().norm(),
            });
        }
        let q = solve_linear3(self.circumcenter_system())?;
        let p = self.a + q * self.scale();
        debug!(x = p.x, y = p.y, z = p.z, "solved circumcenter");
        Ok(p)
    }
}

/// Circumcenter of `a`, `b` and `c`.
///
/// Fails with [`CircumError::SingularSystem`](crate::CircumError) when the
/// points are collinear or coincident.
pub fn circumcenter(a: &Point3, b: &Point3, c: &Point3) -> Result<Point3> {
    Triangle3::new(*a, *b, *c).circumcenter()
}

/// Center of gravity of `a`, `b` and `c`.
pub fn centroid(a: &Point3, b: &Point3, c: &Point3) -> Point3 {
    Triangle3::new(*a, *b, *c).centroid()
}

/// Smallest sphere whose great circle passes through three points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircumSphere {
    /// Circumcenter.
    pub center: Point3,
    /// Distance from the center to each point.
    pub radius: f64,
}

impl CircumSphere {
    /// Solve the sphere through the vertices of `tri`.
    pub fn from_triangle(tri: &Triangle3) -> Result<Self> {
        let center = tri.circumcenter()?;
        Ok(Self {
            center,
            radius: (center - tri.a).norm(),
        })
    }
}

/// Circumscribed sphere of `a`, `b` and `c`.
pub fn circum_sphere(a: &Point3, b: &Point3, c: &Point3) -> Result<CircumSphere> {
    CircumSphere::from_triangle(&Triangle3::new(*a, *b, *c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_circumcenter(a: Point3, b: Point3, c: Point3) {
        let tri = Triangle3::new(a, b, c);
        let p = tri.circumcenter().unwrap();
        let (ra, rb, rc) = ((p - a).norm(), (p - b).norm(), (p - c).norm());
        assert_abs_diff_eq!(ra, rb, epsilon = 1e-6);
        assert_abs_diff_eq!(ra, rc, epsilon = 1e-6);
        let n = tri.normal().normalize();
        assert_abs_diff_eq!(n.dot(&(p - a)), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_reference_points() {
        assert_circumcenter(
            Point3::new(-2.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.7),
            Point3::new(1.0, 0.0, 0.0),
        );
    }

    #[test]
    fn test_assorted_triangles() {
        let cases = [
            ([1.0, 1.0, 1.0], [2.0, 2.0, 2.0], [2.0, 1.0, 1.0]),
            ([3.0, 6.0, 2.0], [1.0, 2.0, 8.0], [7.0, 3.0, 3.0]),
            ([0.0, 5.0, 0.0], [0.0, 0.7, 0.7], [1.0, -10.0, 0.0]),
            ([-0.0, 6.0, 2.0], [-10.0, 2.0, 24.0], [-26.0, 1.0, 32.0]),
            ([-10.0, 6.0, 0.0], [-20.0, 2.0, 0.0], [-36.0, 1.0, 0.0]),
            ([5.0, 1.0, 1.0], [5.0, 2.0, 5.0], [7.0, 3.0, 1.0]),
        ];
        for (a, b, c) in cases {
            assert_circumcenter(a.into(), b.into(), c.into());
        }
    }

    #[test]
    fn test_right_triangle_center_is_hypotenuse_midpoint() {
        let p = circumcenter(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(4.0, 0.0, 0.0),
            &Point3::new(0.0, 3.0, 0.0),
        )
        .unwrap();
        assert_abs_diff_eq!(p, Point3::new(2.0, 1.5, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_tiny_triangles_are_solved() {
        for leg in [3e-4, 1e-5, 1e-8] {
            let a = Point3::new(1.0, -2.0, 0.5);
            let b = a + Vec3::new(leg, 0.0, 0.0);
            let c = a + Vec3::new(0.0, leg, 0.0);
            let p = circumcenter(&a, &b, &c).unwrap();
            let expected = a + Vec3::new(leg / 2.0, leg / 2.0, 0.0);
            assert_abs_diff_eq!(p, expected, epsilon = leg * 1e-6);
        }
    }

    #[test]
    fn test_huge_triangle_is_solved() {
        let p = circumcenter(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1e5, 0.0, 0.0),
            &Point3::new(0.0, 1e5, 1.0),
        )
        .unwrap();
        let (ra, rb) = (p.coords.norm(), (p - Point3::new(1e5, 0.0, 0.0)).norm());
        assert_abs_diff_eq!(ra, rb, epsilon = 1e-6);
    }

    #[test]
    fn test_degeneracy_ignores_scale() {
        let tol = Tolerance::DEFAULT;
        for s in [1e-6, 1.0, 1e6] {
            let tri = Triangle3::new(
                Point3::origin(),
                Point3::new(s, 0.0, 0.0),
                Point3::new(0.0, s, 0.0),
            );
            assert!(!tri.is_degenerate(&tol));
            assert_abs_diff_eq!(tri.relative_normal().norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_collinear_points_fail() {
        let err = circumcenter(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(2.0, 0.0, 0.0),
        )
        .unwrap_err();
        assert!(matches!(err, CircumError::SingularSystem { .. }));
    }

    #[test]
    fn test_coincident_points_fail() {
        let a = Point3::new(1.0, 2.0, 3.0);
        assert!(matches!(
            circumcenter(&a, &a, &Point3::new(0.0, 0.0, 1.0)),
            Err(CircumError::SingularSystem { .. })
        ));
    }

    #[test]
    fn test_sphere_radius() {
        let s = circum_sphere(
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(0.0, 1.0, 0.0),
            &Point3::new(-1.0, 0.0, 0.0),
        )
        .unwrap();
        assert_abs_diff_eq!(s.center, Point3::origin(), epsilon = 1e-12);
        assert_abs_diff_eq!(s.radius, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_centroid() {
        let g = centroid(
            &Point3::new(-2.0, 1.0, 0.0),
            &Point3::new(0.0, 1.0, 0.7),
            &Point3::new(1.0, 0.0, 0.0),
        );
        assert_abs_diff_eq!(g, Point3::new(-1.0 / 3.0, 2.0 / 3.0, 0.7 / 3.0), epsilon = 1e-12);
    }
}
