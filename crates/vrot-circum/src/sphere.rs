//! Latitude/longitude sampling of a sphere surface.

use std::f64::consts::{PI, TAU};

use vrot_math::Point3;

use crate::circumcenter::CircumSphere;

/// Sphere surface sampled on a `longitudes × latitudes` grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereSurface {
    /// `rows[i][j]` is longitude `i` (0..2π), latitude `j` (0..π from +Z).
    pub rows: Vec<Vec<Point3>>,
}

impl SphereSurface {
    /// Sample `sphere` with the given number of longitude and latitude lines.
    pub fn sample(sphere: &CircumSphere, longitudes: usize, latitudes: usize) -> Self {
        let us = linspace(0.0, TAU, longitudes);
        let vs = linspace(0.0, PI, latitudes);
        let (c, r) = (sphere.center, sphere.radius);
        let rows = us
            .iter()
            .map(|&u| {
                let (su, cu) = u.sin_cos();
                vs.iter()
                    .map(|&v| {
                        let (sv, cv) = v.sin_cos();
                        Point3::new(c.x + r * cu * sv, c.y + r * su * sv, c.z + r * cv)
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Meridian polylines, one per longitude.
    pub fn meridians(&self) -> impl Iterator<Item = &[Point3]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }
}

/// Sample the sphere of `radius` around `center`.
pub fn sphere_surface(
    center: &Point3,
    radius: f64,
    longitudes: usize,
    latitudes: usize,
) -> SphereSurface {
    SphereSurface::sample(&CircumSphere { center: *center, radius }, longitudes, latitudes)
}

/// `n` evenly spaced values from `start` to `stop`, both inclusive.
pub(crate) fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + i as f64 * step })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_samples_lie_on_sphere() {
        let sphere = CircumSphere {
            center: Point3::new(1.0, -2.0, 0.5),
            radius: 2.5,
        };
        let surface = SphereSurface::sample(&sphere, 20, 20);
        assert_eq!(surface.rows.len(), 20);
        for row in surface.meridians() {
            assert_eq!(row.len(), 20);
            for p in row {
                assert_abs_diff_eq!((p - sphere.center).norm(), 2.5, epsilon = 1e-12);
            }
            // Every meridian runs pole to pole.
            let pole = sphere.center + vrot_math::Vec3::z() * 2.5;
            assert_abs_diff_eq!(row[0], pole, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_free_function_matches_sample() {
        let center = Point3::new(0.0, 1.0, 2.0);
        let s = sphere_surface(&center, 1.5, 4, 3);
        assert_eq!(s.rows.len(), 4);
        assert_abs_diff_eq!(s.rows[0][2], center - vrot_math::Vec3::z() * 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_linspace_endpoints() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }
}
