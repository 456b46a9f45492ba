//! Plane through three points, sampled as a height field for display.

use tracing::debug;
use vrot_math::{Point3, Tolerance, Vec3};

use crate::circumcenter::Triangle3;
use crate::error::{CircumError, Result};

/// Most grid nodes along one axis; wider planes are sampled more coarsely.
pub const MAX_GRID_NODES: usize = 64;

/// Regular x/y grid with the plane's z value at each node.
///
/// `zs[j][i]` is the height at `(xs[i], ys[j])`, the same layout as a
/// meshgrid.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneGrid {
    /// Sample x coordinates.
    pub xs: Vec<f64>,
    /// Sample y coordinates.
    pub ys: Vec<f64>,
    /// Heights, one row per y.
    pub zs: Vec<Vec<f64>>,
}

impl PlaneGrid {
    /// Wireframe polylines: one per y row, then one per x column.
    pub fn wireframe(&self) -> Vec<Vec<Point3>> {
        let rows = self.ys.iter().zip(&self.zs).map(|(&y, row)| {
            self.xs
                .iter()
                .zip(row)
                .map(|(&x, &z)| Point3::new(x, y, z))
                .collect::<Vec<_>>()
        });
        let columns = self.xs.iter().enumerate().map(|(i, &x)| {
            self.ys
                .iter()
                .zip(&self.zs)
                .map(|(&y, row)| Point3::new(x, y, row[i]))
                .collect::<Vec<_>>()
        });
        rows.chain(columns).collect()
    }
}

/// The plane through three points.
#[derive(Debug, Clone, PartialEq)]
pub struct SupportingPlane {
    /// A point on the plane (the triangle's first vertex).
    pub point: Point3,
    /// Normal `(B − A) × (C − A)` rescaled to length `0.5 · |size|`.
    ///
    /// The length sets how long the normal arrow is drawn; it is not a
    /// unit vector.
    pub normal: Vec3,
    /// Height samples around the anchor.
    pub grid: PlaneGrid,
}

/// Plane through `a`, `b`, `c`, sampled over a `2·size` square around `anchor`.
///
/// Grid nodes run from `anchor − size` (inclusive) to `anchor + size`
/// (exclusive) in steps of `spacing`, along both x and y. When that would
/// exceed [`MAX_GRID_NODES`] per axis the spacing widens to `2·|size| /
/// MAX_GRID_NODES`.
pub fn supporting_plane(
    a: &Point3,
    b: &Point3,
    c: &Point3,
    anchor: &Point3,
    size: f64,
    spacing: f64,
) -> Result<SupportingPlane> {
    if !(spacing.is_finite() && spacing > 0.0) {
        return Err(CircumError::InvalidArgument(format!(
            "grid spacing must be positive, got {spacing}"
        )));
    }
    if !size.is_finite() || size == 0.0 {
        return Err(CircumError::InvalidArgument(format!(
            "plane size must be finite and non-zero, got {size}"
        )));
    }

    let normal = scaled_normal(a, b, c, size)?;
    let cos_z = normal.z / normal.norm();
    if Tolerance::DEFAULT.is_singular_pivot(cos_z) {
        return Err(CircumError::VerticalPlane(cos_z));
    }

    let span = 2.0 * size.abs();
    let spacing = if span / spacing > MAX_GRID_NODES as f64 {
        let coarse = span / MAX_GRID_NODES as f64;
        debug!(requested = spacing, spacing = coarse, "plane grid spacing widened");
        coarse
    } else {
        spacing
    };

    let xs = arange(anchor.x - size, anchor.x + size, spacing);
    let ys = arange(anchor.y - size, anchor.y + size, spacing);
    let zs = ys
        .iter()
        .map(|&y| xs.iter().map(|&x| plane_z(&normal, a, x, y)).collect())
        .collect();

    Ok(SupportingPlane {
        point: *a,
        normal,
        grid: PlaneGrid { xs, ys, zs },
    })
}

/// Normal `(B − A) × (C − A)` rescaled to length `0.5 · |size|`.
///
/// Fails with [`CircumError::DegenerateTriangle`] when the points span no
/// plane, by the same scale-free test the circumcenter solver applies.
pub fn scaled_normal(a: &Point3, b: &Point3, c: &Point3, size: f64) -> Result<Vec3> {
    let tri = Triangle3::new(*a, *b, *c);
    if tri.is_degenerate(&Tolerance::DEFAULT) {
        return Err(CircumError::DegenerateTriangle);
    }
    let w = tri.normal();
    Ok(w * (0.5 * size.abs() / w.norm()))
}

fn plane_z(normal: &Vec3, point: &Point3, x: f64, y: f64) -> f64 {
    point.z - (normal.x * (x - point.x) + normal.y * (y - point.y)) / normal.z
}

fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let n = ((stop - start) / step).ceil();
    if n <= 0.0 {
        return Vec::new();
    }
    (0..(n as usize).min(MAX_GRID_NODES))
        .map(|i| start + i as f64 * step)
        .collect()
}
