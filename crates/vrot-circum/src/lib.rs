#![warn(missing_docs)]

//! Circumscribed sphere and supporting plane of three points.
//!
//! The circumcenter comes from a 3x3 linear system (two equidistance
//! equations and one coplanarity equation) solved by Gaussian elimination
//! with partial pivoting. Around it the crate builds what the viewer draws:
//! the plane through the points, its normal, a sampled sphere surface and
//! the circle traced by spinning the first point about the normal.
//!
//! # Example
//!
//! ```
//! use vrot_circum::circum_sphere;
//! use vrot_math::Point3;
//!
//! let s = circum_sphere(
//!     &Point3::new(-2.0, 1.0, 0.0),
//!     &Point3::new(0.0, 1.0, 0.7),
//!     &Point3::new(1.0, 0.0, 0.0),
//! )
//! .unwrap();
//! assert!((s.radius - (s.center - Point3::new(1.0, 0.0, 0.0)).norm()).abs() < 1e-9);
//! ```

mod circumcenter;
mod error;
mod gauss;
mod plane;
mod scene;
mod sphere;
mod trace;

pub use circumcenter::{centroid, circum_sphere, circumcenter, CircumSphere, Triangle3};
pub use error::{CircumError, Result};
pub use gauss::{solve_linear3, solve_linear3_with, Augmented3};
pub use plane::{scaled_normal, supporting_plane, PlaneGrid, SupportingPlane, MAX_GRID_NODES};
pub use scene::{CircumScene, SceneSettings};
pub use sphere::{sphere_surface, SphereSurface};
pub use trace::{circular_trace, CircularTrace};
