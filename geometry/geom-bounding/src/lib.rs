//! Minimum-volume bounding sphere of a 3D point set.
//!
//! [`minimum_volume_sphere`] computes the unique smallest enclosing
//! sphere of a point set with Welzl's randomized incremental
//! algorithm, in expected linear time, and reports the support set:
//! the 1 to 4 input points that lie on the sphere's boundary and
//! determine it.
//!
//! # Example
//!
//! ```
//! use geom_bounding::{minimum_volume_sphere, MinSphereParams};
//! use nalgebra::Point3;
//!
//! let points = [
//!     Point3::new(-3.0, 0.0, 0.0),
//!     Point3::new(3.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let result = minimum_volume_sphere(&points, &MinSphereParams::default()).unwrap();
//! assert!((result.sphere.radius - 3.0).abs() < 1e-12);
//! assert_eq!(result.support().len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod min_sphere;

pub use error::BoundingError;
pub use min_sphere::{minimum_volume_sphere, MinSphereParams, MinimumSphere};
