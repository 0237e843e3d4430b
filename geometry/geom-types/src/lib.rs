//! Geometric primitive value types.
//!
//! This crate provides the shape vocabulary shared by the query crates:
//!
//! - Linear shapes: [`Line2`]/[`Line3`], [`Ray2`]/[`Ray3`],
//!   [`Segment2`]/[`Segment3`]
//! - Planar shapes: [`Triangle2`]/[`Triangle3`], [`Rectangle3`],
//!   [`Plane3`], [`Halfspace3`]
//! - Solid shapes: [`AlignedBox2`]/[`AlignedBox3`],
//!   [`OrientedBox2`]/[`OrientedBox3`], [`Circle2`], [`Sphere3`],
//!   [`Capsule3`], [`Frustum3`], [`Tetrahedron3`]
//! - Helpers: [`Interval`] (1D parameter intervals) and
//!   [`orthonormal_basis`] (local frame construction)
//!
//! All shapes are plain value types: cheap to copy, no heap ownership,
//! immutable by convention. They carry no query logic beyond basic
//! accessors; the distance and intersection algorithms live in the
//! `geom-distance` and `geom-intersect` crates.
//!
//! # Unit-length contract
//!
//! Queries downstream assume direction vectors (`Line*`, `Ray*`,
//! frustum axes, oriented-box axes) are unit length and document that
//! assumption per query. Supplying non-unit directions yields
//! undefined numeric results, not a panic: this is a
//! performance-oriented numeric library and does not re-validate
//! caller contracts at runtime.
//!
//! # Coordinate System
//!
//! Right-handed. All coordinates are `f64`.
//!
//! # Example
//!
//! ```
//! use geom_types::{Ray3, AlignedBox3};
//! use nalgebra::{Point3, Vector3};
//!
//! let ray = Ray3::new(Point3::origin(), Vector3::x());
//! let p = ray.point_at(4.0);
//! assert!((p.x - 4.0).abs() < 1e-12);
//!
//! let boxed = AlignedBox3::new(Point3::new(4.0, -1.0, -1.0), Point3::new(6.0, 1.0, 1.0));
//! let (center, extent) = boxed.centered_form();
//! assert!((center.x - 5.0).abs() < 1e-12);
//! assert!((extent.x - 1.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod basis;
mod boxes;
mod frustum;
mod interval;
mod linear;
mod planar;
mod round;
mod triangle;

pub use basis::orthonormal_basis;
pub use boxes::{AlignedBox2, AlignedBox3, OrientedBox2, OrientedBox3};
pub use frustum::Frustum3;
pub use interval::Interval;
pub use linear::{Line2, Line3, Ray2, Ray3, Segment2, Segment3};
pub use planar::{Halfspace3, Plane3, Rectangle3};
pub use round::{Capsule3, Circle2, Sphere3};
pub use triangle::{Tetrahedron3, Triangle2, Triangle3};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};
