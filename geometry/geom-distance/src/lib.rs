//! Distance and closest-point queries between shape pairs.
//!
//! Each query is a free function taking shapes by reference and
//! returning a plain result struct with the Euclidean distance, the
//! squared distance (so comparison-only consumers skip the square
//! root), parameters, and the closest point(s). The [`DistanceTo`]
//! trait exposes the same queries through compile-time per-pair
//! dispatch for generic callers.
//!
//! # Reduction architecture
//!
//! Complex pairs delegate to simpler ones rather than re-deriving the
//! math:
//!
//! - point–tetrahedron tests the query point against each face plane
//!   and runs point–triangle only on the visible faces;
//! - line–rectangle pierces the rectangle plane or falls back to the
//!   minimum over four line–edge queries;
//! - ray–rectangle runs the line query and re-queries from the ray
//!   origin when the unconstrained optimum lies behind it.
//!
//! # Contracts
//!
//! Direction vectors are unit length by caller contract. Degenerate
//! shapes (zero-length segments, zero-extent rectangles) are not
//! validated; results for them are unspecified.
//!
//! # Example
//!
//! ```
//! use geom_distance::point_tetrahedron3;
//! use geom_types::Tetrahedron3;
//! use nalgebra::Point3;
//!
//! let tet = Tetrahedron3::new(
//!     Point3::origin(),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//! );
//! let inside = Point3::new(0.25, 0.25, 0.25);
//! let result = point_tetrahedron3(inside, &tet);
//! assert!(result.distance.abs() < 1e-12);
//! assert_eq!(result.closest, inside);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod line;
mod point;
mod ray;

pub use line::{line3_rectangle3, line3_segment3, LineRectangleDistance, LineSegmentDistance};
pub use point::{
    point_frustum3, point_rectangle3, point_segment3, point_tetrahedron3, point_triangle3,
    PointFrustumDistance, PointRectangleDistance, PointSegmentDistance, PointShapeDistance,
};
pub use ray::{ray3_rectangle3, RayRectangleDistance};

use geom_types::{Frustum3, Line3, Ray3, Rectangle3, Segment3, Tetrahedron3, Triangle3};
use nalgebra::Point3;

/// Distance query from `Self` to another shape, dispatched per shape
/// pair at compile time.
///
/// Each implementation forwards to the corresponding free function;
/// the trait exists so generic code can be written over any pair that
/// has a query.
///
/// # Example
///
/// ```
/// use geom_distance::DistanceTo;
/// use geom_types::Segment3;
/// use nalgebra::Point3;
///
/// let seg = Segment3::new(Point3::origin(), Point3::new(2.0, 0.0, 0.0));
/// let result = Point3::new(1.0, 3.0, 0.0).distance_to(&seg);
/// assert!((result.distance - 3.0).abs() < 1e-12);
/// ```
pub trait DistanceTo<Rhs> {
    /// The query's result aggregate.
    type Output;

    /// Computes distance and closest points from `self` to `other`.
    fn distance_to(&self, other: &Rhs) -> Self::Output;
}

impl DistanceTo<Segment3> for Point3<f64> {
    type Output = PointSegmentDistance;

    fn distance_to(&self, other: &Segment3) -> Self::Output {
        point_segment3(*self, other)
    }
}

impl DistanceTo<Triangle3> for Point3<f64> {
    type Output = PointShapeDistance;

    fn distance_to(&self, other: &Triangle3) -> Self::Output {
        point_triangle3(*self, other)
    }
}

impl DistanceTo<Rectangle3> for Point3<f64> {
    type Output = PointRectangleDistance;

    fn distance_to(&self, other: &Rectangle3) -> Self::Output {
        point_rectangle3(*self, other)
    }
}

impl DistanceTo<Tetrahedron3> for Point3<f64> {
    type Output = PointShapeDistance;

    fn distance_to(&self, other: &Tetrahedron3) -> Self::Output {
        point_tetrahedron3(*self, other)
    }
}

impl DistanceTo<Frustum3> for Point3<f64> {
    type Output = PointFrustumDistance;

    fn distance_to(&self, other: &Frustum3) -> Self::Output {
        point_frustum3(*self, other)
    }
}

impl DistanceTo<Segment3> for Line3 {
    type Output = LineSegmentDistance;

    fn distance_to(&self, other: &Segment3) -> Self::Output {
        line3_segment3(self, other)
    }
}

impl DistanceTo<Rectangle3> for Line3 {
    type Output = LineRectangleDistance;

    fn distance_to(&self, other: &Rectangle3) -> Self::Output {
        line3_rectangle3(self, other)
    }
}

impl DistanceTo<Rectangle3> for Ray3 {
    type Output = RayRectangleDistance;

    fn distance_to(&self, other: &Rectangle3) -> Self::Output {
        ray3_rectangle3(self, other)
    }
}
