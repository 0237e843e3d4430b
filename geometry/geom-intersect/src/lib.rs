//! Test-intersection and find-intersection queries between shape pairs.
//!
//! Every query comes in up to two tiers:
//!
//! - `test_*` answers only "do these intersect", with the cheapest
//!   sufficient method (separating axes for boxes, a distance
//!   comparison for capsules and frustums);
//! - `find_*` computes the full intersection: parameters, points,
//!   and, for clipping queries, an ordered point list with an
//!   explicit count.
//!
//! # Line core, interval restriction
//!
//! Ray and segment queries do not re-derive any geometry. The line
//! variant computes the intersection in unconstrained parameter
//! space; the ray variant intersects that parameter interval with
//! `[0, +inf)` through [`find_interval_interval`]. Writing the line
//! algorithm once and deriving the bounded variants by interval
//! overlap is the central reuse pattern of this crate.
//!
//! # Oriented boxes
//!
//! Oriented-box queries transform the other operand into the box's
//! local frame, delegate to the aligned-box implementation, and map
//! the results back; parameters are frame-invariant so only the
//! points need transforming.
//!
//! # Example
//!
//! ```
//! use geom_intersect::find_ray3_aligned_box3;
//! use geom_types::{AlignedBox3, Ray3};
//! use nalgebra::{Point3, Vector3};
//!
//! let ray = Ray3::new(Point3::origin(), Vector3::x());
//! let b = AlignedBox3::new(Point3::new(4.0, -1.0, -1.0), Point3::new(6.0, 1.0, 1.0));
//! let hit = find_ray3_aligned_box3(&ray, &b);
//! assert_eq!(hit.count, 2);
//! assert!((hit.parameters[0] - 4.0).abs() < 1e-12);
//! assert!((hit.parameters[1] - 6.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod box2;
mod box3;
mod capsule3;
mod circle2;
mod frustum3;
mod halfspace3;
mod interval;
mod line2;
mod triangle2;
mod triangle3;

pub use box2::{
    find_line2_aligned_box2, find_line2_oriented_box2, test_line2_aligned_box2,
    test_line2_oriented_box2, LinearBox2Intersection,
};
pub use box3::{
    find_line3_aligned_box3, find_line3_oriented_box3, find_ray3_aligned_box3,
    test_line3_aligned_box3, test_line3_oriented_box3, test_ray3_aligned_box3,
    LinearBox3Intersection,
};
pub use capsule3::{find_line3_capsule3, test_line3_capsule3, LineCapsuleIntersection};
pub use circle2::{find_line2_circle2, find_ray2_circle2, LinearCircleIntersection};
pub use frustum3::test_sphere3_frustum3;
pub use halfspace3::{
    find_halfspace3_triangle3, test_halfspace3_triangle3, HalfspaceTriangleClip,
};
pub use interval::{find_interval_interval, IntervalOverlap};
pub use line2::{
    find_line2_line2, find_ray2_ray2, test_ray2_ray2, Line2Line2Intersection,
    Ray2Ray2Intersection,
};
pub use triangle2::{
    find_line2_triangle2, find_ray2_triangle2, LinearTriangle2Intersection,
};
pub use triangle3::{find_line3_triangle3, find_ray3_triangle3, test_ray3_triangle3, Triangle3Hit};

use geom_types::{
    AlignedBox2, AlignedBox3, Capsule3, Circle2, Frustum3, Halfspace3, Line2, Line3,
    OrientedBox2, OrientedBox3, Ray2, Ray3, Sphere3, Triangle2, Triangle3,
};

/// Boolean intersection query from `Self` to another shape,
/// dispatched per shape pair at compile time.
pub trait TestIntersect<Rhs> {
    /// Whether the two shapes intersect.
    fn test_intersect(&self, other: &Rhs) -> bool;
}

/// Detailed intersection query from `Self` to another shape,
/// dispatched per shape pair at compile time.
pub trait FindIntersect<Rhs> {
    /// The query's result aggregate.
    type Output;

    /// Computes the full intersection of `self` with `other`.
    fn find_intersect(&self, other: &Rhs) -> Self::Output;
}

macro_rules! impl_queries {
    ($( $lhs:ty, $rhs:ty => test $test:path ;)*) => {
        $(
            impl TestIntersect<$rhs> for $lhs {
                fn test_intersect(&self, other: &$rhs) -> bool {
                    $test(self, other)
                }
            }
        )*
    };
    ($( $lhs:ty, $rhs:ty => find $out:ty, $find:path ;)*) => {
        $(
            impl FindIntersect<$rhs> for $lhs {
                type Output = $out;

                fn find_intersect(&self, other: &$rhs) -> Self::Output {
                    $find(self, other)
                }
            }
        )*
    };
}

impl_queries! {
    Line2, AlignedBox2 => test test_line2_aligned_box2;
    Line2, OrientedBox2 => test test_line2_oriented_box2;
    Line3, AlignedBox3 => test test_line3_aligned_box3;
    Line3, OrientedBox3 => test test_line3_oriented_box3;
    Ray3, AlignedBox3 => test test_ray3_aligned_box3;
    Ray2, Ray2 => test test_ray2_ray2;
    Ray3, Triangle3 => test test_ray3_triangle3;
    Line3, Capsule3 => test test_line3_capsule3;
    Halfspace3, Triangle3 => test test_halfspace3_triangle3;
    Sphere3, Frustum3 => test test_sphere3_frustum3;
}

impl_queries! {
    Line2, Line2 => find Line2Line2Intersection, find_line2_line2;
    Ray2, Ray2 => find Ray2Ray2Intersection, find_ray2_ray2;
    Line2, Triangle2 => find LinearTriangle2Intersection, find_line2_triangle2;
    Ray2, Triangle2 => find LinearTriangle2Intersection, find_ray2_triangle2;
    Line2, Circle2 => find LinearCircleIntersection, find_line2_circle2;
    Ray2, Circle2 => find LinearCircleIntersection, find_ray2_circle2;
    Line2, AlignedBox2 => find LinearBox2Intersection, find_line2_aligned_box2;
    Line2, OrientedBox2 => find LinearBox2Intersection, find_line2_oriented_box2;
    Line3, AlignedBox3 => find LinearBox3Intersection, find_line3_aligned_box3;
    Line3, OrientedBox3 => find LinearBox3Intersection, find_line3_oriented_box3;
    Ray3, AlignedBox3 => find LinearBox3Intersection, find_ray3_aligned_box3;
    Line3, Capsule3 => find LineCapsuleIntersection, find_line3_capsule3;
    Line3, Triangle3 => find Option<Triangle3Hit>, find_line3_triangle3;
    Ray3, Triangle3 => find Option<Triangle3Hit>, find_ray3_triangle3;
    Halfspace3, Triangle3 => find HalfspaceTriangleClip, find_halfspace3_triangle3;
}
