//! Circles, spheres, and capsules.

use nalgebra::{Point2, Point3};

use crate::linear::Segment3;

/// A circle in 2D: center + radius. Queries treat it as a solid disk
/// unless documented otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle2 {
    /// Circle center.
    pub center: Point2<f64>,
    /// Circle radius (non-negative by caller contract).
    pub radius: f64,
}

impl Circle2 {
    /// Creates a circle.
    #[must_use]
    pub const fn new(center: Point2<f64>, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// A sphere in 3D: center + radius.
///
/// # Example
///
/// ```
/// use geom_types::Sphere3;
/// use nalgebra::Point3;
///
/// let s = Sphere3::new(Point3::origin(), 2.0);
/// assert!(s.contains(Point3::new(1.0, 1.0, 1.0)));
/// assert!(!s.contains(Point3::new(2.0, 2.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere3 {
    /// Sphere center.
    pub center: Point3<f64>,
    /// Sphere radius (non-negative by caller contract).
    pub radius: f64,
}

impl Sphere3 {
    /// Creates a sphere.
    #[must_use]
    pub const fn new(center: Point3<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Whether `point` is inside the sphere (boundary inclusive).
    #[must_use]
    pub fn contains(&self, point: Point3<f64>) -> bool {
        (point - self.center).norm_squared() <= self.radius * self.radius
    }
}

/// A capsule in 3D: the set of points within `radius` of a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capsule3 {
    /// The medial segment.
    pub segment: Segment3,
    /// The capsule radius (non-negative by caller contract).
    pub radius: f64,
}

impl Capsule3 {
    /// Creates a capsule from its medial segment and radius.
    #[must_use]
    pub const fn new(segment: Segment3, radius: f64) -> Self {
        Self { segment, radius }
    }
}
