//! Lines, rays, and segments in two and three dimensions.
//!
//! Lines and rays are origin + direction; segments are stored by their
//! endpoints and expose a centered form (center, direction, extent)
//! because most queries are cheapest in that representation.

use nalgebra::{Point2, Point3, Vector2, Vector3};

/// An infinite line in 2D: all points `origin + t * direction` for
/// `t` in `(-inf, +inf)`.
///
/// Queries assume `direction` is unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2 {
    /// A point on the line.
    pub origin: Point2<f64>,
    /// The line direction (unit length by caller contract).
    pub direction: Vector2<f64>,
}

impl Line2 {
    /// Creates a line from a point and a direction.
    #[must_use]
    pub const fn new(origin: Point2<f64>, direction: Vector2<f64>) -> Self {
        Self { origin, direction }
    }

    /// Returns the point at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2<f64> {
        self.origin + self.direction * t
    }
}

/// An infinite line in 3D.
///
/// Queries assume `direction` is unit length.
///
/// # Example
///
/// ```
/// use geom_types::Line3;
/// use nalgebra::{Point3, Vector3};
///
/// let line = Line3::new(Point3::origin(), Vector3::z());
/// assert!((line.point_at(2.0).z - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3 {
    /// A point on the line.
    pub origin: Point3<f64>,
    /// The line direction (unit length by caller contract).
    pub direction: Vector3<f64>,
}

impl Line3 {
    /// Creates a line from a point and a direction.
    #[must_use]
    pub const fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self { origin, direction }
    }

    /// Returns the point at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction * t
    }
}

/// A ray in 2D: all points `origin + t * direction` for `t >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2 {
    /// The ray origin.
    pub origin: Point2<f64>,
    /// The ray direction (unit length by caller contract).
    pub direction: Vector2<f64>,
}

impl Ray2 {
    /// Creates a ray from an origin and a direction.
    #[must_use]
    pub const fn new(origin: Point2<f64>, direction: Vector2<f64>) -> Self {
        Self { origin, direction }
    }

    /// Returns the point at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2<f64> {
        self.origin + self.direction * t
    }

    /// The line containing this ray.
    #[must_use]
    pub const fn to_line(&self) -> Line2 {
        Line2::new(self.origin, self.direction)
    }
}

/// A ray in 3D.
///
/// # Example
///
/// ```
/// use geom_types::Ray3;
/// use nalgebra::{Point3, Vector3};
///
/// let ray = Ray3::new(Point3::origin(), Vector3::x());
/// let p = ray.point_at(5.0);
/// assert!((p.x - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray3 {
    /// The ray origin.
    pub origin: Point3<f64>,
    /// The ray direction (unit length by caller contract).
    pub direction: Vector3<f64>,
}

impl Ray3 {
    /// Creates a ray from an origin and a direction.
    #[must_use]
    pub const fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self { origin, direction }
    }

    /// Returns the point at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction * t
    }

    /// The line containing this ray.
    #[must_use]
    pub const fn to_line(&self) -> Line3 {
        Line3::new(self.origin, self.direction)
    }
}

/// A bounded segment in 2D, stored by its endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    /// The segment endpoints.
    pub endpoints: [Point2<f64>; 2],
}

impl Segment2 {
    /// Creates a segment from two endpoints.
    #[must_use]
    pub const fn new(p0: Point2<f64>, p1: Point2<f64>) -> Self {
        Self { endpoints: [p0, p1] }
    }

    /// Returns the centered form `(center, direction, extent)` where
    /// `direction` is unit length and the endpoints are
    /// `center ± extent * direction`.
    #[must_use]
    pub fn centered_form(&self) -> (Point2<f64>, Vector2<f64>, f64) {
        let center = nalgebra::center(&self.endpoints[0], &self.endpoints[1]);
        let diff = self.endpoints[1] - self.endpoints[0];
        let length = diff.norm();
        let direction = if length > 0.0 { diff / length } else { diff };
        (center, direction, 0.5 * length)
    }
}

/// A bounded segment in 3D, stored by its endpoints.
///
/// # Example
///
/// ```
/// use geom_types::Segment3;
/// use nalgebra::Point3;
///
/// let seg = Segment3::new(Point3::new(-2.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0));
/// let (center, dir, extent) = seg.centered_form();
/// assert!((center.x).abs() < 1e-12);
/// assert!((dir.x - 1.0).abs() < 1e-12);
/// assert!((extent - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment3 {
    /// The segment endpoints.
    pub endpoints: [Point3<f64>; 2],
}

impl Segment3 {
    /// Creates a segment from two endpoints.
    #[must_use]
    pub const fn new(p0: Point3<f64>, p1: Point3<f64>) -> Self {
        Self { endpoints: [p0, p1] }
    }

    /// Returns the centered form `(center, direction, extent)` where
    /// `direction` is unit length and the endpoints are
    /// `center ± extent * direction`.
    ///
    /// For a zero-length segment the direction is the zero vector;
    /// queries document whether they accept degenerate segments.
    #[must_use]
    pub fn centered_form(&self) -> (Point3<f64>, Vector3<f64>, f64) {
        let center = nalgebra::center(&self.endpoints[0], &self.endpoints[1]);
        let diff = self.endpoints[1] - self.endpoints[0];
        let length = diff.norm();
        let direction = if length > 0.0 { diff / length } else { diff };
        (center, direction, 0.5 * length)
    }

    /// Returns the point at `t` in `[0, 1]` interpolating the endpoints.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.endpoints[0] + (self.endpoints[1] - self.endpoints[0]) * t
    }
}
