//! Axis-aligned and oriented boxes.
//!
//! Aligned boxes are stored by min/max corners; queries work in the
//! centered form (center + extents), so both representations are
//! exposed. Oriented boxes are stored directly in centered form with
//! an orthonormal axis frame.

use nalgebra::{Point2, Point3, Vector2, Vector3};

/// An axis-aligned box in 2D, stored by min/max corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignedBox2 {
    /// Minimum corner.
    pub min: Point2<f64>,
    /// Maximum corner.
    pub max: Point2<f64>,
}

impl AlignedBox2 {
    /// Creates a box from min/max corners. `min <= max` componentwise
    /// by caller contract.
    #[must_use]
    pub const fn new(min: Point2<f64>, max: Point2<f64>) -> Self {
        Self { min, max }
    }

    /// Returns the centered form `(center, extents)` with
    /// `min = center - extents` and `max = center + extents`.
    #[must_use]
    pub fn centered_form(&self) -> (Point2<f64>, Vector2<f64>) {
        let center = nalgebra::center(&self.min, &self.max);
        let extent = (self.max - self.min) * 0.5;
        (center, extent)
    }
}

/// An axis-aligned box in 3D, stored by min/max corners.
///
/// # Example
///
/// ```
/// use geom_types::AlignedBox3;
/// use nalgebra::Point3;
///
/// let b = AlignedBox3::new(Point3::new(4.0, -1.0, -1.0), Point3::new(6.0, 1.0, 1.0));
/// assert!(b.contains(Point3::new(5.0, 0.0, 0.0)));
/// assert!(!b.contains(Point3::origin()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignedBox3 {
    /// Minimum corner.
    pub min: Point3<f64>,
    /// Maximum corner.
    pub max: Point3<f64>,
}

impl AlignedBox3 {
    /// Creates a box from min/max corners. `min <= max` componentwise
    /// by caller contract.
    #[must_use]
    pub const fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// Creates a box from its centered form.
    #[must_use]
    pub fn from_centered_form(center: Point3<f64>, extent: Vector3<f64>) -> Self {
        Self {
            min: center - extent,
            max: center + extent,
        }
    }

    /// Returns the centered form `(center, extents)`.
    #[must_use]
    pub fn centered_form(&self) -> (Point3<f64>, Vector3<f64>) {
        let center = nalgebra::center(&self.min, &self.max);
        let extent = (self.max - self.min) * 0.5;
        (center, extent)
    }

    /// Whether `point` is inside the box (boundary inclusive).
    #[must_use]
    pub fn contains(&self, point: Point3<f64>) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
            && self.min.z <= point.z
            && point.z <= self.max.z
    }
}

/// An oriented box in 2D: center, orthonormal axes, extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox2 {
    /// Box center.
    pub center: Point2<f64>,
    /// Orthonormal axis directions (unit length by caller contract).
    pub axes: [Vector2<f64>; 2],
    /// Half-extents along each axis.
    pub extents: [f64; 2],
}

impl OrientedBox2 {
    /// Creates an oriented box.
    #[must_use]
    pub const fn new(center: Point2<f64>, axes: [Vector2<f64>; 2], extents: [f64; 2]) -> Self {
        Self { center, axes, extents }
    }

    /// The axis-aligned box with identical center and extents, as
    /// seen from this box's local frame.
    #[must_use]
    pub fn local_aligned(&self) -> AlignedBox2 {
        let extent = Vector2::new(self.extents[0], self.extents[1]);
        AlignedBox2::new(Point2::from(-extent), Point2::from(extent))
    }

    /// Converts a world-space point to box-local coordinates.
    #[must_use]
    pub fn to_local(&self, point: Point2<f64>) -> Point2<f64> {
        let diff = point - self.center;
        Point2::new(diff.dot(&self.axes[0]), diff.dot(&self.axes[1]))
    }

    /// Converts a world-space vector to box-local coordinates.
    #[must_use]
    pub fn to_local_vector(&self, v: Vector2<f64>) -> Vector2<f64> {
        Vector2::new(v.dot(&self.axes[0]), v.dot(&self.axes[1]))
    }
}

/// An oriented box in 3D: center, orthonormal axes, extents.
///
/// # Example
///
/// ```
/// use geom_types::OrientedBox3;
/// use nalgebra::{Point3, Vector3};
///
/// let obb = OrientedBox3::new(
///     Point3::origin(),
///     [Vector3::x(), Vector3::y(), Vector3::z()],
///     [1.0, 2.0, 3.0],
/// );
/// assert!(obb.contains(Point3::new(0.5, -1.5, 2.5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox3 {
    /// Box center.
    pub center: Point3<f64>,
    /// Orthonormal axis directions (unit length by caller contract).
    pub axes: [Vector3<f64>; 3],
    /// Half-extents along each axis.
    pub extents: [f64; 3],
}

impl OrientedBox3 {
    /// Creates an oriented box.
    #[must_use]
    pub const fn new(center: Point3<f64>, axes: [Vector3<f64>; 3], extents: [f64; 3]) -> Self {
        Self { center, axes, extents }
    }

    /// Whether `point` is inside the box (boundary inclusive).
    #[must_use]
    pub fn contains(&self, point: Point3<f64>) -> bool {
        let diff = point - self.center;
        (0..3).all(|i| diff.dot(&self.axes[i]).abs() <= self.extents[i])
    }

    /// The axis-aligned box with identical center and extents, as
    /// seen from this box's local frame.
    #[must_use]
    pub fn local_aligned(&self) -> AlignedBox3 {
        let extent = Vector3::new(self.extents[0], self.extents[1], self.extents[2]);
        AlignedBox3::new(Point3::from(-extent), Point3::from(extent))
    }

    /// Converts a world-space point to box-local coordinates.
    #[must_use]
    pub fn to_local(&self, point: Point3<f64>) -> Point3<f64> {
        let diff = point - self.center;
        Point3::new(
            diff.dot(&self.axes[0]),
            diff.dot(&self.axes[1]),
            diff.dot(&self.axes[2]),
        )
    }

    /// Converts a world-space vector to box-local coordinates.
    #[must_use]
    pub fn to_local_vector(&self, v: Vector3<f64>) -> Vector3<f64> {
        Vector3::new(
            v.dot(&self.axes[0]),
            v.dot(&self.axes[1]),
            v.dot(&self.axes[2]),
        )
    }
}
