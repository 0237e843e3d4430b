//! Planes, halfspaces, and rectangles in 3D.

use nalgebra::{Point3, Vector3};

/// A plane `dot(normal, X) = constant`.
///
/// The normal is unit length wherever a query documents the
/// assumption; sidedness-only consumers (tetrahedron face planes)
/// deliberately use non-normalized normals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane3 {
    /// Plane normal.
    pub normal: Vector3<f64>,
    /// Plane constant.
    pub constant: f64,
}

impl Plane3 {
    /// Creates a plane from a normal and a constant.
    #[must_use]
    pub const fn new(normal: Vector3<f64>, constant: f64) -> Self {
        Self { normal, constant }
    }

    /// Creates the plane through `point` with the given normal.
    #[must_use]
    pub fn from_point_normal(point: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self {
            normal,
            constant: normal.dot(&point.coords),
        }
    }

    /// Signed pseudo-distance `dot(normal, X) - constant`. A true
    /// distance only when the normal is unit length; the sign is
    /// meaningful either way.
    #[must_use]
    pub fn signed_distance(&self, point: Point3<f64>) -> f64 {
        self.normal.dot(&point.coords) - self.constant
    }
}

/// A closed halfspace `{X : dot(normal, X) >= constant}`.
///
/// # Example
///
/// ```
/// use geom_types::Halfspace3;
/// use nalgebra::{Point3, Vector3};
///
/// let upper = Halfspace3::new(Vector3::z(), 0.0);
/// assert!(upper.contains(Point3::new(0.0, 0.0, 1.0)));
/// assert!(upper.contains(Point3::origin()));
/// assert!(!upper.contains(Point3::new(0.0, 0.0, -1.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Halfspace3 {
    /// Boundary plane normal, pointing into the halfspace.
    pub normal: Vector3<f64>,
    /// Boundary plane constant.
    pub constant: f64,
}

impl Halfspace3 {
    /// Creates a halfspace from its boundary normal and constant.
    #[must_use]
    pub const fn new(normal: Vector3<f64>, constant: f64) -> Self {
        Self { normal, constant }
    }

    /// Whether `point` is in the halfspace (boundary inclusive).
    #[must_use]
    pub fn contains(&self, point: Point3<f64>) -> bool {
        self.normal.dot(&point.coords) >= self.constant
    }
}

/// A rectangle in 3D: center, two orthonormal edge axes, and
/// half-extents along each axis.
///
/// Points on the rectangle are
/// `center + s0 * axes[0] + s1 * axes[1]` with `|si| <= extents[i]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle3 {
    /// Rectangle center.
    pub center: Point3<f64>,
    /// Orthonormal edge directions (unit length by caller contract).
    pub axes: [Vector3<f64>; 2],
    /// Half-extents along each axis.
    pub extents: [f64; 2],
}

impl Rectangle3 {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(center: Point3<f64>, axes: [Vector3<f64>; 2], extents: [f64; 2]) -> Self {
        Self { center, axes, extents }
    }

    /// The rectangle normal `axes[0] x axes[1]`.
    #[must_use]
    pub fn normal(&self) -> Vector3<f64> {
        self.axes[0].cross(&self.axes[1])
    }

    /// The point at rectangle coordinates `(s0, s1)`.
    #[must_use]
    pub fn point_at(&self, s0: f64, s1: f64) -> Point3<f64> {
        self.center + self.axes[0] * s0 + self.axes[1] * s1
    }

    /// The four edges as segments, in winding order.
    #[must_use]
    pub fn edges(&self) -> [crate::Segment3; 4] {
        let (e0, e1) = (self.extents[0], self.extents[1]);
        let c00 = self.point_at(-e0, -e1);
        let c10 = self.point_at(e0, -e1);
        let c11 = self.point_at(e0, e1);
        let c01 = self.point_at(-e0, e1);
        [
            crate::Segment3::new(c00, c10),
            crate::Segment3::new(c10, c11),
            crate::Segment3::new(c11, c01),
            crate::Segment3::new(c01, c00),
        ]
    }
}
