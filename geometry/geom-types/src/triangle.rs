//! Triangles and tetrahedra.

use nalgebra::{Point2, Point3, Vector3};

use crate::planar::Plane3;

/// A triangle in 2D, stored by its vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle2 {
    /// The triangle vertices.
    pub vertices: [Point2<f64>; 3],
}

impl Triangle2 {
    /// Creates a triangle from three vertices.
    #[must_use]
    pub const fn new(v0: Point2<f64>, v1: Point2<f64>, v2: Point2<f64>) -> Self {
        Self { vertices: [v0, v1, v2] }
    }
}

/// A triangle in 3D, stored by its vertices.
///
/// # Example
///
/// ```
/// use geom_types::Triangle3;
/// use nalgebra::Point3;
///
/// let tri = Triangle3::new(
///     Point3::origin(),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
/// let n = tri.normal();
/// assert!((n.z.abs() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle3 {
    /// The triangle vertices.
    pub vertices: [Point3<f64>; 3],
}

impl Triangle3 {
    /// Creates a triangle from three vertices.
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { vertices: [v0, v1, v2] }
    }

    /// Returns the unit normal by the right-hand rule over the vertex
    /// winding, or the zero vector for a degenerate triangle.
    #[must_use]
    pub fn normal(&self) -> Vector3<f64> {
        let e1 = self.vertices[1] - self.vertices[0];
        let e2 = self.vertices[2] - self.vertices[0];
        let n = e1.cross(&e2);
        let len = n.norm();
        if len > 0.0 {
            n / len
        } else {
            n
        }
    }
}

/// A tetrahedron, stored by its four vertices.
///
/// The canonical vertex ordering has `v0..v3` positively oriented:
/// `dot(cross(v1 - v0, v2 - v0), v3 - v0) >= 0`. Accessors that
/// produce faces and planes orient correctly for either ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tetrahedron3 {
    /// The tetrahedron vertices.
    pub vertices: [Point3<f64>; 4],
}

impl Tetrahedron3 {
    /// Creates a tetrahedron from four vertices.
    #[must_use]
    pub const fn new(
        v0: Point3<f64>,
        v1: Point3<f64>,
        v2: Point3<f64>,
        v3: Point3<f64>,
    ) -> Self {
        Self { vertices: [v0, v1, v2, v3] }
    }

    /// Returns the vertex indices of face `face` (0..=3).
    ///
    /// Face `i` is opposite vertex `i`.
    ///
    /// # Panics
    ///
    /// Panics if `face > 3`.
    #[must_use]
    pub fn face_indices(face: usize) -> [usize; 3] {
        const FACES: [[usize; 3]; 4] = [[1, 2, 3], [0, 3, 2], [0, 1, 3], [0, 2, 1]];
        FACES[face]
    }

    /// Returns the vertices of face `face` (0..=3).
    ///
    /// # Panics
    ///
    /// Panics if `face > 3`.
    #[must_use]
    pub fn face(&self, face: usize) -> crate::Triangle3 {
        let [a, b, c] = Self::face_indices(face);
        crate::Triangle3::new(self.vertices[a], self.vertices[b], self.vertices[c])
    }

    /// Returns the four face planes with outward-pointing,
    /// *non-normalized* normals.
    ///
    /// The normals are deliberately left non-unit: sidedness queries
    /// only need the sign of `dot(normal, X) - constant`, so the
    /// normalization cost is skipped. A point `X` is outside face `i`
    /// when `dot(normal, X) >= constant`.
    #[must_use]
    pub fn face_planes(&self) -> [Plane3; 4] {
        core::array::from_fn(|i| {
            let [a, b, c] = Self::face_indices(i);
            let va = self.vertices[a];
            let mut normal = (self.vertices[b] - va).cross(&(self.vertices[c] - va));
            // Opposite vertex must be on the inner side.
            let opposite = self.vertices[i];
            if normal.dot(&(opposite - va)) > 0.0 {
                normal = -normal;
            }
            Plane3 {
                normal,
                constant: normal.dot(&va.coords),
            }
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn unit_tetrahedron() -> Tetrahedron3 {
        Tetrahedron3::new(
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        )
    }

    #[test]
    fn test_face_planes_point_outward() {
        let tet = unit_tetrahedron();
        let centroid = Point3::new(0.25, 0.25, 0.25);
        for plane in tet.face_planes() {
            // The centroid is strictly inside every face.
            assert!(plane.normal.dot(&centroid.coords) < plane.constant);
        }
    }

    #[test]
    fn test_face_planes_outward_for_reversed_orientation() {
        let t = unit_tetrahedron();
        let reversed = Tetrahedron3::new(
            t.vertices[1],
            t.vertices[0],
            t.vertices[2],
            t.vertices[3],
        );
        let centroid = Point3::new(0.25, 0.25, 0.25);
        for plane in reversed.face_planes() {
            assert!(plane.normal.dot(&centroid.coords) < plane.constant);
        }
    }

    #[test]
    fn test_outside_point_is_outside_some_face() {
        let tet = unit_tetrahedron();
        let outside = Point3::new(2.0, 2.0, 2.0);
        let visible = tet
            .face_planes()
            .iter()
            .filter(|p| p.normal.dot(&outside.coords) >= p.constant)
            .count();
        assert!(visible >= 1);
    }

    #[test]
    fn test_triangle_normal_degenerate() {
        let tri = Triangle3::new(
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        );
        assert!(tri.normal().norm() < 1e-12);
    }
}
