//! Point-to-shape distance queries.

use geom_types::{Frustum3, Rectangle3, Segment3, Tetrahedron3, Triangle3};
use nalgebra::Point3;

/// Result of a point-to-shape distance query that reports a single
/// closest point (triangle, tetrahedron, frustum).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointShapeDistance {
    /// Euclidean distance.
    pub distance: f64,
    /// Squared distance.
    pub sqr_distance: f64,
    /// Closest point on the shape.
    pub closest: Point3<f64>,
}

impl PointShapeDistance {
    fn from_sqr(sqr_distance: f64, closest: Point3<f64>) -> Self {
        Self {
            distance: sqr_distance.sqrt(),
            sqr_distance,
            closest,
        }
    }
}

/// Result of a point-to-segment distance query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSegmentDistance {
    /// Euclidean distance.
    pub distance: f64,
    /// Squared distance.
    pub sqr_distance: f64,
    /// Parameter of the closest point in `[0, 1]` over the segment's
    /// endpoints.
    pub segment_parameter: f64,
    /// Closest point on the segment.
    pub closest: Point3<f64>,
}

/// Result of a point-to-rectangle distance query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointRectangleDistance {
    /// Euclidean distance.
    pub distance: f64,
    /// Squared distance.
    pub sqr_distance: f64,
    /// Rectangle coordinates `(s0, s1)` of the closest point.
    pub rectangle_parameters: [f64; 2],
    /// Closest point on the rectangle.
    pub closest: Point3<f64>,
}

/// Alias kept for readers scanning the frustum API; the frustum query
/// reports the same aggregate as the other single-closest-point
/// queries.
pub type PointFrustumDistance = PointShapeDistance;

/// Computes the distance from a point to a segment.
///
/// The segment must have positive length (caller contract).
///
/// # Example
///
/// ```
/// use geom_distance::point_segment3;
/// use geom_types::Segment3;
/// use nalgebra::Point3;
///
/// let seg = Segment3::new(Point3::origin(), Point3::new(4.0, 0.0, 0.0));
/// let result = point_segment3(Point3::new(5.0, 0.0, 0.0), &seg);
/// assert!((result.distance - 1.0).abs() < 1e-12);
/// assert!((result.segment_parameter - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn point_segment3(point: Point3<f64>, segment: &Segment3) -> PointSegmentDistance {
    let (center, direction, extent) = segment.centered_form();
    let mut t = (point - center).dot(&direction);
    t = t.clamp(-extent, extent);
    let closest = center + direction * t;
    let sqr_distance = (point - closest).norm_squared();
    let segment_parameter = if extent > 0.0 {
        (t + extent) / (2.0 * extent)
    } else {
        0.5
    };
    PointSegmentDistance {
        distance: sqr_distance.sqrt(),
        sqr_distance,
        segment_parameter,
        closest,
    }
}

/// Computes the distance from a point to a solid triangle.
///
/// Walks the barycentric regions of the triangle to select the
/// closest vertex, edge, or interior point.
///
/// # Example
///
/// ```
/// use geom_distance::point_triangle3;
/// use geom_types::Triangle3;
/// use nalgebra::Point3;
///
/// let tri = Triangle3::new(
///     Point3::origin(),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
/// let result = point_triangle3(Point3::new(0.25, 0.25, 2.0), &tri);
/// assert!((result.distance - 2.0).abs() < 1e-12);
/// ```
#[must_use]
#[allow(clippy::many_single_char_names, clippy::similar_names)]
pub fn point_triangle3(point: Point3<f64>, triangle: &Triangle3) -> PointShapeDistance {
    let [a, b, c] = triangle.vertices;
    let ab = b - a;
    let ac = c - a;
    let ap = point - a;

    let d1 = ab.dot(&ap);
    let d2 = ac.dot(&ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        return PointShapeDistance::from_sqr((point - a).norm_squared(), a);
    }

    let bp = point - b;
    let d3 = ab.dot(&bp);
    let d4 = ac.dot(&bp);
    if d3 >= 0.0 && d4 <= d3 {
        return PointShapeDistance::from_sqr((point - b).norm_squared(), b);
    }

    let vc = d1.mul_add(d4, -(d3 * d2));
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        let v = d1 / (d1 - d3);
        let closest = Point3::from(a.coords + ab * v);
        return PointShapeDistance::from_sqr((point - closest).norm_squared(), closest);
    }

    let cp = point - c;
    let d5 = ab.dot(&cp);
    let d6 = ac.dot(&cp);
    if d6 >= 0.0 && d5 <= d6 {
        return PointShapeDistance::from_sqr((point - c).norm_squared(), c);
    }

    let vb = d5.mul_add(d2, -(d1 * d6));
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        let w = d2 / (d2 - d6);
        let closest = Point3::from(a.coords + ac * w);
        return PointShapeDistance::from_sqr((point - closest).norm_squared(), closest);
    }

    let va = d3.mul_add(d6, -(d5 * d4));
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        let closest = Point3::from(b.coords + (c - b) * w);
        return PointShapeDistance::from_sqr((point - closest).norm_squared(), closest);
    }

    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    let closest = Point3::from(a.coords + ab * v + ac * w);
    PointShapeDistance::from_sqr((point - closest).norm_squared(), closest)
}

/// Computes the distance from a point to a rectangle.
///
/// Projects the point onto the rectangle axes and clamps the
/// coordinates to the extents.
#[must_use]
pub fn point_rectangle3(point: Point3<f64>, rectangle: &Rectangle3) -> PointRectangleDistance {
    let diff = point - rectangle.center;
    let s0 = diff
        .dot(&rectangle.axes[0])
        .clamp(-rectangle.extents[0], rectangle.extents[0]);
    let s1 = diff
        .dot(&rectangle.axes[1])
        .clamp(-rectangle.extents[1], rectangle.extents[1]);
    let closest = rectangle.point_at(s0, s1);
    let sqr_distance = (point - closest).norm_squared();
    PointRectangleDistance {
        distance: sqr_distance.sqrt(),
        sqr_distance,
        rectangle_parameters: [s0, s1],
        closest,
    }
}

/// Computes the distance from a point to a solid tetrahedron.
///
/// Tests the point against each face plane; only the visible faces
/// (the point is on the outer side) need a point–triangle sub-query.
/// The face normals are non-normalized since only sidedness matters.
/// A point inside the solid reports exactly zero distance with the
/// closest point equal to the query point.
#[must_use]
pub fn point_tetrahedron3(point: Point3<f64>, tetrahedron: &Tetrahedron3) -> PointShapeDistance {
    let planes = tetrahedron.face_planes();
    let mut best: Option<PointShapeDistance> = None;
    for (i, plane) in planes.iter().enumerate() {
        if plane.normal.dot(&point.coords) >= plane.constant {
            let face = tetrahedron.face(i);
            let candidate = point_triangle3(point, &face);
            let better = best
                .as_ref()
                .map_or(true, |b| candidate.sqr_distance < b.sqr_distance);
            if better {
                best = Some(candidate);
            }
        }
    }

    // No visible face: the point is inside the solid.
    best.unwrap_or(PointShapeDistance {
        distance: 0.0,
        sqr_distance: 0.0,
        closest: point,
    })
}

/// Computes the distance from a point to a solid frustum.
///
/// A point inside the frustum reports exactly zero distance. An
/// outside point is resolved by the minimum point–triangle distance
/// over the triangulated boundary faces, the same visible-boundary
/// reduction used for tetrahedra (the frustum is a convex polyhedron
/// with six faces).
#[must_use]
pub fn point_frustum3(point: Point3<f64>, frustum: &Frustum3) -> PointFrustumDistance {
    if frustum.contains(point) {
        return PointShapeDistance {
            distance: 0.0,
            sqr_distance: 0.0,
            closest: point,
        };
    }

    let corners = frustum.corners();
    // Quads: near face, far face, then the four side faces.
    const QUADS: [[usize; 4]; 6] = [
        [0, 1, 2, 3],
        [4, 5, 6, 7],
        [0, 1, 5, 4],
        [1, 2, 6, 5],
        [2, 3, 7, 6],
        [3, 0, 4, 7],
    ];

    let mut best = PointShapeDistance {
        distance: f64::MAX,
        sqr_distance: f64::MAX,
        closest: point,
    };
    for quad in QUADS {
        let [a, b, c, d] = quad.map(|i| corners[i]);
        for face in [Triangle3::new(a, b, c), Triangle3::new(a, c, d)] {
            let candidate = point_triangle3(point, &face);
            if candidate.sqr_distance < best.sqr_distance {
                best = candidate;
            }
        }
    }
    best
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use geom_types::Vector3;

    fn unit_tetrahedron() -> Tetrahedron3 {
        Tetrahedron3::new(
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        )
    }

    #[test]
    fn test_point_segment_interior() {
        let seg = Segment3::new(Point3::origin(), Point3::new(4.0, 0.0, 0.0));
        let result = point_segment3(Point3::new(1.0, 3.0, 0.0), &seg);
        assert!((result.distance - 3.0).abs() < 1e-12);
        assert!((result.segment_parameter - 0.25).abs() < 1e-12);
        assert!((result.closest - Point3::new(1.0, 0.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_point_segment_clamps_to_endpoint() {
        let seg = Segment3::new(Point3::origin(), Point3::new(4.0, 0.0, 0.0));
        let result = point_segment3(Point3::new(-3.0, 4.0, 0.0), &seg);
        assert!((result.distance - 5.0).abs() < 1e-12);
        assert!(result.segment_parameter.abs() < 1e-12);
    }

    #[test]
    fn test_point_triangle_vertex_edge_interior() {
        let tri = Triangle3::new(
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        // Vertex region.
        let r = point_triangle3(Point3::new(-1.0, -1.0, 0.0), &tri);
        assert!((r.closest - Point3::origin()).norm() < 1e-12);
        // Edge region.
        let r = point_triangle3(Point3::new(0.5, -2.0, 0.0), &tri);
        assert!((r.closest - Point3::new(0.5, 0.0, 0.0)).norm() < 1e-12);
        assert!((r.distance - 2.0).abs() < 1e-12);
        // Interior projection.
        let r = point_triangle3(Point3::new(0.25, 0.25, 1.5), &tri);
        assert!((r.closest - Point3::new(0.25, 0.25, 0.0)).norm() < 1e-12);
        assert!((r.distance - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_point_inside_tetrahedron_reports_exact_zero() {
        let tet = unit_tetrahedron();
        let inside = Point3::new(0.25, 0.25, 0.25);
        let result = point_tetrahedron3(inside, &tet);
        assert_eq!(result.distance, 0.0);
        assert_eq!(result.sqr_distance, 0.0);
        assert_eq!(result.closest, inside);
    }

    #[test]
    fn test_point_outside_tetrahedron_face() {
        let tet = unit_tetrahedron();
        // Below the z = 0 face.
        let result = point_tetrahedron3(Point3::new(0.2, 0.2, -2.0), &tet);
        assert!((result.distance - 2.0).abs() < 1e-12);
        assert!((result.closest - Point3::new(0.2, 0.2, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_point_outside_tetrahedron_vertex() {
        let tet = unit_tetrahedron();
        let result = point_tetrahedron3(Point3::new(2.0, 0.0, 0.0), &tet);
        assert!((result.distance - 1.0).abs() < 1e-12);
        assert!((result.closest - Point3::new(1.0, 0.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_point_rectangle_interior_and_corner() {
        let rect = Rectangle3::new(
            Point3::origin(),
            [Vector3::x(), Vector3::y()],
            [2.0, 1.0],
        );
        let r = point_rectangle3(Point3::new(0.5, 0.5, 3.0), &rect);
        assert!((r.distance - 3.0).abs() < 1e-12);
        let r = point_rectangle3(Point3::new(5.0, 5.0, 0.0), &rect);
        assert!((r.closest - Point3::new(2.0, 1.0, 0.0)).norm() < 1e-12);
        assert!((r.rectangle_parameters[0] - 2.0).abs() < 1e-12);
        assert!((r.rectangle_parameters[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_frustum_inside_is_zero() {
        let f = Frustum3::new(
            Point3::origin(),
            Vector3::z(),
            Vector3::y(),
            Vector3::x(),
            1.0,
            4.0,
            1.0,
            1.0,
        );
        let inside = Point3::new(0.0, 0.0, 2.0);
        let r = point_frustum3(inside, &f);
        assert_eq!(r.distance, 0.0);
        assert_eq!(r.closest, inside);
    }

    #[test]
    fn test_point_frustum_behind_near_face() {
        let f = Frustum3::new(
            Point3::origin(),
            Vector3::z(),
            Vector3::y(),
            Vector3::x(),
            1.0,
            4.0,
            1.0,
            1.0,
        );
        // On the axis, half a unit behind the near face.
        let r = point_frustum3(Point3::new(0.0, 0.0, 0.5), &f);
        assert!((r.distance - 0.5).abs() < 1e-12);
        assert!((r.closest - Point3::new(0.0, 0.0, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn test_point_frustum_beyond_far_face() {
        let f = Frustum3::new(
            Point3::origin(),
            Vector3::z(),
            Vector3::y(),
            Vector3::x(),
            1.0,
            4.0,
            1.0,
            1.0,
        );
        let r = point_frustum3(Point3::new(0.0, 0.0, 6.0), &f);
        assert!((r.distance - 2.0).abs() < 1e-12);
        assert!((r.closest - Point3::new(0.0, 0.0, 4.0)).norm() < 1e-12);
    }
}
