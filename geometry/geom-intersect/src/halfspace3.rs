//! Intersection of halfspaces with triangles.

use geom_types::{Halfspace3, Point3, Triangle3};

/// A triangle clipped against a halfspace.
///
/// The clip of a triangle by a plane is a convex polygon with at most
/// four vertices: the whole triangle, a smaller triangle, a
/// quadrilateral, an edge, a single vertex, or nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfspaceTriangleClip {
    /// Number of polygon vertices: 0 through 4.
    pub count: usize,
    /// The clipped polygon in winding order; only the first `count`
    /// entries are meaningful.
    pub points: [Point3<f64>; 4],
}

/// Whether a triangle touches a halfspace.
///
/// True when any vertex is on the inner side of the boundary plane
/// (boundary inclusive).
#[must_use]
pub fn test_halfspace3_triangle3(halfspace: &Halfspace3, triangle: &Triangle3) -> bool {
    triangle
        .vertices
        .iter()
        .any(|v| halfspace.normal.dot(&v.coords) >= halfspace.constant)
}

/// Clips a triangle against a halfspace.
///
/// Walks the triangle edges, emitting each vertex on the inner side
/// (boundary inclusive) and the plane crossing of each edge whose
/// endpoints lie strictly on opposite sides. The output preserves
/// the input winding.
#[must_use]
pub fn find_halfspace3_triangle3(
    halfspace: &Halfspace3,
    triangle: &Triangle3,
) -> HalfspaceTriangleClip {
    let v = &triangle.vertices;
    let s: [f64; 3] =
        core::array::from_fn(|i| halfspace.normal.dot(&v[i].coords) - halfspace.constant);

    let mut points = [Point3::origin(); 4];
    let mut count = 0;
    for i in 0..3 {
        let j = (i + 1) % 3;
        if s[i] >= 0.0 {
            points[count] = v[i];
            count += 1;
        }
        if s[i] * s[j] < 0.0 {
            let t = s[i] / (s[i] - s[j]);
            points[count] = v[i] + t * (v[j] - v[i]);
            count += 1;
        }
    }

    HalfspaceTriangleClip { count, points }
}
