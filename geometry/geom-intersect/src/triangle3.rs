//! Intersection of 3D lines and rays with triangles.

use geom_types::{Line3, Point3, Ray3, Triangle3};

/// A linear shape's hit against a 3D triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle3Hit {
    /// Parameter of the hit point on the line or ray.
    pub parameter: f64,
    /// Barycentric coordinates of the hit point with respect to the
    /// triangle vertices; `barycentric[0] + barycentric[1] +
    /// barycentric[2] == 1` up to round-off.
    pub barycentric: [f64; 3],
    /// The hit point.
    pub point: Point3<f64>,
}

/// Shared core: edge-cross determinants of the line against the
/// triangle, sign-adjusted so all three are nonnegative inside.
///
/// Returns `(t, b1, b2)` when the carrier line pierces the triangle,
/// `None` when it misses or is parallel to the triangle plane
/// (coplanar lines report no intersection).
fn line_triangle_core(line: &Line3, triangle: &Triangle3) -> Option<(f64, f64, f64)> {
    let v = &triangle.vertices;
    let diff = line.origin - v[0];
    let edge1 = v[1] - v[0];
    let edge2 = v[2] - v[0];
    let normal = edge1.cross(&edge2);

    // Adjust the sign so the scaled barycentric tests below read the
    // same for either triangle winding.
    let mut ddn = line.direction.dot(&normal);
    let sign: f64;
    if ddn > 0.0 {
        sign = 1.0;
    } else if ddn < 0.0 {
        sign = -1.0;
        ddn = -ddn;
    } else {
        return None;
    }

    let dd_qx_e2 = sign * line.direction.dot(&diff.cross(&edge2));
    if dd_qx_e2 < 0.0 {
        return None;
    }
    let dd_e1x_q = sign * line.direction.dot(&edge1.cross(&diff));
    if dd_e1x_q < 0.0 {
        return None;
    }
    if dd_qx_e2 + dd_e1x_q > ddn {
        return None;
    }

    let qdn = -sign * diff.dot(&normal);
    Some((qdn / ddn, dd_qx_e2 / ddn, dd_e1x_q / ddn))
}

fn hit_from_core(line: &Line3, t: f64, b1: f64, b2: f64) -> Triangle3Hit {
    Triangle3Hit {
        parameter: t,
        barycentric: [1.0 - b1 - b2, b1, b2],
        point: line.point_at(t),
    }
}

/// Computes the intersection of a line with a triangle, if any.
#[must_use]
pub fn find_line3_triangle3(line: &Line3, triangle: &Triangle3) -> Option<Triangle3Hit> {
    line_triangle_core(line, triangle).map(|(t, b1, b2)| hit_from_core(line, t, b1, b2))
}

/// Computes the intersection of a ray with a triangle, if any.
///
/// Same determinant core as the line query with the extra constraint
/// that the hit parameter is nonnegative.
#[must_use]
pub fn find_ray3_triangle3(ray: &Ray3, triangle: &Triangle3) -> Option<Triangle3Hit> {
    let line = ray.to_line();
    line_triangle_core(&line, triangle)
        .filter(|&(t, _, _)| t >= 0.0)
        .map(|(t, b1, b2)| hit_from_core(&line, t, b1, b2))
}

/// Whether a ray intersects a triangle.
#[must_use]
pub fn test_ray3_triangle3(ray: &Ray3, triangle: &Triangle3) -> bool {
    find_ray3_triangle3(ray, triangle).is_some()
}
