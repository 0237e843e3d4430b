//! Intersection of 3D lines and rays with aligned and oriented boxes.

use geom_types::{AlignedBox3, Line3, OrientedBox3, Point3, Ray3, Vector3};

use crate::box2::clip;

/// Intersection of a line or ray with a 3D box.
///
/// Parameters are sorted ascending and `points[i]` corresponds to
/// `parameters[i]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearBox3Intersection {
    /// Number of intersection points: 0, 1 (edge or corner graze, or
    /// a ray origin on the far face), or 2.
    pub count: usize,
    /// Sorted line parameters of the intersection points; only the
    /// first `count` entries are meaningful.
    pub parameters: [f64; 2],
    /// The intersection points; only the first `count` entries are
    /// meaningful.
    pub points: [Point3<f64>; 2],
}

impl LinearBox3Intersection {
    fn empty() -> Self {
        Self {
            count: 0,
            parameters: [0.0; 2],
            points: [Point3::origin(); 2],
        }
    }
}

/// Clips the line `O + t D` (box-centered coordinates) against the
/// three slabs, restricting the incoming `[t0, t1]` in place.
/// Returns 0 (miss), 1 (degenerate touch), or 2.
fn do_clip3(
    origin: &Point3<f64>,
    direction: &Vector3<f64>,
    extent: &Vector3<f64>,
    t0: &mut f64,
    t1: &mut f64,
) -> usize {
    let inside = clip(direction.x, extent.x - origin.x, t0, t1)
        && clip(-direction.x, extent.x + origin.x, t0, t1)
        && clip(direction.y, extent.y - origin.y, t0, t1)
        && clip(-direction.y, extent.y + origin.y, t0, t1)
        && clip(direction.z, extent.z - origin.z, t0, t1)
        && clip(-direction.z, extent.z + origin.z, t0, t1);
    if !inside {
        0
    } else if *t1 > *t0 {
        2
    } else {
        1
    }
}

fn result_from_interval(line: &Line3, count: usize, t0: f64, t1: f64) -> LinearBox3Intersection {
    match count {
        1 => LinearBox3Intersection {
            count: 1,
            parameters: [t0, t0],
            points: [line.point_at(t0); 2],
        },
        2 => LinearBox3Intersection {
            count: 2,
            parameters: [t0, t1],
            points: [line.point_at(t0), line.point_at(t1)],
        },
        _ => LinearBox3Intersection::empty(),
    }
}

/// Whether a line intersects an axis-aligned box.
///
/// Separating-axis test over the three candidate axes
/// `cross(D, e_i)`; the axis-aligned face normals never separate a
/// line from a box.
#[must_use]
pub fn test_line3_aligned_box3(line: &Line3, b: &AlignedBox3) -> bool {
    let (center, extent) = b.centered_form();
    let diff = line.origin - center;
    let d = &line.direction;
    let wxd = diff.cross(d);
    let abs_d = d.abs();

    wxd.x.abs() <= extent.y.mul_add(abs_d.z, extent.z * abs_d.y)
        && wxd.y.abs() <= extent.x.mul_add(abs_d.z, extent.z * abs_d.x)
        && wxd.z.abs() <= extent.x.mul_add(abs_d.y, extent.y * abs_d.x)
}

/// Computes the intersection of a line with an axis-aligned box by
/// clipping the line against the box's slabs.
#[must_use]
pub fn find_line3_aligned_box3(line: &Line3, b: &AlignedBox3) -> LinearBox3Intersection {
    let (center, extent) = b.centered_form();
    let origin = Point3::from(line.origin - center);
    let mut t0 = f64::NEG_INFINITY;
    let mut t1 = f64::INFINITY;
    let count = do_clip3(&origin, &line.direction, &extent, &mut t0, &mut t1);
    result_from_interval(line, count, t0, t1)
}

/// Whether a ray intersects an axis-aligned box.
///
/// Per-axis early rejection first: the ray cannot hit when its origin
/// is beyond a slab and its direction does not point back toward it.
/// Survivors fall through to the line test.
#[must_use]
pub fn test_ray3_aligned_box3(ray: &Ray3, b: &AlignedBox3) -> bool {
    let (center, extent) = b.centered_form();
    let diff = ray.origin - center;
    for i in 0..3 {
        if diff[i].abs() > extent[i] && diff[i] * ray.direction[i] >= 0.0 {
            return false;
        }
    }
    test_line3_aligned_box3(&ray.to_line(), b)
}

/// Computes the intersection of a ray with an axis-aligned box.
///
/// The carrier line is clipped against the slabs with the parameter
/// interval restricted to `[0, +inf)`, so a ray origin inside the box
/// reports the origin and the exit point.
#[must_use]
pub fn find_ray3_aligned_box3(ray: &Ray3, b: &AlignedBox3) -> LinearBox3Intersection {
    let (center, extent) = b.centered_form();
    let origin = Point3::from(ray.origin - center);
    let mut t0 = 0.0;
    let mut t1 = f64::INFINITY;
    let count = do_clip3(&origin, &ray.direction, &extent, &mut t0, &mut t1);
    result_from_interval(&ray.to_line(), count, t0, t1)
}

fn to_local_line(line: &Line3, b: &OrientedBox3) -> Line3 {
    Line3::new(b.to_local(line.origin), b.to_local_vector(line.direction))
}

/// Whether a line intersects an oriented box, by transforming the
/// line to the box's local frame.
#[must_use]
pub fn test_line3_oriented_box3(line: &Line3, b: &OrientedBox3) -> bool {
    test_line3_aligned_box3(&to_local_line(line, b), &b.local_aligned())
}

/// Computes the intersection of a line with an oriented box.
///
/// Delegates to the aligned query in the box's local frame;
/// parameters are frame-invariant, so only the points are mapped
/// back to world space.
#[must_use]
pub fn find_line3_oriented_box3(line: &Line3, b: &OrientedBox3) -> LinearBox3Intersection {
    let mut result = find_line3_aligned_box3(&to_local_line(line, b), &b.local_aligned());
    for i in 0..result.count {
        result.points[i] = line.point_at(result.parameters[i]);
    }
    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_box_at(center: Point3<f64>) -> AlignedBox3 {
        AlignedBox3::from_centered_form(center, Vector3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_ray_enters_and_exits() {
        let ray = Ray3::new(Point3::origin(), Vector3::x());
        let b = unit_box_at(Point3::new(5.0, 0.0, 0.0));
        assert!(test_ray3_aligned_box3(&ray, &b));
        let r = find_ray3_aligned_box3(&ray, &b);
        assert_eq!(r.count, 2);
        assert_relative_eq!(r.parameters[0], 4.0, epsilon = 1e-12);
        assert_relative_eq!(r.parameters[1], 6.0, epsilon = 1e-12);
        assert!((r.points[0] - Point3::new(4.0, 0.0, 0.0)).norm() < 1e-12);
        assert!((r.points[1] - Point3::new(6.0, 0.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_ray_pointing_away() {
        let ray = Ray3::new(Point3::origin(), Vector3::new(-1.0, 0.0, 0.0));
        let b = unit_box_at(Point3::new(5.0, 0.0, 0.0));
        assert!(!test_ray3_aligned_box3(&ray, &b));
        assert_eq!(find_ray3_aligned_box3(&ray, &b).count, 0);
    }

    #[test]
    fn test_ray_origin_inside() {
        let ray = Ray3::new(Point3::new(5.0, 0.5, 0.0), Vector3::x());
        let b = unit_box_at(Point3::new(5.0, 0.0, 0.0));
        let r = find_ray3_aligned_box3(&ray, &b);
        assert_eq!(r.count, 2);
        assert!(r.parameters[0].abs() < 1e-12);
        assert!((r.parameters[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_line_through_box() {
        let line = Line3::new(Point3::new(5.0, 0.0, -9.0), Vector3::z());
        let b = unit_box_at(Point3::new(5.0, 0.0, 0.0));
        assert!(test_line3_aligned_box3(&line, &b));
        let r = find_line3_aligned_box3(&line, &b);
        assert_eq!(r.count, 2);
        assert!((r.parameters[0] - 8.0).abs() < 1e-12);
        assert!((r.parameters[1] - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_line_misses_box() {
        let line = Line3::new(Point3::new(5.0, 3.0, -9.0), Vector3::z());
        let b = unit_box_at(Point3::new(5.0, 0.0, 0.0));
        assert!(!test_line3_aligned_box3(&line, &b));
        assert_eq!(find_line3_aligned_box3(&line, &b).count, 0);
    }

    #[test]
    fn test_line_grazes_edge() {
        // Runs along the box edge x = 6, y = 1.
        let line = Line3::new(Point3::new(6.0, 1.0, -9.0), Vector3::z());
        let b = unit_box_at(Point3::new(5.0, 0.0, 0.0));
        assert!(test_line3_aligned_box3(&line, &b));
        let r = find_line3_aligned_box3(&line, &b);
        assert_eq!(r.count, 2);
        assert!((r.points[0] - Point3::new(6.0, 1.0, -1.0)).norm() < 1e-12);
        assert!((r.points[1] - Point3::new(6.0, 1.0, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn test_oriented_matches_aligned_under_identity() {
        let line = Line3::new(Point3::new(-9.0, 0.25, -0.5), Vector3::x());
        let aligned = AlignedBox3::new(Point3::new(-1.0, -2.0, -3.0), Point3::new(1.0, 2.0, 3.0));
        let oriented = OrientedBox3::new(
            Point3::origin(),
            [Vector3::x(), Vector3::y(), Vector3::z()],
            [1.0, 2.0, 3.0],
        );
        let ra = find_line3_aligned_box3(&line, &aligned);
        let ro = find_line3_oriented_box3(&line, &oriented);
        assert_eq!(ra.count, ro.count);
        for i in 0..ra.count {
            assert!((ra.parameters[i] - ro.parameters[i]).abs() < 1e-12);
            assert!((ra.points[i] - ro.points[i]).norm() < 1e-12);
        }
        assert_eq!(
            test_line3_aligned_box3(&line, &aligned),
            test_line3_oriented_box3(&line, &oriented)
        );
    }

    #[test]
    fn test_rotated_oriented_box() {
        let inv_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
        let oriented = OrientedBox3::new(
            Point3::origin(),
            [
                Vector3::new(inv_sqrt2, inv_sqrt2, 0.0),
                Vector3::new(-inv_sqrt2, inv_sqrt2, 0.0),
                Vector3::z(),
            ],
            [1.0, 1.0, 1.0],
        );
        // Vertical line through the center crosses the rotated square
        // cross-section at y = +-sqrt(2).
        let line = Line3::new(Point3::new(0.0, -5.0, 0.0), Vector3::y());
        let r = find_line3_oriented_box3(&line, &oriented);
        assert_eq!(r.count, 2);
        let sqrt2 = std::f64::consts::SQRT_2;
        assert!((r.points[0] - Point3::new(0.0, -sqrt2, 0.0)).norm() < 1e-12);
        assert!((r.points[1] - Point3::new(0.0, sqrt2, 0.0)).norm() < 1e-12);
    }
}
