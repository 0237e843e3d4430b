//! Intersection of 2D lines and rays with triangles.

use geom_types::{Interval, Line2, Point2, Ray2, Triangle2};

use crate::interval::find_interval_interval;
use crate::line2::dot_perp;

/// Intersection of a line or ray with a 2D triangle.
///
/// A transversal hit yields the chord with `count == 2`; grazing a
/// vertex or clipping the triangle at a single parameter yields
/// `count == 1`. Parameters are sorted ascending and `points[i]`
/// corresponds to `parameters[i]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTriangle2Intersection {
    /// Number of intersection points: 0, 1, or 2.
    pub count: usize,
    /// Sorted line parameters of the intersection points; only the
    /// first `count` entries are meaningful.
    pub parameters: [f64; 2],
    /// The intersection points; only the first `count` entries are
    /// meaningful.
    pub points: [Point2<f64>; 2],
}

impl LinearTriangle2Intersection {
    fn empty() -> Self {
        Self {
            count: 0,
            parameters: [0.0; 2],
            points: [Point2::origin(); 2],
        }
    }

    fn from_interval(line: &Line2, count: usize, interval: Interval) -> Self {
        match count {
            1 => Self {
                count: 1,
                parameters: [interval.min, interval.min],
                points: [line.point_at(interval.min); 2],
            },
            2 => Self {
                count: 2,
                parameters: [interval.min, interval.max],
                points: [line.point_at(interval.min), line.point_at(interval.max)],
            },
            _ => Self::empty(),
        }
    }
}

/// Parameter interval where `line` passes through `triangle`, or
/// `None` when all three vertices lie strictly on one side.
///
/// Classified by the signed perp-dot of each vertex offset against
/// the line direction. A vertex on the line contributes its own
/// parameter; an edge whose endpoints straddle the line contributes
/// the crossing parameter. Works for either triangle winding.
fn clip_line_to_triangle(line: &Line2, triangle: &Triangle2) -> Option<Interval> {
    let v = &triangle.vertices;
    let s: [f64; 3] = core::array::from_fn(|i| dot_perp(&line.direction, &(v[i] - line.origin)));

    let mut t_min = f64::INFINITY;
    let mut t_max = f64::NEG_INFINITY;
    let mut any = false;
    let mut push = |t: f64| {
        t_min = t_min.min(t);
        t_max = t_max.max(t);
        any = true;
    };

    for i in 0..3 {
        let j = (i + 1) % 3;
        if s[i] == 0.0 {
            push(line.direction.dot(&(v[i] - line.origin)));
        } else if s[i] * s[j] < 0.0 {
            let point = v[i] + (s[i] / (s[i] - s[j])) * (v[j] - v[i]);
            push(line.direction.dot(&(point - line.origin)));
        }
    }

    any.then(|| Interval::new(t_min, t_max))
}

/// Computes the intersection of a line with a triangle.
#[must_use]
pub fn find_line2_triangle2(line: &Line2, triangle: &Triangle2) -> LinearTriangle2Intersection {
    match clip_line_to_triangle(line, triangle) {
        Some(interval) => {
            let count = if interval.is_degenerate() { 1 } else { 2 };
            LinearTriangle2Intersection::from_interval(line, count, interval)
        }
        None => LinearTriangle2Intersection::empty(),
    }
}

/// Computes the intersection of a ray with a triangle.
///
/// The carrier line's parameter interval is restricted to
/// `[0, +inf)`; a ray origin inside the triangle yields the chord
/// from the origin to the exit point.
#[must_use]
pub fn find_ray2_triangle2(ray: &Ray2, triangle: &Triangle2) -> LinearTriangle2Intersection {
    let line = ray.to_line();
    match clip_line_to_triangle(&line, triangle) {
        Some(interval) => {
            let overlap = find_interval_interval(&interval, &Interval::nonnegative());
            LinearTriangle2Intersection::from_interval(&line, overlap.count, overlap.overlap)
        }
        None => LinearTriangle2Intersection::empty(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use geom_types::Vector2;

    fn unit_right_triangle() -> Triangle2 {
        Triangle2::new(
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 2.0),
        )
    }

    #[test]
    fn test_line_chord() {
        let line = Line2::new(Point2::new(-1.0, 0.5), Vector2::new(1.0, 0.0));
        let r = find_line2_triangle2(&line, &unit_right_triangle());
        assert_eq!(r.count, 2);
        assert!((r.parameters[0] - 1.0).abs() < 1e-12);
        assert!((r.parameters[1] - 2.5).abs() < 1e-12);
        assert!((r.points[0] - Point2::new(0.0, 0.5)).norm() < 1e-12);
        assert!((r.points[1] - Point2::new(1.5, 0.5)).norm() < 1e-12);
    }

    #[test]
    fn test_line_misses() {
        let line = Line2::new(Point2::new(-1.0, 3.0), Vector2::new(1.0, 0.0));
        let r = find_line2_triangle2(&line, &unit_right_triangle());
        assert_eq!(r.count, 0);
    }

    #[test]
    fn test_line_through_vertex_only() {
        // Grazes the apex (0, 2) without entering the interior.
        let line = Line2::new(Point2::new(-1.0, 2.0), Vector2::new(1.0, 0.0));
        let r = find_line2_triangle2(&line, &unit_right_triangle());
        assert_eq!(r.count, 1);
        assert!((r.points[0] - Point2::new(0.0, 2.0)).norm() < 1e-12);
    }

    #[test]
    fn test_line_contains_edge() {
        let line = Line2::new(Point2::new(-3.0, 0.0), Vector2::new(1.0, 0.0));
        let r = find_line2_triangle2(&line, &unit_right_triangle());
        assert_eq!(r.count, 2);
        assert!((r.points[0] - Point2::new(0.0, 0.0)).norm() < 1e-12);
        assert!((r.points[1] - Point2::new(2.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_ray_origin_inside() {
        let ray = Ray2::new(Point2::new(0.5, 0.5), Vector2::new(1.0, 0.0));
        let r = find_ray2_triangle2(&ray, &unit_right_triangle());
        assert_eq!(r.count, 2);
        assert!((r.parameters[0]).abs() < 1e-12);
        assert!((r.parameters[1] - 1.0).abs() < 1e-12);
        assert!((r.points[1] - Point2::new(1.5, 0.5)).norm() < 1e-12);
    }

    #[test]
    fn test_ray_pointing_away() {
        let ray = Ray2::new(Point2::new(-1.0, 0.5), Vector2::new(-1.0, 0.0));
        let r = find_ray2_triangle2(&ray, &unit_right_triangle());
        assert_eq!(r.count, 0);
    }

    #[test]
    fn test_ray_matches_line_when_interval_nonnegative() {
        let ray = Ray2::new(Point2::new(-1.0, 0.5), Vector2::new(1.0, 0.0));
        let from_ray = find_ray2_triangle2(&ray, &unit_right_triangle());
        let from_line = find_line2_triangle2(&ray.to_line(), &unit_right_triangle());
        assert_eq!(from_ray, from_line);
    }

    #[test]
    fn test_winding_independent() {
        let t = unit_right_triangle();
        let reversed = Triangle2::new(t.vertices[2], t.vertices[1], t.vertices[0]);
        let line = Line2::new(Point2::new(-1.0, 0.5), Vector2::new(1.0, 0.0));
        assert_eq!(
            find_line2_triangle2(&line, &t),
            find_line2_triangle2(&line, &reversed)
        );
    }
}
