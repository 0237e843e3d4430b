//! Intersection of 2D lines and rays with circles.

use geom_types::{Circle2, Line2, Point2, Ray2};

/// Intersection of a line or ray with a circle.
///
/// Parameters are sorted ascending and `points[i]` corresponds to
/// `parameters[i]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearCircleIntersection {
    /// Number of intersection points: 0, 1 (tangent or a ray leaving
    /// the circle), or 2.
    pub count: usize,
    /// Sorted line parameters of the intersection points; only the
    /// first `count` entries are meaningful.
    pub parameters: [f64; 2],
    /// The intersection points; only the first `count` entries are
    /// meaningful.
    pub points: [Point2<f64>; 2],
}

impl LinearCircleIntersection {
    fn empty() -> Self {
        Self {
            count: 0,
            parameters: [0.0; 2],
            points: [Point2::origin(); 2],
        }
    }
}

/// Roots of the quadratic `|P + t D - C|^2 = r^2` with unit `D`,
/// sorted ascending. The reduced form has a1 = D . (P - C) and
/// a0 = |P - C|^2 - r^2, with discriminant a1^2 - a0.
fn line_circle_roots(line: &Line2, circle: &Circle2) -> (usize, [f64; 2]) {
    let delta = line.origin - circle.center;
    let a0 = delta.norm_squared() - circle.radius * circle.radius;
    let a1 = line.direction.dot(&delta);
    let discr = a1.mul_add(a1, -a0);
    if discr > 0.0 {
        let root = discr.sqrt();
        (2, [-a1 - root, -a1 + root])
    } else if discr == 0.0 {
        (1, [-a1, -a1])
    } else {
        (0, [0.0, 0.0])
    }
}

/// Computes the intersection of a line with a circle.
#[must_use]
pub fn find_line2_circle2(line: &Line2, circle: &Circle2) -> LinearCircleIntersection {
    let (count, parameters) = line_circle_roots(line, circle);
    LinearCircleIntersection {
        count,
        parameters,
        points: [line.point_at(parameters[0]), line.point_at(parameters[1])],
    }
}

/// Computes the intersection of a ray with a circle.
///
/// The carrier line's roots are kept only where they are nonnegative,
/// so a ray starting inside the circle reports the single exit point.
#[must_use]
pub fn find_ray2_circle2(ray: &Ray2, circle: &Circle2) -> LinearCircleIntersection {
    let line = ray.to_line();
    let (count, roots) = line_circle_roots(&line, circle);
    let mut kept = [0.0; 2];
    let mut n = 0;
    for &t in roots.iter().take(count) {
        if t >= 0.0 {
            kept[n] = t;
            n += 1;
        }
    }
    if n == 0 {
        return LinearCircleIntersection::empty();
    }
    if n == 1 {
        kept[1] = kept[0];
    }
    LinearCircleIntersection {
        count: n,
        parameters: kept,
        points: [line.point_at(kept[0]), line.point_at(kept[1])],
    }
}
