//! Intersection of 2D lines and rays with each other.

use geom_types::{Line2, Point2, Ray2, Vector2};

/// Perp-dot product `a.x * b.y - a.y * b.x` of two 2D vectors.
pub(crate) fn dot_perp(a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
    a.x.mul_add(b.y, -(a.y * b.x))
}

/// Result of intersecting two lines in 2D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Line2Line2Intersection {
    /// The lines are parallel and distinct.
    None,
    /// The lines cross at a single point.
    Point {
        /// The intersection point.
        point: Point2<f64>,
        /// Parameter of the point on the first line.
        line0_parameter: f64,
        /// Parameter of the point on the second line.
        line1_parameter: f64,
    },
    /// The lines are the same line.
    Collinear,
}

/// Classifies the intersection of two lines.
///
/// Parallelism is decided by the perp-dot of the two unit directions
/// being exactly zero; collinearity by the perp-dot of the normalized
/// origin difference with the common direction being exactly zero.
#[must_use]
pub fn find_line2_line2(line0: &Line2, line1: &Line2) -> Line2Line2Intersection {
    let diff = line1.origin - line0.origin;
    let d0_perp_d1 = dot_perp(&line0.direction, &line1.direction);
    if d0_perp_d1 != 0.0 {
        let line0_parameter = dot_perp(&diff, &line1.direction) / d0_perp_d1;
        let line1_parameter = dot_perp(&diff, &line0.direction) / d0_perp_d1;
        return Line2Line2Intersection::Point {
            point: line0.point_at(line0_parameter),
            line0_parameter,
            line1_parameter,
        };
    }

    // Parallel. The lines coincide when the origin difference is also
    // parallel to the common direction; normalize so the test does
    // not depend on how far apart the origins sit along the line.
    let diff_norm = diff.norm();
    if diff_norm == 0.0 {
        return Line2Line2Intersection::Collinear;
    }
    let diff_n = diff / diff_norm;
    if dot_perp(&diff_n, &line1.direction) == 0.0 {
        Line2Line2Intersection::Collinear
    } else {
        Line2Line2Intersection::None
    }
}

/// Result of intersecting two rays in 2D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ray2Ray2Intersection {
    /// The rays do not meet.
    None,
    /// The rays meet at a single point.
    Point {
        /// The intersection point.
        point: Point2<f64>,
        /// Parameter of the point on the first ray.
        ray0_parameter: f64,
        /// Parameter of the point on the second ray.
        ray1_parameter: f64,
    },
    /// Collinear rays pointing at each other; the overlap is the
    /// segment between the two origins.
    Segment {
        /// Segment endpoints, first ray's origin first.
        points: [Point2<f64>; 2],
    },
    /// Collinear rays pointing the same way; the overlap is the ray
    /// starting at the origin deeper along the shared direction.
    HalfLine {
        /// Origin of the overlap ray.
        origin: Point2<f64>,
    },
}

/// Computes the full intersection of two rays.
///
/// The carrier lines are classified first; ray constraints then prune
/// the crossing point or, for collinear rays, pick between segment,
/// half-line, point, and empty overlaps by comparing the direction
/// dot product and the position of the second origin on the first ray.
#[must_use]
pub fn find_ray2_ray2(ray0: &Ray2, ray1: &Ray2) -> Ray2Ray2Intersection {
    match find_line2_line2(&ray0.to_line(), &ray1.to_line()) {
        Line2Line2Intersection::Point {
            point,
            line0_parameter,
            line1_parameter,
        } => {
            if line0_parameter >= 0.0 && line1_parameter >= 0.0 {
                Ray2Ray2Intersection::Point {
                    point,
                    ray0_parameter: line0_parameter,
                    ray1_parameter: line1_parameter,
                }
            } else {
                Ray2Ray2Intersection::None
            }
        }
        Line2Line2Intersection::Collinear => {
            // Parameter of ray1's origin on ray0.
            let t = ray0.direction.dot(&(ray1.origin - ray0.origin));
            if ray0.direction.dot(&ray1.direction) > 0.0 {
                // Same direction: the later origin starts the overlap.
                let origin = if t >= 0.0 { ray1.origin } else { ray0.origin };
                Ray2Ray2Intersection::HalfLine { origin }
            } else if t > 0.0 {
                Ray2Ray2Intersection::Segment {
                    points: [ray0.origin, ray1.origin],
                }
            } else if t == 0.0 {
                Ray2Ray2Intersection::Point {
                    point: ray0.origin,
                    ray0_parameter: 0.0,
                    ray1_parameter: 0.0,
                }
            } else {
                Ray2Ray2Intersection::None
            }
        }
        Line2Line2Intersection::None => Ray2Ray2Intersection::None,
    }
}

/// Whether two rays intersect.
///
/// Same classification as [`find_ray2_ray2`] without constructing the
/// intersection set.
#[must_use]
pub fn test_ray2_ray2(ray0: &Ray2, ray1: &Ray2) -> bool {
    !matches!(find_ray2_ray2(ray0, ray1), Ray2Ray2Intersection::None)
}
