//! Line-to-shape distance queries.

use geom_types::{Line3, Rectangle3, Segment3};
use nalgebra::Point3;

/// Result of a line-to-segment distance query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegmentDistance {
    /// Euclidean distance.
    pub distance: f64,
    /// Squared distance.
    pub sqr_distance: f64,
    /// Line parameter of the closest point on the line.
    pub line_parameter: f64,
    /// Parameter of the closest point in `[0, 1]` over the segment's
    /// endpoints.
    pub segment_parameter: f64,
    /// Closest point on the line.
    pub closest_line: Point3<f64>,
    /// Closest point on the segment.
    pub closest_segment: Point3<f64>,
}

/// Result of a line-to-rectangle distance query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineRectangleDistance {
    /// Euclidean distance.
    pub distance: f64,
    /// Squared distance.
    pub sqr_distance: f64,
    /// Line parameter of the closest point on the line.
    pub line_parameter: f64,
    /// Rectangle coordinates `(s0, s1)` of the closest point.
    pub rectangle_parameters: [f64; 2],
    /// Closest point on the line.
    pub closest_line: Point3<f64>,
    /// Closest point on the rectangle.
    pub closest_rectangle: Point3<f64>,
}

/// Computes the distance between an infinite line and a segment.
///
/// The line direction must be unit length; the segment must have
/// positive length (caller contract). Solves the 2x2 normal equations
/// of the squared-distance quadratic, clamping the segment parameter
/// to its extent and re-optimizing the line parameter when the
/// unconstrained minimum is cut off.
///
/// # Example
///
/// ```
/// use geom_distance::line3_segment3;
/// use geom_types::{Line3, Segment3};
/// use nalgebra::{Point3, Vector3};
///
/// let line = Line3::new(Point3::origin(), Vector3::x());
/// let seg = Segment3::new(Point3::new(0.0, 1.0, 0.0), Point3::new(0.0, 3.0, 0.0));
/// let result = line3_segment3(&line, &seg);
/// assert!((result.distance - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn line3_segment3(line: &Line3, segment: &Segment3) -> LineSegmentDistance {
    let (seg_center, seg_direction, seg_extent) = segment.centered_form();
    let diff = line.origin - seg_center;
    let a01 = -line.direction.dot(&seg_direction);
    let b0 = diff.dot(&line.direction);
    let det = (1.0 - a01 * a01).max(0.0);

    let (s0, s1);
    if det > 0.0 {
        // Nonparallel: minimize over the segment interval.
        let b1 = -diff.dot(&seg_direction);
        let s1_unclamped = (a01 * b0 - b1) / det;
        s1 = s1_unclamped.clamp(-seg_extent, seg_extent);
        s0 = -(a01 * s1 + b0);
    } else {
        // Parallel: any segment point works; use its center.
        s1 = 0.0;
        s0 = -b0;
    }

    let closest_line = line.origin + line.direction * s0;
    let closest_segment = seg_center + seg_direction * s1;
    let sqr_distance = (closest_line - closest_segment).norm_squared();
    let segment_parameter = if seg_extent > 0.0 {
        (s1 + seg_extent) / (2.0 * seg_extent)
    } else {
        0.5
    };
    LineSegmentDistance {
        distance: sqr_distance.sqrt(),
        sqr_distance,
        line_parameter: s0,
        segment_parameter,
        closest_line,
        closest_segment,
    }
}

/// Computes the distance between an infinite line and a rectangle.
///
/// If the line pierces the rectangle's plane inside the rectangle the
/// distance is zero; otherwise the minimum is attained against one of
/// the four edges and the query reduces to four line–segment queries.
#[must_use]
pub fn line3_rectangle3(line: &Line3, rectangle: &Rectangle3) -> LineRectangleDistance {
    let normal = rectangle.normal();
    let ddn = line.direction.dot(&normal);
    if ddn.abs() > 0.0 {
        // The line meets the rectangle's plane in a single point.
        let t = (rectangle.center - line.origin).dot(&normal) / ddn;
        let pierce = line.point_at(t);
        let diff = pierce - rectangle.center;
        let s0 = diff.dot(&rectangle.axes[0]);
        let s1 = diff.dot(&rectangle.axes[1]);
        if s0.abs() <= rectangle.extents[0] && s1.abs() <= rectangle.extents[1] {
            return LineRectangleDistance {
                distance: 0.0,
                sqr_distance: 0.0,
                line_parameter: t,
                rectangle_parameters: [s0, s1],
                closest_line: pierce,
                closest_rectangle: pierce,
            };
        }
    }

    // Parallel to the plane, or the pierce point lies outside: the
    // closest rectangle point is on an edge.
    let mut best: Option<LineSegmentDistance> = None;
    for edge in rectangle.edges() {
        let candidate = line3_segment3(line, &edge);
        let better = best
            .as_ref()
            .map_or(true, |b| candidate.sqr_distance < b.sqr_distance);
        if better {
            best = Some(candidate);
        }
    }
    // Rectangles have four edges; `best` is always present.
    let best = best.unwrap_or(LineSegmentDistance {
        distance: f64::MAX,
        sqr_distance: f64::MAX,
        line_parameter: 0.0,
        segment_parameter: 0.0,
        closest_line: line.origin,
        closest_segment: rectangle.center,
    });

    let diff = best.closest_segment - rectangle.center;
    LineRectangleDistance {
        distance: best.distance,
        sqr_distance: best.sqr_distance,
        line_parameter: best.line_parameter,
        rectangle_parameters: [
            diff.dot(&rectangle.axes[0]),
            diff.dot(&rectangle.axes[1]),
        ],
        closest_line: best.closest_line,
        closest_rectangle: best.closest_segment,
    }
}

/// Parameter-clamped helper shared with the ray query: distance from
/// a fixed point to the rectangle, reported in the line result shape.
pub(crate) fn point_to_rectangle_as_line_result(
    point: Point3<f64>,
    rectangle: &Rectangle3,
) -> LineRectangleDistance {
    let r = crate::point::point_rectangle3(point, rectangle);
    LineRectangleDistance {
        distance: r.distance,
        sqr_distance: r.sqr_distance,
        line_parameter: 0.0,
        rectangle_parameters: r.rectangle_parameters,
        closest_line: point,
        closest_rectangle: r.closest,
    }
}
