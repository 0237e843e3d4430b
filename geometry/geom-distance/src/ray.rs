//! Ray-to-shape distance queries.
//!
//! Ray queries reduce to the corresponding line query and clamp the
//! parametric result to `[0, +inf)`: when the unconstrained optimum
//! falls behind the origin, the minimum over the ray is attained at
//! the origin itself and the query re-runs as a point query.

use geom_types::{Ray3, Rectangle3};
use nalgebra::Point3;

use crate::line::{line3_rectangle3, point_to_rectangle_as_line_result};

/// Result of a ray-to-rectangle distance query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayRectangleDistance {
    /// Euclidean distance.
    pub distance: f64,
    /// Squared distance.
    pub sqr_distance: f64,
    /// Ray parameter (>= 0) of the closest point on the ray.
    pub ray_parameter: f64,
    /// Rectangle coordinates `(s0, s1)` of the closest point.
    pub rectangle_parameters: [f64; 2],
    /// Closest point on the ray.
    pub closest_ray: Point3<f64>,
    /// Closest point on the rectangle.
    pub closest_rectangle: Point3<f64>,
}

/// Computes the distance between a ray and a rectangle.
///
/// Runs the line–rectangle query on the ray's containing line. A
/// non-negative line parameter is already the ray answer; otherwise
/// the closest ray point is the origin and a point–rectangle query
/// finishes the job.
///
/// # Example
///
/// ```
/// use geom_distance::ray3_rectangle3;
/// use geom_types::{Ray3, Rectangle3};
/// use nalgebra::{Point3, Vector3};
///
/// let rect = Rectangle3::new(Point3::origin(), [Vector3::x(), Vector3::y()], [1.0, 1.0]);
/// // Pointing away from the rectangle: the origin is the closest ray point.
/// let ray = Ray3::new(Point3::new(0.0, 0.0, 2.0), Vector3::z());
/// let result = ray3_rectangle3(&ray, &rect);
/// assert!((result.distance - 2.0).abs() < 1e-12);
/// assert!(result.ray_parameter.abs() < 1e-12);
/// ```
#[must_use]
pub fn ray3_rectangle3(ray: &Ray3, rectangle: &Rectangle3) -> RayRectangleDistance {
    let line = ray.to_line();
    let lr = line3_rectangle3(&line, rectangle);
    let lr = if lr.line_parameter >= 0.0 {
        lr
    } else {
        point_to_rectangle_as_line_result(ray.origin, rectangle)
    };
    RayRectangleDistance {
        distance: lr.distance,
        sqr_distance: lr.sqr_distance,
        ray_parameter: lr.line_parameter,
        rectangle_parameters: lr.rectangle_parameters,
        closest_ray: lr.closest_line,
        closest_rectangle: lr.closest_rectangle,
    }
}
