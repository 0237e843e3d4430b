//! Intersection of spheres with frustums.

use geom_distance::DistanceTo;
use geom_types::{Frustum3, Sphere3};

/// Whether a sphere touches a frustum (boundary inclusive).
///
/// The sphere intersects exactly when its center lies within the
/// sphere's radius of the frustum, so this is a point-frustum
/// distance comparison.
#[must_use]
pub fn test_sphere3_frustum3(sphere: &Sphere3, frustum: &Frustum3) -> bool {
    sphere.center.distance_to(frustum).distance <= sphere.radius
}
