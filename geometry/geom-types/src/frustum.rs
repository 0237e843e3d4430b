//! View frustums.

use nalgebra::{Point3, Vector3};

/// A view frustum in 3D.
///
/// The frustum is the set of points
/// `origin + d * dvector + u * uvector + r * rvector` with
/// `dmin <= d <= dmax`, `|u| <= ubound * (d / dmin)` and
/// `|r| <= rbound * (d / dmin)`: a pyramid with apex behind the near
/// face, truncated at the near and far depths.
///
/// `dvector`, `uvector`, `rvector` form a right-handed orthonormal
/// frame (unit length by caller contract); `0 < dmin < dmax`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum3 {
    /// Frustum origin (eye point).
    pub origin: Point3<f64>,
    /// View direction.
    pub dvector: Vector3<f64>,
    /// Up direction.
    pub uvector: Vector3<f64>,
    /// Right direction.
    pub rvector: Vector3<f64>,
    /// Near-face depth along `dvector`.
    pub dmin: f64,
    /// Far-face depth along `dvector`.
    pub dmax: f64,
    /// Half-height of the near face.
    pub ubound: f64,
    /// Half-width of the near face.
    pub rbound: f64,
}

impl Frustum3 {
    /// Creates a frustum.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        origin: Point3<f64>,
        dvector: Vector3<f64>,
        uvector: Vector3<f64>,
        rvector: Vector3<f64>,
        dmin: f64,
        dmax: f64,
        ubound: f64,
        rbound: f64,
    ) -> Self {
        Self {
            origin,
            dvector,
            uvector,
            rvector,
            dmin,
            dmax,
            ubound,
            rbound,
        }
    }

    /// The depth ratio `dmax / dmin`, which scales the near-face
    /// bounds up to the far face.
    #[must_use]
    pub fn d_ratio(&self) -> f64 {
        self.dmax / self.dmin
    }

    /// The eight corner points: near face first, then far face, each
    /// in (-r,-u), (+r,-u), (+r,+u), (-r,+u) order.
    #[must_use]
    pub fn corners(&self) -> [Point3<f64>; 8] {
        let mut corners = [self.origin; 8];
        let mut k = 0;
        for (depth, scale) in [(self.dmin, 1.0), (self.dmax, self.d_ratio())] {
            let r = self.rbound * scale;
            let u = self.ubound * scale;
            let base = self.origin + self.dvector * depth;
            for (sr, su) in [(-r, -u), (r, -u), (r, u), (-r, u)] {
                corners[k] = base + self.rvector * sr + self.uvector * su;
                k += 1;
            }
        }
        corners
    }

    /// Whether `point` is inside the frustum (boundary inclusive).
    #[must_use]
    pub fn contains(&self, point: Point3<f64>) -> bool {
        let diff = point - self.origin;
        let d = diff.dot(&self.dvector);
        if d < self.dmin || d > self.dmax {
            return false;
        }
        let scale = d / self.dmin;
        diff.dot(&self.rvector).abs() <= self.rbound * scale
            && diff.dot(&self.uvector).abs() <= self.ubound * scale
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn symmetric_frustum() -> Frustum3 {
        Frustum3::new(
            Point3::origin(),
            Vector3::z(),
            Vector3::y(),
            Vector3::x(),
            1.0,
            4.0,
            1.0,
            1.0,
        )
    }

    #[test]
    fn test_contains_axis_points() {
        let f = symmetric_frustum();
        assert!(f.contains(Point3::new(0.0, 0.0, 1.0)));
        assert!(f.contains(Point3::new(0.0, 0.0, 4.0)));
        assert!(!f.contains(Point3::new(0.0, 0.0, 0.5)));
        assert!(!f.contains(Point3::new(0.0, 0.0, 4.5)));
    }

    #[test]
    fn test_far_face_wider_than_near_face() {
        let f = symmetric_frustum();
        // (2, 0, 2) lies on the slanted side plane; inside at depth 2.
        assert!(f.contains(Point3::new(2.0, 0.0, 2.0)));
        // Same lateral offset at the near face is outside.
        assert!(!f.contains(Point3::new(2.0, 0.0, 1.0)));
    }

    #[test]
    fn test_corners_are_on_boundary() {
        let f = symmetric_frustum();
        for c in f.corners() {
            assert!(f.contains(c));
        }
    }
}
