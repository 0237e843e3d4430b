//! Orthonormal basis construction.

use nalgebra::Vector3;

/// Builds a right-handed orthonormal basis `(u, v)` completing the
/// unit vector `w`, so that `{u, v, w}` satisfies `u x v = w`.
///
/// `w` must be unit length (caller contract). The construction picks
/// the component pair of `w` with the largest magnitude to avoid
/// cancellation, so the result is stable for any unit `w`.
///
/// Capsule queries use this to set up the capsule-local cylinder
/// frame.
///
/// # Example
///
/// ```
/// use geom_types::orthonormal_basis;
/// use nalgebra::Vector3;
///
/// let w = Vector3::new(1.0, 2.0, 3.0).normalize();
/// let (u, v) = orthonormal_basis(&w);
/// assert!(u.dot(&w).abs() < 1e-12);
/// assert!(v.dot(&w).abs() < 1e-12);
/// assert!((u.cross(&v) - w).norm() < 1e-12);
/// ```
#[must_use]
pub fn orthonormal_basis(w: &Vector3<f64>) -> (Vector3<f64>, Vector3<f64>) {
    let u = if w.x.abs() > w.y.abs() {
        // w.x or w.z dominates; (x, z) cannot both be tiny.
        let inv_length = 1.0 / w.x.hypot(w.z);
        Vector3::new(-w.z * inv_length, 0.0, w.x * inv_length)
    } else {
        let inv_length = 1.0 / w.y.hypot(w.z);
        Vector3::new(0.0, w.z * inv_length, -w.y * inv_length)
    };
    let v = w.cross(&u);
    (u, v)
}
