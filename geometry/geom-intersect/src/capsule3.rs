//! Intersection of 3D lines with capsules.

use geom_distance::DistanceTo;
use geom_types::{orthonormal_basis, Capsule3, Line3, Point3};

/// Intersection of a line with a capsule.
///
/// Parameters are sorted ascending and `points[i]` corresponds to
/// `parameters[i]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCapsuleIntersection {
    /// Number of intersection points: 0, 1 (tangent), or 2.
    pub count: usize,
    /// Sorted line parameters of the intersection points; only the
    /// first `count` entries are meaningful.
    pub parameters: [f64; 2],
    /// The intersection points; only the first `count` entries are
    /// meaningful.
    pub points: [Point3<f64>; 2],
}

impl LineCapsuleIntersection {
    fn from_parameters(line: &Line3, count: usize, mut parameters: [f64; 2]) -> Self {
        if count == 2 && parameters[0] > parameters[1] {
            parameters.swap(0, 1);
        }
        if count == 1 {
            parameters[1] = parameters[0];
        }
        Self {
            count,
            parameters,
            points: [line.point_at(parameters[0]), line.point_at(parameters[1])],
        }
    }

    fn empty() -> Self {
        Self {
            count: 0,
            parameters: [0.0; 2],
            points: [Point3::origin(); 2],
        }
    }
}

/// Whether a line intersects a capsule.
///
/// A capsule is the set of points within its radius of the medial
/// segment, so the test is a line-segment distance comparison.
#[must_use]
pub fn test_line3_capsule3(line: &Line3, capsule: &Capsule3) -> bool {
    line.distance_to(&capsule.segment).distance <= capsule.radius
}

/// Computes the intersection of a line with a capsule's boundary
/// surface.
///
/// The line is transformed to capsule coordinates: the medial segment
/// direction becomes the z axis with the segment spanning
/// `[-extent, extent]`. Candidate roots come from the infinite
/// cylinder wall `x^2 + y^2 = r^2`, then from each hemispherical cap,
/// with each root kept only on its own piece of the boundary.
#[must_use]
#[allow(clippy::too_many_lines, clippy::similar_names)]
pub fn find_line3_capsule3(line: &Line3, capsule: &Capsule3) -> LineCapsuleIntersection {
    let (center, axis, extent) = capsule.segment.centered_form();
    let (u, v) = orthonormal_basis(&axis);
    let r_sqr = capsule.radius * capsule.radius;

    let diff = line.origin - center;
    let p = Point3::new(u.dot(&diff), v.dot(&diff), axis.dot(&diff));
    let dx = u.dot(&line.direction);
    let dy = v.dot(&line.direction);
    let dz = axis.dot(&line.direction);

    // Line parallel to the capsule axis. The caps contribute the
    // entry and exit at a z offset determined by the radial distance.
    if dz.abs() == 1.0 {
        let radial_sqr = r_sqr - p.x * p.x - p.y * p.y;
        if radial_sqr < 0.0 {
            return LineCapsuleIntersection::empty();
        }
        let z_offset = radial_sqr.sqrt() + extent;
        let parameters = if dz > 0.0 {
            [-p.z - z_offset, -p.z + z_offset]
        } else {
            [p.z - z_offset, p.z + z_offset]
        };
        return LineCapsuleIntersection::from_parameters(line, 2, parameters);
    }

    // Quadratic of the line against the infinite cylinder.
    let a2 = dx.mul_add(dx, dy * dy);
    let a1 = p.x.mul_add(dx, p.y * dy);
    let a0 = p.x.mul_add(p.x, p.y * p.y) - r_sqr;
    let discr = a1.mul_add(a1, -(a0 * a2));
    if discr < 0.0 {
        return LineCapsuleIntersection::empty();
    }

    let mut parameters = [0.0; 2];
    let mut quantity = 0;
    if discr > 0.0 {
        let root = discr.sqrt();
        let inv = 1.0 / a2;
        for t in [(-a1 - root) * inv, (-a1 + root) * inv] {
            let z = t.mul_add(dz, p.z);
            if z.abs() <= extent {
                parameters[quantity] = t;
                quantity += 1;
            }
        }
        if quantity == 2 {
            return LineCapsuleIntersection::from_parameters(line, 2, parameters);
        }
    } else {
        // Tangent to the infinite cylinder; every line point sits at
        // radial distance >= r, so the caps cannot add anything.
        let t = -a1 / a2;
        let z = t.mul_add(dz, p.z);
        if z.abs() <= extent {
            return LineCapsuleIntersection::from_parameters(line, 1, [t, t]);
        }
        return LineCapsuleIntersection::empty();
    }

    // Bottom cap: sphere of radius r at z = -extent, keeping roots
    // with z <= -extent. The line direction is unit, so the sphere
    // quadratic's leading coefficient is 1.
    let pz_pe = p.z + extent;
    let a1_bot = pz_pe.mul_add(dz, a1);
    let a0_bot = pz_pe.mul_add(pz_pe, p.x.mul_add(p.x, p.y * p.y)) - r_sqr;
    let discr_bot = a1_bot.mul_add(a1_bot, -a0_bot);
    if discr_bot > 0.0 {
        let root = discr_bot.sqrt();
        for t in [-a1_bot - root, -a1_bot + root] {
            if quantity == 2 {
                break;
            }
            let z = t.mul_add(dz, p.z);
            if z <= -extent {
                parameters[quantity] = t;
                quantity += 1;
            }
        }
    } else if discr_bot == 0.0 {
        let t = -a1_bot;
        let z = t.mul_add(dz, p.z);
        if z <= -extent && quantity < 2 {
            parameters[quantity] = t;
            quantity += 1;
        }
    }
    if quantity == 2 {
        return LineCapsuleIntersection::from_parameters(line, 2, parameters);
    }

    // Top cap: sphere of radius r at z = +extent, keeping roots with
    // z >= extent.
    let pz_me = p.z - extent;
    let a1_top = pz_me.mul_add(dz, a1);
    let a0_top = pz_me.mul_add(pz_me, p.x.mul_add(p.x, p.y * p.y)) - r_sqr;
    let discr_top = a1_top.mul_add(a1_top, -a0_top);
    if discr_top > 0.0 {
        let root = discr_top.sqrt();
        for t in [-a1_top - root, -a1_top + root] {
            if quantity == 2 {
                break;
            }
            let z = t.mul_add(dz, p.z);
            if z >= extent {
                parameters[quantity] = t;
                quantity += 1;
            }
        }
    } else if discr_top == 0.0 {
        let t = -a1_top;
        let z = t.mul_add(dz, p.z);
        if z >= extent && quantity < 2 {
            parameters[quantity] = t;
            quantity += 1;
        }
    }

    match quantity {
        0 => LineCapsuleIntersection::empty(),
        n => LineCapsuleIntersection::from_parameters(line, n, parameters),
    }
}
