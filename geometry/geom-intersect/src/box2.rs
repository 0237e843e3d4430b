//! Intersection of 2D lines with aligned and oriented boxes.

use geom_types::{AlignedBox2, Line2, OrientedBox2, Point2};

use crate::line2::dot_perp;

/// Intersection of a line with a 2D box.
///
/// Parameters are sorted ascending and `points[i]` corresponds to
/// `parameters[i]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearBox2Intersection {
    /// Number of intersection points: 0, 1 (corner graze), or 2.
    pub count: usize,
    /// Sorted line parameters of the intersection points; only the
    /// first `count` entries are meaningful.
    pub parameters: [f64; 2],
    /// The intersection points; only the first `count` entries are
    /// meaningful.
    pub points: [Point2<f64>; 2],
}

impl LinearBox2Intersection {
    fn empty() -> Self {
        Self {
            count: 0,
            parameters: [0.0; 2],
            points: [Point2::origin(); 2],
        }
    }
}

/// One Liang-Barsky clip step: restricts `[t0, t1]` by the halfplane
/// `denom * t <= numer`. Returns `false` when the interval empties.
pub(crate) fn clip(denom: f64, numer: f64, t0: &mut f64, t1: &mut f64) -> bool {
    if denom > 0.0 {
        if numer < denom * *t0 {
            return false;
        }
        if numer < denom * *t1 {
            *t1 = numer / denom;
        }
        true
    } else if denom < 0.0 {
        if numer < denom * *t1 {
            return false;
        }
        if numer < denom * *t0 {
            *t0 = numer / denom;
        }
        true
    } else {
        numer >= 0.0
    }
}

/// Clips the line `C + t D` (box-centered coordinates) against the
/// slabs `|x| <= e0`, `|y| <= e1`, restricting the incoming
/// `[t0, t1]` interval in place. Returns the number of boundary
/// parameters left: 0 (miss), 1 (graze), or 2.
fn do_clip2(
    origin: &Point2<f64>,
    direction: &geom_types::Vector2<f64>,
    extent: &geom_types::Vector2<f64>,
    t0: &mut f64,
    t1: &mut f64,
) -> usize {
    let inside = clip(direction.x, extent.x - origin.x, t0, t1)
        && clip(-direction.x, extent.x + origin.x, t0, t1)
        && clip(direction.y, extent.y - origin.y, t0, t1)
        && clip(-direction.y, extent.y + origin.y, t0, t1);
    if !inside {
        0
    } else if *t1 > *t0 {
        2
    } else {
        1
    }
}

/// Whether a line intersects an axis-aligned box.
///
/// Separating-axis test on the single candidate axis perpendicular to
/// the line direction.
#[must_use]
pub fn test_line2_aligned_box2(line: &Line2, b: &AlignedBox2) -> bool {
    let (center, extent) = b.centered_form();
    let diff = center - line.origin;
    let lhs = dot_perp(&line.direction, &diff).abs();
    let rhs = extent
        .x
        .mul_add(line.direction.y.abs(), extent.y * line.direction.x.abs());
    lhs <= rhs
}

/// Computes the intersection of a line with an axis-aligned box by
/// clipping the line against the box's slabs.
#[must_use]
pub fn find_line2_aligned_box2(line: &Line2, b: &AlignedBox2) -> LinearBox2Intersection {
    let (center, extent) = b.centered_form();
    let origin = Point2::from(line.origin - center);
    let mut t0 = f64::NEG_INFINITY;
    let mut t1 = f64::INFINITY;
    let count = do_clip2(&origin, &line.direction, &extent, &mut t0, &mut t1);
    match count {
        1 => LinearBox2Intersection {
            count: 1,
            parameters: [t0, t0],
            points: [line.point_at(t0); 2],
        },
        2 => LinearBox2Intersection {
            count: 2,
            parameters: [t0, t1],
            points: [line.point_at(t0), line.point_at(t1)],
        },
        _ => LinearBox2Intersection::empty(),
    }
}

/// Whether a line intersects an oriented box.
///
/// The line is transformed to the box's local frame and tested
/// against the equivalent axis-aligned box.
#[must_use]
pub fn test_line2_oriented_box2(line: &Line2, b: &OrientedBox2) -> bool {
    let local = Line2::new(b.to_local(line.origin), b.to_local_vector(line.direction));
    test_line2_aligned_box2(&local, &b.local_aligned())
}

/// Computes the intersection of a line with an oriented box.
///
/// Delegates to the aligned query in the box's local frame;
/// parameters are frame-invariant, so only the points are mapped
/// back to world space.
#[must_use]
pub fn find_line2_oriented_box2(line: &Line2, b: &OrientedBox2) -> LinearBox2Intersection {
    let local = Line2::new(b.to_local(line.origin), b.to_local_vector(line.direction));
    let mut result = find_line2_aligned_box2(&local, &b.local_aligned());
    for i in 0..result.count {
        result.points[i] = line.point_at(result.parameters[i]);
    }
    result
}
