//! Overlap of closed intervals on the real line.
//!
//! Linear-shape queries funnel through this module: the line variant
//! of a query produces a parameter interval, and the ray and segment
//! variants restrict it against `[0, +inf)` or `[0, 1]` here.

use geom_types::Interval;

/// Result of intersecting two closed intervals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalOverlap {
    /// Number of overlap endpoints: 0 (disjoint), 1 (touching at a
    /// point), or 2 (a proper interval).
    pub count: usize,
    /// The overlap interval when `count` is 2, the shared point in
    /// both slots when `count` is 1, unspecified when 0.
    pub overlap: Interval,
}

/// Intersects two closed intervals.
///
/// Touching endpoints count as an intersection with `count == 1`.
#[must_use]
pub fn find_interval_interval(i0: &Interval, i1: &Interval) -> IntervalOverlap {
    let lo = i0.min.max(i1.min);
    let hi = i0.max.min(i1.max);
    if lo < hi {
        IntervalOverlap {
            count: 2,
            overlap: Interval::new(lo, hi),
        }
    } else if lo == hi {
        IntervalOverlap {
            count: 1,
            overlap: Interval::new(lo, lo),
        }
    } else {
        IntervalOverlap {
            count: 0,
            overlap: Interval::new(0.0, 0.0),
        }
    }
}
