//! 1D parameter intervals.
//!
//! Ray and segment intersection queries derive their results from the
//! corresponding line query by intersecting the unconstrained line
//! parameter interval with the shape's own valid interval, so the
//! interval shows up throughout `geom-intersect`.

/// A closed interval `[min, max]`.
///
/// Semi-infinite intervals are expressed with `f64::INFINITY` /
/// `f64::NEG_INFINITY` endpoints (a ray's parameter interval is
/// `[0, +inf)`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower endpoint.
    pub min: f64,
    /// Upper endpoint.
    pub max: f64,
}

impl Interval {
    /// Creates an interval. `min <= max` by caller contract.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The interval `[0, +inf)` of valid ray parameters.
    #[must_use]
    pub const fn nonnegative() -> Self {
        Self::new(0.0, f64::INFINITY)
    }

    /// Whether the interval is a single point.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Whether `t` lies in the interval.
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        self.min <= t && t <= self.max
    }
}
