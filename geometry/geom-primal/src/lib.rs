//! Sign predicates over a fixed 2D point set.
//!
//! [`PrimalQuery2`] answers orientation and incidence questions
//! (which side of a line, inside a triangle, inside a circumcircle)
//! over a borrowed vertex slice. These predicates are the robustness
//! foundation for combinatorial algorithms such as Delaunay
//! triangulation and convex hulls; those consumers live elsewhere.
//!
//! # Numeric policy
//!
//! The predicates evaluate their determinants in `f64` with a fixed
//! order of operations and no rearrangement, so results are
//! deterministic functions of the input coordinates. They are exact
//! whenever the inputs and intermediate products are exactly
//! representable (integer-valued coordinates of moderate magnitude).
//! For arbitrary floating-point input, round-off can misclassify
//! points near a boundary; combinatorial consumers that cannot
//! tolerate misclassification must supply exactly-representable
//! coordinates or filter the inputs themselves. This is a documented
//! caller responsibility, not handled here.
//!
//! # Example
//!
//! ```
//! use geom_primal::PrimalQuery2;
//! use nalgebra::Point2;
//!
//! let vertices = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(0.0, 4.0),
//!     Point2::new(1.0, 1.0),
//! ];
//! let query = PrimalQuery2::new(&vertices);
//! // Vertex 3 is strictly inside triangle (0, 1, 2).
//! assert_eq!(query.to_triangle(3, 0, 1, 2), -1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use nalgebra::Point2;

/// Positional classification of a test point against the directed
/// segment from vertex `v0` to vertex `v1`, produced by
/// [`PrimalQuery2::to_line_with_order`].
///
/// The caller guarantees `v0 != v1`; see [`OrderType`] for the
/// variant that also classifies a degenerate segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOrder {
    /// Strictly right of the directed line.
    RightOfLine,
    /// Strictly left of the directed line.
    LeftOfLine,
    /// Coincides with the segment start.
    EqualsVertex0,
    /// Coincides with the segment end.
    EqualsVertex1,
    /// Collinear, before the segment start.
    CollinearBefore,
    /// Collinear, strictly between the endpoints.
    CollinearBetween,
    /// Collinear, past the segment end.
    CollinearAfter,
}

/// Full ordering of a test point `P` against a segment `Q0 Q1`,
/// produced by [`PrimalQuery2::to_line_extended`]. Unlike
/// [`LineOrder`], the degenerate `Q0 == Q1` configuration is a
/// reportable outcome rather than a caller-contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderType {
    /// The segment endpoints coincide; no line is defined.
    DegenerateSegment,
    /// `P` coincides with `Q0`.
    EqualsVertex0,
    /// `P` coincides with `Q1`.
    EqualsVertex1,
    /// `<P, Q0, Q1>` is a counterclockwise triangle (`P` left of the
    /// directed line).
    Positive,
    /// `<P, Q1, Q0>` is a counterclockwise triangle (`P` right of the
    /// directed line).
    Negative,
    /// Collinear in the order `<P, Q0, Q1>`.
    CollinearBefore,
    /// Collinear in the order `<Q0, P, Q1>`, strictly between.
    CollinearBetween,
    /// Collinear in the order `<Q0, Q1, P>`.
    CollinearAfter,
}

/// Sign predicates over a borrowed slice of 2D points.
///
/// The query holds a reference, not a copy: the slice must outlive
/// the query, and mutating the underlying storage through another
/// path invalidates any cached conclusions the caller has drawn.
/// Construction is free; predicates address points by index into the
/// slice, or take an explicit test point.
#[derive(Debug, Clone, Copy)]
pub struct PrimalQuery2<'a> {
    vertices: &'a [Point2<f64>],
}

impl<'a> PrimalQuery2<'a> {
    /// Creates a query over `vertices`.
    #[must_use]
    pub const fn new(vertices: &'a [Point2<f64>]) -> Self {
        Self { vertices }
    }

    /// The borrowed vertex slice.
    #[must_use]
    pub const fn vertices(&self) -> &'a [Point2<f64>] {
        self.vertices
    }

    /// Which side of the directed line through vertices `v0` and `v1`
    /// the vertex `i` lies on: `+1` right, `-1` left, `0` on the
    /// line.
    #[must_use]
    pub fn to_line(&self, i: usize, v0: usize, v1: usize) -> i32 {
        self.to_line_point(&self.vertices[i], v0, v1)
    }

    /// [`to_line`](Self::to_line) with an explicit test point.
    ///
    /// The sign is that of the determinant of `test - V0` and
    /// `V1 - V0`, evaluated with a fixed operation order.
    #[must_use]
    pub fn to_line_point(&self, test: &Point2<f64>, v0: usize, v1: usize) -> i32 {
        let vec0 = &self.vertices[v0];
        let vec1 = &self.vertices[v1];

        let x0 = test.x - vec0.x;
        let y0 = test.y - vec0.y;
        let x1 = vec1.x - vec0.x;
        let y1 = vec1.y - vec0.y;
        let x0y1 = x0 * y1;
        let x1y0 = x1 * y0;
        let det = x0y1 - x1y0;

        if det > 0.0 {
            1
        } else if det < 0.0 {
            -1
        } else {
            0
        }
    }

    /// Like [`to_line`](Self::to_line), additionally classifying
    /// where the point sits relative to the segment when it is on the
    /// carrier line. The caller guarantees `v0 != v1`.
    #[must_use]
    pub fn to_line_with_order(&self, i: usize, v0: usize, v1: usize) -> (i32, LineOrder) {
        self.to_line_with_order_point(&self.vertices[i], v0, v1)
    }

    /// [`to_line_with_order`](Self::to_line_with_order) with an
    /// explicit test point.
    #[must_use]
    pub fn to_line_with_order_point(
        &self,
        test: &Point2<f64>,
        v0: usize,
        v1: usize,
    ) -> (i32, LineOrder) {
        let vec0 = &self.vertices[v0];
        let vec1 = &self.vertices[v1];

        let x0 = test.x - vec0.x;
        let y0 = test.y - vec0.y;
        let x1 = vec1.x - vec0.x;
        let y1 = vec1.y - vec0.y;
        let x0y1 = x0 * y1;
        let x1y0 = x1 * y0;
        let det = x0y1 - x1y0;

        if det > 0.0 {
            return (1, LineOrder::RightOfLine);
        }
        if det < 0.0 {
            return (-1, LineOrder::LeftOfLine);
        }

        // Collinear; place the point along the segment by projection.
        let x0x1 = x0 * x1;
        let y0y1 = y0 * y1;
        let dot = x0x1 + y0y1;
        let order = if dot == 0.0 {
            LineOrder::EqualsVertex0
        } else if dot < 0.0 {
            LineOrder::CollinearBefore
        } else {
            let x0x0 = x0 * x0;
            let y0y0 = y0 * y0;
            let sqr_length = x0x0 + y0y0;
            if dot == sqr_length {
                LineOrder::EqualsVertex1
            } else if dot > sqr_length {
                LineOrder::CollinearBetween
            } else {
                LineOrder::CollinearAfter
            }
        };
        (0, order)
    }

    /// Full ordering of point `p` against the segment `q0 q1`,
    /// including the degenerate configurations as reportable
    /// outcomes. Operates on explicit points rather than indices; the
    /// segment endpoints need not belong to the vertex slice.
    #[must_use]
    pub fn to_line_extended(
        &self,
        p: &Point2<f64>,
        q0: &Point2<f64>,
        q1: &Point2<f64>,
    ) -> OrderType {
        let x0 = q1.x - q0.x;
        let y0 = q1.y - q0.y;
        if x0 == 0.0 && y0 == 0.0 {
            return OrderType::DegenerateSegment;
        }

        let x1 = p.x - q0.x;
        let y1 = p.y - q0.y;
        if x1 == 0.0 && y1 == 0.0 {
            return OrderType::EqualsVertex0;
        }

        let x2 = p.x - q1.x;
        let y2 = p.y - q1.y;
        if x2 == 0.0 && y2 == 0.0 {
            return OrderType::EqualsVertex1;
        }

        let x0y1 = x0 * y1;
        let x1y0 = x1 * y0;
        let det = x0y1 - x1y0;
        if det > 0.0 {
            return OrderType::Positive;
        }
        if det < 0.0 {
            return OrderType::Negative;
        }

        let x0x1 = x0 * x1;
        let y0y1 = y0 * y1;
        let dot = x0x1 + y0y1;
        if dot < 0.0 {
            return OrderType::CollinearBefore;
        }

        let x0x0 = x0 * x0;
        let y0y0 = y0 * y0;
        let sqr_length = x0x0 + y0y0;
        if dot > sqr_length {
            return OrderType::CollinearAfter;
        }

        OrderType::CollinearBetween
    }

    /// Where vertex `i` lies relative to the counterclockwise
    /// triangle `(v0, v1, v2)`: `+1` strictly outside, `-1` strictly
    /// inside, `0` on the boundary.
    #[must_use]
    pub fn to_triangle(&self, i: usize, v0: usize, v1: usize, v2: usize) -> i32 {
        self.to_triangle_point(&self.vertices[i], v0, v1, v2)
    }

    /// [`to_triangle`](Self::to_triangle) with an explicit test
    /// point.
    ///
    /// Short-circuits on the first edge whose sign already proves the
    /// point outside.
    #[must_use]
    pub fn to_triangle_point(&self, test: &Point2<f64>, v0: usize, v1: usize, v2: usize) -> i32 {
        let sign0 = self.to_line_point(test, v1, v2);
        if sign0 > 0 {
            return 1;
        }

        let sign1 = self.to_line_point(test, v0, v2);
        if sign1 < 0 {
            return 1;
        }

        let sign2 = self.to_line_point(test, v0, v1);
        if sign2 > 0 {
            return 1;
        }

        if sign0 != 0 && sign1 != 0 && sign2 != 0 {
            -1
        } else {
            0
        }
    }

    /// Where vertex `i` lies relative to the circumcircle of the
    /// counterclockwise triangle `(v0, v1, v2)`: `+1` inside, `-1`
    /// outside, `0` on the circle.
    #[must_use]
    pub fn to_circumcircle(&self, i: usize, v0: usize, v1: usize, v2: usize) -> i32 {
        self.to_circumcircle_point(&self.vertices[i], v0, v1, v2)
    }

    /// [`to_circumcircle`](Self::to_circumcircle) with an explicit
    /// test point.
    ///
    /// Lifted-paraboloid in-circle determinant: each vertex is lifted
    /// to `z = x^2 + y^2` relative to the test point, and the sign of
    /// the resulting 3x3 determinant encodes the relation directly,
    /// with no explicit circumcenter.
    #[must_use]
    #[allow(clippy::similar_names)]
    pub fn to_circumcircle_point(
        &self,
        test: &Point2<f64>,
        v0: usize,
        v1: usize,
        v2: usize,
    ) -> i32 {
        let vec0 = &self.vertices[v0];
        let vec1 = &self.vertices[v1];
        let vec2 = &self.vertices[v2];

        let x0 = vec0.x - test.x;
        let y0 = vec0.y - test.y;
        let s00 = vec0.x + test.x;
        let s01 = vec0.y + test.y;
        let t00 = s00 * x0;
        let t01 = s01 * y0;
        let z0 = t00 + t01;

        let x1 = vec1.x - test.x;
        let y1 = vec1.y - test.y;
        let s10 = vec1.x + test.x;
        let s11 = vec1.y + test.y;
        let t10 = s10 * x1;
        let t11 = s11 * y1;
        let z1 = t10 + t11;

        let x2 = vec2.x - test.x;
        let y2 = vec2.y - test.y;
        let s20 = vec2.x + test.x;
        let s21 = vec2.y + test.y;
        let t20 = s20 * x2;
        let t21 = s21 * y2;
        let z2 = t20 + t21;

        let y0z1 = y0 * z1;
        let y0z2 = y0 * z2;
        let y1z0 = y1 * z0;
        let y1z2 = y1 * z2;
        let y2z0 = y2 * z0;
        let y2z1 = y2 * z1;
        let c0 = y1z2 - y2z1;
        let c1 = y2z0 - y0z2;
        let c2 = y0z1 - y1z0;
        let x0c0 = x0 * c0;
        let x1c1 = x1 * c1;
        let x2c2 = x2 * c2;
        let term = x0c0 + x1c1;
        let det = term + x2c2;

        if det > 0.0 {
            1
        } else if det < 0.0 {
            -1
        } else {
            0
        }
    }
}
