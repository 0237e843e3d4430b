//! Property tests for the sign predicates.
//!
//! Coordinates are integer-valued so every determinant term is
//! exactly representable in `f64` and the predicates behave as exact
//! arithmetic; the properties below are identities of the exact
//! predicates and would not survive arbitrary floating-point noise.

use geom_primal::{LineOrder, PrimalQuery2};
use nalgebra::Point2;
use proptest::prelude::*;

fn arb_lattice_point() -> impl Strategy<Value = Point2<f64>> {
    (-1000i32..1000, -1000i32..1000).prop_map(|(x, y)| Point2::new(f64::from(x), f64::from(y)))
}

proptest! {
    #[test]
    fn prop_to_line_antisymmetric_in_endpoints(
        p in arb_lattice_point(),
        a in arb_lattice_point(),
        b in arb_lattice_point(),
    ) {
        prop_assume!(a != b);
        let vertices = [p, a, b];
        let q = PrimalQuery2::new(&vertices);
        prop_assert_eq!(q.to_line(0, 1, 2), -q.to_line(0, 2, 1));
    }

    #[test]
    fn prop_to_line_zero_iff_collinear(
        a in arb_lattice_point(),
        b in arb_lattice_point(),
        s in -5i32..5,
    ) {
        prop_assume!(a != b);
        // A lattice multiple of the segment direction stays collinear.
        let p = Point2::new(
            a.x + f64::from(s) * (b.x - a.x),
            a.y + f64::from(s) * (b.y - a.y),
        );
        let vertices = [p, a, b];
        let q = PrimalQuery2::new(&vertices);
        prop_assert_eq!(q.to_line(0, 1, 2), 0);
    }

    #[test]
    fn prop_to_line_with_order_consistent_with_sign(
        p in arb_lattice_point(),
        a in arb_lattice_point(),
        b in arb_lattice_point(),
    ) {
        prop_assume!(a != b);
        let vertices = [p, a, b];
        let q = PrimalQuery2::new(&vertices);
        let (sign, order) = q.to_line_with_order(0, 1, 2);
        prop_assert_eq!(sign, q.to_line(0, 1, 2));
        match order {
            LineOrder::RightOfLine => prop_assert_eq!(sign, 1),
            LineOrder::LeftOfLine => prop_assert_eq!(sign, -1),
            _ => prop_assert_eq!(sign, 0),
        }
    }

    #[test]
    fn prop_to_triangle_vertices_on_boundary(
        a in arb_lattice_point(),
        b in arb_lattice_point(),
        c in arb_lattice_point(),
    ) {
        let vertices = [a, b, c];
        let q = PrimalQuery2::new(&vertices);
        // Orient counterclockwise; skip degenerate triangles.
        prop_assume!(q.to_line(2, 0, 1) != 0);
        let (v0, v1, v2) = if q.to_line(2, 0, 1) < 0 {
            (0, 1, 2)
        } else {
            (0, 2, 1)
        };
        for i in 0..3 {
            prop_assert_eq!(q.to_triangle(i, v0, v1, v2), 0);
        }
    }

    #[test]
    fn prop_to_circumcircle_defining_vertices_on_circle(
        a in arb_lattice_point(),
        b in arb_lattice_point(),
        c in arb_lattice_point(),
    ) {
        let vertices = [a, b, c];
        let q = PrimalQuery2::new(&vertices);
        prop_assume!(q.to_line(2, 0, 1) != 0);
        for i in 0..3 {
            prop_assert_eq!(q.to_circumcircle(i, 0, 1, 2), 0);
        }
    }

    #[test]
    fn prop_to_triangle_inside_point_is_inside(
        a in arb_lattice_point(),
        b in arb_lattice_point(),
        c in arb_lattice_point(),
    ) {
        let vertices = [a, b, c];
        let q = PrimalQuery2::new(&vertices);
        prop_assume!(q.to_line(2, 0, 1) != 0);
        let (v0, v1, v2) = if q.to_line(2, 0, 1) < 0 {
            (0usize, 1usize, 2usize)
        } else {
            (0, 2, 1)
        };
        // The centroid of a nondegenerate triangle is strictly
        // inside. Scale by 3 to stay on the lattice.
        let scaled = [
            Point2::new(3.0 * a.x, 3.0 * a.y),
            Point2::new(3.0 * b.x, 3.0 * b.y),
            Point2::new(3.0 * c.x, 3.0 * c.y),
        ];
        let centroid = Point2::new(a.x + b.x + c.x, a.y + b.y + c.y);
        let qs = PrimalQuery2::new(&scaled);
        prop_assert_eq!(qs.to_triangle_point(&centroid, v0, v1, v2), -1);
    }
}
