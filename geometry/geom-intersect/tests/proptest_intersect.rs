//! Property tests for the linear-shape intersection queries.

use geom_intersect::{
    find_line2_circle2, find_line3_aligned_box3, find_line3_oriented_box3,
    find_ray3_aligned_box3, test_line3_aligned_box3,
};
use geom_types::{AlignedBox3, Circle2, Line2, Line3, OrientedBox3, Ray3};
use nalgebra::{Point2, Point3, Vector2, Vector3};
use proptest::prelude::*;

fn arb_point3() -> impl Strategy<Value = Point3<f64>> {
    (-10.0..10.0f64, -10.0..10.0f64, -10.0..10.0f64)
        .prop_map(|(x, y, z)| Point3::new(x, y, z))
}

fn arb_unit_vector3() -> impl Strategy<Value = Vector3<f64>> {
    (-1.0..1.0f64, -1.0..1.0f64, -1.0..1.0f64).prop_filter_map(
        "direction too short to normalize",
        |(x, y, z)| {
            let v = Vector3::new(x, y, z);
            (v.norm() > 1e-3).then(|| v.normalize())
        },
    )
}

fn arb_unit_vector2() -> impl Strategy<Value = Vector2<f64>> {
    (-1.0..1.0f64, -1.0..1.0f64).prop_filter_map("direction too short to normalize", |(x, y)| {
        let v = Vector2::new(x, y);
        (v.norm() > 1e-3).then(|| v.normalize())
    })
}

fn arb_box3() -> impl Strategy<Value = AlignedBox3> {
    (arb_point3(), 0.1..4.0f64, 0.1..4.0f64, 0.1..4.0f64).prop_map(|(c, e0, e1, e2)| {
        AlignedBox3::from_centered_form(c, Vector3::new(e0, e1, e2))
    })
}

proptest! {
    #[test]
    fn prop_line_box_test_agrees_with_find(
        origin in arb_point3(),
        direction in arb_unit_vector3(),
        b in arb_box3(),
    ) {
        let line = Line3::new(origin, direction);
        let found = find_line3_aligned_box3(&line, &b);
        prop_assert_eq!(test_line3_aligned_box3(&line, &b), found.count > 0);
    }

    #[test]
    fn prop_line_box_points_lie_on_boundary(
        origin in arb_point3(),
        direction in arb_unit_vector3(),
        b in arb_box3(),
    ) {
        let line = Line3::new(origin, direction);
        let found = find_line3_aligned_box3(&line, &b);
        let (center, extent) = b.centered_form();
        for i in 0..found.count {
            let local = found.points[i] - center;
            let mut on_face = false;
            for k in 0..3 {
                prop_assert!(local[k].abs() <= extent[k] + 1e-8);
                if (local[k].abs() - extent[k]).abs() <= 1e-8 {
                    on_face = true;
                }
            }
            prop_assert!(on_face);
        }
    }

    #[test]
    fn prop_ray_box_is_line_box_restricted(
        origin in arb_point3(),
        direction in arb_unit_vector3(),
        b in arb_box3(),
    ) {
        let ray = Ray3::new(origin, direction);
        let from_line = find_line3_aligned_box3(&ray.to_line(), &b);
        let from_ray = find_ray3_aligned_box3(&ray, &b);

        for i in 0..from_ray.count {
            prop_assert!(from_ray.parameters[i] >= 0.0);
        }
        if from_line.count == 2 && from_line.parameters[0] >= 0.0 {
            prop_assert_eq!(from_ray.count, 2);
            prop_assert!((from_ray.parameters[0] - from_line.parameters[0]).abs() < 1e-9);
            prop_assert!((from_ray.parameters[1] - from_line.parameters[1]).abs() < 1e-9);
        }
        if from_line.count == 0 {
            prop_assert_eq!(from_ray.count, 0);
        }
        // The ray can never gain parameter range over its line.
        if from_ray.count == 2 {
            prop_assert!(from_ray.parameters[0] >= from_line.parameters[0] - 1e-9);
            prop_assert!(from_ray.parameters[1] <= from_line.parameters[1] + 1e-9);
        }
    }

    #[test]
    fn prop_oriented_identity_frame_matches_aligned(
        origin in arb_point3(),
        direction in arb_unit_vector3(),
        b in arb_box3(),
    ) {
        let line = Line3::new(origin, direction);
        let (center, extent) = b.centered_form();
        let oriented = OrientedBox3::new(
            center,
            [Vector3::x(), Vector3::y(), Vector3::z()],
            [extent.x, extent.y, extent.z],
        );
        let ra = find_line3_aligned_box3(&line, &b);
        let ro = find_line3_oriented_box3(&line, &oriented);
        prop_assert_eq!(ra.count, ro.count);
        for i in 0..ra.count {
            prop_assert!((ra.parameters[i] - ro.parameters[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_line_circle_points_lie_on_circle(
        ox in -10.0..10.0f64,
        oy in -10.0..10.0f64,
        direction in arb_unit_vector2(),
        cx in -10.0..10.0f64,
        cy in -10.0..10.0f64,
        radius in 0.1..5.0f64,
    ) {
        let line = Line2::new(Point2::new(ox, oy), direction);
        let circle = Circle2::new(Point2::new(cx, cy), radius);
        let found = find_line2_circle2(&line, &circle);
        for i in 0..found.count {
            let d = (found.points[i] - circle.center).norm();
            prop_assert!((d - radius).abs() < 1e-7);
        }
        if found.count == 2 {
            prop_assert!(found.parameters[0] <= found.parameters[1]);
        }
    }
}
