//! Cross-primitive tests for the geom layer.

use proptest::prelude::*;

use super::*;

#[test]
fn panned_segment_shifts_its_crossing() {
    let s = Segment::new(Coord::new(0, 0), Coord::new(100, 0));
    let cutter = (Coord::new(50, -50), Coord::new(50, 50));
    assert_eq!(
        cross_coord(s.a, s.b, cutter.0, cutter.1),
        Some(Coord::new(50, 0))
    );
    let shifted = s.pan(10, true);
    assert_eq!(
        cross_coord(shifted.a, shifted.b, cutter.0, cutter.1),
        Some(Coord::new(50, 10))
    );
}

#[test]
fn boundary_points_are_found_by_the_sweep() {
    let c = Circle::new(Coord::new(0, 0), 1000);
    for target in [
        Coord::new(4000, 0),
        Coord::new(3000, 3000),
        Coord::new(-2000, 500),
        Coord::new(-1000, -4000),
    ] {
        let on_circle = c.boundary_toward(target);
        let hit = c
            .segment_cross(&Segment::new(c.center, target))
            .expect("segment from the center must cross the boundary");
        assert!(
            dist(on_circle, hit) <= 2.0,
            "{on_circle:?} vs {hit:?} for {target:?}"
        );
    }
}

#[test]
fn step_then_ratio_agree_on_direction() {
    let a = Coord::new(0, 0);
    let b = Coord::new(3000, 4000);
    let stepped = step_coord(a, b);
    let fifth = coord_at_ratio(a, b, 0.2);
    assert_eq!(stepped, Coord::new(600, 800));
    assert_eq!(fifth, Coord::new(600, 800));
}

proptest! {
    #[test]
    fn turn_sign_flips_under_reversal(
        x1 in -10_000i32..10_000, z1 in -10_000i32..10_000,
        x2 in -10_000i32..10_000, z2 in -10_000i32..10_000,
        x3 in -10_000i32..10_000, z3 in -10_000i32..10_000,
    ) {
        let p1 = Coord::new(x1, z1);
        let p2 = Coord::new(x2, z2);
        let p3 = Coord::new(x3, z3);
        prop_assert_eq!(turn_sign(p1, p2, p3), -turn_sign(p3, p2, p1));
        prop_assert_eq!(orient(p1, p2, p3), -orient(p2, p1, p3));
    }

    #[test]
    fn collinear_points_have_zero_turn(
        x in -5_000i32..5_000, z in -5_000i32..5_000,
        dx in -50i32..50, dz in -50i32..50,
        k in 2i32..40,
    ) {
        let a = Coord::new(x, z);
        let b = Coord::new(x + dx, z + dz);
        let c = Coord::new(x + k * dx, z + k * dz);
        prop_assert_eq!(turn_sign(a, b, c), 0);
        prop_assert_eq!(orient(a, b, c), 0);
    }

    #[test]
    fn closest_point_fixes_segment_points(
        ax in -5_000i32..5_000, az in -5_000i32..5_000,
        dx in -50i32..50, dz in -50i32..50,
        m in 1i32..40, step in 0i32..40,
    ) {
        let k = step % (m + 1);
        let a = Coord::new(ax, az);
        let b = Coord::new(ax + m * dx, az + m * dz);
        let p = Coord::new(ax + k * dx, az + k * dz);
        let s = Segment::new(a, b);
        prop_assert_eq!(s.closest_point(p), p);
        prop_assert!(s.dist_to_coord(p) < 1e-2);
    }

    #[test]
    fn proper_crossings_stay_inside_both_boxes(
        px0 in -2_000i32..2_000, pz0 in -2_000i32..2_000,
        px1 in -2_000i32..2_000, pz1 in -2_000i32..2_000,
        qx0 in -2_000i32..2_000, qz0 in -2_000i32..2_000,
        qx1 in -2_000i32..2_000, qz1 in -2_000i32..2_000,
    ) {
        let p0 = Coord::new(px0, pz0);
        let p1 = Coord::new(px1, pz1);
        let q0 = Coord::new(qx0, qz0);
        let q1 = Coord::new(qx1, qz1);
        // Touching configurations pass the straddle test through its
        // zero-orientation early-out and may land outside a segment, so the
        // box property is only claimed for proper crossings.
        let proper = orient(q1, p0, q0) != 0
            && orient(q1, p1, q0) != 0
            && orient(p1, q0, p0) != 0
            && orient(p1, q1, p0) != 0;
        if proper {
            if let Some(hit) = cross_coord(p0, p1, q0, q1) {
                prop_assert!(p0.x.min(p1.x) <= hit.x && hit.x <= p0.x.max(p1.x));
                prop_assert!(p0.z.min(p1.z) <= hit.z && hit.z <= p0.z.max(p1.z));
                prop_assert!(q0.x.min(q1.x) - 1 <= hit.x && hit.x <= q0.x.max(q1.x) + 1);
                prop_assert!(q0.z.min(q1.z) - 1 <= hit.z && hit.z <= q0.z.max(q1.z) + 1);
            }
        }
    }
}
