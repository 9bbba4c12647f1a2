// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::expect_used)]
//! Integration tests for box collision and penetration.

use maze_geom::math::{rotate_about, scale, translate, Mat4, Vec3};
use maze_geom::{Aabb, Axis};
use proptest::prelude::*;

fn boxed(x: f32, y: f32, z: f32, w: f32, h: f32, d: f32) -> Aabb {
    Aabb::from_origin_dimensions(Vec3::new(x, y, z), Vec3::new(w, h, d))
}

#[test]
fn negative_dimensions_normalise() {
    let b = boxed(2.0, 2.0, 2.0, -1.0, 3.0, -1.0);
    assert_eq!(b.min().to_array(), [1.0, 2.0, 1.0]);
    assert_eq!(b.max().to_array(), [2.0, 5.0, 2.0]);
}

#[test]
fn half_overlap_on_x_yields_half_unit_push() {
    let a = boxed(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);
    let b = boxed(0.5, 0.0, 0.0, 1.0, 1.0, 1.0);
    let p = a.intersection(&b).expect("boxes overlap");
    assert_eq!(p.axis(), Axis::X);
    assert_eq!(p.vector().to_array(), [0.5, 0.0, 0.0]);
}

#[test]
fn ties_prefer_the_first_axis() {
    let a = boxed(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);
    let b = boxed(0.5, 0.5, 0.5, 1.0, 1.0, 1.0);
    let p = a.intersection(&b).expect("boxes overlap");
    assert_eq!(p.axis(), Axis::X);
}

#[test]
fn floor_box_extends_downward() {
    let floor = boxed(0.0, 0.0, 0.0, 5.0, -1.0, 5.0);
    assert_eq!(floor.min().y(), -1.0);
    assert_eq!(floor.max().y(), 0.0);
    let feet = boxed(1.0, -0.25, 1.0, 0.5, 1.75, 0.5);
    let p = feet.intersection(&floor).expect("feet sink into the floor");
    assert_eq!(p.axis(), Axis::Y);
    let lifted = feet - p.vector();
    assert!((lifted.min().y() - 0.0).abs() < 1e-6);
}

#[test]
fn model_helpers_compose() {
    let m = scale(&translate(&Mat4::identity(), Vec3::new(1.0, 0.0, 0.0)), Vec3::new(2.0, 2.0, 2.0));
    let b = boxed(0.0, 0.0, 0.0, 1.0, 1.0, 1.0).transformed(&m);
    assert_eq!(b.min().to_array(), [1.0, 0.0, 0.0]);
    assert_eq!(b.max().to_array(), [3.0, 2.0, 2.0]);

    let r = rotate_about(
        &Mat4::identity(),
        std::f32::consts::FRAC_PI_2,
        Vec3::UNIT_Y,
        Vec3::new(0.5, 0.0, 0.5),
    );
    let spun = boxed(0.0, 0.0, 0.0, 1.0, 1.0, 1.0).transformed(&r);
    for (got, want) in spun.min().to_array().iter().zip([0.0, 0.0, 0.0]) {
        assert!((got - want).abs() < 1e-5);
    }
}

fn small() -> impl Strategy<Value = f32> {
    -50.0f32..50.0
}

fn size() -> impl Strategy<Value = f32> {
    0.1f32..10.0
}

proptest! {
    #[test]
    fn collision_is_symmetric(
        ax in small(), ay in small(), az in small(),
        bx in small(), by in small(), bz in small(),
        w in size(), h in size(), d in size(),
    ) {
        let a = boxed(ax, ay, az, w, h, d);
        let b = boxed(bx, by, bz, d, w, h);
        prop_assert_eq!(a.collides(&b), b.collides(&a));
    }

    #[test]
    fn collision_survives_common_translation(
        ax in small(), ay in small(), az in small(),
        bx in small(), by in small(), bz in small(),
        tx in -8.0f32..8.0, tz in -8.0f32..8.0,
    ) {
        // Integer-aligned inputs keep the comparison exact under f32.
        let snap = |v: f32| v.round();
        let a = boxed(snap(ax), snap(ay), snap(az), 2.0, 2.0, 2.0);
        let b = boxed(snap(bx), snap(by), snap(bz), 3.0, 1.0, 2.0);
        let t = Vec3::new(snap(tx), 0.0, snap(tz));
        prop_assert_eq!(a.collides(&b), (a + t).collides(&(b + t)));
    }

    #[test]
    fn translation_keeps_dimensions(
        x in small(), y in small(), z in small(),
        w in -10.0f32..10.0, h in -10.0f32..10.0, d in -10.0f32..10.0,
        tx in -100.0f32..100.0, ty in -100.0f32..100.0, tz in -100.0f32..100.0,
    ) {
        let b = boxed(x, y, z, w, h, d);
        let moved = b + Vec3::new(tx, ty, tz);
        let (before, after) = (b.dimensions(), moved.dimensions());
        for i in 0..3 {
            prop_assert!((after[i] - before[i]).abs() <= 1e-3, "axis {}: {} vs {}", i, after[i], before[i]);
        }
    }

    #[test]
    fn penetration_push_leaves_faces_touching(
        ox in -0.9f32..0.9, oy in -0.9f32..0.9, oz in -0.9f32..0.9,
    ) {
        let a = boxed(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);
        let b = boxed(ox, oy, oz, 1.0, 1.0, 1.0);
        let p = a.intersection(&b).expect("offset below one unit overlaps");
        let moved = a - p.with_skin(1e-3).vector();
        prop_assert!(!moved.collides(&b));
    }

    #[test]
    fn constructors_keep_min_below_max(
        x in small(), y in small(), z in small(),
        w in -10.0f32..10.0, h in -10.0f32..10.0, d in -10.0f32..10.0,
        s in -4.0f32..4.0,
    ) {
        let b = boxed(x, y, z, w, h, d) * s;
        for i in 0..3 {
            prop_assert!(b.min()[i] <= b.max()[i]);
        }
    }
}
