// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
//! Integration tests for the per-frame world loop.

use maze_core::{
    Bitmap, GridScale, MoveRequest, MovementResolver, PlayerBody, Radius, Tile, World,
    WorldConfig,
};
use maze_geom::math::Vec3;

fn eye_at(tile: Tile, scale: &GridScale) -> Vec3 {
    let c = scale.tile_center(tile);
    let body = PlayerBody::for_grid(Vec3::ZERO, scale);
    // Feet just above the floor.
    Vec3::new(c.x(), body.offset().y() + 1e-3, c.z())
}

fn corridor(width: usize) -> Bitmap {
    let wall = "#".repeat(width);
    let open = format!("#{}#", ".".repeat(width - 2));
    Bitmap::from_rows([wall.as_str(), open.as_str(), open.as_str(), open.as_str(), wall.as_str()])
        .unwrap()
}

fn world(map: Bitmap, radius: Option<Radius>, start: Tile) -> World<Bitmap> {
    let scale = GridScale::default();
    World::new(
        map,
        WorldConfig {
            scale,
            radius,
            floor_depth: 1.0,
        },
        PlayerBody::for_grid(eye_at(start, &scale), &scale),
        MovementResolver::default(),
    )
}

#[test]
fn walking_into_a_wall_stops_at_its_face() {
    let mut w = world(corridor(8), None, Tile::new(3, 2));
    let north = MoveRequest {
        direction: Vec3::new(0.0, 0.0, 1.0),
        sprint: false,
        dt: 0.1,
    };
    for _ in 0..20 {
        w.step(&north);
    }
    // The far wall row occupies z in [2.0, 2.5].
    let v = w.player().volume();
    assert!(v.max().z() < 2.0);
    assert!(v.max().z() > 2.0 - 1e-2);
    assert!((w.player().anchor().x() - 1.75).abs() < 1e-4);
}

#[test]
fn idle_player_stays_on_the_floor() {
    let mut w = world(corridor(6), None, Tile::new(2, 2));
    let before = w.player().anchor();
    let res = w.step(&MoveRequest::idle(0.016));
    assert_eq!(res.contacts, 0);
    assert_eq!(w.player().anchor(), before);
}

#[test]
fn windowed_world_refocuses_after_drifting() {
    let mut w = world(corridor(40), Some(Radius::new(6, 4)), Tile::new(3, 2));
    let first = w.window().unwrap();
    assert_eq!(first.columns(), 0..10);

    let scale = GridScale::default();
    w.teleport(eye_at(Tile::new(5, 2), &scale));
    assert_eq!(w.window(), Some(first), "still inside the inner half");

    w.teleport(eye_at(Tile::new(7, 2), &scale));
    let second = w.window().unwrap();
    assert_eq!(second.columns(), 1..14);
    assert!(w.walls().iter().all(|b| b.bounds.min().x() >= 0.5));
}

#[test]
fn stepping_across_the_window_triggers_refocus() {
    let mut w = world(corridor(40), Some(Radius::new(4, 4)), Tile::new(3, 2));
    let east = MoveRequest {
        direction: Vec3::UNIT_X,
        sprint: true,
        dt: 0.05,
    };
    let first = w.window();
    for _ in 0..10 {
        w.step(&east);
    }
    assert_ne!(w.window(), first);
    let tile = w.player_tile();
    assert!(w.window().unwrap().contains(tile));
}

#[test]
fn small_windows_still_stop_the_player_at_walls() {
    for r in [1, 2] {
        let map = Bitmap::from_rows(["......#.", "......#.", "......#."]).unwrap();
        let mut w = world(map, Some(Radius::new(r, r)), Tile::new(1, 1));
        let east = MoveRequest {
            direction: Vec3::UNIT_X,
            sprint: false,
            dt: 0.02,
        };
        for _ in 0..200 {
            w.step(&east);
            // Wall column x = 6 starts at 3.0 m.
            assert!(
                w.player().volume().max().x() <= 3.0,
                "radius {r}: max.x {}",
                w.player().volume().max().x()
            );
        }
        assert!(w.player().volume().max().x() > 3.0 - 1e-2, "radius {r}");
    }
}
