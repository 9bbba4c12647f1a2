// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
//! Integration tests for run-length wall decomposition.

use maze_core::{BlockKind, Bitmap, Decomposer, GridScale, TileWindow, WallMap};
use proptest::prelude::*;

fn tile_space() -> GridScale {
    GridScale {
        cell: 1.0,
        wall_height: 1.0,
    }
}

fn decompose(rows: &[&str]) -> Vec<maze_core::WallBlock> {
    let map = Bitmap::from_rows(rows.iter().copied()).unwrap();
    let mut d = Decomposer::new();
    d.decompose(&map, TileWindow::full(&map), &tile_space()).to_vec()
}

#[test]
fn isolated_wall_tile_produces_no_blocks() {
    let blocks = decompose(&[".....", ".....", "..#..", ".....", "....."]);
    assert!(blocks.is_empty());
}

#[test]
fn horizontal_run_merges_into_one_row_block() {
    let blocks = decompose(&[".....", ".....", ".###.", ".....", "....."]);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind, BlockKind::Row);
    assert_eq!(blocks[0].bounds.min().to_array(), [1.0, 0.0, 2.0]);
    assert_eq!(blocks[0].bounds.max().to_array(), [4.0, 1.0, 3.0]);
}

#[test]
fn solid_square_becomes_overlapping_strips() {
    let blocks = decompose(&["##", "##"]);
    let rows = blocks.iter().filter(|b| b.kind == BlockKind::Row).count();
    let cols = blocks.iter().filter(|b| b.kind == BlockKind::Column).count();
    assert_eq!((rows, cols), (2, 2));
}

#[test]
fn runs_touching_the_window_edge_close() {
    let blocks = decompose(&["..###", "....#", "....#"]);
    assert_eq!(blocks.len(), 2);
    let col = blocks.iter().find(|b| b.kind == BlockKind::Column).unwrap();
    assert_eq!(col.bounds.min().to_array(), [4.0, 0.0, 0.0]);
    assert_eq!(col.bounds.max().to_array(), [5.0, 1.0, 3.0]);
}

#[test]
fn wall_height_and_cell_size_scale_blocks() {
    let map = Bitmap::from_rows(["##"]).unwrap();
    let mut d = Decomposer::new();
    let blocks = d.decompose(&map, TileWindow::full(&map), &GridScale::default());
    assert_eq!(blocks[0].bounds.dimensions().to_array(), [1.0, 2.0, 0.5]);
}

fn bitmaps() -> impl Strategy<Value = Bitmap> {
    (1u32..8, 1u32..8).prop_flat_map(|(w, h)| {
        proptest::collection::vec(any::<bool>(), (w * h) as usize)
            .prop_map(move |cells| Bitmap::from_cells(w, h, cells).unwrap())
    })
}

fn has_wall_neighbour(map: &Bitmap, x: u32, y: u32) -> bool {
    let w = map.width();
    let h = map.height();
    (x > 0 && map.is_wall(x - 1, y))
        || (x + 1 < w && map.is_wall(x + 1, y))
        || (y > 0 && map.is_wall(x, y - 1))
        || (y + 1 < h && map.is_wall(x, y + 1))
}

proptest! {
    #[test]
    fn blocks_cover_exactly_the_connected_wall_tiles(map in bitmaps()) {
        let mut d = Decomposer::new();
        let blocks = d.decompose(&map, TileWindow::full(&map), &tile_space()).to_vec();
        for y in 0..map.height() {
            for x in 0..map.width() {
                let centre = maze_geom::math::Vec3::new(x as f32 + 0.5, 0.5, y as f32 + 0.5);
                let covered = blocks.iter().any(|b| b.bounds.contains_point(&centre));
                let expected = map.is_wall(x, y) && has_wall_neighbour(&map, x, y);
                prop_assert_eq!(covered, expected, "tile ({}, {})", x, y);
            }
        }
    }
}
