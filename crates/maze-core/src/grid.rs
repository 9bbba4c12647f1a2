// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Tile coordinates, clipped windows and the tile-to-world scale.
//!
//! Bitmap column `x` maps to world X and bitmap row `y` maps to world Z.
//! World Y is up.

use core::ops::Range;

use maze_geom::math::{Mat4, Vec3};
use maze_geom::Aabb;

use crate::bitmap::WallMap;

/// Signed tile coordinate; the player may stand outside the bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Tile {
    /// Creates a tile coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Half-size of a decomposition window, in tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Radius {
    /// Columns either side of the focus tile.
    pub x: u32,
    /// Rows either side of the focus tile.
    pub y: u32,
}

impl Radius {
    /// Creates a radius.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Half-open tile rectangle clipped to bitmap bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileWindow {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

impl TileWindow {
    /// `[c - r, c + r]` on each axis, clipped to the bitmap.
    pub fn around<M: WallMap + ?Sized>(center: Tile, radius: Radius, map: &M) -> Self {
        let (x0, x1) = clip_axis(center.x, radius.x, map.width());
        let (y0, y1) = clip_axis(center.y, radius.y, map.height());
        Self { x0, y0, x1, y1 }
    }

    /// The whole bitmap.
    pub fn full<M: WallMap + ?Sized>(map: &M) -> Self {
        Self {
            x0: 0,
            y0: 0,
            x1: map.width(),
            y1: map.height(),
        }
    }

    /// Column span.
    pub fn columns(&self) -> Range<u32> {
        self.x0..self.x1
    }

    /// Row span.
    pub fn rows(&self) -> Range<u32> {
        self.y0..self.y1
    }

    /// Columns covered.
    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    /// Rows covered.
    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    /// `true` when the window covers no tiles.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// `true` when `tile` lies inside the window.
    pub fn contains(&self, tile: Tile) -> bool {
        i64::from(tile.x) >= i64::from(self.x0)
            && i64::from(tile.x) < i64::from(self.x1)
            && i64::from(tile.y) >= i64::from(self.y0)
            && i64::from(tile.y) < i64::from(self.y1)
    }
}

fn clip_axis(center: i32, radius: u32, size: u32) -> (u32, u32) {
    let size = i64::from(size);
    let lo = (i64::from(center) - i64::from(radius)).clamp(0, size);
    let hi = (i64::from(center) + i64::from(radius) + 1).clamp(0, size);
    // Both ends are clamped into 0..=size, so the casts are lossless.
    (lo as u32, hi as u32)
}

/// World size of one bitmap tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridScale {
    /// Metres per pixel along X and Z.
    pub cell: f32,
    /// Wall height in metres.
    pub wall_height: f32,
}

impl Default for GridScale {
    fn default() -> Self {
        Self {
            cell: 0.5,
            wall_height: 2.0,
        }
    }
}

impl GridScale {
    /// Model matrix taking tile-space boxes (1 unit per tile, 1 unit tall)
    /// into world space.
    pub fn model(&self) -> Mat4 {
        Mat4::scale(self.cell, self.wall_height, self.cell)
    }

    /// World-space box for a `w x d` tile rectangle whose top-left tile is
    /// `(x, y)`.
    pub fn tile_box(&self, x: u32, y: u32, w: u32, d: u32) -> Aabb {
        Aabb::from_origin_dimensions(
            Vec3::new(x as f32, 0.0, y as f32),
            Vec3::new(w as f32, 1.0, d as f32),
        )
        .transformed(&self.model())
    }

    /// Tile under a world position.
    pub fn tile_of(&self, p: Vec3) -> Tile {
        Tile::new(
            (p.x() / self.cell).floor() as i32,
            (p.z() / self.cell).floor() as i32,
        )
    }

    /// World-space centre of `tile` at floor level.
    pub fn tile_center(&self, tile: Tile) -> Vec3 {
        Vec3::new(
            (tile.x as f32 + 0.5) * self.cell,
            0.0,
            (tile.y as f32 + 0.5) * self.cell,
        )
    }
}
