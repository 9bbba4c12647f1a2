// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use maze_geom::math::Vec3;
use maze_geom::Aabb;

use crate::grid::{GridScale, Tile};

/// Standing height of the player volume in metres.
pub const PLAYER_HEIGHT: f32 = 1.75;

/// The player's physical extent, tracked through an anchor (the eye).
///
/// The volume is never stored: it is always `anchor - offset` with fixed
/// dimensions, so anchor and volume cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerBody {
    anchor: Vec3,
    offset: Vec3,
    dims: Vec3,
}

impl PlayerBody {
    /// Body with explicit dimensions and anchor offset.
    pub fn new(anchor: Vec3, dims: Vec3, offset: Vec3) -> Self {
        Self {
            anchor,
            offset,
            dims,
        }
    }

    /// Body sized for a grid: one cell wide and deep, [`PLAYER_HEIGHT`]
    /// tall, with the eye one cell below the top of the head.
    pub fn for_grid(anchor: Vec3, scale: &GridScale) -> Self {
        let dims = Vec3::new(scale.cell, PLAYER_HEIGHT, scale.cell);
        let offset = Vec3::new(dims.x() / 2.0, dims.y() - scale.cell, dims.z() / 2.0);
        Self::new(anchor, dims, offset)
    }

    /// Eye position.
    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    /// Vector from the volume's `min` corner to the anchor.
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Volume size.
    pub fn dimensions(&self) -> Vec3 {
        self.dims
    }

    /// Current volume; `min == anchor - offset`.
    pub fn volume(&self) -> Aabb {
        Aabb::from_origin_dimensions(self.anchor - self.offset, self.dims)
    }

    /// Adopts a resolved volume; the anchor becomes `volume.min + offset`.
    pub fn settle(&mut self, volume: &Aabb) {
        self.anchor = volume.min() + self.offset;
    }

    /// Moves the anchor directly, bypassing collision.
    pub fn teleport(&mut self, anchor: Vec3) {
        self.anchor = anchor;
    }

    /// Tile under the anchor.
    pub fn tile(&self, scale: &GridScale) -> Tile {
        scale.tile_of(self.anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_body_matches_cell_size() {
        let p = PlayerBody::for_grid(Vec3::new(-2.0, 1.0, -2.0), &GridScale::default());
        assert_eq!(p.dimensions().to_array(), [0.5, 1.75, 0.5]);
        assert_eq!(p.offset().to_array(), [0.25, 1.25, 0.25]);
        assert_eq!(p.volume().min().to_array(), [-2.25, -0.25, -2.25]);
    }

    #[test]
    fn settle_keeps_anchor_in_sync() {
        let mut p = PlayerBody::for_grid(Vec3::ZERO, &GridScale::default());
        let moved = p.volume() + Vec3::new(1.0, 0.5, -1.0);
        p.settle(&moved);
        assert_eq!(p.anchor().to_array(), [1.0, 0.5, -1.0]);
        assert_eq!(p.volume(), moved);
    }
}
