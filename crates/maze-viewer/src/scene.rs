// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scene building: world blocks to GPU instances, plus minimap framing.

use glam::Mat4;
use maze_core::{BlockKind, Tile, WallMap, World};
use maze_geom::Aabb;

use crate::gpu::Instance;

pub const WALL_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const FLOOR_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const PLAYER_DOT: egui::Color32 = egui::Color32::from_rgb(0, 0, 204);

pub fn to_glam(v: maze_geom::math::Vec3) -> glam::Vec3 {
    glam::Vec3::from_array(v.to_array())
}

pub fn to_geom(v: glam::Vec3) -> maze_geom::math::Vec3 {
    maze_geom::math::Vec3::from(v.to_array())
}

/// Model matrix mapping the unit cube `[0,1]^3` onto `bounds`.
pub fn block_model(bounds: &Aabb) -> Mat4 {
    Mat4::from_translation(to_glam(bounds.min())) * Mat4::from_scale(to_glam(bounds.dimensions()))
}

fn color_for(kind: BlockKind) -> [f32; 4] {
    match kind {
        BlockKind::Floor => FLOOR_COLOR,
        BlockKind::Row | BlockKind::Column => WALL_COLOR,
    }
}

/// Floor first, then every live wall block.
pub fn block_instances<M: WallMap>(world: &World<M>) -> Vec<Instance> {
    std::iter::once(world.floor())
        .chain(world.walls())
        .map(|b| Instance {
            model: block_model(&b.bounds).to_cols_array_2d(),
            color: color_for(b.kind),
        })
        .collect()
}

/// Portion of the maze texture shown on the minimap and where the player
/// dot sits inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimapView {
    pub uv: egui::Rect,
    /// Dot position as a fraction of the minimap rect; `None` when the
    /// player is outside the shown tiles.
    pub dot: Option<egui::Vec2>,
}

impl MinimapView {
    pub fn new(player: Tile, tiles: u32, map_w: u32, map_h: u32) -> Self {
        let (u0, u1, du) = span(player.x, tiles, map_w);
        let (v0, v1, dv) = span(player.y, tiles, map_h);
        let dot = match (du, dv) {
            (Some(x), Some(y)) => Some(egui::vec2(x, y)),
            _ => None,
        };
        Self {
            uv: egui::Rect::from_min_max(egui::pos2(u0, v0), egui::pos2(u1, v1)),
            dot,
        }
    }
}

/// `(uv_min, uv_max, dot_fraction)` for one axis.
fn span(center: i32, tiles: u32, size: u32) -> (f32, f32, Option<f32>) {
    let size_i = i64::from(size.max(1));
    let len = i64::from(tiles.max(1)).min(size_i);
    let start = (i64::from(center) - len / 2).clamp(0, size_i - len);
    let frac = (i64::from(center) - start) as f32 / len as f32 + 0.5 / len as f32;
    (
        start as f32 / size_i as f32,
        (start + len) as f32 / size_i as f32,
        (0.0..=1.0).contains(&frac).then_some(frac),
    )
}
