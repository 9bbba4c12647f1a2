// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Run-length decomposition of a wall bitmap into boxes.
//!
//! One row-major pass over the window. A horizontal run accumulator tracks
//! the current row; an arena of per-column runs (indexed by `x - x0`) tracks
//! vertical runs. Runs spanning more than one tile close into a block; runs
//! of exactly one tile are dropped. A solid region therefore becomes a set of
//! overlapping strips, and an isolated single wall tile produces no block at
//! all.

use maze_geom::math::Vec3;
use maze_geom::Aabb;
use tracing::debug;

use crate::bitmap::WallMap;
use crate::grid::{GridScale, TileWindow};

/// What produced a [`WallBlock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Horizontal run along a bitmap row.
    Row,
    /// Vertical run down a bitmap column.
    Column,
    /// Synthetic ground slab under the whole map.
    Floor,
}

/// Solid box owned by the current decomposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallBlock {
    /// Producer of the block.
    pub kind: BlockKind,
    /// World-space bounds.
    pub bounds: Aabb,
}

/// Inclusive tile span of an open run.
#[derive(Debug, Clone, Copy, Default)]
struct Run {
    start: u32,
    end: u32,
    open: bool,
}

impl Run {
    fn extend(&mut self, at: u32) {
        if !self.open {
            self.start = at;
            self.open = true;
        }
        self.end = at;
    }

    /// Closes the run, returning `(start, len)` when it spans more than one tile.
    fn close(&mut self) -> Option<(u32, u32)> {
        let was_open = core::mem::take(&mut self.open);
        (was_open && self.end > self.start).then(|| (self.start, self.end - self.start + 1))
    }
}

/// Turns a windowed bitmap region into wall blocks.
///
/// Each call to [`Decomposer::decompose`] replaces the previous block list
/// wholesale; callers must not hold block references across calls.
#[derive(Debug, Default)]
pub struct Decomposer {
    blocks: Vec<WallBlock>,
    columns: Vec<Run>,
    window: Option<TileWindow>,
}

impl Decomposer {
    /// Creates an empty decomposer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks from the last decomposition.
    pub fn blocks(&self) -> &[WallBlock] {
        &self.blocks
    }

    /// Window used by the last decomposition, if any.
    pub fn window(&self) -> Option<TileWindow> {
        self.window
    }

    /// Decomposes `window` of `map` and returns the new block list.
    pub fn decompose<M: WallMap + ?Sized>(
        &mut self,
        map: &M,
        window: TileWindow,
        scale: &GridScale,
    ) -> &[WallBlock] {
        self.blocks.clear();
        self.columns.clear();
        self.columns.resize(window.width() as usize, Run::default());
        self.window = Some(window);

        let (x0, x1) = (window.columns().start, window.columns().end);
        let y1 = window.rows().end;
        for y in window.rows() {
            let mut row = Run::default();
            for x in window.columns() {
                if !map.is_wall(x, y) {
                    continue;
                }
                row.extend(x);
                let column = &mut self.columns[(x - x0) as usize];
                column.extend(y);

                if x + 1 == x1 || !map.is_wall(x + 1, y) {
                    if let Some((start, len)) = row.close() {
                        self.blocks.push(WallBlock {
                            kind: BlockKind::Row,
                            bounds: scale.tile_box(start, y, len, 1),
                        });
                    }
                }
                if y + 1 == y1 || !map.is_wall(x, y + 1) {
                    if let Some((start, len)) = column.close() {
                        self.blocks.push(WallBlock {
                            kind: BlockKind::Column,
                            bounds: scale.tile_box(x, start, 1, len),
                        });
                    }
                }
            }
        }

        debug!(
            columns = ?window.columns(),
            rows = ?window.rows(),
            blocks = self.blocks.len(),
            "decomposed wall window"
        );
        &self.blocks
    }
}

/// Ground slab spanning the whole bitmap footprint, `depth` metres thick
/// below `y = 0`.
pub fn floor_block<M: WallMap + ?Sized>(map: &M, scale: &GridScale, depth: f32) -> WallBlock {
    WallBlock {
        kind: BlockKind::Floor,
        bounds: Aabb::from_origin_dimensions(
            Vec3::ZERO,
            Vec3::new(
                map.width() as f32 * scale.cell,
                -depth,
                map.height() as f32 * scale.cell,
            ),
        ),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::bitmap::Bitmap;
    use crate::grid::{Radius, Tile};

    fn unit() -> GridScale {
        GridScale {
            cell: 1.0,
            wall_height: 1.0,
        }
    }

    #[test]
    fn run_extends_and_closes() {
        let mut r = Run::default();
        assert_eq!(r.close(), None);
        r.extend(3);
        assert_eq!(r.close(), None);
        r.extend(4);
        r.extend(5);
        assert_eq!(r.close(), Some((4, 2)));
    }

    #[test]
    fn column_runs_cover_full_length() {
        let map = Bitmap::from_rows(["...", ".#.", ".#.", ".#.", "..."]).unwrap();
        let mut d = Decomposer::new();
        let blocks = d.decompose(&map, TileWindow::full(&map), &unit());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Column);
        assert_eq!(blocks[0].bounds.min().to_array(), [1.0, 0.0, 1.0]);
        assert_eq!(blocks[0].bounds.max().to_array(), [2.0, 1.0, 4.0]);
    }

    #[test]
    fn window_limits_the_scan() {
        let map = Bitmap::from_rows(["######", "......", "......", "......"]).unwrap();
        let mut d = Decomposer::new();
        let w = TileWindow::around(Tile::new(0, 0), Radius::new(2, 2), &map);
        let blocks = d.decompose(&map, w, &unit());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].bounds.max().x(), 2.0);
    }

    #[test]
    fn redecomposition_replaces_blocks() {
        let map = Bitmap::from_rows(["##..", "....", "..##"]).unwrap();
        let mut d = Decomposer::new();
        let left = TileWindow::around(Tile::new(0, 0), Radius::new(2, 1), &map);
        assert_eq!(d.decompose(&map, left, &unit()).len(), 1);
        let right = TileWindow::around(Tile::new(3, 2), Radius::new(2, 1), &map);
        let blocks = d.decompose(&map, right, &unit());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].bounds.min().z(), 2.0);
        assert_eq!(d.window(), Some(right));
    }

    #[test]
    fn floor_spans_footprint_downward() {
        let map = Bitmap::from_rows(["....", "...."]).unwrap();
        let f = floor_block(&map, &GridScale::default(), 1.0);
        assert_eq!(f.kind, BlockKind::Floor);
        assert_eq!(f.bounds.min().to_array(), [0.0, -1.0, 0.0]);
        assert_eq!(f.bounds.max().to_array(), [2.0, 0.0, 1.0]);
    }
}
