// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use maze_geom::math::Vec3;
use maze_geom::Aabb;
use tracing::debug;

use crate::bitmap::WallMap;
use crate::decompose::{floor_block, Decomposer, WallBlock};
use crate::grid::{GridScale, Radius, Tile, TileWindow};
use crate::player::PlayerBody;
use crate::resolve::{MoveRequest, MovementResolver, Resolution};

/// Static parameters for a [`World`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldConfig {
    /// Tile-to-world scale.
    pub scale: GridScale,
    /// Live window radius; `None` decomposes the whole bitmap once.
    pub radius: Option<Radius>,
    /// Thickness of the ground slab below `y = 0`.
    pub floor_depth: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            scale: GridScale::default(),
            radius: None,
            floor_depth: 1.0,
        }
    }
}

/// Maze simulation state: the bitmap, the live wall blocks and the player.
///
/// Decomposition only happens inside [`World::refocus`] and [`World::step`],
/// both of which take `&mut self`, so no wall scan can observe a half-built
/// block list.
#[derive(Debug)]
pub struct World<M> {
    map: M,
    config: WorldConfig,
    decomposer: Decomposer,
    floor: WallBlock,
    player: PlayerBody,
    resolver: MovementResolver,
    focus: Option<Tile>,
}

impl<M: WallMap> World<M> {
    /// Builds a world and performs the first decomposition.
    pub fn new(
        map: M,
        config: WorldConfig,
        player: PlayerBody,
        resolver: MovementResolver,
    ) -> Self {
        let floor = floor_block(&map, &config.scale, config.floor_depth);
        let mut world = Self {
            map,
            config,
            decomposer: Decomposer::new(),
            floor,
            player,
            resolver,
            focus: None,
        };
        world.refocus();
        world
    }

    /// The wall bitmap.
    pub fn map(&self) -> &M {
        &self.map
    }

    /// Static parameters.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Live wall blocks (excludes the floor).
    pub fn walls(&self) -> &[WallBlock] {
        self.decomposer.blocks()
    }

    /// Ground slab.
    pub fn floor(&self) -> &WallBlock {
        &self.floor
    }

    /// Current decomposition window.
    pub fn window(&self) -> Option<TileWindow> {
        self.decomposer.window()
    }

    /// Player body.
    pub fn player(&self) -> &PlayerBody {
        &self.player
    }

    /// Movement parameters.
    pub fn resolver(&self) -> &MovementResolver {
        &self.resolver
    }

    /// Tile under the player anchor.
    pub fn player_tile(&self) -> Tile {
        self.player.tile(&self.config.scale)
    }

    /// Places the player without collision and refocuses.
    pub fn teleport(&mut self, anchor: Vec3) {
        self.player.teleport(anchor);
        self.refocus();
    }

    /// Re-decomposes when the player's tile has left the inner half of the
    /// live window. Returns `true` when the block list was rebuilt.
    pub fn refocus(&mut self) -> bool {
        let tile = self.player_tile();
        let window = match (self.config.radius, self.focus) {
            (None, Some(_)) => return false,
            (None, None) => TileWindow::full(&self.map),
            (Some(r), Some(f)) if !drifted(f, tile, r) => return false,
            (Some(r), _) => TileWindow::around(tile, r, &self.map),
        };
        self.rebuild(tile, window);
        true
    }

    /// Advances the player one frame and refocuses if needed.
    ///
    /// Before scanning, the live window is widened to every tile the move
    /// can touch, so no wall next to the player is missing from the scan.
    pub fn step(&mut self, request: &MoveRequest) -> Resolution {
        let current = self.player.volume();
        let candidate = current + self.resolver.displacement(request);
        self.cover(&current.union(&candidate));

        let solids = self
            .decomposer
            .blocks()
            .iter()
            .chain(core::iter::once(&self.floor))
            .map(|b| &b.bounds);
        let res = self.resolver.resolve(&current, request, solids);
        self.player.settle(&res.volume);
        self.refocus();
        res
    }

    /// Ensures the live window holds every in-map tile under `reach` plus a
    /// one-tile ring, so wall runs touching the player keep their neighbours.
    /// Returns `true` when the block list was rebuilt.
    fn cover(&mut self, reach: &Aabb) -> bool {
        let Some(radius) = self.config.radius else {
            return false;
        };
        let lo = self.config.scale.tile_of(reach.min());
        let hi = self.config.scale.tile_of(reach.max());
        let lo = self.clamp_tile(Tile::new(lo.x.saturating_sub(1), lo.y.saturating_sub(1)));
        let hi = self.clamp_tile(Tile::new(hi.x.saturating_add(1), hi.y.saturating_add(1)));
        if self
            .decomposer
            .window()
            .is_some_and(|w| w.contains(lo) && w.contains(hi))
        {
            return false;
        }
        let center = Tile::new(lo.x + (hi.x - lo.x) / 2, lo.y + (hi.y - lo.y) / 2);
        let need = Radius::new(
            radius.x.max((hi.x - lo.x).unsigned_abs().div_ceil(2)),
            radius.y.max((hi.y - lo.y).unsigned_abs().div_ceil(2)),
        );
        let window = TileWindow::around(center, need, &self.map);
        self.rebuild(center, window);
        true
    }

    fn clamp_tile(&self, tile: Tile) -> Tile {
        let last = |size: u32| i32::try_from(size.saturating_sub(1)).unwrap_or(i32::MAX);
        Tile::new(
            tile.x.clamp(0, last(self.map.width())),
            tile.y.clamp(0, last(self.map.height())),
        )
    }

    fn rebuild(&mut self, focus: Tile, window: TileWindow) {
        self.focus = Some(focus);
        let blocks = self
            .decomposer
            .decompose(&self.map, window, &self.config.scale)
            .len();
        debug!(x = focus.x, y = focus.y, blocks, "refocused wall window");
    }
}

fn drifted(focus: Tile, tile: Tile, radius: Radius) -> bool {
    (i64::from(tile.x) - i64::from(focus.x)).unsigned_abs() > u64::from(radius.x / 2)
        || (i64::from(tile.y) - i64::from(focus.y)).unsigned_abs() > u64::from(radius.y / 2)
}
