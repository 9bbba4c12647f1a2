// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! maze-core: wall bitmaps, wall decomposition and movement resolution.
//!
//! Data flows one way each frame: the bitmap window is decomposed into
//! [`WallBlock`]s (only when the player's focus tile drifts), the
//! [`MovementResolver`] moves the [`PlayerBody`] volume against those blocks
//! plus the floor, and the resolved anchor is handed to whatever renders the
//! view. Everything is single-threaded and synchronous.

mod bitmap;
mod decompose;
mod error;
mod grid;
mod player;
mod resolve;
mod world;

pub use bitmap::{Bitmap, WallMap};
pub use decompose::{floor_block, BlockKind, Decomposer, WallBlock};
pub use error::MazeError;
pub use grid::{GridScale, Radius, Tile, TileWindow};
pub use player::{PlayerBody, PLAYER_HEIGHT};
pub use resolve::{MoveRequest, MovementResolver, Resolution};
pub use world::{World, WorldConfig};
