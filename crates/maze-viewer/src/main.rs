// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! playmz: first-person maze walker. Main parses args, loads the maze and
//! wires App into winit.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use egui_winit::winit::event_loop::EventLoop;
use maze_core::{GridScale, MovementResolver, Radius, WorldConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod app_frame;
mod camera;
mod core;
mod gpu;
mod input;
mod maze_image;
mod perf;
mod render;
mod scene;
mod ui;
mod ui_state;
mod viewer_state;
mod viewport;

#[derive(Parser, Debug)]
#[command(author, version, about = "Walk a PNG maze in first person")]
pub struct Args {
    /// Maze PNG; dark pixels (luma < 128) are walls
    maze: PathBuf,
    /// Live collision window half-width in tiles (default: whole maze)
    #[arg(long)]
    radius_x: Option<u32>,
    /// Live collision window half-height in tiles (default: whole maze)
    #[arg(long)]
    radius_y: Option<u32>,
    /// Metres per maze pixel
    #[arg(long, default_value_t = 0.5)]
    cell_size: f32,
    /// Wall height in metres
    #[arg(long, default_value_t = 2.0)]
    wall_height: f32,
    /// Walking speed in m/s
    #[arg(long, default_value_t = 3.0)]
    speed: f32,
    /// Speed multiplier while R is held
    #[arg(long, default_value_t = 2.0)]
    sprint: f32,
    /// Force vsync on regardless of saved prefs
    #[arg(long)]
    vsync: bool,
    /// Overwrite saved prefs with defaults before starting
    #[arg(long)]
    reset_prefs: bool,
}

impl Args {
    fn world_config(&self) -> WorldConfig {
        let radius = self
            .radius_x
            .or(self.radius_y)
            .map(|r| Radius::new(self.radius_x.unwrap_or(r), self.radius_y.unwrap_or(r)));
        WorldConfig {
            scale: GridScale {
                cell: self.cell_size,
                wall_height: self.wall_height,
            },
            radius,
            ..WorldConfig::default()
        }
    }

    fn resolver(&self) -> MovementResolver {
        MovementResolver::new(self.speed, self.sprint)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let maze = maze_image::MazeImage::load(&args.maze)
        .with_context(|| format!("loading maze {}", args.maze.display()))?;
    info!(
        path = %args.maze.display(),
        width = maze.width(),
        height = maze.height(),
        "maze loaded"
    );

    let event_loop = EventLoop::new()?;
    let mut app = app::App::new(&args, maze);
    event_loop.run_app(&mut app)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_radius_flag_covers_both_axes() {
        let args = Args::parse_from(["playmz", "m.png", "--radius-x", "8"]);
        assert_eq!(args.world_config().radius, Some(Radius::new(8, 8)));
        let args = Args::parse_from(["playmz", "m.png", "--radius-x", "8", "--radius-y", "3"]);
        assert_eq!(args.world_config().radius, Some(Radius::new(8, 3)));
        let args = Args::parse_from(["playmz", "m.png"]);
        assert_eq!(args.world_config().radius, None);
    }

    #[test]
    fn defaults_match_grid_and_speed() {
        let args = Args::parse_from(["playmz", "m.png"]);
        assert_eq!(args.world_config().scale, GridScale::default());
        assert_eq!(args.resolver(), MovementResolver::new(3.0, 2.0));
        assert!(!args.vsync && !args.reset_prefs);
    }
}
