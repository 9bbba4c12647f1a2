// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Viewer-local state (camera, input, world, prefs, perf) and the per-frame tick.

use std::time::Instant;

use glam::Mat4;
use maze_app_core::prefs::MazePrefs;
use maze_core::{Bitmap, MoveRequest, MovementResolver, PlayerBody, Resolution, World, WorldConfig};
use maze_geom::math::Vec3;

use crate::{
    camera::FpsCamera,
    input::InputContext,
    perf::PerfStats,
    scene::{to_geom, to_glam},
};

/// Spawn point in grid-plane coordinates, outside the maze corner.
const SPAWN_XZ: (f32, f32) = (-2.0, -2.0);

pub struct ViewerState {
    pub world: World<Bitmap>,
    pub camera: FpsCamera,
    pub input: InputContext,
    pub prefs: MazePrefs,
    pub perf: PerfStats,
    pub last_frame: Instant,
    pub last_resolution: Option<Resolution>,
    pub minimap: Option<egui::TextureHandle>,
}

impl ViewerState {
    pub fn new(
        map: Bitmap,
        config: WorldConfig,
        resolver: MovementResolver,
        prefs: MazePrefs,
    ) -> Self {
        let scale = config.scale;
        let template = PlayerBody::for_grid(Vec3::ZERO, &scale);
        let anchor = Vec3::new(SPAWN_XZ.0, template.offset().y(), SPAWN_XZ.1);
        let world = World::new(map, config, PlayerBody::for_grid(anchor, &scale), resolver);
        let camera =
            FpsCamera::looking_at(to_glam(anchor), glam::Vec3::ZERO, prefs.look.fov_degrees);
        let mut state = Self {
            world,
            camera,
            input: InputContext::default(),
            prefs: MazePrefs::default(),
            perf: PerfStats::default(),
            last_frame: Instant::now(),
            last_resolution: None,
            minimap: None,
        };
        state.apply_prefs(prefs);
        state
    }

    /// Clamps loaded prefs into usable ranges and adopts them.
    pub fn apply_prefs(&mut self, mut prefs: MazePrefs) {
        prefs.look.fov_degrees = prefs.look.fov_degrees.clamp(30.0, 120.0);
        prefs.look.sweep_degrees = prefs.look.sweep_degrees.clamp(30.0, 1080.0);
        prefs.hud.minimap_tiles = prefs.hud.minimap_tiles.clamp(8, 400);
        self.camera.fov_deg = prefs.look.fov_degrees;
        self.prefs = prefs;
    }

    pub fn export_prefs(&self) -> MazePrefs {
        self.prefs.clone()
    }

    /// Applies mouse look, then moves the player and lets the camera follow.
    pub fn tick(&mut self, dt: f32, width_px: u32) -> Resolution {
        let (dx, dy) = self.input.take_mouse_delta();
        let look = &self.prefs.look;
        self.camera
            .look(dx, dy, look.degrees_per_pixel(width_px), look.invert_y);

        let request = MoveRequest {
            direction: to_geom(self.input.move_intent(&self.camera)),
            sprint: self.input.sprinting(),
            dt,
        };
        let resolution = self.world.step(&request);
        self.camera.position = to_glam(self.world.player().anchor());
        self.last_resolution = Some(resolution);
        resolution
    }

    pub fn view_proj(&mut self, aspect: f32) -> Mat4 {
        self.camera.fov_deg = self.prefs.look.fov_degrees;
        self.camera.view_proj(aspect)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use egui_winit::winit::keyboard::KeyCode;

    fn viewer(rows: &[&str]) -> ViewerState {
        ViewerState::new(
            Bitmap::from_rows(rows.iter().copied()).unwrap(),
            WorldConfig::default(),
            MovementResolver::default(),
            MazePrefs::default(),
        )
    }

    #[test]
    fn spawns_outside_corner_on_floor_facing_origin() {
        let v = viewer(&["..", ".."]);
        let vol = v.world.player().volume();
        assert_relative_eq!(vol.min().y(), 0.0);
        assert_relative_eq!(v.camera.position.x, -2.0);
        assert_relative_eq!(v.camera.yaw_deg, 45.0, epsilon = 1e-4);
    }

    #[test]
    fn idle_tick_keeps_player_in_place() {
        let mut v = viewer(&["..", ".."]);
        let before = v.camera.position;
        let res = v.tick(0.016, 1280);
        assert!(!res.moved());
        assert_relative_eq!(v.camera.position.x, before.x, epsilon = 1e-5);
        assert_relative_eq!(v.camera.position.z, before.z, epsilon = 1e-5);
    }

    #[test]
    fn held_forward_moves_camera_with_player() {
        let mut v = viewer(&["..", ".."]);
        v.camera.yaw_deg = 0.0;
        v.camera.pitch_deg = 0.0;
        v.input.press(KeyCode::KeyW);
        let res = v.tick(0.1, 1280);
        assert!(res.moved());
        assert_relative_eq!(v.camera.position.x, -2.0 + 0.3, epsilon = 1e-4);
        assert_eq!(v.camera.position, to_glam(v.world.player().anchor()));
    }

    #[test]
    fn captured_mouse_turns_camera() {
        let mut v = viewer(&[".."]);
        v.input.set_captured(true);
        let yaw = v.camera.yaw_deg;
        v.input.add_mouse_motion(100.0, 0.0);
        v.tick(0.0, 1800);
        // 180 degrees per 1800 px
        assert_relative_eq!(v.camera.yaw_deg, yaw + 10.0, epsilon = 1e-3);
    }

    #[test]
    fn prefs_are_clamped_on_apply() {
        let mut v = viewer(&[".."]);
        let mut prefs = MazePrefs::default();
        prefs.look.fov_degrees = 500.0;
        prefs.hud.minimap_tiles = 1;
        v.apply_prefs(prefs);
        assert_relative_eq!(v.export_prefs().look.fov_degrees, 120.0);
        assert_eq!(v.export_prefs().hud.minimap_tiles, 8);
        assert_relative_eq!(v.camera.fov_deg, 120.0);
    }
}
