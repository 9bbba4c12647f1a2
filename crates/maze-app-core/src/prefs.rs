// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persisted viewer preferences (mouse look + HUD flags).

use serde::{Deserialize, Serialize};

/// Everything the viewer remembers between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MazePrefs {
    /// Mouse look and projection.
    pub look: LookPrefs,
    /// Overlay toggles.
    pub hud: HudPrefs,
}

/// Mouse look and projection parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookPrefs {
    /// Degrees of yaw produced by dragging the mouse across the full window width.
    pub sweep_degrees: f32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Invert vertical mouse look.
    pub invert_y: bool,
}

impl Default for LookPrefs {
    fn default() -> Self {
        Self {
            sweep_degrees: 180.0,
            fov_degrees: 90.0,
            invert_y: false,
        }
    }
}

impl LookPrefs {
    /// Degrees per pixel of mouse travel for a window `width_px` wide.
    pub fn degrees_per_pixel(&self, width_px: u32) -> f32 {
        self.sweep_degrees / width_px.max(1) as f32
    }
}

/// HUD overlay toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudPrefs {
    /// Draw the minimap.
    pub show_minimap: bool,
    /// Tiles shown along each side of the minimap.
    pub minimap_tiles: u32,
    /// Draw the frame-time readout.
    pub show_fps: bool,
    /// Render walls as wireframe.
    pub wireframe: bool,
    /// Present in vsync mode.
    pub vsync: bool,
}

impl Default for HudPrefs {
    fn default() -> Self {
        Self {
            show_minimap: true,
            minimap_tiles: 40,
            show_fps: true,
            wireframe: false,
            vsync: false,
        }
    }
}
