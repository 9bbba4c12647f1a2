// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Bundle of window + GPU + egui state for the single maze viewport.

use crate::gpu::Gpu;
use egui_wgpu::Renderer;
use egui_winit::winit::window::{CursorGrabMode, Window};
use egui_winit::State as EguiWinitState;
use tracing::warn;

pub struct Viewport {
    pub window: &'static Window,
    pub gpu: Gpu,
    pub egui_state: EguiWinitState,
    pub egui_renderer: Renderer,
}

impl Viewport {
    /// Grabs (or releases) the cursor for mouse look. Falls back from
    /// `Locked` to `Confined` on platforms that only support one of them.
    pub fn capture_cursor(&self, on: bool) {
        let result = if on {
            self.window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined))
        } else {
            self.window.set_cursor_grab(CursorGrabMode::None)
        };
        if let Err(err) = result {
            warn!(%err, "cursor grab change failed");
        }
        self.window.set_cursor_visible(!on);
    }
}
