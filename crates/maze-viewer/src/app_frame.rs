// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-frame tick and window-event handling for the App.

use crate::{
    app::App,
    input,
    render::{self, FrameInput, RenderOutcome},
    scene, ui,
};
use egui_winit::winit::event::WindowEvent;
use std::time::Instant;

/// Longest simulated step; a stalled frame must not tunnel through walls.
const MAX_DT: f32 = 0.05;

impl App {
    pub fn handle_window_event(
        &mut self,
        window_id: egui_winit::winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(idx) = self
            .viewports
            .iter()
            .position(|v| v.window.id() == window_id)
        else {
            return;
        };
        match &event {
            WindowEvent::CloseRequested => {
                self.exit_requested = true;
                return;
            }
            WindowEvent::Resized(size) => self.viewports[idx].gpu.resize(*size),
            _ => {}
        }

        let outcome = input::handle_window_event(&event, &mut self.viewer.input);
        if let Some(ev) = outcome.ui_event {
            self.apply_ui_event(ev);
        }

        let vp = &mut self.viewports[idx];
        let _ = vp.egui_state.on_window_event(vp.window, &event);
    }

    pub fn frame(&mut self) {
        let Some(vp) = self.viewports.first_mut() else {
            return;
        };
        let win = vp.window;
        let raw_input = vp.egui_state.take_egui_input(win);
        let width_px = vp.gpu.config.width;
        let aspect = vp.gpu.aspect();

        let now = Instant::now();
        let frame_secs = now.duration_since(self.viewer.last_frame).as_secs_f32();
        self.viewer.last_frame = now;
        self.viewer.perf.push(frame_secs * 1000.0);
        if self.ui.playing() {
            self.viewer.tick(frame_secs.min(MAX_DT), width_px);
        } else {
            self.viewer.input.take_mouse_delta();
        }

        self.notices.prune(now);
        let notices = self.notices.visible(now);
        let view_proj = self.viewer.view_proj(aspect);
        let instances = scene::block_instances(&self.viewer.world);
        let prev_vsync = self.viewer.prefs.hud.vsync;

        let egui_ctx = self.egui_ctx.clone();
        let full_output = egui_ctx.run(raw_input, |ctx| ui::draw(ctx, self, &notices));

        let Some(vp) = self.viewports.first_mut() else {
            return;
        };
        vp.egui_state
            .handle_platform_output(win, full_output.platform_output);
        if self.viewer.prefs.hud.vsync != prev_vsync {
            vp.gpu.set_vsync(self.viewer.prefs.hud.vsync);
        }

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_desc = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [vp.gpu.config.width, vp.gpu.config.height],
            pixels_per_point: win.scale_factor() as f32,
        };

        let outcome = render::render_frame(
            vp,
            FrameInput {
                instances: &instances,
                view_proj,
                wireframe: self.viewer.prefs.hud.wireframe,
                paint_jobs,
                textures_delta: full_output.textures_delta,
                screen_desc,
            },
        );
        if matches!(outcome, RenderOutcome::Fatal) {
            self.exit_requested = true;
        }

        win.request_redraw();
    }
}
