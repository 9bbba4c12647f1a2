// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Stateless egui render helpers for the HUD, minimap and pause overlays.

use crate::{
    app::App,
    core::{Overlay, Phase},
    scene::{MinimapView, PLAYER_DOT},
    ui_state::UiEvent,
};
use egui::{self, Context};
use maze_app_core::{
    notice::{NoticeLevel, NoticeView},
    prefs::MazePrefs,
};
use maze_core::{MovementResolver, WallMap};

/// On-screen pixels per minimap tile.
const MINIMAP_ZOOM: f32 = 2.0;

pub fn draw(ctx: &Context, app: &mut App, notices: &[NoticeView]) {
    draw_hud(ctx, app, notices);
    if app.viewer.prefs.hud.show_minimap {
        draw_minimap(ctx, app);
    }
    if app.ui.phase == Phase::Paused {
        match app.ui.overlay {
            Overlay::None => draw_pause_menu(ctx, app),
            Overlay::Settings => draw_settings(ctx, app),
        }
    }
}

fn draw_hud(ctx: &Context, app: &App, notices: &[NoticeView]) {
    if app.viewer.prefs.hud.show_fps {
        egui::Area::new("perf".into())
            .anchor(egui::Align2::LEFT_TOP, egui::vec2(12.0, 12.0))
            .show(ctx, |ui| {
                ui.label(format!(
                    "FPS: {:.1} ({:.2} ms)",
                    app.viewer.perf.fps(),
                    app.viewer.perf.mean_ms()
                ));
            });
    }

    egui::Area::new("stats".into())
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(12.0, -12.0))
        .show(ctx, |ui| {
            let world = &app.viewer.world;
            let p = world.player().anchor();
            let tile = world.player_tile();
            ui.label(format!(
                "pos ({:.2}, {:.2}, {:.2}) | tile ({}, {})",
                p.x(),
                p.y(),
                p.z(),
                tile.x,
                tile.y
            ));
            let contacts = app.viewer.last_resolution.map_or(0, |r| r.contacts);
            ui.label(format!(
                "blocks {} | contacts {} | speed {:.1} m/s",
                world.walls().len(),
                contacts,
                current_speed(world.resolver(), app.viewer.input.sprinting())
            ));
            ui.label("WASD move, Space/Shift up/down, R sprint, Esc pause");
        });

    egui::Area::new("notices".into())
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 12.0))
        .show(ctx, |ui| {
            for n in notices {
                let color = match n.level {
                    NoticeLevel::Info => egui::Color32::LIGHT_GRAY,
                    NoticeLevel::Warn => egui::Color32::from_rgb(255, 190, 60),
                };
                let text = if n.repeats > 1 {
                    format!("{} (x{})", n.text, n.repeats)
                } else {
                    n.text.clone()
                };
                ui.colored_label(color.gamma_multiply(n.remaining.clamp(0.2, 1.0)), text);
            }
        });
}

/// Walking speed shown on the HUD.
fn current_speed(resolver: &MovementResolver, sprinting: bool) -> f32 {
    if sprinting {
        resolver.speed() * resolver.sprint_factor()
    } else {
        resolver.speed()
    }
}

fn draw_minimap(ctx: &Context, app: &App) {
    let Some(texture) = &app.viewer.minimap else {
        return;
    };
    let world = &app.viewer.world;
    let map = world.map();
    let tiles = app.viewer.prefs.hud.minimap_tiles;
    let view = MinimapView::new(world.player_tile(), tiles, map.width(), map.height());
    let shown = egui::vec2(
        tiles.min(map.width()) as f32,
        tiles.min(map.height()) as f32,
    ) * MINIMAP_ZOOM;

    egui::Area::new("minimap".into())
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .show(ctx, |ui| {
            let (rect, _) = ui.allocate_exact_size(shown, egui::Sense::hover());
            let painter = ui.painter_at(rect);
            painter.image(texture.id(), rect, view.uv, egui::Color32::WHITE);
            if let Some(dot) = view.dot {
                painter.circle_filled(rect.min + dot * rect.size(), MINIMAP_ZOOM * 1.5, PLAYER_DOT);
            }
        });
}

fn draw_pause_menu(ctx: &Context, app: &mut App) {
    egui::Window::new("Paused")
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                if ui.button("Resume").clicked() {
                    app.apply_ui_event(UiEvent::ResumeClicked);
                }
                if ui.button("Settings").clicked() {
                    app.apply_ui_event(UiEvent::OpenSettings);
                }
                if ui.button("Quit").clicked() {
                    app.apply_ui_event(UiEvent::QuitClicked);
                }
            });
        });
}

fn draw_settings(ctx: &Context, app: &mut App) {
    egui::Window::new("Settings")
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            let prefs = &mut app.viewer.prefs;
            ui.heading("Look");
            ui.add(
                egui::Slider::new(&mut prefs.look.sweep_degrees, 30.0..=1080.0)
                    .text("degrees per window width"),
            );
            ui.add(egui::Slider::new(&mut prefs.look.fov_degrees, 30.0..=120.0).text("field of view"));
            ui.checkbox(&mut prefs.look.invert_y, "Invert Y");
            ui.separator();
            ui.heading("HUD");
            ui.checkbox(&mut prefs.hud.show_minimap, "Minimap");
            ui.add(egui::Slider::new(&mut prefs.hud.minimap_tiles, 8..=400).text("minimap tiles"));
            ui.checkbox(&mut prefs.hud.show_fps, "FPS counter");
            ui.checkbox(&mut prefs.hud.wireframe, "Wireframe");
            ui.checkbox(&mut prefs.hud.vsync, "VSync");
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    app.apply_ui_event(UiEvent::SavePrefs);
                }
                if ui.button("Defaults").clicked() {
                    app.viewer.apply_prefs(MazePrefs::default());
                }
                if ui.button("Close").clicked() {
                    app.apply_ui_event(UiEvent::CloseOverlay);
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hud_speed_follows_sprint() {
        let r = MovementResolver::new(3.0, 2.5);
        assert!((current_speed(&r, false) - 3.0).abs() < 1e-6);
        assert!((current_speed(&r, true) - 7.5).abs() < 1e-6);
    }
}
