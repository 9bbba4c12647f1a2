// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Top-level application wiring and event loop handler.

use std::time::{Duration, Instant};

use crate::{
    core::UiState,
    maze_image::MazeImage,
    ui_state::{self, UiEffect, UiEvent},
    viewer_state::ViewerState,
    viewport::Viewport,
    Args,
};
use egui_winit::winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes},
};
use egui_winit::State as EguiWinitState;
use maze_app_core::{
    notice::{NoticeBoard, NoticeLevel},
    prefs_port::PrefsPort,
    prefs_store::{PrefsError, PrefsService},
};
use maze_config_fs::FsPrefsStore;
use tracing::{error, info, warn};

const NOTICE_TTL: Duration = Duration::from_secs(4);

pub struct App {
    pub viewports: Vec<Viewport>,
    pub egui_ctx: egui::Context,
    pub prefs: Option<Box<dyn PrefsPort>>,
    pub notices: NoticeBoard,
    pub ui: UiState,
    pub viewer: ViewerState,
    pub exit_requested: bool,
}

impl App {
    pub fn new(args: &Args, maze: MazeImage) -> Self {
        let egui_ctx = egui::Context::default();
        let mut notices = NoticeBoard::new(8);
        let now = Instant::now();

        let service = open_prefs(args.reset_prefs);
        let loaded = match &service {
            Ok(svc) if !args.reset_prefs => svc.load_prefs(),
            Ok(_) => None,
            Err(err) => {
                warn!(%err, "prefs store unavailable");
                notices.post(
                    NoticeLevel::Warn,
                    "Prefs store unavailable; settings won't persist",
                    NOTICE_TTL,
                    now,
                );
                None
            }
        };
        let prefs = service
            .ok()
            .map(|svc| Box::new(svc) as Box<dyn PrefsPort>);
        let mut initial = loaded.unwrap_or_default();
        if args.vsync {
            initial.hud.vsync = true;
        }

        let MazeImage { bitmap, minimap } = maze;
        let mut viewer =
            ViewerState::new(bitmap, args.world_config(), args.resolver(), initial);
        viewer.minimap =
            Some(egui_ctx.load_texture("minimap", minimap, egui::TextureOptions::NEAREST));

        notices.post(
            NoticeLevel::Info,
            "Press Enter to play",
            NOTICE_TTL,
            now,
        );

        Self {
            viewports: Vec::new(),
            egui_ctx,
            prefs,
            notices,
            ui: UiState::new(),
            viewer,
            exit_requested: false,
        }
    }

    pub fn apply_ui_event(&mut self, ev: UiEvent) {
        let (next, effects) = ui_state::reduce(&self.ui, ev);
        self.ui = next;
        for eff in effects {
            match eff {
                UiEffect::CaptureCursor(on) => {
                    if let Some(vp) = self.viewports.first() {
                        vp.capture_cursor(on);
                    }
                    self.viewer.input.set_captured(on);
                }
                UiEffect::SavePrefs => {
                    let saved = self
                        .prefs
                        .as_ref()
                        .is_some_and(|p| p.save_prefs(&self.viewer.export_prefs()));
                    let (level, text) = if saved {
                        (NoticeLevel::Info, "Settings saved")
                    } else {
                        (NoticeLevel::Warn, "Settings could not be saved")
                    };
                    self.notices.post(level, text, NOTICE_TTL, Instant::now());
                }
                UiEffect::Notice(text) => {
                    self.notices
                        .post(NoticeLevel::Info, text, NOTICE_TTL, Instant::now());
                }
                UiEffect::Quit => {
                    info!("quit requested");
                    self.exit_requested = true;
                }
            }
        }
    }
}

fn open_prefs(reset: bool) -> Result<PrefsService<FsPrefsStore>, PrefsError> {
    let service = PrefsService::new(FsPrefsStore::new()?);
    if reset {
        service.reset()?;
        info!(key = service.key(), "prefs reset to defaults");
    }
    Ok(service)
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if !self.viewports.is_empty() {
            return;
        }
        let window = match event_loop.create_window(
            WindowAttributes::default()
                .with_title("playmz")
                .with_inner_size(LogicalSize::new(1280.0, 720.0))
                .with_visible(true),
        ) {
            Ok(w) => w,
            Err(err) => {
                error!(%err, "window creation failed");
                event_loop.exit();
                return;
            }
        };
        let window: &'static Window = Box::leak(Box::new(window));
        let mut gpu = match pollster::block_on(crate::gpu::Gpu::new(window)) {
            Ok(gpu) => gpu,
            Err(err) => {
                error!(%err, "gpu init failed");
                event_loop.exit();
                return;
            }
        };
        gpu.set_vsync(self.viewer.prefs.hud.vsync);
        let egui_state = EguiWinitState::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            event_loop,
            None,
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &gpu.device,
            gpu.config.format,
            egui_wgpu::RendererOptions::default(),
        );
        self.viewports.push(Viewport {
            window,
            gpu,
            egui_state,
            egui_renderer,
        });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: egui_winit::winit::window::WindowId,
        event: WindowEvent,
    ) {
        self.handle_window_event(window_id, event);
        if self.exit_requested {
            event_loop.exit();
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.viewer.input.add_mouse_motion(delta.0, delta.1);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }
        if self.viewports.is_empty() {
            return;
        }
        self.frame();
    }
}
