// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Input handling: an explicit input context fed from winit events and read
//! by the frame tick.

use std::collections::HashSet;

use egui_winit::winit::{
    event::{ElementState, KeyEvent, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};
use glam::Vec3;

use crate::{camera::FpsCamera, ui_state::UiEvent};

/// Keys held, mouse motion since the last tick, and whether the cursor is
/// captured. Owned by the viewer state and passed by reference.
#[derive(Debug, Default)]
pub struct InputContext {
    held: HashSet<KeyCode>,
    mouse: (f64, f64),
    captured: bool,
}

impl InputContext {
    pub fn press(&mut self, key: KeyCode) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    pub fn is_down(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Accumulates raw motion; ignored while the cursor is free.
    pub fn add_mouse_motion(&mut self, dx: f64, dy: f64) {
        if self.captured {
            self.mouse.0 += dx;
            self.mouse.1 += dy;
        }
    }

    pub fn take_mouse_delta(&mut self) -> (f32, f32) {
        let (dx, dy) = std::mem::take(&mut self.mouse);
        (dx as f32, dy as f32)
    }

    pub fn captured(&self) -> bool {
        self.captured
    }

    /// Capturing or releasing the cursor drops held keys and pending motion.
    pub fn set_captured(&mut self, on: bool) {
        self.captured = on;
        self.held.clear();
        self.mouse = (0.0, 0.0);
    }

    pub fn sprinting(&self) -> bool {
        self.is_down(KeyCode::KeyR)
    }

    /// W/S along the horizontal forward, A/D strafe, Space up, Left Shift down.
    /// Not normalised.
    pub fn move_intent(&self, camera: &FpsCamera) -> Vec3 {
        let fwd = camera.flat_forward();
        let right = camera.right();
        let mut dir = Vec3::ZERO;
        for (key, v) in [
            (KeyCode::KeyW, fwd),
            (KeyCode::KeyS, -fwd),
            (KeyCode::KeyD, right),
            (KeyCode::KeyA, -right),
            (KeyCode::Space, Vec3::Y),
            (KeyCode::ShiftLeft, -Vec3::Y),
        ] {
            if self.is_down(key) {
                dir += v;
            }
        }
        dir
    }
}

#[derive(Default)]
pub struct InputOutcome {
    pub ui_event: Option<UiEvent>,
}

pub fn handle_window_event(event: &WindowEvent, input: &mut InputContext) -> InputOutcome {
    let mut out = InputOutcome::default();
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            out.ui_event = handle_key(event, input);
        }
        WindowEvent::Focused(false) => {
            out.ui_event = Some(UiEvent::FocusLost);
        }
        _ => {}
    }
    out
}

fn handle_key(event: &KeyEvent, input: &mut InputContext) -> Option<UiEvent> {
    let PhysicalKey::Code(code) = event.physical_key else {
        return None;
    };
    key_transition(code, event.state, event.repeat, input)
}

fn key_transition(
    code: KeyCode,
    state: ElementState,
    repeat: bool,
    input: &mut InputContext,
) -> Option<UiEvent> {
    match state {
        ElementState::Pressed => {
            input.press(code);
            if repeat {
                return None;
            }
            match code {
                KeyCode::Escape => Some(UiEvent::EscapePressed),
                KeyCode::Enter | KeyCode::NumpadEnter => Some(UiEvent::EnterPressed),
                _ => None,
            }
        }
        ElementState::Released => {
            input.release(code);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn escape_and_enter_map_to_ui_events() {
        let mut input = InputContext::default();
        assert!(matches!(
            key_transition(KeyCode::Escape, ElementState::Pressed, false, &mut input),
            Some(UiEvent::EscapePressed)
        ));
        assert!(key_transition(KeyCode::Escape, ElementState::Pressed, true, &mut input).is_none());
        assert!(matches!(
            key_transition(KeyCode::NumpadEnter, ElementState::Pressed, false, &mut input),
            Some(UiEvent::EnterPressed)
        ));
    }

    #[test]
    fn held_keys_track_press_and_release() {
        let mut input = InputContext::default();
        key_transition(KeyCode::KeyR, ElementState::Pressed, false, &mut input);
        assert!(input.sprinting());
        key_transition(KeyCode::KeyR, ElementState::Released, false, &mut input);
        assert!(!input.sprinting());
    }

    #[test]
    fn mouse_motion_needs_capture() {
        let mut input = InputContext::default();
        input.add_mouse_motion(5.0, 5.0);
        assert_eq!(input.take_mouse_delta(), (0.0, 0.0));
        input.set_captured(true);
        input.add_mouse_motion(3.0, -1.0);
        input.add_mouse_motion(2.0, -1.0);
        assert_eq!(input.take_mouse_delta(), (5.0, -2.0));
        assert_eq!(input.take_mouse_delta(), (0.0, 0.0));
    }

    #[test]
    fn forward_ignores_pitch() {
        let mut cam = FpsCamera::default();
        cam.look(0.0, -500.0, 0.1, false);
        let mut input = InputContext::default();
        input.press(KeyCode::KeyW);
        let dir = input.move_intent(&cam);
        assert_relative_eq!(dir.y, 0.0);
        assert_relative_eq!(dir.x, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn opposite_keys_cancel() {
        let cam = FpsCamera::default();
        let mut input = InputContext::default();
        input.press(KeyCode::KeyA);
        input.press(KeyCode::KeyD);
        input.press(KeyCode::Space);
        input.press(KeyCode::ShiftLeft);
        assert_eq!(input.move_intent(&cam), Vec3::ZERO);
    }
}
