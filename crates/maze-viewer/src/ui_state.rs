// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pure state transitions for the viewer UI (pause, resume, settings, quit).

use crate::core::{Overlay, Phase, UiState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    EscapePressed,
    EnterPressed,
    FocusLost,
    ResumeClicked,
    OpenSettings,
    CloseOverlay,
    SavePrefs,
    QuitClicked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    CaptureCursor(bool),
    SavePrefs,
    Notice(String),
    Quit,
}

pub fn reduce(ui: &UiState, ev: UiEvent) -> (UiState, Vec<UiEffect>) {
    let mut next = ui.clone();
    let mut fx = Vec::new();
    match (ui.phase, ev) {
        (Phase::Playing, UiEvent::EscapePressed | UiEvent::FocusLost) => {
            next.phase = Phase::Paused;
            fx.push(UiEffect::CaptureCursor(false));
        }
        (Phase::Paused, UiEvent::EscapePressed) => {
            if ui.overlay == Overlay::None {
                fx.push(UiEffect::Quit);
            } else {
                next.overlay = Overlay::None;
            }
        }
        (Phase::Paused, UiEvent::EnterPressed | UiEvent::ResumeClicked) => {
            next.phase = Phase::Playing;
            next.overlay = Overlay::None;
            fx.push(UiEffect::CaptureCursor(true));
        }
        (Phase::Paused, UiEvent::OpenSettings) => next.overlay = Overlay::Settings,
        (_, UiEvent::CloseOverlay) => next.overlay = Overlay::None,
        (_, UiEvent::SavePrefs) => {
            fx.push(UiEffect::SavePrefs);
            next.overlay = Overlay::None;
        }
        (_, UiEvent::QuitClicked) => fx.push(UiEffect::Quit),
        (Phase::Playing, UiEvent::EnterPressed | UiEvent::ResumeClicked | UiEvent::OpenSettings)
        | (Phase::Paused, UiEvent::FocusLost) => {}
    }
    if next.phase != ui.phase {
        let msg = if next.playing() { "Resumed" } else { "Paused: Enter resumes, Esc quits" };
        fx.push(UiEffect::Notice(msg.into()));
    }
    (next, fx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing() -> UiState {
        UiState {
            phase: Phase::Playing,
            overlay: Overlay::None,
        }
    }

    #[test]
    fn escape_pauses_then_quits() {
        let (paused, fx) = reduce(&playing(), UiEvent::EscapePressed);
        assert_eq!(paused.phase, Phase::Paused);
        assert!(fx.contains(&UiEffect::CaptureCursor(false)));
        let (_, fx) = reduce(&paused, UiEvent::EscapePressed);
        assert_eq!(fx, vec![UiEffect::Quit]);
    }

    #[test]
    fn enter_resumes_and_captures() {
        let (ui, fx) = reduce(&UiState::new(), UiEvent::EnterPressed);
        assert!(ui.playing());
        assert!(fx.contains(&UiEffect::CaptureCursor(true)));
        assert!(fx.iter().any(|f| matches!(f, UiEffect::Notice(_))));
    }

    #[test]
    fn escape_closes_settings_before_quitting() {
        let (ui, _) = reduce(&UiState::new(), UiEvent::OpenSettings);
        assert_eq!(ui.overlay, Overlay::Settings);
        let (ui, fx) = reduce(&ui, UiEvent::EscapePressed);
        assert_eq!(ui.overlay, Overlay::None);
        assert!(fx.is_empty());
    }

    #[test]
    fn settings_only_open_while_paused() {
        let (ui, fx) = reduce(&playing(), UiEvent::OpenSettings);
        assert_eq!(ui, playing());
        assert!(fx.is_empty());
    }

    #[test]
    fn focus_loss_pauses() {
        let (ui, fx) = reduce(&playing(), UiEvent::FocusLost);
        assert_eq!(ui.phase, Phase::Paused);
        assert!(fx.contains(&UiEffect::CaptureCursor(false)));
    }

    #[test]
    fn save_closes_overlay_with_effect() {
        let (ui, _) = reduce(&UiState::new(), UiEvent::OpenSettings);
        let (ui, fx) = reduce(&ui, UiEvent::SavePrefs);
        assert_eq!(ui.overlay, Overlay::None);
        assert_eq!(fx, vec![UiEffect::SavePrefs]);
    }
}
