// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Domain-level UI state for the maze viewer (play/pause phase and overlays).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Cursor captured, world advancing.
    Playing,
    /// Cursor free, world frozen.
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    None,
    Settings,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub phase: Phase,
    pub overlay: Overlay,
}

impl UiState {
    /// Starts paused; Enter or Resume captures the cursor.
    pub fn new() -> Self {
        Self {
            phase: Phase::Paused,
            overlay: Overlay::None,
        }
    }

    pub fn playing(&self) -> bool {
        self.phase == Phase::Playing
    }
}
