// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Best-effort prefs port for the frame loop.

use tracing::warn;

use crate::prefs::MazePrefs;
use crate::prefs_store::{PrefsService, PrefsStore};

/// Prefs access that never fails the caller; problems are logged.
pub trait PrefsPort {
    /// Stored prefs, or `None` if missing or unreadable.
    fn load_prefs(&self) -> Option<MazePrefs>;
    /// Persists prefs; returns `false` if the write failed.
    fn save_prefs(&self, prefs: &MazePrefs) -> bool;
}

impl<S: PrefsStore> PrefsPort for PrefsService<S> {
    fn load_prefs(&self) -> Option<MazePrefs> {
        match self.load() {
            Ok(prefs) => prefs,
            Err(err) => {
                warn!(key = self.key(), %err, "failed to load prefs; using defaults");
                None
            }
        }
    }

    fn save_prefs(&self, prefs: &MazePrefs) -> bool {
        match self.save(prefs) {
            Ok(()) => true,
            Err(err) => {
                warn!(key = self.key(), %err, "failed to save prefs");
                false
            }
        }
    }
}
