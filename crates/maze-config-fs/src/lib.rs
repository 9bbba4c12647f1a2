// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filesystem-backed [`PrefsStore`]: one `<key>.json` file per blob under
//! the platform config directory (e.g. `~/.config/playmz`).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use maze_app_core::prefs_store::{PrefsError, PrefsStore};

/// Prefs blobs stored as files in one directory.
#[derive(Debug, Clone)]
pub struct FsPrefsStore {
    base: PathBuf,
}

impl FsPrefsStore {
    /// Store rooted at the user config directory, created if absent.
    pub fn new() -> Result<Self, PrefsError> {
        let dirs = ProjectDirs::from("dev", "flyingrobots", "playmz")
            .ok_or_else(|| PrefsError::Unavailable("could not resolve config dir".into()))?;
        Self::at(dirs.config_dir())
    }

    /// Store rooted at `base`, created if absent.
    pub fn at(base: impl AsRef<Path>) -> Result<Self, PrefsError> {
        let base = base.as_ref().to_path_buf();
        fs::create_dir_all(&base)?;
        Ok(Self { base })
    }

    /// Directory holding the blobs.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// File backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl PrefsStore for FsPrefsStore {
    fn read(&self, key: &str) -> Result<Vec<u8>, PrefsError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(PrefsError::Missing),
            Err(err) => Err(PrefsError::Io(err)),
        }
    }

    fn write(&self, key: &str, data: &[u8]) -> Result<(), PrefsError> {
        let path = self.path_for(key);
        // Atomic replace.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}
