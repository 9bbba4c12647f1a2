// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Integration tests for the HUD notice board and the prefs port.

use std::time::{Duration, Instant};

use maze_app_core::notice::{NoticeBoard, NoticeLevel};
use maze_app_core::prefs::MazePrefs;
use maze_app_core::prefs_port::PrefsPort;
use maze_app_core::prefs_store::{MemoryStore, PrefsError, PrefsService, PrefsStore};

const SEC: Duration = Duration::from_secs(1);

#[test]
fn repeated_notice_folds_into_one() {
    let t0 = Instant::now();
    let mut board = NoticeBoard::new(4);
    let a = board.post(NoticeLevel::Info, "paused", SEC, t0);
    let b = board.post(NoticeLevel::Info, "paused", SEC, t0 + Duration::from_millis(200));
    assert_eq!(a, b);
    let live = board.visible(t0 + Duration::from_millis(300));
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].repeats, 2);
    assert!(live[0].remaining > 0.85);
}

#[test]
fn capacity_evicts_oldest() {
    let t0 = Instant::now();
    let mut board = NoticeBoard::new(2);
    board.post(NoticeLevel::Info, "one", SEC, t0);
    board.post(NoticeLevel::Info, "two", SEC, t0);
    board.post(NoticeLevel::Warn, "three", SEC, t0);
    let texts: Vec<_> = board.visible(t0).into_iter().map(|n| n.text).collect();
    assert_eq!(texts, ["two", "three"]);
}

#[test]
fn expired_notices_are_pruned() {
    let t0 = Instant::now();
    let mut board = NoticeBoard::new(4);
    board.post(NoticeLevel::Warn, "prefs not saved", SEC, t0);
    assert!(board.visible(t0 + 2 * SEC).is_empty());
    assert!(!board.is_empty());
    board.prune(t0 + 2 * SEC);
    assert!(board.is_empty());
}

struct BrokenStore;

impl PrefsStore for BrokenStore {
    fn read(&self, _key: &str) -> Result<Vec<u8>, PrefsError> {
        Err(PrefsError::Unavailable("disk on fire".into()))
    }
    fn write(&self, _key: &str, _data: &[u8]) -> Result<(), PrefsError> {
        Err(PrefsError::Unavailable("disk on fire".into()))
    }
}

#[test]
fn port_swallows_store_failures() {
    let port = PrefsService::new(BrokenStore);
    assert_eq!(port.load_prefs(), None);
    assert!(!port.save_prefs(&MazePrefs::default()));
}

#[test]
fn port_round_trips_through_memory() {
    let port = PrefsService::new(MemoryStore::new());
    let mut prefs = MazePrefs::default();
    prefs.hud.show_fps = false;
    assert!(port.save_prefs(&prefs));
    assert_eq!(port.load_prefs(), Some(prefs));
}
