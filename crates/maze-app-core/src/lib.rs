// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for the maze viewer (prefs, storage port,
//! HUD notices). Nothing here depends on a window or GPU crate.

pub mod notice;
pub mod prefs;
pub mod prefs_port;
pub mod prefs_store;
