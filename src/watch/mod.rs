// src/watch/mod.rs

//! File watching and change detection.
//!
//! This module is responsible for:
//! - Compiling per-unit watch glob profiles plus the shared exclude set.
//! - Wiring up a cross-platform filesystem watcher (`notify`).
//! - Content hashing so a trigger whose sources haven't actually changed
//!   can be skipped.
//!
//! It does **not** run any unit itself; it only turns filesystem changes
//! into unit-level trigger events for the runtime.

pub mod hash;
pub mod patterns;
pub mod watcher;

pub use hash::compute_unit_hash;
pub use patterns::{UnitWatchProfile, build_exclude_set, build_unit_watch_profiles};
pub use watcher::{WatcherHandle, spawn_watcher};
