// src/watch/watcher.rs

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use globset::GlobSet;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::engine::RuntimeEvent;
use crate::watch::patterns::UnitWatchProfile;

/// Handle for the filesystem watcher.
///
/// This exists mainly so the underlying `RecommendedWatcher` is kept alive
/// for as long as needed. Dropping this handle stops file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Spawn a filesystem watcher observing `root` recursively, sending
/// `RuntimeEvent::UnitTriggered` for every unit whose profile matches a
/// changed path.
///
/// Each filesystem event produces at most one trigger per unit, no matter
/// how many of its paths matched.
pub fn spawn_watcher(
    root: impl Into<PathBuf>,
    profiles: Vec<UnitWatchProfile>,
    excludes: GlobSet,
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) -> Result<WatcherHandle> {
    let root = root.into();
    let root = root.canonicalize().unwrap_or_else(|_| root.clone()); // best-effort

    let profiles = Arc::new(profiles);

    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel::<Event>();

    // Closure called synchronously by notify whenever an event arrives.
    let mut watcher = RecommendedWatcher::new(
        {
            let event_tx = event_tx.clone();
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if let Err(err) = event_tx.send(event) {
                        // We can't log via tracing here easily, so fallback to stderr.
                        eprintln!("sitepipe: failed to forward notify event: {err}");
                    }
                }
                Err(err) => {
                    eprintln!("sitepipe: file watch error: {err}");
                }
            }
        },
        Config::default(),
    )?;

    watcher.watch(&root, RecursiveMode::Recursive)?;

    info!("file watcher started on {:?}", root);

    // Async task that consumes notify events and forwards unit triggers to
    // the runtime.
    let async_root = root.clone();
    let async_profiles = Arc::clone(&profiles);
    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            debug!("received notify event: {:?}", event);

            let mut triggered = BTreeSet::new();
            for path in &event.paths {
                let Some(rel_str) = relative_str(&async_root, path) else {
                    debug!(
                        "ignoring path {:?} outside watch root {:?}",
                        path, async_root
                    );
                    continue;
                };
                if excludes.is_match(&rel_str) {
                    continue;
                }
                for profile in async_profiles.iter() {
                    if profile.matches(&rel_str) {
                        debug!(
                            unit = %profile.unit(),
                            path = %rel_str,
                            "watch match -> triggering unit"
                        );
                        triggered.insert(profile.unit());
                    }
                }
            }

            for unit in triggered {
                if let Err(err) = runtime_tx.send(RuntimeEvent::UnitTriggered { unit }).await {
                    warn!("failed to send RuntimeEvent::UnitTriggered: {err}");
                    // If the runtime channel is closed, there's no point
                    // keeping the watcher loop alive.
                    return;
                }
            }
        }

        debug!("file watcher loop ended");
    });

    Ok(WatcherHandle { _inner: watcher })
}

/// Convert a path into a string relative to `root`, with forward slashes.
///
/// Returns `None` if the path is not under `root` and cannot be relativized.
fn relative_str(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let s = rel.to_string_lossy().replace('\\', "/");
    Some(s)
}
