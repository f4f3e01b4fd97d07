// src/engine/runtime.rs

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::server::ReloadSignal;
use crate::units::{self, BuildContext, UnitKind};
use crate::watch::compute_unit_hash;

/// Result of a unit rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitOutcome {
    Success,
    Failed,
}

/// Events sent into the runtime from the watcher, rebuild tasks, or
/// external signals.
///
/// The idea is that:
/// - the watcher sends `UnitTriggered`
/// - spawned rebuild tasks send `UnitCompleted`
/// - Ctrl-C handling sends `ShutdownRequested`
#[derive(Debug, Clone, Copy)]
pub enum RuntimeEvent {
    UnitTriggered { unit: UnitKind },
    UnitCompleted { unit: UnitKind, outcome: UnitOutcome },
    ShutdownRequested,
}

/// Per-unit rebuild state.
///
/// A unit is either idle or running; triggers that arrive while it runs
/// collapse into a single pending rerun, no matter how many there were.
#[derive(Debug, Default)]
struct UnitState {
    running: bool,
    pending: bool,
    /// Source hash computed when the in-flight rebuild started; recorded as
    /// the unit's last built hash only if the rebuild succeeds.
    in_flight_hash: Option<String>,
}

/// The watch-session orchestration runtime.
///
/// Responsibilities:
/// - Consume `RuntimeEvent`s from the watcher / rebuild tasks / Ctrl-C.
/// - Skip triggers whose aggregate source hash is unchanged.
/// - Rerun the affected unit, never letting a transform error end the
///   session.
/// - Push the reload notification for units that don't notify themselves.
pub struct Runtime {
    ctx: Arc<BuildContext>,
    states: HashMap<UnitKind, UnitState>,
    last_hashes: HashMap<UnitKind, String>,

    events_rx: mpsc::Receiver<RuntimeEvent>,
    /// Cloned into every spawned rebuild task for its completion event.
    events_tx: mpsc::Sender<RuntimeEvent>,
}

impl Runtime {
    pub fn new(
        ctx: Arc<BuildContext>,
        events_rx: mpsc::Receiver<RuntimeEvent>,
        events_tx: mpsc::Sender<RuntimeEvent>,
    ) -> Self {
        Self {
            ctx,
            states: HashMap::new(),
            last_hashes: HashMap::new(),
            events_rx,
            events_tx,
        }
    }

    /// Main event loop; runs until shutdown is requested.
    pub async fn run(mut self) -> Result<()> {
        info!("watch runtime started");

        // Seed hashes from the tree the initial build just consumed, so a
        // spurious event right after startup doesn't force a rebuild.
        for kind in UnitKind::BUILD {
            if let Ok(hash) = compute_unit_hash(&self.ctx.paths, kind) {
                self.last_hashes.insert(kind, hash);
            }
        }

        while let Some(event) = self.events_rx.recv().await {
            debug!(?event, "runtime received event");

            match event {
                RuntimeEvent::UnitTriggered { unit } => self.handle_trigger(unit),
                RuntimeEvent::UnitCompleted { unit, outcome } => {
                    self.handle_completion(unit, outcome)
                }
                RuntimeEvent::ShutdownRequested => {
                    info!("shutdown requested, stopping runtime");
                    break;
                }
            }
        }

        info!("watch runtime exiting");
        Ok(())
    }

    fn handle_trigger(&mut self, unit: UnitKind) {
        {
            let state = self.states.entry(unit).or_default();
            if state.running {
                state.pending = true;
                debug!(unit = %unit, "rebuild in flight, queueing rerun");
                return;
            }
        }

        let hash = match compute_unit_hash(&self.ctx.paths, unit) {
            Ok(hash) => {
                if self.last_hashes.get(&unit) == Some(&hash) {
                    debug!(unit = %unit, "sources unchanged, skipping rebuild");
                    return;
                }
                Some(hash)
            }
            Err(err) => {
                debug!(unit = %unit, error = %err, "hash computation failed, rebuilding anyway");
                None
            }
        };

        self.start_rebuild(unit, hash);
    }

    fn start_rebuild(&mut self, unit: UnitKind, hash: Option<String>) {
        let state = self.states.entry(unit).or_default();
        state.running = true;
        state.pending = false;
        state.in_flight_hash = hash;

        info!(unit = %unit, "rebuilding");

        let ctx = Arc::clone(&self.ctx);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let run_ctx = Arc::clone(&ctx);
            let result = tokio::task::spawn_blocking(move || units::run(&run_ctx, unit)).await;

            let outcome = match result {
                Ok(Ok(())) => UnitOutcome::Success,
                Ok(Err(err)) => {
                    error!(unit = %unit, error = %err, "rebuild failed");
                    UnitOutcome::Failed
                }
                Err(err) => {
                    error!(unit = %unit, error = %err, "rebuild task panicked");
                    UnitOutcome::Failed
                }
            };

            let _ = tx.send(RuntimeEvent::UnitCompleted { unit, outcome }).await;
        });
    }

    fn handle_completion(&mut self, unit: UnitKind, outcome: UnitOutcome) {
        let (pending, hash) = {
            let state = self.states.entry(unit).or_default();
            state.running = false;
            (
                std::mem::take(&mut state.pending),
                state.in_flight_hash.take(),
            )
        };

        match outcome {
            UnitOutcome::Success => {
                info!(unit = %unit, "rebuild completed");
                match hash {
                    Some(hash) => {
                        self.last_hashes.insert(unit, hash);
                    }
                    None => {
                        self.last_hashes.remove(&unit);
                    }
                }
                if !unit.notifies_itself() {
                    self.ctx.reload.notify(ReloadSignal::Reload);
                }
            }
            UnitOutcome::Failed => {
                // Already logged by the rebuild task. Forget the last good
                // hash so the very next trigger retries even if the sources
                // are byte-identical.
                self.last_hashes.remove(&unit);
            }
        }

        if pending {
            debug!(unit = %unit, "running queued rebuild");
            self.handle_trigger(unit);
        }
    }
}
