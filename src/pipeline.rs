// src/pipeline.rs

//! Pipeline composition: `series` and `parallel` combinators over transform
//! units, plus the named pipelines exposed on the CLI.
//!
//! Units are synchronous, so each run goes through `spawn_blocking`;
//! `series` awaits one unit at a time and stops at the first failure, while
//! `parallel` spawns everything at once and joins. In a parallel
//! composition a failing unit never prevents its siblings from finishing:
//! they were all started up front, and every failure is surfaced before the
//! composite result is reported.

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, error};

use crate::units::{self, BuildContext, UnitKind};

/// Run `kinds` strictly in order; the first failure aborts the rest.
pub async fn series(ctx: &Arc<BuildContext>, kinds: &[UnitKind]) -> Result<()> {
    for &kind in kinds {
        let run_ctx = Arc::clone(ctx);
        let result = tokio::task::spawn_blocking(move || units::run(&run_ctx, kind))
            .await
            .with_context(|| format!("joining {kind} unit task"))?;
        result.with_context(|| format!("{kind} unit failed"))?;
        debug!(unit = %kind, "unit completed");
    }
    Ok(())
}

/// Start all of `kinds` concurrently and wait for every one to finish.
///
/// Completion requires all units to have terminated; the composite fails if
/// any unit failed.
pub async fn parallel(ctx: &Arc<BuildContext>, kinds: &[UnitKind]) -> Result<()> {
    let mut handles = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        let run_ctx = Arc::clone(ctx);
        let handle = tokio::task::spawn_blocking(move || units::run(&run_ctx, kind));
        handles.push((kind, handle));
    }

    let mut failures = Vec::new();
    for (kind, handle) in handles {
        match handle.await {
            Ok(Ok(())) => debug!(unit = %kind, "unit completed"),
            Ok(Err(err)) => {
                error!(unit = %kind, error = %err, "unit failed");
                failures.push(kind);
            }
            Err(err) => {
                error!(unit = %kind, error = %err, "unit task panicked");
                failures.push(kind);
            }
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        let names: Vec<&str> = failures.iter().map(|k| k.name()).collect();
        Err(anyhow!(
            "{} unit(s) failed: {}",
            failures.len(),
            names.join(", ")
        ))
    }
}

/// Run every transform unit once, concurrently.
pub async fn build(ctx: &Arc<BuildContext>) -> Result<()> {
    parallel(ctx, &UnitKind::BUILD).await
}

/// Remove everything under the output root.
pub async fn clean(ctx: &Arc<BuildContext>) -> Result<()> {
    series(ctx, &[UnitKind::Clean]).await
}

/// Run only the HTML unit.
pub async fn include(ctx: &Arc<BuildContext>) -> Result<()> {
    series(ctx, &[UnitKind::Html]).await
}
