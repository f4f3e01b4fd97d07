// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod paths;
pub mod pipeline;
pub mod server;
pub mod units;
pub mod watch;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{error, warn};

use crate::cli::{CliArgs, PipelineCommand};
use crate::config::load_or_default;
use crate::engine::{Runtime, RuntimeEvent};
use crate::paths::SitePaths;
use crate::server::{DevServer, ReloadHub};
use crate::units::BuildContext;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the path registry
/// - the requested pipeline
/// - for `watch`: dev server, file watcher, Ctrl-C handling, and the
///   rebuild runtime
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let settings = load_or_default(&config_path)?;

    let root = config_root_dir(&config_path);
    let ctx = Arc::new(BuildContext {
        paths: SitePaths::new(&root),
        settings,
        reload: ReloadHub::new(),
    });

    match args.command.unwrap_or(PipelineCommand::Watch) {
        PipelineCommand::Clean => pipeline::clean(&ctx).await,
        PipelineCommand::Build => {
            ctx.paths.validate()?;
            pipeline::build(&ctx).await
        }
        PipelineCommand::Include => {
            ctx.paths.validate()?;
            pipeline::include(&ctx).await
        }
        PipelineCommand::Watch => {
            ctx.paths.validate()?;
            run_watch(ctx, root).await
        }
    }
}

/// Run the long-lived watch session: serve the output, build everything
/// once, then keep rebuilding units as their sources change until the
/// process is terminated.
async fn run_watch(ctx: Arc<BuildContext>, root: PathBuf) -> Result<()> {
    // Dev server, serving whatever the initial build is about to produce.
    let server = DevServer::new(
        ctx.settings.server.port,
        ctx.paths.public_dir(),
        ctx.reload.clone(),
    );
    tokio::spawn(async move {
        if let Err(err) = server.serve().await {
            error!(error = %err, "dev server stopped");
        }
    });

    // Runtime event channel.
    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(64);

    // Filesystem watcher.
    let profiles = watch::build_unit_watch_profiles()?;
    let excludes = watch::build_exclude_set()?;
    let _watcher_handle = watch::spawn_watcher(root, profiles, excludes, rt_tx.clone())?;

    // Ctrl-C → graceful shutdown.
    {
        let tx = rt_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
        });
    }

    // Initial build. Failures are logged and the session keeps going with
    // whatever output already exists.
    if let Err(err) = pipeline::build(&ctx).await {
        warn!(error = %err, "initial build finished with failures, watching anyway");
    }

    let runtime = Runtime::new(ctx, rt_rx, rt_tx);
    runtime.run().await
}

/// Figure out a sensible project root for the path registry and watching.
/// Currently: directory containing the config file, or `.`.
fn config_root_dir(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
