// src/server/http.rs

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result, anyhow};
use axum::Router;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use axum::routing::get;
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::server::reload::{ReloadHub, ReloadSignal};

/// WebSocket endpoint browsers connect to for reload signals.
pub const RELOAD_WS_PATH: &str = "/__sitepipe/ws";

/// Static-file dev server over the output root.
pub struct DevServer {
    port: u16,
    public_root: PathBuf,
    hub: ReloadHub,
    started: AtomicBool,
}

impl DevServer {
    pub fn new(port: u16, public_root: impl Into<PathBuf>, hub: ReloadHub) -> Self {
        Self {
            port,
            public_root: public_root.into(),
            hub,
            started: AtomicBool::new(false),
        }
    }

    /// Bind and serve until the process exits.
    ///
    /// Starting the same server twice is a configuration error, not a
    /// retry; the guard makes the second call fail fast instead of fighting
    /// over the port.
    pub async fn serve(&self) -> Result<()> {
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(anyhow!("dev server already started"));
        }

        let app = Router::new()
            .route(RELOAD_WS_PATH, get(reload_upgrade))
            .fallback_service(tower_http::services::ServeDir::new(&self.public_root))
            .with_state(self.hub.clone());

        let addr = ("127.0.0.1", self.port);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("binding dev server on 127.0.0.1:{}", self.port))?;

        info!(
            port = self.port,
            root = ?self.public_root,
            "dev server listening"
        );

        axum::serve(listener, app)
            .await
            .context("dev server terminated")?;

        Ok(())
    }
}

async fn reload_upgrade(
    ws: WebSocketUpgrade,
    State(hub): State<ReloadHub>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| client_loop(socket, hub.subscribe()))
}

/// Forward reload signals to one connected client until it goes away.
async fn client_loop(mut socket: WebSocket, mut signals: broadcast::Receiver<ReloadSignal>) {
    debug!("reload client connected");
    loop {
        match signals.recv().await {
            Ok(signal) => {
                let payload = match serde_json::to_string(&signal) {
                    Ok(payload) => payload,
                    Err(err) => {
                        debug!(error = %err, "failed to encode reload signal");
                        continue;
                    }
                };
                if socket.send(Message::Text(payload)).await.is_err() {
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                // The client only needs the latest signal anyway.
                debug!(skipped, "reload client lagged");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
    debug!("reload client disconnected");
}
