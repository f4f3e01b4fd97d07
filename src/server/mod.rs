// src/server/mod.rs

//! Dev server and reload notification.
//!
//! The server does two things: serve the output root as static files, and
//! push reload signals to connected browser clients over a WebSocket. The
//! signal channel is one-way and fire-and-forget; no client acknowledgement
//! is ever awaited.

pub mod http;
pub mod reload;

pub use http::DevServer;
pub use reload::{ReloadHub, ReloadSignal};
