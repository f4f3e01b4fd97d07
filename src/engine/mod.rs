// src/engine/mod.rs

//! The watch-session runtime: an event loop that turns unit triggers into
//! rebuilds, coalescing triggers that arrive while a rebuild of the same
//! unit is in flight.

pub mod runtime;

pub use runtime::{Runtime, RuntimeEvent, UnitOutcome};
