//! Backend bridge: command queue in, per-page events out, async work on a worker thread.

pub mod commands;
pub mod runtime;

pub use runtime::{launch, BackendBridge, EventRoutes};
