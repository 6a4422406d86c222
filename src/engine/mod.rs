// src/engine/mod.rs

//! Orchestration for gowatch.
//!
//! - [`handoff`]: rendezvous channel carrying "re-run now" tokens from the
//!   watcher to the runner.
//! - [`runner`]: first-run-then-wait execution loop.
//! - [`coordinator`]: spawns both loops under one cancellation token and
//!   stops them on shutdown or on the first fatal error.

pub mod coordinator;
pub mod handoff;
pub mod runner;

pub use coordinator::Coordinator;
pub use handoff::{HandoffClosed, HandoffReceiver, HandoffSender, RunRequest, handoff};
pub use runner::{Runner, RunnerState};
