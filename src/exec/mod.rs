// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`command`] launches the toolchain with `tokio::process::Command` and
//!   collects its stdout.
//! - [`backend`] provides the `ExecutorBackend` trait the runner talks to and
//!   the `RealExecutorBackend` used in production; tests swap in a fake.

use std::ffi::OsString;

pub mod backend;
pub mod command;

pub use backend::{ExecutorBackend, RealExecutorBackend};
pub use command::run_invocation;

/// One external process launch: `program args...`.
///
/// Arguments stay `OsString` so a path with non-UTF-8 bytes reaches the
/// child unchanged; only `Display` is lossy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Result of a successful (exit status 0) run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Captured stdout, decoded as UTF-8 (invalid sequences replaced).
    pub stdout: String,
}
