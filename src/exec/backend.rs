// src/exec/backend.rs

//! Pluggable executor backend abstraction.
//!
//! The runner talks to an `ExecutorBackend` instead of spawning processes
//! itself, so tests can record invocations without launching `go`.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;

use super::command::run_invocation;
use super::{CommandOutput, Invocation};

/// Trait abstracting how one run of the command is executed.
///
/// Implementations must resolve only once the run has finished; the runner
/// relies on this to keep executions sequential.
pub trait ExecutorBackend: Send {
    fn execute(
        &mut self,
        invocation: Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + '_>>;
}

/// Real executor backend used in production: spawns the process and waits.
#[derive(Debug, Clone, Default)]
pub struct RealExecutorBackend;

impl RealExecutorBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutorBackend for RealExecutorBackend {
    fn execute(
        &mut self,
        invocation: Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + '_>> {
        Box::pin(run_invocation(invocation))
    }
}
