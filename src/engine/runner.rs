// src/engine/runner.rs

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::WatchConfig;
use crate::errors::Result;
use crate::exec::{ExecutorBackend, Invocation};

use super::handoff::HandoffReceiver;

/// Where the runner is in its lifecycle.
///
/// `AwaitingFirstRun` is left after the first execution and never re-entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    AwaitingFirstRun,
    Looping,
}

/// Executes the command once up front, then once per hand-off token.
///
/// Every execution is awaited before the next token is received, so runs
/// never overlap.
pub struct Runner<E: ExecutorBackend> {
    invocation: Invocation,
    executor: E,
    state: RunnerState,
    once: bool,
    runs: usize,
}

impl<E: ExecutorBackend> std::fmt::Debug for Runner<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runner")
            .field("invocation", &self.invocation)
            .field("state", &self.state)
            .field("once", &self.once)
            .field("runs", &self.runs)
            .finish_non_exhaustive()
    }
}

impl<E: ExecutorBackend> Runner<E> {
    pub fn new(config: &WatchConfig, executor: E) -> Self {
        Self {
            invocation: config.invocation(),
            executor,
            state: RunnerState::AwaitingFirstRun,
            once: config.once,
            runs: 0,
        }
    }

    pub fn state(&self) -> RunnerState {
        self.state
    }

    /// Number of completed executions.
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Main loop.
    ///
    /// Returns `Ok(())` on cancellation, when the watcher side of the
    /// hand-off is gone, or after the first run in `once` mode. Returns the
    /// first execution error otherwise.
    pub async fn run(
        &mut self,
        cancel: CancellationToken,
        mut handoff: HandoffReceiver,
    ) -> Result<()> {
        info!(cmd = %self.invocation, "runner started");

        loop {
            if cancel.is_cancelled() {
                debug!("runner cancelled");
                return Ok(());
            }

            match self.state {
                RunnerState::AwaitingFirstRun => {
                    self.execute().await?;
                    self.state = RunnerState::Looping;

                    if self.once {
                        info!("single run finished");
                        return Ok(());
                    }
                }
                RunnerState::Looping => {
                    let request = tokio::select! {
                        biased;
                        _ = cancel.cancelled() => {
                            debug!("runner cancelled while waiting for a change");
                            return Ok(());
                        }
                        request = handoff.recv() => request,
                    };

                    match request {
                        Some(_) => self.execute().await?,
                        None => {
                            info!("watcher stopped; runner exiting");
                            return Ok(());
                        }
                    }
                }
            }
        }
    }

    async fn execute(&mut self) -> Result<()> {
        let output = self.executor.execute(self.invocation.clone()).await?;
        self.runs += 1;
        debug!(runs = self.runs, "run complete");
        println!("{}", output.stdout);
        Ok(())
    }
}
