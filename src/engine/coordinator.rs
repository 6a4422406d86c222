// src/engine/coordinator.rs

use std::future::Future;
use std::sync::Arc;

use anyhow::anyhow;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::config::WatchConfig;
use crate::errors::{GowatchError, Result};
use crate::exec::ExecutorBackend;
use crate::fs::FileSystem;
use crate::watch::{WatchTarget, spawn_watcher};

use super::handoff::handoff;
use super::runner::Runner;

/// Wires the watcher and the runner together under one cancellation token.
pub struct Coordinator<E: ExecutorBackend + 'static> {
    config: WatchConfig,
    fs: Arc<dyn FileSystem>,
    executor: E,
}

impl<E: ExecutorBackend + 'static> std::fmt::Debug for Coordinator<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("config", &self.config)
            .field("fs", &self.fs)
            .finish_non_exhaustive()
    }
}

impl<E: ExecutorBackend + 'static> Coordinator<E> {
    pub fn new(config: WatchConfig, fs: Arc<dyn FileSystem>, executor: E) -> Self {
        Self {
            config,
            fs,
            executor,
        }
    }

    /// Run watcher and runner until `shutdown` resolves or either loop ends.
    ///
    /// - `shutdown` resolving with `Ok` is a graceful stop.
    /// - A loop returning an error cancels the other one and the error is
    ///   returned.
    /// - The runner finishing on its own (`once` mode) is a graceful stop.
    ///
    /// The shared token is cancelled before returning in every case, and both
    /// loops are joined: a command that is already running is awaited to
    /// completion, never killed. Runner errors seen after the stop decision
    /// are logged, not returned.
    pub async fn run_until<S>(self, shutdown: S) -> Result<()>
    where
        S: Future<Output = Result<()>>,
    {
        let Coordinator {
            config,
            fs,
            executor,
        } = self;

        let cancel = CancellationToken::new();
        let (handoff_tx, handoff_rx) = handoff();

        let mut watcher = if config.once {
            drop(handoff_tx);
            None
        } else {
            let target = WatchTarget::new(fs.as_ref(), config.target.clone())?;
            Some(spawn_watcher(
                target,
                Arc::clone(&fs),
                config.poll_interval,
                cancel.clone(),
                handoff_tx,
            ))
        };

        let mut runner_handle: JoinHandle<Result<()>> = {
            let mut runner = Runner::new(&config, executor);
            let cancel = cancel.clone();
            tokio::spawn(async move { runner.run(cancel, handoff_rx).await })
        };

        let watcher_done = async {
            match watcher.as_mut() {
                Some(handle) => joined("watcher", handle.await),
                None => std::future::pending().await,
            }
        };

        let (outcome, finished) = tokio::select! {
            res = shutdown => {
                if res.is_ok() {
                    info!("shutdown signal received; stopping");
                }
                (res, Finished::Shutdown)
            }
            res = watcher_done => (res, Finished::Watcher),
            res = &mut runner_handle => (joined("runner", res), Finished::Runner),
        };

        cancel.cancel();

        if let Err(ref err) = outcome {
            error!(error = %err, "fatal error; shutting down");
        }

        // A command already in flight runs to completion before we return.
        if finished != Finished::Runner {
            debug!("waiting for runner to finish");
            if let Err(err) = joined("runner", runner_handle.await) {
                warn!(error = %err, "runner failed while shutting down");
            }
        }
        if finished != Finished::Watcher {
            if let Some(handle) = watcher {
                if let Err(err) = joined("watcher", handle.await) {
                    warn!(error = %err, "watcher failed while shutting down");
                }
            }
        }

        outcome
    }
}

/// Which branch ended the main select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Finished {
    Shutdown,
    Watcher,
    Runner,
}

fn joined(
    name: &str,
    res: std::result::Result<Result<()>, tokio::task::JoinError>,
) -> Result<()> {
    match res {
        Ok(inner) => inner,
        Err(join_err) => Err(GowatchError::Other(anyhow!("{name} task failed: {join_err}"))),
    }
}
