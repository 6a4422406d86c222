// src/watch/poller.rs

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::engine::handoff::{HandoffSender, RunRequest};
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::watch::target::WatchTarget;

/// Poll `target` every `interval` and hand a [`RunRequest`] to the runner on
/// every observed change.
///
/// - A failed stat (file deleted, permissions, ...) is returned as an error
///   and ends the loop; there is no retry.
/// - A hand-off blocks until the runner takes it, so changes made while a
///   command is running collapse into one request.
/// - Returns `Ok(())` on cancellation, or once the runner side is gone.
pub async fn watch_file(
    mut target: WatchTarget,
    fs: Arc<dyn FileSystem>,
    interval: Duration,
    cancel: CancellationToken,
    handoff: HandoffSender,
) -> Result<()> {
    info!(path = ?target.path(), ?interval, "file watcher started");

    loop {
        if cancel.is_cancelled() {
            break;
        }

        if target.observe(fs.as_ref())? {
            info!(path = ?target.path(), "change detected");

            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                sent = handoff.send(RunRequest) => {
                    if sent.is_err() {
                        debug!("runner is gone; stopping watcher");
                        return Ok(());
                    }
                    debug!("hand-off taken by runner");
                }
            }
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep(interval) => {}
        }
    }

    debug!("file watcher cancelled");
    Ok(())
}

/// Spawn [`watch_file`] as its own Tokio task.
pub fn spawn_watcher(
    target: WatchTarget,
    fs: Arc<dyn FileSystem>,
    interval: Duration,
    cancel: CancellationToken,
    handoff: HandoffSender,
) -> JoinHandle<Result<()>> {
    tokio::spawn(watch_file(target, fs, interval, cancel, handoff))
}
