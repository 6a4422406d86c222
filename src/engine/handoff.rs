// src/engine/handoff.rs

//! Rendezvous channel between the watcher and the runner.
//!
//! `HandoffSender::send` completes only once the runner has taken the token,
//! so at most one "re-run now" request is ever in flight. Changes made while
//! the runner is busy executing are not queued; the watcher stays parked in
//! `send` and the next poll folds them into a single run.

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

/// Zero-payload token meaning "the file changed, re-run now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunRequest;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("hand-off channel closed")]
pub struct HandoffClosed;

#[derive(Debug)]
struct Envelope {
    token: RunRequest,
    taken: oneshot::Sender<()>,
}

/// Create a connected sender/receiver pair.
pub fn handoff() -> (HandoffSender, HandoffReceiver) {
    let (tx, rx) = mpsc::channel(1);
    (HandoffSender { tx }, HandoffReceiver { rx })
}

#[derive(Debug, Clone)]
pub struct HandoffSender {
    tx: mpsc::Sender<Envelope>,
}

impl HandoffSender {
    /// Deliver `token` and wait until the receiver has taken it.
    pub async fn send(&self, token: RunRequest) -> Result<(), HandoffClosed> {
        let (taken_tx, taken_rx) = oneshot::channel();
        self.tx
            .send(Envelope {
                token,
                taken: taken_tx,
            })
            .await
            .map_err(|_| HandoffClosed)?;
        taken_rx.await.map_err(|_| HandoffClosed)
    }
}

#[derive(Debug)]
pub struct HandoffReceiver {
    rx: mpsc::Receiver<Envelope>,
}

impl HandoffReceiver {
    /// Wait for the next token, releasing the blocked sender.
    ///
    /// Returns `None` once every sender is gone. Cancel-safe.
    pub async fn recv(&mut self) -> Option<RunRequest> {
        let envelope = self.rx.recv().await?;
        // The sender may have given up (cancelled) meanwhile; the token still counts.
        let _ = envelope.taken.send(());
        Some(envelope.token)
    }
}
