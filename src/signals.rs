// src/signals.rs

//! OS termination signals.

use crate::errors::{GowatchError, Result};

/// Resolve on the first SIGINT (Ctrl-C) or, on unix, SIGTERM.
pub async fn shutdown_signal() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate = signal(SignalKind::terminate()).map_err(GowatchError::Signal)?;
        tokio::select! {
            res = tokio::signal::ctrl_c() => res.map_err(GowatchError::Signal)?,
            _ = terminate.recv() => {}
        }
    }

    #[cfg(not(unix))]
    tokio::signal::ctrl_c().await.map_err(GowatchError::Signal)?;

    Ok(())
}
