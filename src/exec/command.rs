// src/exec/command.rs

use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{GowatchError, Result};

use super::{CommandOutput, Invocation};

/// Launch `invocation`, wait for it to exit and return its stdout.
///
/// Stdout is piped and captured; stderr is inherited so compiler diagnostics
/// reach the terminal directly. A launch failure or a non-zero exit status is
/// returned as an error.
pub async fn run_invocation(invocation: Invocation) -> Result<CommandOutput> {
    info!(cmd = %invocation, "starting command");

    let child = Command::new(&invocation.program)
        .args(&invocation.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| GowatchError::SpawnFailed {
            program: invocation.program.clone(),
            source,
        })?;

    let output = child
        .wait_with_output()
        .await
        .map_err(|source| GowatchError::SpawnFailed {
            program: invocation.program.clone(),
            source,
        })?;

    let code = output.status.code().unwrap_or(-1);
    info!(
        cmd = %invocation,
        exit_code = code,
        success = output.status.success(),
        "command exited"
    );

    if !output.status.success() {
        return Err(GowatchError::CommandFailed {
            command: invocation.to_string(),
            code,
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    debug!(bytes = output.stdout.len(), "captured stdout");

    Ok(CommandOutput { stdout })
}
