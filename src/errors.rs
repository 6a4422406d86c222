// src/errors.rs

//! Crate-wide error type.
//!
//! Every variant is fatal: the loops return it, the coordinator cancels the
//! other loop, and `main` exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GowatchError {
    #[error("cannot determine working directory: {0}")]
    WorkingDir(#[source] std::io::Error),

    #[error("cannot stat {path:?}: {source}")]
    StatFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to launch `{program}`: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with status {code}")]
    CommandFailed { command: String, code: i32 },

    #[error("failed to listen for shutdown signal: {0}")]
    Signal(#[source] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GowatchError>;
