// src/config.rs

//! Resolved, immutable run configuration.
//!
//! Built once from [`CliArgs`] and handed explicitly to the coordinator,
//! watcher and runner.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::CliArgs;
use crate::errors::{GowatchError, Result};
use crate::exec::Invocation;

/// External toolchain binary the command is run through.
pub const TOOLCHAIN: &str = "go";

/// Extension appended to the `-f` base name.
pub const SOURCE_EXTENSION: &str = "go";

/// Fixed interval between two stat calls on the watched file.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchConfig {
    /// Program launched for every run (`go` in production).
    pub toolchain: String,
    /// Toolchain subcommand (`run`, `build`, ...).
    pub command: String,
    /// Absolute path of the watched source file.
    pub target: PathBuf,
    pub poll_interval: Duration,
    /// Run once and exit instead of watching.
    pub once: bool,
}

impl WatchConfig {
    /// Resolve the configuration against the process working directory.
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(GowatchError::WorkingDir)?;
        Ok(Self::resolve(args, &cwd))
    }

    /// Resolve the configuration against an explicit base directory.
    pub fn resolve(args: &CliArgs, base_dir: &Path) -> Self {
        Self {
            toolchain: TOOLCHAIN.to_string(),
            command: args.command.clone(),
            target: target_path(base_dir, &args.file),
            poll_interval: POLL_INTERVAL,
            once: args.once,
        }
    }

    /// The process launch performed on every run.
    pub fn invocation(&self) -> Invocation {
        Invocation {
            program: self.toolchain.clone(),
            args: vec![
                OsString::from(&self.command),
                self.target.as_os_str().to_os_string(),
            ],
        }
    }
}

/// `<base_dir>/<name>.go`
pub fn target_path(base_dir: &Path, name: &str) -> PathBuf {
    base_dir.join(format!("{name}.{SOURCE_EXTENSION}"))
}
