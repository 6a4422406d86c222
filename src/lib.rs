// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod signals;
pub mod watch;

use std::sync::Arc;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::WatchConfig;
use crate::engine::Coordinator;
use crate::errors::Result;
use crate::exec::RealExecutorBackend;
use crate::fs::RealFileSystem;

/// High-level entry point used by `main.rs`.
///
/// Resolves the watch target from the working directory, then runs the
/// watcher and runner until SIGINT/SIGTERM or the first fatal error.
pub async fn run(args: CliArgs) -> Result<()> {
    let config = WatchConfig::from_args(&args)?;

    if args.dry_run {
        print_dry_run(&config);
        return Ok(());
    }

    info!(
        target = ?config.target,
        cmd = %config.invocation(),
        once = config.once,
        "gowatch starting"
    );

    let coordinator = Coordinator::new(
        config,
        Arc::new(RealFileSystem),
        RealExecutorBackend::new(),
    );
    coordinator.run_until(signals::shutdown_signal()).await
}

fn print_dry_run(config: &WatchConfig) {
    println!("gowatch dry-run");
    println!("  watch: {}", config.target.display());
    println!("  cmd: {}", config.invocation());
    println!("  poll_interval: {:?}", config.poll_interval);
    if config.once {
        println!("  once: true");
    }

    debug!("dry-run complete (no execution)");
}
