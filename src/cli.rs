// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `gowatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gowatch",
    version,
    about = "Re-run `go <command> <file>` whenever the watched source file changes.",
    long_about = None
)]
pub struct CliArgs {
    /// Toolchain subcommand to execute (e.g. `run`, `build`, `vet`).
    #[arg(short = 'c', long = "command", value_name = "COMMAND", default_value = "run")]
    pub command: String,

    /// Base name of the file to watch, without extension.
    ///
    /// Resolved against the current working directory with `.go` appended.
    #[arg(short = 'f', long = "file", value_name = "NAME", default_value = "main")]
    pub file: String,

    /// Run the command once and exit, no watching.
    #[arg(long)]
    pub once: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GOWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve and print the invocation, but don't watch or execute anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
