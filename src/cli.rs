// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `anismoke`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "anismoke",
    version,
    about = "Smoke-test harness for the anirust playback CLI.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Anismoke.toml` in the current working directory. A missing
    /// file is not an error; the built-in defaults are used instead.
    #[arg(long, value_name = "PATH", default_value = "Anismoke.toml")]
    pub config: String,

    /// Skip the dependency-verification phase entirely.
    #[arg(long)]
    pub skip_deps: bool,

    /// Never run package-manager commands for missing dependencies.
    ///
    /// Probes still run; missing tools are reported and left as-is. Useful in
    /// sandboxed or permission-restricted environments.
    #[arg(long)]
    pub no_install: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `ANISMOKE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
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
