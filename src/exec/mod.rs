// src/exec/mod.rs

//! Process execution layer.
//!
//! This module owns every interaction with OS processes, using
//! `tokio::process::Command`:
//!
//! - [`command`] defines the [`CommandSpec`] / [`ExecutionResult`] value
//!   types that flow between the phases and the runner.
//! - [`runner`] spawns a command, streams its output live with `STDOUT:` /
//!   `STDERR:` tags, and folds the exit status into a boolean.
//! - [`backend`] abstracts the runner behind [`CommandExecutor`] so the
//!   phases can be tested without spawning real processes.

pub mod backend;
pub mod command;
pub mod runner;

pub use backend::{CommandExecutor, ProcessExecutor};
pub use command::{CommandSpec, ExecutionResult};
pub use runner::run_command;
