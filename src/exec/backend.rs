// src/exec/backend.rs

//! Pluggable command-execution abstraction.
//!
//! The phases talk to a [`CommandExecutor`] instead of calling
//! [`run_command`] directly. This makes it easy to swap in a scripted
//! executor in tests while keeping the production runner in [`runner`].
//!
//! [`runner`]: crate::exec::runner

use std::future::Future;
use std::pin::Pin;

use crate::exec::command::{CommandSpec, ExecutionResult};
use crate::exec::runner::run_command;

/// Trait abstracting how commands are executed.
///
/// Production code uses [`ProcessExecutor`]; tests provide implementations
/// that record which commands were issued and answer from a script.
pub trait CommandExecutor: Send {
    /// Run one command to completion and report its result.
    fn execute<'a>(
        &'a mut self,
        spec: &'a CommandSpec,
    ) -> Pin<Box<dyn Future<Output = ExecutionResult> + Send + 'a>>;
}

/// Real executor used in production: spawns OS processes via [`run_command`].
pub struct ProcessExecutor;

impl CommandExecutor for ProcessExecutor {
    fn execute<'a>(
        &'a mut self,
        spec: &'a CommandSpec,
    ) -> Pin<Box<dyn Future<Output = ExecutionResult> + Send + 'a>> {
        Box::pin(run_command(spec))
    }
}
