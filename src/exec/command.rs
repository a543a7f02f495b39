// src/exec/command.rs

//! Value types for one external command invocation.

use std::fmt;
use std::path::{Path, PathBuf};

/// An external command as an argv vector: program name followed by arguments.
///
/// Arguments reach the OS as discrete tokens with no shell interpretation, so
/// callers never quote or escape anything. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    tokens: Vec<String>,
    cwd: Option<PathBuf>,
}

impl CommandSpec {
    /// Build a spec from anything yielding string-ish tokens.
    ///
    /// The first token is the program name. An empty token list is accepted
    /// here and rejected at spawn time, where the runner reports it as a
    /// spawn failure rather than panicking.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            cwd: None,
        }
    }

    /// Run the command from `dir` instead of the harness's own directory.
    pub fn with_cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Program name and argument slice, or `None` for an empty spec.
    pub fn split(&self) -> Option<(&str, &[String])> {
        let (first, rest) = self.tokens.split_first()?;
        Some((first.as_str(), rest))
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

/// Outcome of running one command to completion.
///
/// `success` is defined solely by the exit code being zero. Output content is
/// captured for inspection but never consulted to decide success.
#[derive(Debug, Clone, Default)]
pub struct ExecutionResult {
    /// True iff the child exited with status 0. A process that could not be
    /// started at all also reports `false`; callers treat both identically.
    pub success: bool,
    /// Captured stdout lines in arrival order.
    pub stdout: Vec<String>,
    /// Captured stderr lines in arrival order.
    pub stderr: Vec<String>,
}

impl ExecutionResult {
    /// Result with the given success flag and no captured output.
    pub fn from_success(success: bool) -> Self {
        Self {
            success,
            ..Self::default()
        }
    }

    /// Result used when the process could not be started at all.
    pub fn spawn_failure() -> Self {
        Self::from_success(false)
    }
}
