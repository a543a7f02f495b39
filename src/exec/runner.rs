// src/exec/runner.rs

//! The process runner: spawn one command, stream its output live, fold the
//! exit status into a boolean.

use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{error, info};

use crate::exec::command::{CommandSpec, ExecutionResult};

/// Run `spec` to completion, echoing each child output line to stdout with a
/// `STDOUT:` / `STDERR:` tag the moment it arrives, so long-running installs
/// and playback runs show progress instead of going silent until exit.
///
/// Every failure mode folds into `success == false`:
/// - the child ran and exited non-zero
/// - the process could not be spawned at all (missing executable, permission
///   denied, empty command). These are logged with their cause and reported
///   as a failure with empty captured output; nothing ever propagates as an
///   uncaught fault from here.
pub async fn run_command(spec: &CommandSpec) -> ExecutionResult {
    println!("Running: {spec}");
    match run_command_inner(spec).await {
        Ok(result) => result,
        Err(err) => {
            error!(cmd = %spec, error = %err, "could not run command");
            println!("Failed to run command: {err:#}");
            ExecutionResult::spawn_failure()
        }
    }
}

async fn run_command_inner(spec: &CommandSpec) -> Result<ExecutionResult> {
    let (program, args) = spec.split().context("empty command (no program name)")?;

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    if let Some(dir) = spec.cwd() {
        cmd.current_dir(dir);
    }

    let mut child = cmd
        .spawn()
        .with_context(|| format!("spawning process for '{program}'"))?;

    let stdout = child.stdout.take().context("child stdout was not piped")?;
    let stderr = child.stderr.take().context("child stderr was not piped")?;

    let mut stdout_lines = BufReader::new(stdout).lines();
    let mut stderr_lines = BufReader::new(stderr).lines();

    let mut captured_stdout = Vec::new();
    let mut captured_stderr = Vec::new();
    let mut stdout_done = false;
    let mut stderr_done = false;

    // Poll both streams until each reports end-of-stream. EOF on both pipes
    // means everything the child wrote has been drained; only then is the
    // exit status collected, so no trailing output can be lost.
    while !stdout_done || !stderr_done {
        tokio::select! {
            line = stdout_lines.next_line(), if !stdout_done => match line? {
                Some(line) => {
                    println!("STDOUT: {line}");
                    captured_stdout.push(line);
                }
                None => stdout_done = true,
            },
            line = stderr_lines.next_line(), if !stderr_done => match line? {
                Some(line) => {
                    println!("STDERR: {line}");
                    captured_stderr.push(line);
                }
                None => stderr_done = true,
            },
        }
    }

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for process of '{program}'"))?;

    info!(
        cmd = %spec,
        exit_code = status.code().unwrap_or(-1),
        success = status.success(),
        "command exited"
    );

    Ok(ExecutionResult {
        success: status.success(),
        stdout: captured_stdout,
        stderr: captured_stderr,
    })
}
