// src/deps/mod.rs

//! Dependency verification phase.
//!
//! A fixed ordered table of [`DependencyCheck`]s is probed one by one; any
//! tool that turns out to be missing gets a best-effort remediation attempt
//! via the [`Remediator`] in use. The phase is advisory, not gating: it
//! never aborts, never re-probes after remediation, and a failed check does
//! not stop the remaining ones.

pub mod remediate;

pub use remediate::{AptRemediator, NoopRemediator, Remediator};

use tracing::{info, warn};

use crate::exec::{CommandExecutor, CommandSpec};

/// One external tool the playback scenario needs at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyCheck {
    /// Executable name, probed with `which`.
    pub tool: String,
    /// Package that provides the tool. May differ from the tool name, e.g.
    /// ffplay ships in the ffmpeg package.
    pub package: String,
}

impl DependencyCheck {
    pub fn new(tool: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            package: package.into(),
        }
    }

    /// Probe command: succeeds iff the tool is on `PATH`.
    pub fn probe(&self) -> CommandSpec {
        CommandSpec::new(["which", self.tool.as_str()])
    }
}

/// The default check table: a media player, an HTTP transfer tool, and a
/// media decode/play tool.
pub fn default_checks() -> Vec<DependencyCheck> {
    vec![
        DependencyCheck::new("mpv", "mpv"),
        DependencyCheck::new("curl", "curl"),
        DependencyCheck::new("ffplay", "ffmpeg"),
    ]
}

/// Run every probe in order, attempting remediation for the ones that fail.
///
/// Checks are evaluated independently; neither a failed probe nor a failed
/// remediation short-circuits the rest of the table. Remediation outcomes
/// are deliberately not verified by re-probing.
pub async fn verify_dependencies(
    checks: &[DependencyCheck],
    executor: &mut dyn CommandExecutor,
    remediator: &mut dyn Remediator,
) {
    println!("Checking dependencies...");

    for check in checks {
        let result = executor.execute(&check.probe()).await;
        if result.success {
            info!(tool = %check.tool, "dependency present");
            println!("✅ {} found", check.tool);
        } else {
            warn!(tool = %check.tool, "dependency missing");
            println!("❌ {} not found", check.tool);
            remediator.remediate(check, executor).await;
        }
    }
}
