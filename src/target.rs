// src/target.rs

//! Build-and-run phase for the program under test.
//!
//! Ensures a compiled artifact exists (building if neither conventional
//! cargo output path has one), then drives one concrete playback scenario
//! and reports the child's own exit status as the verdict.

use std::path::PathBuf;

use tracing::info;

use crate::exec::{CommandExecutor, CommandSpec};

/// Final verdict of the end-to-end run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestOutcome {
    Passed,
    Failed,
}

impl TestOutcome {
    pub fn passed(self) -> bool {
        matches!(self, TestOutcome::Passed)
    }
}

/// States of the linear build-and-run machine.
///
/// `NeedsBuild` reaches `ReadyToRun` only through a successful build; a
/// build failure is terminal and the run command is never issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    NeedsBuild,
    ArtifactFound,
    ReadyToRun,
    Passed,
    Failed,
}

/// Where the program under test lives and what its binary is called.
#[derive(Debug, Clone)]
pub struct TargetProgram {
    pub project_dir: PathBuf,
    pub binary: String,
}

impl TargetProgram {
    pub fn new(project_dir: impl Into<PathBuf>, binary: impl Into<String>) -> Self {
        Self {
            project_dir: project_dir.into(),
            binary: binary.into(),
        }
    }

    /// Conventional debug-mode artifact path.
    pub fn debug_artifact(&self) -> PathBuf {
        self.project_dir.join("target").join("debug").join(&self.binary)
    }

    /// Conventional release-mode artifact path.
    pub fn release_artifact(&self) -> PathBuf {
        self.project_dir
            .join("target")
            .join("release")
            .join(&self.binary)
    }

    /// A compiled artifact exists at either conventional location.
    ///
    /// Presence is the whole check; an artifact older than the sources still
    /// counts, and `cargo run` rebuilds as needed anyway.
    pub fn artifact_present(&self) -> bool {
        self.debug_artifact().is_file() || self.release_artifact().is_file()
    }

    fn build_command(&self) -> CommandSpec {
        CommandSpec::new(["cargo", "build"]).with_cwd(&self.project_dir)
    }

    fn run_command(&self, scenario: &Scenario) -> CommandSpec {
        CommandSpec::new([
            "cargo",
            "run",
            "--",
            "--quality",
            scenario.quality.as_str(),
            "--episode",
            scenario.episode.to_string().as_str(),
            scenario.title.as_str(),
        ])
        .with_cwd(&self.project_dir)
    }
}

/// The one concrete scenario the harness exercises.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub quality: String,
    pub episode: u32,
    pub title: String,
}

/// Ensure an artifact exists (building if needed), then run the scenario.
pub async fn run_scenario(
    executor: &mut dyn CommandExecutor,
    target: &TargetProgram,
    scenario: &Scenario,
) -> TestOutcome {
    println!("\n=== Exercising {} ===\n", target.binary);

    let mut state = if target.artifact_present() {
        info!(binary = %target.binary, "existing artifact found, skipping build");
        BuildState::ArtifactFound
    } else {
        BuildState::NeedsBuild
    };

    loop {
        state = match state {
            BuildState::NeedsBuild => {
                println!("Building {}...", target.binary);
                if executor.execute(&target.build_command()).await.success {
                    BuildState::ReadyToRun
                } else {
                    println!("❌ Build failed");
                    BuildState::Failed
                }
            }
            BuildState::ArtifactFound => BuildState::ReadyToRun,
            BuildState::ReadyToRun => {
                println!(
                    "Running {} (quality {}, episode {}, title '{}')...",
                    target.binary, scenario.quality, scenario.episode, scenario.title
                );
                if executor.execute(&target.run_command(scenario)).await.success {
                    BuildState::Passed
                } else {
                    BuildState::Failed
                }
            }
            BuildState::Passed => return TestOutcome::Passed,
            BuildState::Failed => return TestOutcome::Failed,
        };
    }
}
