// src/lib.rs

pub mod cli;
pub mod config;
pub mod deps;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod target;

use anyhow::Result;
use tracing::info;

use crate::cli::CliArgs;
use crate::config::load_and_validate;
use crate::deps::{AptRemediator, DependencyCheck, NoopRemediator, Remediator, verify_dependencies};
use crate::exec::ProcessExecutor;
use crate::target::{Scenario, TargetProgram, run_scenario};

pub use crate::target::TestOutcome;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the dependency-verification phase
/// - the build-and-run phase
///
/// Everything process-related is folded into boolean results along the way;
/// the only errors that reach the caller are config and logging problems.
pub async fn run(args: CliArgs) -> Result<TestOutcome> {
    let cfg = load_and_validate(&args.config)?;

    println!("=== {} smoke test ===", cfg.target.binary);

    let mut executor = ProcessExecutor;

    if args.skip_deps {
        info!("skipping dependency verification (--skip-deps)");
    } else {
        let checks: Vec<DependencyCheck> = cfg
            .dependencies
            .iter()
            .map(|d| DependencyCheck::new(d.tool.clone(), d.package.clone()))
            .collect();

        let mut apt = AptRemediator;
        let mut noop = NoopRemediator;
        let remediator: &mut dyn Remediator = if args.no_install {
            &mut noop
        } else {
            &mut apt
        };

        verify_dependencies(&checks, &mut executor, remediator).await;
    }

    let target = TargetProgram::new(cfg.target.project_dir.clone(), cfg.target.binary.clone());
    let scenario = Scenario {
        quality: cfg.scenario.quality.clone(),
        episode: cfg.scenario.episode,
        title: cfg.scenario.title.clone(),
    };

    let outcome = run_scenario(&mut executor, &target, &scenario).await;

    match outcome {
        TestOutcome::Passed => println!("\n✅ Smoke test passed"),
        TestOutcome::Failed => println!("\n❌ Smoke test failed"),
    }

    Ok(outcome)
}
