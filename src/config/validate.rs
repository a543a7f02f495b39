// src/config/validate.rs

use std::collections::BTreeSet;

use anyhow::{Result, anyhow};

use crate::config::model::ConfigFile;

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - `[target]` has a non-empty project dir and binary name
/// - `[scenario]` quality and title are non-empty
/// - every `[[dependency]]` has non-empty tool and package names
/// - no tool appears twice in the dependency table
///
/// It does **not** check that the project dir exists; the build-and-run
/// phase reports that through the build command's own failure.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    validate_target(cfg)?;
    validate_scenario(cfg)?;
    validate_dependencies(cfg)?;
    Ok(())
}

fn validate_target(cfg: &ConfigFile) -> Result<()> {
    if cfg.target.project_dir.as_os_str().is_empty() {
        return Err(anyhow!("[target].project_dir must not be empty"));
    }
    if cfg.target.binary.trim().is_empty() {
        return Err(anyhow!("[target].binary must not be empty"));
    }
    Ok(())
}

fn validate_scenario(cfg: &ConfigFile) -> Result<()> {
    if cfg.scenario.quality.trim().is_empty() {
        return Err(anyhow!("[scenario].quality must not be empty"));
    }
    if cfg.scenario.title.trim().is_empty() {
        return Err(anyhow!("[scenario].title must not be empty"));
    }
    Ok(())
}

fn validate_dependencies(cfg: &ConfigFile) -> Result<()> {
    let mut seen = BTreeSet::new();

    for dep in cfg.dependencies.iter() {
        if dep.tool.trim().is_empty() {
            return Err(anyhow!("[[dependency]] entry with empty `tool`"));
        }
        if dep.package.trim().is_empty() {
            return Err(anyhow!(
                "dependency '{}' has an empty `package`",
                dep.tool
            ));
        }
        if !seen.insert(dep.tool.as_str()) {
            return Err(anyhow!(
                "dependency '{}' appears more than once",
                dep.tool
            ));
        }
    }

    Ok(())
}
