use std::fs;

use anismoke::config::{ConfigFile, load_and_validate, load_from_path, validate_config};
use tempfile::TempDir;

#[test]
fn missing_file_yields_the_stock_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let cfg = load_and_validate(dir.path().join("Anismoke.toml")).expect("defaults");

    assert_eq!(cfg.target.binary, "anirust");
    assert_eq!(cfg.target.project_dir, std::path::PathBuf::from("."));
    assert_eq!(cfg.scenario.quality, "best");
    assert_eq!(cfg.scenario.episode, 4);
    assert_eq!(cfg.scenario.title, "frieren");

    let tools: Vec<&str> = cfg.dependencies.iter().map(|d| d.tool.as_str()).collect();
    assert_eq!(tools, ["mpv", "curl", "ffplay"]);
    assert_eq!(cfg.dependencies[2].package, "ffmpeg");
}

#[test]
fn full_config_parses() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("Anismoke.toml");
    fs::write(
        &path,
        r#"
[target]
project_dir = "/srv/anirust"
binary = "anirust"

[scenario]
quality = "720p"
episode = 12
title = "sousou no frieren"

[[dependency]]
tool = "vlc"
package = "vlc"
"#,
    )
    .expect("write config");

    let cfg = load_and_validate(&path).expect("parse");
    assert_eq!(cfg.target.project_dir, std::path::PathBuf::from("/srv/anirust"));
    assert_eq!(cfg.scenario.quality, "720p");
    assert_eq!(cfg.scenario.episode, 12);
    assert_eq!(cfg.scenario.title, "sousou no frieren");
    assert_eq!(cfg.dependencies.len(), 1);
    assert_eq!(cfg.dependencies[0].tool, "vlc");
}

#[test]
fn partial_config_keeps_default_dependency_table() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("Anismoke.toml");
    fs::write(&path, "[scenario]\nepisode = 7\n").expect("write config");

    let cfg = load_from_path(&path).expect("parse");
    assert_eq!(cfg.scenario.episode, 7);
    assert_eq!(cfg.scenario.title, "frieren");
    assert_eq!(cfg.dependencies.len(), 3);
}

#[test]
fn empty_binary_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("Anismoke.toml");
    fs::write(&path, "[target]\nbinary = \"\"\n").expect("write config");

    assert!(load_and_validate(&path).is_err());
}

#[test]
fn empty_scenario_title_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("Anismoke.toml");
    fs::write(&path, "[scenario]\ntitle = \" \"\n").expect("write config");

    assert!(load_and_validate(&path).is_err());
}

#[test]
fn duplicate_dependency_tools_are_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("Anismoke.toml");
    fs::write(
        &path,
        r#"
[[dependency]]
tool = "mpv"
package = "mpv"

[[dependency]]
tool = "mpv"
package = "mpv"
"#,
    )
    .expect("write config");

    assert!(load_and_validate(&path).is_err());
}

#[test]
fn malformed_toml_is_an_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("Anismoke.toml");
    fs::write(&path, "[target\nbinary=").expect("write config");

    assert!(load_from_path(&path).is_err());
}

#[test]
fn defaults_pass_validation() {
    validate_config(&ConfigFile::default()).expect("defaults are valid");
}
