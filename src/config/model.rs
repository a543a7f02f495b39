// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration as read from an `Anismoke.toml` file:
///
/// ```toml
/// [target]
/// project_dir = "."
/// binary = "anirust"
///
/// [scenario]
/// quality = "best"
/// episode = 4
/// title = "frieren"
///
/// [[dependency]]
/// tool = "mpv"
/// package = "mpv"
/// ```
///
/// All sections are optional; the defaults reproduce the stock harness
/// (anirust in the current directory, the frieren episode 4 scenario, and
/// the mpv/curl/ffplay dependency table).
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    /// Program under test, from `[target]`.
    #[serde(default)]
    pub target: TargetSection,

    /// The end-to-end scenario, from `[scenario]`.
    #[serde(default)]
    pub scenario: ScenarioSection,

    /// Ordered `[[dependency]]` entries; probe order follows file order.
    #[serde(default = "default_dependencies", rename = "dependency")]
    pub dependencies: Vec<DependencyEntry>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            target: TargetSection::default(),
            scenario: ScenarioSection::default(),
            dependencies: default_dependencies(),
        }
    }
}

/// `[target]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetSection {
    /// Directory containing the program's cargo project.
    #[serde(default = "default_project_dir")]
    pub project_dir: PathBuf,

    /// Binary name, used to probe `target/{debug,release}/<binary>`.
    #[serde(default = "default_binary")]
    pub binary: String,
}

fn default_project_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_binary() -> String {
    "anirust".to_string()
}

impl Default for TargetSection {
    fn default() -> Self {
        Self {
            project_dir: default_project_dir(),
            binary: default_binary(),
        }
    }
}

/// `[scenario]` section: the arguments for the single end-to-end run.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioSection {
    #[serde(default = "default_quality")]
    pub quality: String,

    #[serde(default = "default_episode")]
    pub episode: u32,

    #[serde(default = "default_title")]
    pub title: String,
}

fn default_quality() -> String {
    "best".to_string()
}

fn default_episode() -> u32 {
    4
}

fn default_title() -> String {
    "frieren".to_string()
}

impl Default for ScenarioSection {
    fn default() -> Self {
        Self {
            quality: default_quality(),
            episode: default_episode(),
            title: default_title(),
        }
    }
}

/// One `[[dependency]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DependencyEntry {
    /// Executable to probe for on `PATH`.
    pub tool: String,
    /// Package that provides it.
    pub package: String,
}

fn default_dependencies() -> Vec<DependencyEntry> {
    vec![
        DependencyEntry {
            tool: "mpv".to_string(),
            package: "mpv".to_string(),
        },
        DependencyEntry {
            tool: "curl".to_string(),
            package: "curl".to_string(),
        },
        DependencyEntry {
            tool: "ffplay".to_string(),
            package: "ffmpeg".to_string(),
        },
    ]
}
