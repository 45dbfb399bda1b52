// src/config.rs
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Local config file probed in the working directory.
pub const CONFIG_FILE: &str = "uniscan.toml";

/// Defaults for a scan run, overridable from `uniscan.toml` and CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Rule set source (JSON mapping rule name -> patterns).
    #[serde(default = "default_rules")]
    pub rules: PathBuf,
    /// Destination of the summary table. Overwritten on every run.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Count `.meta` sidecar files in the per-project file total.
    #[serde(default)]
    pub include_meta: bool,
    #[serde(default)]
    pub verbose: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            output: default_output(),
            include_meta: false,
            verbose: false,
        }
    }
}

fn default_rules() -> PathBuf {
    PathBuf::from("rules.json")
}

fn default_output() -> PathBuf {
    PathBuf::from("unity_projects_summary.csv")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct UniscanToml {
    #[serde(default)]
    scan: ScanConfig,
}

// serde(default) on the table needs this path.
impl ScanConfig {
    /// Loads `uniscan.toml` from the working directory, falling back to
    /// defaults when the file is absent.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(_) => Self::default(),
        }
    }

    /// Parses config content; a malformed file degrades to defaults with a
    /// diagnostic rather than aborting the run.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        match toml::from_str::<UniscanToml>(content) {
            Ok(parsed) => parsed.scan,
            Err(e) => {
                eprintln!("WARN: ignoring malformed {CONFIG_FILE}: {e}");
                Self::default()
            }
        }
    }
}
