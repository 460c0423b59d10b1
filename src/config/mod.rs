use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::command::INVALID_COMMAND;

fn default_invalid_message() -> String {
    INVALID_COMMAND.to_string()
}

/// Settings read from `polyquery.toml`
///
/// ```toml
/// polygons = "shapes.txt"
/// strict = true
/// verbose = false
/// invalid_message = "<INVALID COMMAND>"
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FileConfig {
    /// Polygon file used when none is given on the command line
    #[serde(default)]
    pub polygons: Option<PathBuf>,
    /// Reject verbs outside the vocabulary instead of ignoring them
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default = "default_invalid_message")]
    pub invalid_message: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            polygons: None,
            strict: false,
            verbose: false,
            invalid_message: default_invalid_message(),
        }
    }
}

impl FileConfig {
    /// Read an explicitly requested config file
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Search the usual locations and return the first config that parses
    pub fn load() -> Option<Self> {
        Self::load_from(&get_config_paths())
    }

    fn load_from(paths: &[PathBuf]) -> Option<Self> {
        for path in paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        tracing::debug!(path = %path.display(), "loaded config");
                        return Some(config);
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "failed to parse config file");
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("polyquery.toml"),
        PathBuf::from(".polyquery.toml"),
    ];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("polyquery").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".polyquery.toml"));
    }

    paths
}
