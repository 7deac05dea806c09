use std::path::{Path, PathBuf};

use ecma_concepts_core::{ABSENT, Style};
use serde::{Deserialize, Serialize};

const FILE_NAMES: [&str; 2] = ["ecma-concepts.toml", ".ecma-concepts.toml"];

/// Configuration for how the destructured line is rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Printed in place of a hole in the sequence
    pub absent_token: String,

    /// Placed between the destructured values
    pub separator: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            absent_token: ABSENT.to_string(),
            separator: " ".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Find the first configuration file in `start` or any of its parents,
    /// then in the user's config directory.
    pub fn locate(start: &Path) -> Option<PathBuf> {
        let mut current_dir = start.to_path_buf();
        loop {
            for filename in FILE_NAMES {
                let path = current_dir.join(filename);
                if path.is_file() {
                    return Some(path);
                }
            }

            if !current_dir.pop() {
                break;
            }
        }

        let path = dirs::home_dir()?.join(".config/ecma-concepts/ecma-concepts.toml");
        path.is_file().then_some(path)
    }

    /// Find and load configuration from standard locations
    pub fn load() -> Result<Self, ConfigError> {
        let start = std::env::current_dir().map_err(|e| ConfigError::IoError(e.to_string()))?;
        match Self::locate(&start) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Generate a default configuration file content
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }

    pub fn style(&self) -> Style {
        Style {
            absent: self.absent_token.clone(),
            separator: self.separator.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

mod dirs {
    pub fn home_dir() -> Option<std::path::PathBuf> {
        std::env::var_os("HOME").map(std::path::PathBuf::from)
    }
}
