//! Configuration management for prdgen
//!
//! This module provides configuration structures for repository-level prdgen
//! settings, including the data directory, export output directory, and
//! interview defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{Complexity, Result};

/// Repository-level prdgen configuration
///
/// Loaded from `.prdgen/config.toml` under the base directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrdgenConfig {
    /// Directory holding persisted session files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory exported documents are written to
    #[serde(default = "default_exports_dir")]
    pub exports_dir: PathBuf,

    /// Interview defaults
    #[serde(default)]
    pub interview: InterviewDefaults,
}

/// Default interview parameters applied when the CLI flags are omitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewDefaults {
    /// Complexity assumed for new sessions
    #[serde(default)]
    pub complexity: Complexity,
}

// Default value providers
fn default_data_dir() -> PathBuf {
    PathBuf::from(".prdgen")
}

fn default_exports_dir() -> PathBuf {
    PathBuf::from("exports")
}

impl PrdgenConfig {
    /// Load configuration from `.prdgen/config.toml` or use defaults
    pub fn load_or_default(base_dir: &Path) -> Result<Self> {
        let config_path = base_dir.join(".prdgen/config.toml");

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Ok(toml::from_str(&content).map_err(|e| {
                crate::PrdError::Other(format!("Failed to parse config file: {}", e))
            })?)
        } else {
            Ok(Self::default())
        }
    }

    /// Write default configuration to `.prdgen/config.toml`
    pub fn write_default(base_dir: &Path) -> Result<()> {
        let config_dir = base_dir.join(".prdgen");
        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        let config = Self::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| crate::PrdError::Other(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Directory session JSON files live in
    pub fn sessions_dir(&self) -> PathBuf {
        self.data_dir.join("sessions")
    }
}

impl Default for PrdgenConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            exports_dir: default_exports_dir(),
            interview: InterviewDefaults::default(),
        }
    }
}

impl Default for InterviewDefaults {
    fn default() -> Self {
        Self {
            complexity: Complexity::Moderate,
        }
    }
}
