//! Configuration loading for the background service.
//!
//! A single YAML file holds the render style plus the resize debounce. Every
//! key is optional.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use renderer::BackgroundStyle;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Root configuration loaded from `background.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundConfig {
    /// Quiet period after the last resize before regenerating, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(flatten)]
    pub style: BackgroundStyle,
}

fn default_debounce_ms() -> u64 {
    100
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            style: BackgroundStyle::default(),
        }
    }
}

impl BackgroundConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?;

        debug!(
            path = %path.display(),
            cell_size = config.style.cell_size,
            levels = config.style.levels.count,
            debounce_ms = config.debounce_ms,
            "Loaded background config"
        );
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: BackgroundConfig =
            serde_yaml::from_str(content).context("Failed to parse YAML")?;
        config.style.validate()?;
        Ok(config)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
