//! Configuration loader.
//!
//! Loads and validates the degree configuration from YAML.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use super::types::DegreeConfig;

/// Name of the degree configuration file inside the config directory.
const DEGREE_FILE: &str = "degree.yaml";

pub struct ConfigLoader {
    config_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Create loader from the COURSEMAP_CONFIG_DIR env var or default paths.
    ///
    /// Path resolution order:
    /// 1. COURSEMAP_CONFIG_DIR environment variable (explicit override)
    /// 2. Relative "config" path (works when running from workspace root)
    /// 3. Workspace root config (traverse up from CARGO_MANIFEST_DIR)
    pub fn from_env() -> Self {
        if let Ok(dir) = std::env::var("COURSEMAP_CONFIG_DIR") {
            return Self::new(dir);
        }

        if Path::new("config").join(DEGREE_FILE).exists() {
            return Self::new("config");
        }

        if let Some(workspace_config) = Self::find_workspace_config(env!("CARGO_MANIFEST_DIR")) {
            return Self::new(workspace_config);
        }

        // Last resort - return "config" and let the load fail with a clear
        // error.
        Self::new("config")
    }

    /// Find a config directory by traversing up from a manifest directory.
    fn find_workspace_config(start_dir: &str) -> Option<PathBuf> {
        let mut current = Path::new(start_dir);
        for _ in 0..5 {
            let config_path = current.join("config");
            if config_path.join(DEGREE_FILE).exists() {
                return Some(config_path);
            }
            current = current.parent()?;
        }
        None
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Load and validate the degree configuration.
    pub fn load_degree_config(&self) -> Result<DegreeConfig> {
        let path = self.config_dir.join(DEGREE_FILE);
        info!("Loading degree configuration from {}", path.display());

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: DegreeConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        info!(
            "Loaded {} credit requirements over a {}-term cycle",
            config.requirements.len(),
            config.calendar.cycle.len()
        );

        Ok(config)
    }
}
