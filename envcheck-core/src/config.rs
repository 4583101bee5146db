use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// File name of the configuration source when none is configured.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Settings for the inspectors themselves, read from the platform config dir.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct InspectorConfig {
    /// Example TOML:
    /// env_file = "/srv/weather/backend/.env"
    pub env_file: Option<PathBuf>,
}

impl InspectorConfig {
    /// Load config from disk, or return the defaults if it doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: InspectorConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "envcheck")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Absolute location of the configuration source, relative paths being
    /// taken from `cwd`.
    pub fn env_file_path(&self, cwd: &Path) -> PathBuf {
        match &self.env_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => cwd.join(path),
            None => cwd.join(DEFAULT_ENV_FILE),
        }
    }
}
