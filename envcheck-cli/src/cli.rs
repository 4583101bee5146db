use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use envcheck_core::{InspectorConfig, ProcessEnv};

use crate::report;

/// Raw-file inspector.
#[derive(Debug, Parser)]
#[command(
    name = "check-env",
    version,
    about = "Show the .env file with sensitive values hidden and report key settings"
)]
pub struct CheckEnvCli {}

/// Resolved-settings inspector.
#[derive(Debug, Parser)]
#[command(
    name = "check-weather-config",
    version,
    about = "Show weather API credentials and which provider the service will use"
)]
pub struct CheckWeatherConfigCli {}

impl CheckEnvCli {
    pub fn run(self) -> anyhow::Result<()> {
        let env_file = resolve_env_file()?;
        let mut out = io::stdout().lock();
        report::env_file::write_report(&mut out, &env_file, &ProcessEnv)?;
        out.flush().context("Failed to write report")
    }
}

impl CheckWeatherConfigCli {
    pub fn run(self) -> anyhow::Result<()> {
        let env_file = resolve_env_file()?;
        let mut out = io::stdout().lock();
        report::weather::write_report(&mut out, &env_file, &ProcessEnv)?;
        out.flush().context("Failed to write report")
    }
}

/// Where the configuration source is expected, per the inspector config.
fn resolve_env_file() -> anyhow::Result<PathBuf> {
    let config = InspectorConfig::load().unwrap_or_else(|err| {
        tracing::warn!("ignoring inspector config: {err:#}");
        InspectorConfig::default()
    });

    let cwd = std::env::current_dir().context("Failed to determine the working directory")?;
    let path = config.env_file_path(&cwd);
    tracing::debug!(path = %path.display(), "configuration source");
    Ok(path)
}
