//! Typed snapshot of the weather service settings.
//!
//! Values are resolved the way the service resolves them: a variable already
//! present in the process environment wins over the same key in the `.env`
//! file. The snapshot is built once and handed around by reference.

use std::{collections::HashMap, fmt, path::Path};

use secrecy::{ExposeSecret, SecretString};

use crate::error::{InspectError, Result};

pub const WEATHER_API_UID: &str = "WEATHER_API_UID";
pub const WEATHER_API_SECRET: &str = "WEATHER_API_SECRET";
pub const WEATHER_API_KEY: &str = "WEATHER_API_KEY";
pub const LLM_API_KEY: &str = "LLM_API_KEY";

/// Read access to environment variables.
pub trait Environment {
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    ProcessEnv,
    EnvFile,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::ProcessEnv => "process environment",
            Origin::EnvFile => ".env file",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved setting and where it came from.
#[derive(Debug)]
pub struct SettingValue {
    secret: SecretString,
    origin: Origin,
}

impl SettingValue {
    pub fn new(value: impl Into<String>, origin: Origin) -> Self {
        Self { secret: SecretString::from(value.into()), origin }
    }

    pub fn expose(&self) -> &str {
        self.secret.expose_secret()
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Whitespace-only values count as non-empty.
    pub fn is_empty(&self) -> bool {
        self.expose().is_empty()
    }
}

/// Read-only settings snapshot.
#[derive(Debug, Default)]
pub struct Settings {
    pub weather_api_uid: Option<SettingValue>,
    pub weather_api_secret: Option<SettingValue>,
    pub weather_api_key: Option<SettingValue>,
    pub llm_api_key: Option<SettingValue>,
    /// Whether the `.env` file existed and was read.
    pub env_file_loaded: bool,
    /// Lines of the `.env` file the dotenv parser could not read.
    pub skipped_lines: usize,
}

impl Settings {
    /// Resolve settings from `env` and the dotenv file at `env_file`.
    ///
    /// A missing file is not an error; the snapshot then reflects `env` only.
    /// Lines the dotenv parser rejects are skipped and counted.
    pub fn load(env_file: &Path, env: &impl Environment) -> Result<Self> {
        let file = read_env_file(env_file)?;
        let env_file_loaded = file.is_some();
        let EnvFileValues { values, skipped_lines } = file.unwrap_or_default();

        let resolve = |name: &str| {
            let value = match env.var(name) {
                Some(value) => Some(SettingValue::new(value, Origin::ProcessEnv)),
                None => values.get(name).map(|v| SettingValue::new(v.as_str(), Origin::EnvFile)),
            };
            if let Some(value) = &value {
                tracing::debug!(key = name, origin = %value.origin(), "resolved setting");
            }
            value
        };

        Ok(Self {
            weather_api_uid: resolve(WEATHER_API_UID),
            weather_api_secret: resolve(WEATHER_API_SECRET),
            weather_api_key: resolve(WEATHER_API_KEY),
            llm_api_key: resolve(LLM_API_KEY),
            env_file_loaded,
            skipped_lines,
        })
    }
}

/// Present and non-empty.
pub fn is_set(value: Option<&SettingValue>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

#[derive(Debug, Default)]
struct EnvFileValues {
    values: HashMap<String, String>,
    skipped_lines: usize,
}

fn read_env_file(path: &Path) -> Result<Option<EnvFileValues>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no .env file, using process environment only");
        return Ok(None);
    }

    let iter = dotenvy::from_path_iter(path).map_err(|err| loader_error(path, err))?;

    let mut file = EnvFileValues::default();
    for item in iter {
        match item {
            Ok((key, value)) => {
                file.values.insert(key, value);
            }
            // The parse error echoes the line, which may hold a secret.
            Err(dotenvy::Error::LineParse(..)) => {
                tracing::warn!(path = %path.display(), "skipping line the dotenv parser rejected");
                file.skipped_lines += 1;
            }
            Err(err) => return Err(loader_error(path, err)),
        }
    }

    Ok(Some(file))
}

fn loader_error(path: &Path, err: dotenvy::Error) -> InspectError {
    match err {
        dotenvy::Error::Io(source) => {
            InspectError::UnexpectedIo { path: path.to_path_buf(), source }
        }
        other => {
            InspectError::LoaderUnavailable { path: path.to_path_buf(), reason: other.to_string() }
        }
    }
}
