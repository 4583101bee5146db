//! Core library for the weather environment inspectors.
//!
//! This crate defines:
//! - Redaction of sensitive configuration values
//! - Line classification of a `.env` configuration source
//! - The typed settings snapshot and its loader
//! - Provider precedence (which weather backend the service will use)
//!
//! It is used by `envcheck-cli`. Nothing here ever writes configuration.

pub mod config;
pub mod error;
pub mod precedence;
pub mod redact;
pub mod settings;
pub mod source;

pub use config::InspectorConfig;
pub use error::{InspectError, Result};
pub use precedence::{ProviderDecision, ProviderTier, SelectionRule, select_provider};
pub use redact::{Sensitivity, mask_secret, redact};
pub use settings::{Environment, Origin, ProcessEnv, SettingValue, Settings};
pub use source::{ConfigLine, LineKind, parse_lines, read_source};
