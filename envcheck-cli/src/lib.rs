//! Command-line inspectors for the weather service environment.
//!
//! This crate focuses on:
//! - The two no-argument entry points (`check-env`, `check-weather-config`)
//! - Human-friendly report formatting
//! - Logging setup
//!
//! All inspection logic lives in `envcheck-core`.

pub mod cli;
pub mod logging;
pub mod report;
