//! Human-readable report formatting shared by both inspectors.

use std::{io::Write, path::Path};

pub mod env_file;
pub mod weather;

pub(crate) const RULE: &str = "============================================================";
pub(crate) const THIN_RULE: &str = "------------------------------------------------------------";

/// Smallest useful content for a fresh `.env` file.
pub const EXAMPLE_LINE: &str = "WEATHER_API_KEY=<your-weather-api-key>";

pub(crate) fn write_header(out: &mut impl Write, title: &str) -> anyhow::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{RULE}")?;
    Ok(())
}

pub(crate) fn write_footer(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    Ok(())
}

/// Degraded report used when the settings loader cannot parse the source:
/// explain what failed, then fall back to checking that the file exists.
pub(crate) fn write_loader_unavailable(
    out: &mut impl Write,
    reason: &str,
    env_file: &Path,
) -> anyhow::Result<()> {
    tracing::warn!(path = %env_file.display(), "settings loader unavailable: {reason}");

    writeln!(out, "⚠ Warning: the settings loader could not read the configuration: {reason}")?;
    writeln!(
        out,
        "  Check that {} is a readable KEY=VALUE file, then run this check again.",
        env_file.display()
    )?;
    writeln!(out)?;
    if env_file.exists() {
        writeln!(out, "✓ .env file exists: {}", env_file.display())?;
    } else {
        writeln!(out, "✗ .env file does not exist: {}", env_file.display())?;
    }
    Ok(())
}

/// Note for lines the settings loader skipped, so an operator knows values
/// on those lines will not reach the service.
pub(crate) fn write_skipped_lines(
    out: &mut impl Write,
    skipped_lines: usize,
    env_file: &Path,
) -> anyhow::Result<()> {
    if skipped_lines > 0 {
        writeln!(
            out,
            "⚠ {skipped_lines} line(s) in {} could not be parsed by the settings loader and were \
             ignored (quote values that contain spaces)",
            env_file.display()
        )?;
    }
    Ok(())
}
