use std::{io::Write, path::Path};

use envcheck_core::{
    Environment, InspectError, Settings, read_source, redact,
    settings::{LLM_API_KEY, WEATHER_API_KEY, is_set},
};

use super::{
    EXAMPLE_LINE, THIN_RULE, write_footer, write_header, write_loader_unavailable,
    write_skipped_lines,
};

/// Transcript of the configuration source with sensitive values masked,
/// followed by a presence check of the key settings.
pub fn write_report(
    out: &mut impl Write,
    env_file: &Path,
    env: &impl Environment,
) -> anyhow::Result<()> {
    write_header(out, "Environment configuration check")?;

    match read_source(env_file) {
        Ok(lines) => {
            writeln!(out, "✓ .env file found: {}", env_file.display())?;
            writeln!(out)?;
            writeln!(out, "File contents (sensitive values hidden):")?;
            writeln!(out, "{THIN_RULE}")?;
            for line in &lines {
                writeln!(out, "{line}")?;
            }
            writeln!(out, "{THIN_RULE}")?;

            write_key_settings(out, env_file, env)?;
        }
        Err(InspectError::SourceNotFound { path }) => write_missing_file_guidance(out, &path)?,
        Err(err) => return Err(err.into()),
    }

    write_footer(out)
}

/// Presence is confirmed from the resolved settings rather than the file
/// text, since values may also come from the process environment.
fn write_key_settings(
    out: &mut impl Write,
    env_file: &Path,
    env: &impl Environment,
) -> anyhow::Result<()> {
    writeln!(out)?;
    writeln!(out, "Key settings:")?;
    writeln!(out, "{THIN_RULE}")?;

    let settings = match Settings::load(env_file, env) {
        Ok(settings) => settings,
        Err(InspectError::LoaderUnavailable { reason, .. }) => {
            return write_loader_unavailable(out, &reason, env_file);
        }
        Err(err) => return Err(err.into()),
    };

    write_skipped_lines(out, settings.skipped_lines, env_file)?;

    match settings.weather_api_key.as_ref() {
        Some(key) if is_set(Some(key)) => writeln!(
            out,
            "✓ {WEATHER_API_KEY}: configured ({}, from {})",
            redact(WEATHER_API_KEY, Some(key.expose())),
            key.origin()
        )?,
        _ => {
            writeln!(out, "✗ {WEATHER_API_KEY}: not configured")?;
            writeln!(out, "  Add this line to {}: {EXAMPLE_LINE}", env_file.display())?;
        }
    }

    if is_set(settings.llm_api_key.as_ref()) {
        writeln!(out, "✓ {LLM_API_KEY}: configured")?;
    } else {
        writeln!(
            out,
            "○ {LLM_API_KEY}: not configured \
             (optional, rule-based intent recognition will be used)"
        )?;
    }

    Ok(())
}

fn write_missing_file_guidance(out: &mut impl Write, path: &Path) -> anyhow::Result<()> {
    let file_name = path.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();
    let dir = path.parent().unwrap_or(path);

    writeln!(out, "✗ .env file not found: {}", path.display())?;
    writeln!(out)?;
    writeln!(out, "Create the file with the following content:")?;
    writeln!(out, "{THIN_RULE}")?;
    writeln!(out, "{EXAMPLE_LINE}")?;
    writeln!(out, "{THIN_RULE}")?;
    writeln!(out)?;
    writeln!(out, "Steps:")?;
    writeln!(out, "1. Create a file named {file_name} in {}", dir.display())?;
    writeln!(out, "2. Add the content above")?;
    writeln!(out, "3. Save the file")?;
    Ok(())
}
