use std::{io::Write, path::Path};

use envcheck_core::{
    Environment, InspectError, ProviderTier, SettingValue, Settings, mask_secret, select_provider,
    settings::{WEATHER_API_KEY, WEATHER_API_SECRET, WEATHER_API_UID},
};

use super::{write_footer, write_header, write_loader_unavailable, write_skipped_lines};

/// Masked credential previews plus the provider the service will select.
pub fn write_report(
    out: &mut impl Write,
    env_file: &Path,
    env: &impl Environment,
) -> anyhow::Result<()> {
    write_header(out, "Weather API configuration check")?;

    let settings = match Settings::load(env_file, env) {
        Ok(settings) => settings,
        Err(InspectError::LoaderUnavailable { reason, .. }) => {
            writeln!(out)?;
            write_loader_unavailable(out, &reason, env_file)?;
            return write_footer(out);
        }
        Err(err) => return Err(err.into()),
    };

    if !settings.env_file_loaded {
        writeln!(out)?;
        writeln!(
            out,
            "○ No .env file at {}; showing the process environment only.",
            env_file.display()
        )?;
    }
    if settings.skipped_lines > 0 {
        writeln!(out)?;
        write_skipped_lines(out, settings.skipped_lines, env_file)?;
    }

    writeln!(out)?;
    writeln!(out, "{} (primary):", ProviderTier::Primary.label())?;
    write_credential(out, WEATHER_API_UID, settings.weather_api_uid.as_ref())?;
    write_credential(out, WEATHER_API_SECRET, settings.weather_api_secret.as_ref())?;

    writeln!(out)?;
    writeln!(out, "{} (fallback):", ProviderTier::Fallback.label())?;
    write_credential(out, WEATHER_API_KEY, settings.weather_api_key.as_ref())?;

    let decision = select_provider(&settings);
    let label = decision.tier.label();

    writeln!(out)?;
    writeln!(out, "Provider selection:")?;
    match decision.tier {
        ProviderTier::Primary => writeln!(out, "  ✓ {label} API will be used (highest priority)")?,
        ProviderTier::Fallback => writeln!(out, "  ○ {label} API will be used (fallback)")?,
        ProviderTier::Mock => {
            writeln!(out, "  ✗ {label} will be used (no weather API configured)")?
        }
    }
    writeln!(out, "    reason: {}", decision.rule.describe())?;

    write_footer(out)
}

/// All three weather credentials are masked as secrets, whatever their name.
fn write_credential(
    out: &mut impl Write,
    name: &str,
    value: Option<&SettingValue>,
) -> anyhow::Result<()> {
    match value {
        None => writeln!(out, "  {name}: not configured")?,
        Some(value) if value.is_empty() => {
            writeln!(out, "  {name}: configured (empty, from {})", value.origin())?
        }
        Some(value) => {
            writeln!(out, "  {name}: configured (from {})", value.origin())?;
            writeln!(out, "    preview: {}", mask_secret(Some(value.expose())))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::HashMap, fs};

    fn render(env_file: &Path, env: &HashMap<String, String>) -> String {
        let mut out = Vec::new();
        write_report(&mut out, env_file, env).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn env_file(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn primary_provider_with_masked_previews() {
        let (_dir, path) = env_file(
            "WEATHER_API_UID=PUBLICUID1234567890\nWEATHER_API_SECRET=shortsecret\n\
             WEATHER_API_KEY=06408ee685b86982dacc54a7e92a1787\n",
        );

        let report = render(&path, &HashMap::new());

        assert!(report.contains(
            "  WEATHER_API_UID: configured (from .env file)\n    preview: PUBLICUID1...7890"
        ));
        assert!(
            report.contains("  WEATHER_API_SECRET: configured (from .env file)\n    preview: ***")
        );
        assert!(report.contains("    preview: 06408ee685...1787"));
        assert!(report.contains("  ✓ Seniverse API will be used (highest priority)"));
        assert!(!report.contains("PUBLICUID1234567890"));
        assert!(!report.contains("shortsecret"));
    }

    #[test]
    fn fallback_when_pair_incomplete() {
        let (_dir, path) = env_file("WEATHER_API_UID=\nWEATHER_API_SECRET=\nWEATHER_API_KEY=k\n");

        let report = render(&path, &HashMap::new());

        assert!(report.contains("  WEATHER_API_UID: configured (empty, from .env file)"));
        assert!(report.contains("  ○ QWeather API will be used (fallback)"));
        assert!(report.contains("reason: WEATHER_API_KEY is set"));
    }

    #[test]
    fn mock_when_nothing_configured() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");

        let report = render(&path, &HashMap::new());

        assert!(report.contains("showing the process environment only"));
        assert!(report.contains("  WEATHER_API_UID: not configured"));
        assert!(report.contains("  WEATHER_API_KEY: not configured"));
        assert!(report.contains("  ✗ Mock data will be used (no weather API configured)"));
    }

    #[test]
    fn process_environment_overrides_file() {
        let (_dir, path) = env_file("WEATHER_API_KEY=k\n");
        let env: HashMap<_, _> = [
            ("WEATHER_API_UID".to_string(), "uid".to_string()),
            ("WEATHER_API_SECRET".to_string(), "secret".to_string()),
        ]
        .into();

        let report = render(&path, &env);

        assert!(report.contains("  WEATHER_API_UID: configured (from process environment)"));
        assert!(report.contains("Seniverse API will be used"));
    }

    #[test]
    fn unquoted_value_with_spaces_still_selects_provider() {
        let (_dir, path) =
            env_file("APP_NAME=Weather Assistant\nWEATHER_API_UID=u\nWEATHER_API_SECRET=s\n");

        let report = render(&path, &HashMap::new());

        assert!(report.contains("⚠ 1 line(s) in"));
        assert!(report.contains("Provider selection:"));
        assert!(report.contains("  ✓ Seniverse API will be used (highest priority)"));
        assert!(!report.contains("⚠ Warning"));
    }

    #[test]
    fn malformed_line_still_selects_provider() {
        let (_dir, path) = env_file("not_a_valid_line\nWEATHER_API_KEY=k\n");

        let report = render(&path, &HashMap::new());

        assert!(report.contains("  WEATHER_API_KEY: configured (from .env file)"));
        assert!(report.contains("  ○ QWeather API will be used (fallback)"));
    }

    #[test]
    fn malformed_line_keeps_process_environment() {
        let (_dir, path) = env_file("not_a_valid_line\n");
        let env: HashMap<_, _> = [("WEATHER_API_KEY".to_string(), "from-env".to_string())].into();

        let report = render(&path, &env);

        assert!(report.contains("  WEATHER_API_KEY: configured (from process environment)"));
        assert!(report.contains("  ○ QWeather API will be used (fallback)"));
    }

    #[test]
    fn report_is_repeatable() {
        let (_dir, path) = env_file("WEATHER_API_UID=abc\nWEATHER_API_SECRET=def\n");
        assert_eq!(render(&path, &HashMap::new()), render(&path, &HashMap::new()));
    }
}
