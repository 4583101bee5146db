//! Masking of sensitive configuration values for display.
//!
//! A key is sensitive when its name contains `KEY`, `SECRET` or `PASSWORD`
//! (case-insensitive). Sensitive values longer than [`SHORT_SECRET_MAX`]
//! characters keep a 10 character head and a 4 character tail so an operator
//! can recognise which credential was loaded; shorter ones are fully masked.

/// Substrings that mark a key name as sensitive.
pub const SENSITIVE_MARKERS: &[&str] = &["KEY", "SECRET", "PASSWORD"];

/// Replacement for short secrets.
pub const MASK_TOKEN: &str = "***";

/// Placed between head and tail of a long secret.
pub const SEPARATOR: &str = "...";

/// Shown for a sensitive key that is set to an empty value.
pub const EMPTY_MARKER: &str = "(empty)";

/// Longest secret that is masked completely.
pub const SHORT_SECRET_MAX: usize = 14;

const HEAD_CHARS: usize = 10;
const TAIL_CHARS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sensitivity {
    Sensitive,
    Ordinary,
}

impl Sensitivity {
    /// Classify a key name.
    pub fn of(key: &str) -> Self {
        let upper = key.to_uppercase();
        if SENSITIVE_MARKERS.iter().any(|marker| upper.contains(marker)) {
            Sensitivity::Sensitive
        } else {
            Sensitivity::Ordinary
        }
    }

    pub fn is_sensitive(self) -> bool {
        self == Sensitivity::Sensitive
    }
}

/// Display-safe form of `value` for `key`.
///
/// Ordinary keys are returned unchanged (an absent value becomes the empty
/// string); sensitive keys go through [`mask_secret`].
pub fn redact(key: &str, value: Option<&str>) -> String {
    if Sensitivity::of(key).is_sensitive() {
        mask_secret(value)
    } else {
        value.unwrap_or_default().to_string()
    }
}

/// Mask a value that is known to be a credential, regardless of its key name.
pub fn mask_secret(value: Option<&str>) -> String {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return EMPTY_MARKER.to_string(),
    };

    // Counted in chars so multi-byte values are never split mid-codepoint.
    let len = value.chars().count();
    if len <= SHORT_SECRET_MAX {
        return MASK_TOKEN.to_string();
    }

    let head: String = value.chars().take(HEAD_CHARS).collect();
    let tail: String = value.chars().skip(len - TAIL_CHARS).collect();
    format!("{head}{SEPARATOR}{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_substring_ignoring_case() {
        assert!(Sensitivity::of("WEATHER_API_KEY").is_sensitive());
        assert!(Sensitivity::of("weather_api_secret").is_sensitive());
        assert!(Sensitivity::of("Db_Password").is_sensitive());
        assert!(Sensitivity::of("MONKEY_BUSINESS").is_sensitive());
        assert!(!Sensitivity::of("WEATHER_API_UID").is_sensitive());
        assert!(!Sensitivity::of("LOG_LEVEL").is_sensitive());
        assert!(!Sensitivity::of("").is_sensitive());
    }

    #[test]
    fn short_secrets_get_constant_mask() {
        for value in ["a", "abc", "hunter2", "12345678901234"] {
            assert_eq!(redact("KEY", Some(value)), MASK_TOKEN, "value {value:?}");
        }
    }

    #[test]
    fn long_secret_keeps_head_and_tail() {
        assert_eq!(
            redact("WEATHER_API_KEY", Some("06408ee685b86982dacc54a7e92a1787")),
            "06408ee685...1787"
        );
    }

    #[test]
    fn boundary_between_mask_and_preview() {
        assert_eq!(mask_secret(Some("abcdefghijklmn")), MASK_TOKEN);
        assert_eq!(mask_secret(Some("abcdefghijklmno")), "abcdefghij...lmno");
    }

    #[test]
    fn middle_of_long_secret_never_shown() {
        let value = format!("{}{}{}", "A".repeat(10), "z".repeat(20), "B".repeat(4));
        let masked = mask_secret(Some(&value));
        assert_eq!(masked, "AAAAAAAAAA...BBBB");
        assert!(!masked.contains('z'));
    }

    #[test]
    fn empty_sensitive_value_is_marked() {
        assert_eq!(redact("API_SECRET", Some("")), EMPTY_MARKER);
        assert_eq!(redact("API_SECRET", None), EMPTY_MARKER);
        assert_ne!(EMPTY_MARKER, MASK_TOKEN);
    }

    #[test]
    fn ordinary_values_pass_through() {
        assert_eq!(redact("WEATHER_API_UID", Some("P1234567890abcdefg")), "P1234567890abcdefg");
        assert_eq!(redact("URL", Some("http://x?a=b")), "http://x?a=b");
        assert_eq!(redact("PORT", None), "");
    }

    #[test]
    fn unicode_and_whitespace_do_not_panic() {
        let value = "密钥密钥密钥密钥密钥中间部分尾巴尾巴";
        assert_eq!(mask_secret(Some(value)), "密钥密钥密钥密钥密钥...尾巴尾巴");
        assert_eq!(mask_secret(Some("   ")), MASK_TOKEN);
        assert_eq!(mask_secret(Some("with inner  spaces and more")), "with inner...more");
    }
}
