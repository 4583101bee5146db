use std::fmt;

use crate::settings::{Settings, is_set};

/// Which weather backend the service will pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderTier {
    /// Seniverse, authenticated with a UID and secret pair.
    Primary,
    /// QWeather, authenticated with a single API key.
    Fallback,
    /// Built-in mock data.
    Mock,
}

impl ProviderTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderTier::Primary => "seniverse",
            ProviderTier::Fallback => "qweather",
            ProviderTier::Mock => "mock",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProviderTier::Primary => "Seniverse",
            ProviderTier::Fallback => "QWeather",
            ProviderTier::Mock => "Mock data",
        }
    }

    /// Tiers in the order they are tried.
    pub const fn all() -> &'static [ProviderTier] {
        &[ProviderTier::Primary, ProviderTier::Fallback, ProviderTier::Mock]
    }
}

impl fmt::Display for ProviderTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The rule that produced a [`ProviderDecision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionRule {
    UidAndSecretSet,
    ApiKeySet,
    NothingConfigured,
}

impl SelectionRule {
    pub fn describe(&self) -> &'static str {
        match self {
            SelectionRule::UidAndSecretSet => {
                "WEATHER_API_UID and WEATHER_API_SECRET are both set"
            }
            SelectionRule::ApiKeySet => {
                "WEATHER_API_KEY is set and the UID/secret pair is incomplete"
            }
            SelectionRule::NothingConfigured => "no weather API credentials are set",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderDecision {
    pub tier: ProviderTier,
    pub rule: SelectionRule,
}

impl ProviderDecision {
    /// Decision table over which credentials are present and non-empty.
    /// First matching row wins.
    pub fn from_presence(uid: bool, secret: bool, api_key: bool) -> Self {
        let (tier, rule) = match (uid, secret, api_key) {
            (true, true, _) => (ProviderTier::Primary, SelectionRule::UidAndSecretSet),
            (_, _, true) => (ProviderTier::Fallback, SelectionRule::ApiKeySet),
            _ => (ProviderTier::Mock, SelectionRule::NothingConfigured),
        };
        Self { tier, rule }
    }
}

/// Predict the provider the weather service will select for `settings`.
pub fn select_provider(settings: &Settings) -> ProviderDecision {
    let decision = ProviderDecision::from_presence(
        is_set(settings.weather_api_uid.as_ref()),
        is_set(settings.weather_api_secret.as_ref()),
        is_set(settings.weather_api_key.as_ref()),
    );
    tracing::debug!(tier = %decision.tier, rule = ?decision.rule, "selected weather provider");
    decision
}
