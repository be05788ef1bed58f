//! Registry of the OAuth providers this relay knows how to talk to.
//!
//! The set is closed: adding a provider means adding a [`Provider`] variant,
//! and the compiler then points at every `match` that needs a new arm.

mod github;
mod google;

use std::fmt;
use std::str::FromStr;

use crate::OAuthError;

/// Supported identity providers, as they appear in the URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    GitHub,
    Google,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::GitHub, Provider::Google];

    pub fn as_str(self) -> &'static str {
        self.config().id
    }

    pub fn config(self) -> &'static ProviderConfig {
        match self {
            Provider::GitHub => &github::CONFIG,
            Provider::Google => &google::CONFIG,
        }
    }
}

impl FromStr for Provider {
    type Err = OAuthError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Provider::ALL
            .into_iter()
            .find(|provider| provider.as_str() == id)
            .ok_or_else(|| OAuthError::UnknownProvider(id.to_string()))
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of a provider's endpoints and fixed parameters.
#[derive(Debug)]
pub struct ProviderConfig {
    pub id: &'static str,
    pub authorize_url: &'static str,
    pub token_url: &'static str,
    pub scope: &'static str,
    /// Environment variable holding the client id.
    pub client_id_env: &'static str,
    /// Environment variable holding the client secret.
    pub client_secret_env: &'static str,
    /// Sent on both legs when set. Providers without one fall back to the
    /// callback registered in their app settings.
    pub redirect_uri: Option<&'static str>,
    pub authorize_params: &'static [(&'static str, &'static str)],
    pub token_params: &'static [(&'static str, &'static str)],
    pub token_headers: &'static [(&'static str, &'static str)],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_providers() {
        assert_eq!("github".parse::<Provider>().unwrap(), Provider::GitHub);
        assert_eq!("google".parse::<Provider>().unwrap(), Provider::Google);
    }

    #[test]
    fn rejects_unknown_providers() {
        for id in ["", "gitlab", "GitHub", "google ", "auth"] {
            let result = id.parse::<Provider>();
            assert!(
                matches!(result, Err(OAuthError::UnknownProvider(ref value)) if value == id),
                "{id:?} should be rejected"
            );
        }
    }

    #[test]
    fn config_ids_round_trip_through_display() {
        for provider in Provider::ALL {
            assert_eq!(provider.to_string().parse::<Provider>().unwrap(), provider);
        }
    }

    #[test]
    fn every_provider_has_https_endpoints() {
        for provider in Provider::ALL {
            let config = provider.config();
            assert!(config.authorize_url.starts_with("https://"));
            assert!(config.token_url.starts_with("https://"));
            assert!(!config.scope.is_empty());
        }
    }
}
