use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use crate::Provider;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client credentials issued by a provider for this application.
///
/// Missing values stay empty; the provider is left to reject them.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl ClientCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub github: ClientCredentials,
    pub google: ClientCredentials,
    pub timeout: Option<Duration>,
    pub token_urls: HashMap<Provider, String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            github: ClientCredentials::default(),
            google: ClientCredentials::default(),
            timeout: Some(DEFAULT_TIMEOUT),
            token_urls: HashMap::new(),
        }
    }
}

impl RelayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(mut self, provider: Provider, credentials: ClientCredentials) -> Self {
        match provider {
            Provider::GitHub => self.github = credentials,
            Provider::Google => self.google = credentials,
        }
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Points a provider's token exchange somewhere other than its public endpoint.
    pub fn with_token_url(mut self, provider: Provider, token_url: impl Into<String>) -> Self {
        self.token_urls.insert(provider, token_url.into());
        self
    }

    pub fn credentials(&self, provider: Provider) -> &ClientCredentials {
        match provider {
            Provider::GitHub => &self.github,
            Provider::Google => &self.google,
        }
    }

    pub fn token_url(&self, provider: Provider) -> &str {
        self.token_urls
            .get(&provider)
            .map_or(provider.config().token_url, String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_are_stored_per_provider() {
        let config = RelayConfig::new()
            .with_credentials(Provider::GitHub, ClientCredentials::new("gh-id", "gh-secret"))
            .with_credentials(Provider::Google, ClientCredentials::new("g-id", "g-secret"));

        assert_eq!(config.credentials(Provider::GitHub).client_id, "gh-id");
        assert_eq!(config.credentials(Provider::GitHub).client_secret, "gh-secret");
        assert_eq!(config.credentials(Provider::Google).client_id, "g-id");
        assert_eq!(config.credentials(Provider::Google).client_secret, "g-secret");
    }

    #[test]
    fn missing_credentials_default_to_empty() {
        let config = RelayConfig::new();
        assert_eq!(config.credentials(Provider::GitHub), &ClientCredentials::default());
        assert!(config.credentials(Provider::Google).client_id.is_empty());
    }

    #[test]
    fn token_url_falls_back_to_provider_endpoint() {
        let config = RelayConfig::new().with_token_url(Provider::Google, "http://127.0.0.1:9/token");
        assert_eq!(
            config.token_url(Provider::GitHub),
            "https://github.com/login/oauth/access_token"
        );
        assert_eq!(config.token_url(Provider::Google), "http://127.0.0.1:9/token");
    }

    #[test]
    fn debug_output_hides_client_secret() {
        let config = RelayConfig::new()
            .with_credentials(Provider::GitHub, ClientCredentials::new("gh-id", "gh-secret"));
        let output = format!("{config:?}");
        assert!(output.contains("gh-id"));
        assert!(!output.contains("gh-secret"));
    }

    #[test]
    fn timeout_defaults_to_bounded_value() {
        assert_eq!(RelayConfig::new().timeout, Some(DEFAULT_TIMEOUT));
        assert_eq!(RelayConfig::new().without_timeout().timeout, None);
    }
}
