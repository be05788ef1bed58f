use std::fmt;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::{OAuthError, Provider};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRequest {
    pub provider: Provider,
    pub authorization_url: String,
}

/// Query string the provider sends back to the callback route.
#[derive(Debug, Clone, Default)]
pub struct CallbackQuery {
    pub code: Option<String>,
}

impl CallbackQuery {
    /// Parses a raw query string. Repeated keys keep their first value.
    pub fn parse(query: Option<&str>) -> Self {
        let code = query.and_then(|query| {
            form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == "code")
                .map(|(_, value)| value.into_owned())
        });
        Self { code }
    }
}

#[derive(Clone)]
pub struct CallbackRequest {
    pub provider: Provider,
    pub code: String,
}

impl CallbackRequest {
    pub fn new(provider: Provider, code: Option<&str>) -> Result<Self, OAuthError> {
        match code {
            Some(code) if !code.is_empty() => Ok(Self {
                provider,
                code: code.to_string(),
            }),
            _ => Err(OAuthError::MissingAuthorizationCode),
        }
    }
}

// Keeps the authorization code out of logs and panic messages.
impl fmt::Debug for CallbackRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackRequest")
            .field("provider", &self.provider)
            .field("code", &"<redacted>")
            .finish()
    }
}

/// Whatever JSON the provider's token endpoint returned, untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenResponse(pub serde_json::Value);

impl TokenResponse {
    pub fn access_token(&self) -> Option<&str> {
        self.0.get("access_token").and_then(serde_json::Value::as_str)
    }
}
