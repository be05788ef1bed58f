use std::collections::HashMap;

use reqwest::Client;
use url::Url;

use crate::{
    AuthorizationRequest, CallbackRequest, OAuthError, Provider, RelayConfig, TokenResponse,
};

/// Performs the two network-facing halves of the authorization code grant.
#[derive(Debug, Clone)]
pub struct OAuthClient {
    config: RelayConfig,
    http: Client,
}

impl OAuthClient {
    pub fn new(config: RelayConfig) -> Result<Self, OAuthError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self { config, http })
    }

    pub fn authorization_url(&self, provider: Provider) -> Result<AuthorizationRequest, OAuthError> {
        let descriptor = provider.config();
        let credentials = self.config.credentials(provider);

        let mut url = Url::parse(descriptor.authorize_url)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("scope", descriptor.scope);
            pairs.append_pair("client_id", &credentials.client_id);
            for (key, value) in descriptor.authorize_params {
                pairs.append_pair(key, value);
            }
            if let Some(redirect_uri) = descriptor.redirect_uri {
                pairs.append_pair("redirect_uri", redirect_uri);
            }
        }

        Ok(AuthorizationRequest {
            provider,
            authorization_url: url.to_string(),
        })
    }

    /// Trades the callback's code for whatever the token endpoint returns.
    ///
    /// Provider error payloads come back as `Ok`; only transport failures and
    /// bodies that are not JSON are errors.
    pub async fn exchange_code(&self, request: CallbackRequest) -> Result<TokenResponse, OAuthError> {
        let provider = request.provider;
        let payload = self.token_payload(request);
        let token_url = self.config.token_url(provider);

        let mut builder = self.http.post(token_url).json(&payload);
        for (name, value) in provider.config().token_headers {
            builder = builder.header(*name, *value);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%provider, status = status.as_u16(), "token endpoint returned an error status");
        }

        let body = response.text().await?;
        let token = serde_json::from_str(&body).map_err(|err| OAuthError::InvalidResponse {
            message: err.to_string(),
            body,
        })?;

        tracing::debug!(%provider, status = status.as_u16(), "token exchange completed");
        Ok(TokenResponse(token))
    }

    fn token_payload(&self, request: CallbackRequest) -> HashMap<&'static str, String> {
        let CallbackRequest { provider, code } = request;
        let descriptor = provider.config();
        let credentials = self.config.credentials(provider);

        let mut payload = HashMap::new();
        payload.insert("client_id", credentials.client_id.clone());
        payload.insert("client_secret", credentials.client_secret.clone());
        payload.insert("code", code);
        for (key, value) in descriptor.token_params {
            payload.insert(*key, (*value).to_string());
        }
        if let Some(redirect_uri) = descriptor.redirect_uri {
            payload.insert("redirect_uri", redirect_uri.to_string());
        }
        payload
    }
}
