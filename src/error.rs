use thiserror::Error;

#[derive(Debug, Error)]
pub enum OAuthError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    #[error("invalid response: {message}")]
    InvalidResponse { message: String, body: String },

    #[error("missing authorization code in callback")]
    MissingAuthorizationCode,

    #[cfg(feature = "cli")]
    #[error("invalid .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

impl OAuthError {
    /// Whether the failure happened while talking to the provider's token endpoint.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Http(_) | Self::InvalidResponse { .. })
    }
}
