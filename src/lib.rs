//! OAuth 2.0 authorization code relay for GitHub and Google.
//!
//! The relay redirects browsers to the provider's consent screen and, on the
//! way back, trades the authorization code for a token and hands the
//! provider's JSON response straight back to the caller. Nothing is stored
//! between requests.

mod client;
mod config;
mod error;
mod providers;
mod server;
mod types;

pub use client::OAuthClient;
pub use config::{ClientCredentials, DEFAULT_TIMEOUT, RelayConfig};
pub use error::OAuthError;
pub use providers::{Provider, ProviderConfig};
pub use server::RelayServer;
pub use types::{AuthorizationRequest, CallbackQuery, CallbackRequest, TokenResponse};
