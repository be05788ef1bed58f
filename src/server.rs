mod http;
mod pages;

use std::future::Future;
use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderName, HeaderValue},
    routing::get,
};
use tokio::net::{TcpListener, ToSocketAddrs};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::{OAuthClient, OAuthError, RelayConfig};

use self::http::{RelayState, authorize_handler, callback_handler, fallback_handler};
use self::pages::{index_handler, login_handler};

const POWERED_BY: &str = concat!("oauth-relay/", env!("CARGO_PKG_VERSION"));

/// HTTP front end for the authorization code flow.
#[derive(Debug, Clone)]
pub struct RelayServer {
    client: Arc<OAuthClient>,
}

impl RelayServer {
    pub fn new(config: RelayConfig) -> Result<Self, OAuthError> {
        Ok(Self::from_client(OAuthClient::new(config)?))
    }

    pub fn from_client(client: OAuthClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub fn router(&self) -> Router {
        let state = RelayState {
            client: self.client.clone(),
        };

        Router::new()
            .route("/", get(index_handler))
            .route("/login", get(login_handler))
            .route("/auth/{provider}", get(authorize_handler))
            .route("/oauth/{provider}/callback", get(callback_handler))
            .fallback(fallback_handler)
            .with_state(state)
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-powered-by"),
                HeaderValue::from_static(POWERED_BY),
            ))
            .layer(TraceLayer::new_for_http())
    }

    pub async fn bind(addr: impl ToSocketAddrs) -> Result<TcpListener, OAuthError> {
        TcpListener::bind(addr).await.map_err(OAuthError::from)
    }

    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<(), OAuthError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Ok(addr) = listener.local_addr() {
            tracing::info!(%addr, "oauth relay listening");
        }

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}
