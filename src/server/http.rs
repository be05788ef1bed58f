use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde_json::json;

use crate::{CallbackQuery, CallbackRequest, OAuthClient, OAuthError, Provider, TokenResponse};

use super::pages::{INVALID_CODE_HTML, NOT_FOUND_TEXT};

#[derive(Clone)]
pub(super) struct RelayState {
    pub(super) client: Arc<OAuthClient>,
}

pub(super) async fn authorize_handler(
    State(state): State<RelayState>,
    Path(provider): Path<String>,
) -> Result<Response, OAuthError> {
    let provider: Provider = provider.parse()?;
    let auth = state.client.authorization_url(provider)?;

    tracing::info!(%provider, "redirecting to authorization endpoint");
    Ok((StatusCode::FOUND, [(header::LOCATION, auth.authorization_url)]).into_response())
}

pub(super) async fn callback_handler(
    State(state): State<RelayState>,
    Path(provider): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Json<TokenResponse>, OAuthError> {
    let provider: Provider = provider.parse()?;
    let query = CallbackQuery::parse(query.as_deref());
    let request = CallbackRequest::new(provider, query.code.as_deref())?;

    tracing::info!(%provider, "exchanging authorization code");
    let token = state.client.exchange_code(request).await?;
    Ok(Json(token))
}

pub(super) async fn fallback_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NOT_FOUND_TEXT)
}

impl IntoResponse for OAuthError {
    fn into_response(self) -> Response {
        match self {
            OAuthError::UnknownProvider(id) => {
                tracing::debug!(provider = %id, "rejected unknown provider");
                (StatusCode::NOT_FOUND, NOT_FOUND_TEXT).into_response()
            }
            OAuthError::MissingAuthorizationCode => {
                tracing::debug!("callback arrived without an authorization code");
                (StatusCode::BAD_REQUEST, Html(INVALID_CODE_HTML)).into_response()
            }
            error if error.is_upstream() => {
                tracing::error!(%error, "token exchange failed");
                let body = json!({
                    "error": "upstream_error",
                    "message": error.to_string(),
                });
                (StatusCode::BAD_GATEWAY, Json(body)).into_response()
            }
            error => {
                tracing::error!(%error, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
