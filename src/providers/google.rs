use super::ProviderConfig;

// References:
// - https://developers.google.com/identity/protocols/oauth2/web-server#creatingclient
// - https://developers.google.com/identity/protocols/oauth2/web-server#exchange-authorization-code

const AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

const DEFAULT_SCOPE: &str = "email";
const DEFAULT_REDIRECT_URI: &str = "http://localhost:8787/oauth/google/callback";

const AUTHORIZE_PARAMS: &[(&str, &str)] = &[("response_type", "code")];
const TOKEN_PARAMS: &[(&str, &str)] = &[("grant_type", "authorization_code")];
const TOKEN_HEADERS: &[(&str, &str)] = &[("Accept", "application/json")];

pub(super) const CONFIG: ProviderConfig = ProviderConfig {
    id: "google",
    authorize_url: AUTHORIZE_URL,
    token_url: TOKEN_URL,
    scope: DEFAULT_SCOPE,
    client_id_env: "GOOGLE_CLIENT_ID",
    client_secret_env: "GOOGLE_CLIENT_SECRET",
    redirect_uri: Some(DEFAULT_REDIRECT_URI),
    authorize_params: AUTHORIZE_PARAMS,
    token_params: TOKEN_PARAMS,
    token_headers: TOKEN_HEADERS,
};
