use super::ProviderConfig;

const AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
const TOKEN_URL: &str = "https://github.com/login/oauth/access_token";

const DEFAULT_SCOPE: &str = "user:email";

const TOKEN_HEADERS: &[(&str, &str)] = &[("Accept", "application/json")];

// GitHub uses the callback URL configured on the OAuth app.
pub(super) const CONFIG: ProviderConfig = ProviderConfig {
    id: "github",
    authorize_url: AUTHORIZE_URL,
    token_url: TOKEN_URL,
    scope: DEFAULT_SCOPE,
    client_id_env: "GITHUB_CLIENT_ID",
    client_secret_env: "GITHUB_CLIENT_SECRET",
    redirect_uri: None,
    authorize_params: &[],
    token_params: &[],
    token_headers: TOKEN_HEADERS,
};
