use std::time::Duration;

use clap::Parser;
use oauth_relay::{
    ClientCredentials, DEFAULT_TIMEOUT, OAuthError, Provider, RelayConfig, RelayServer,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "oauth_relay=info,tower_http=info";

#[derive(Debug, Parser)]
#[command(
    name = "oauth-relay",
    version,
    about = "Serve GitHub and Google OAuth sign-in and relay token responses as JSON."
)]
struct Cli {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8787")]
    bind: String,

    /// Seconds to wait for a provider's token endpoint. 0 disables the limit.
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    http_timeout_secs: u64,

    /// GitHub OAuth app client id.
    #[arg(long, env = "GITHUB_CLIENT_ID", default_value = "", hide_env_values = true)]
    github_client_id: String,

    /// GitHub OAuth app client secret.
    #[arg(long, env = "GITHUB_CLIENT_SECRET", default_value = "", hide_env_values = true)]
    github_client_secret: String,

    /// Google OAuth client id.
    #[arg(long, env = "GOOGLE_CLIENT_ID", default_value = "", hide_env_values = true)]
    google_client_id: String,

    /// Google OAuth client secret.
    #[arg(long, env = "GOOGLE_CLIENT_SECRET", default_value = "", hide_env_values = true)]
    google_client_secret: String,
}

impl Cli {
    fn relay_config(self) -> RelayConfig {
        let config = RelayConfig::new()
            .with_credentials(
                Provider::GitHub,
                ClientCredentials::new(self.github_client_id, self.github_client_secret),
            )
            .with_credentials(
                Provider::Google,
                ClientCredentials::new(self.google_client_id, self.google_client_secret),
            );

        match self.http_timeout_secs {
            0 => config.without_timeout(),
            secs => config.with_timeout(Duration::from_secs(secs)),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), OAuthError> {
    // Must run before clap reads the environment.
    ignore_missing_env_file(dotenvy::dotenv())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();
    let bind = cli.bind.clone();

    let server = RelayServer::new(cli.relay_config())?;
    let listener = RelayServer::bind(bind.as_str()).await?;
    server.serve(listener, shutdown_signal()).await
}

/// A missing .env file is fine; a malformed one is not.
fn ignore_missing_env_file<T>(result: dotenvy::Result<T>) -> Result<(), OAuthError> {
    match result {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(err.into()),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutting down");
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn credential_env_names_match_registry() {
        let command = Cli::command();
        let env_of = |id: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_env())
                .and_then(|env| env.to_str())
                .map(str::to_string)
        };

        let github = Provider::GitHub.config();
        let google = Provider::Google.config();
        assert_eq!(env_of("github_client_id").as_deref(), Some(github.client_id_env));
        assert_eq!(env_of("github_client_secret").as_deref(), Some(github.client_secret_env));
        assert_eq!(env_of("google_client_id").as_deref(), Some(google.client_id_env));
        assert_eq!(env_of("google_client_secret").as_deref(), Some(google.client_secret_env));
    }

    #[test]
    fn flags_build_relay_config() {
        let cli = Cli::parse_from([
            "oauth-relay",
            "--github-client-id",
            "gh-id",
            "--github-client-secret",
            "gh-secret",
            "--google-client-id",
            "g-id",
            "--google-client-secret",
            "g-secret",
            "--http-timeout-secs",
            "3",
        ]);
        let config = cli.relay_config();

        assert_eq!(
            config.credentials(Provider::GitHub),
            &ClientCredentials::new("gh-id", "gh-secret")
        );
        assert_eq!(
            config.credentials(Provider::Google),
            &ClientCredentials::new("g-id", "g-secret")
        );
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn zero_timeout_disables_limit() {
        let cli = Cli::parse_from(["oauth-relay", "--http-timeout-secs", "0"]);
        assert_eq!(cli.relay_config().timeout, None);
    }

    #[test]
    fn missing_env_file_is_ignored() {
        let path = std::env::temp_dir().join("oauth-relay-does-not-exist.env");
        assert!(ignore_missing_env_file(dotenvy::from_path(&path)).is_ok());
    }

    #[test]
    fn malformed_env_file_is_an_error() {
        let path = std::env::temp_dir()
            .join(format!("oauth-relay-malformed-{}.env", std::process::id()));
        fs::write(&path, "THIS IS NOT VALID\n").unwrap();

        let result = ignore_missing_env_file(dotenvy::from_path(&path));
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(OAuthError::EnvFile(_))));
    }
}
