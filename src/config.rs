use std::env;

/// Runtime configuration loaded from the environment.
///
/// The token secrets are kept separate on purpose: access tokens are
/// short-lived bearer credentials, refresh tokens are long-lived and
/// persisted server-side so they can be revoked. Signing them with
/// different secrets means a leaked access secret cannot mint refresh
/// tokens.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub server_host: String,
    pub access_token_secret: String,
    pub refresh_token_secret: String,
    /// Base URL of the external hotel-prediction service, if deployed.
    pub ml_service_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            access_token_secret: env::var("ACCESS_TOKEN_SECRET")
                .expect("ACCESS_TOKEN_SECRET must be set"),
            refresh_token_secret: env::var("REFRESH_TOKEN_SECRET")
                .expect("REFRESH_TOKEN_SECRET must be set"),
            ml_service_url: env::var("URL_MACHINELEARNING").ok(),
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
