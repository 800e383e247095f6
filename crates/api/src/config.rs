use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except secrets have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Hosted generation endpoint configuration.
    pub genai: GenAiConfig,
}

/// Configuration for the hosted generation endpoint.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    /// API key (`GENAI_API_KEY`, required).
    pub api_key: String,
    /// Model identifier (`GENAI_MODEL`, default: `gemini-2.5-flash`).
    pub model: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `GENAI_API_KEY`        | -- (required)           |
    /// | `GENAI_MODEL`          | `gemini-2.5-flash`      |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing or a numeric one is invalid,
    /// which is the desired behaviour -- misconfiguration fails fast at boot.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();

        let genai = GenAiConfig {
            api_key: std::env::var("GENAI_API_KEY")
                .expect("GENAI_API_KEY must be set in the environment"),
            model: std::env::var("GENAI_MODEL")
                .unwrap_or_else(|_| eco_genai::client::DEFAULT_MODEL.into()),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            genai,
        }
    }
}
