/// Relay configuration, loaded once at startup and shared read-only.
///
/// The API key stays an `Option` so a missing credential is reported per
/// request (some deployments only populate the environment lazily).
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub api_key: Option<String>,
    pub allowed_origins: Vec<String>,
    pub echo_request_origin: bool,
    pub default_model: String,
    pub upstream_url: String,
    pub referer: String,
    pub title: String,
    pub port: u16,
}

pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] =
    ["http://127.0.0.1:5500", "http://localhost:5500"];

impl RelayConfig {
    pub fn from_env() -> Self {
        let allowed_origins = dotenvy::var("ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_else(|_| {
                DEFAULT_ALLOWED_ORIGINS
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            });

        Self {
            api_key: dotenvy::var("OPENROUTER_API_KEY").ok(),
            allowed_origins,
            echo_request_origin: dotenvy::var("ECHO_REQUEST_ORIGIN")
                .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            default_model: dotenvy::var("DEFAULT_MODEL")
                .unwrap_or_else(|_| "openai/gpt-3.5-turbo".to_string()),
            upstream_url: dotenvy::var("OPENROUTER_URL").unwrap_or_else(|_| {
                "https://openrouter.ai/api/v1/chat/completions".to_string()
            }),
            referer: dotenvy::var("SITE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5500".to_string()),
            title: dotenvy::var("APP_NAME").unwrap_or_else(|_| "NEURALSYNC".to_string()),
            port: dotenvy::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
        }
    }

    /// Cross-origin policy: either echo back whatever origin asked (the
    /// permissive deployment shape) or require allowlist membership.
    pub fn origin_allowed(&self, origin: &str) -> bool {
        self.echo_request_origin || self.allowed_origins.iter().any(|o| o == origin)
    }

    /// Short key prefix for startup diagnostics. Never the full secret.
    pub fn api_key_prefix(&self) -> Option<String> {
        self.api_key
            .as_ref()
            .map(|k| k.chars().take(8).collect())
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
