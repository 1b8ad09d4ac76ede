use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed by CORS, comma separated. `*` allows any origin.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// HMAC secret used to sign session tokens
    #[serde(default = "default_signing_secret", alias = "secret_key")]
    pub signing_secret: String,

    /// Session token lifetime in minutes
    #[serde(default = "default_token_ttl_minutes")]
    pub token_ttl_minutes: i64,

    /// TMDB API key
    #[serde(default)]
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Budget for every outbound TMDB call
    #[serde(default = "default_external_timeout_ms")]
    pub external_timeout_ms: u64,

    /// Fallback tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    // Accepted for compatibility with existing deployments; nothing reads them yet.
    #[serde(default)]
    pub database_url: Option<String>,

    #[serde(default = "default_cache_type")]
    pub cache_type: String,

    #[serde(default = "default_cache_timeout")]
    pub cache_default_timeout: u64,

    #[serde(default = "default_ratelimit")]
    pub ratelimit_default: String,
}

/// Longest accepted session lifetime (one year)
pub const MAX_TOKEN_TTL_MINUTES: i64 = 525_600;

/// Secret shipped as the default; startup warns when it is still in use.
pub const DEFAULT_SIGNING_SECRET: &str = "your-secret-key-here";

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5050
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

fn default_signing_secret() -> String {
    DEFAULT_SIGNING_SECRET.to_string()
}

fn default_token_ttl_minutes() -> i64 {
    30
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_external_timeout_ms() -> u64 {
    2000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_cache_type() -> String {
    "simple".to_string()
}

fn default_cache_timeout() -> u64 {
    300
}

fn default_ratelimit() -> String {
    "100 per minute".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_iter(std::env::vars())
    }

    /// Build configuration from an explicit set of `(KEY, value)` pairs
    pub fn from_iter<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        if !(1..=MAX_TOKEN_TTL_MINUTES).contains(&config.token_ttl_minutes) {
            anyhow::bail!(
                "TOKEN_TTL_MINUTES must be between 1 and {}, got {}",
                MAX_TOKEN_TTL_MINUTES,
                config.token_ttl_minutes
            );
        }

        Ok(config)
    }

    /// Address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// True when CORS should accept any origin
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o.trim() == "*")
    }
}
