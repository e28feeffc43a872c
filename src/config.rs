use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Upper bound for any configured duration (10 years).
pub const MAX_DURATION_SECS: u64 = 10 * 365 * 24 * 60 * 60;

#[derive(Clone)]
pub struct Config {
    // Server
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,

    // Persisted fields. Redis is used when a URL is configured.
    pub redis_url: Option<String>,
    pub redis_key_prefix: String,

    // TTLs (in seconds)
    pub session_ttl_secs: u64,
    pub sweep_interval_secs: u64,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("bind_addr", &self.bind_addr)
            .field("static_dir", &self.static_dir)
            .field("redis_url", &self.redis_url.as_ref().map(|_| "[REDACTED]"))
            .field("redis_key_prefix", &self.redis_key_prefix)
            .field("session_ttl_secs", &self.session_ttl_secs)
            .field("sweep_interval_secs", &self.sweep_interval_secs)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: PathBuf::from("static"),
            redis_url: None,
            redis_key_prefix: "predictor:".to_string(),
            session_ttl_secs: 604_800,
            sweep_interval_secs: 60,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),

    #[error("Failed to parse {0}: {1}")]
    ParseError(String, String),
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Attempt to load .env file, but don't fail if it doesn't exist
        let _ = dotenvy::dotenv();
        let defaults = Config::default();

        let bind_addr = parse_env_or_default("BIND_ADDR", defaults.bind_addr)?;
        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let redis_url = env::var("REDIS_URL").ok().filter(|url| !url.is_empty());
        let redis_key_prefix =
            env::var("REDIS_KEY_PREFIX").unwrap_or(defaults.redis_key_prefix);

        let session_ttl_secs = check_duration_secs(
            "SESSION_TTL_SECS",
            parse_env_or_default("SESSION_TTL_SECS", defaults.session_ttl_secs)?,
        )?;
        let sweep_interval_secs = check_duration_secs(
            "SWEEP_INTERVAL_SECS",
            parse_env_or_default("SWEEP_INTERVAL_SECS", defaults.sweep_interval_secs)?,
        )?;

        Ok(Config {
            bind_addr,
            static_dir,
            redis_url,
            redis_key_prefix,
            session_ttl_secs,
            sweep_interval_secs,
        })
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

/// Reject zero and anything past [`MAX_DURATION_SECS`].
fn check_duration_secs(key: &str, secs: u64) -> Result<u64, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::InvalidValue(
            key.to_string(),
            "must be greater than zero".to_string(),
        ));
    }
    if secs > MAX_DURATION_SECS {
        return Err(ConfigError::InvalidValue(
            key.to_string(),
            format!("must be at most {} seconds", MAX_DURATION_SECS),
        ));
    }
    Ok(secs)
}

/// Helper function to parse environment variable with a default value
fn parse_env_or_default<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| ConfigError::ParseError(key.to_string(), format!("{}: {}", e, val))),
        Err(_) => Ok(default),
    }
}
