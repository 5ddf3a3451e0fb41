use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if a storage block is half-configured.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub render_timeout_secs: u64,
    /// Present only when report delivery is enabled (`S3_BUCKET` set).
    pub storage: Option<StorageConfig>,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub bucket: String,
    pub endpoint: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub key_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let storage = match optional_env("S3_BUCKET") {
            Some(bucket) => Some(StorageConfig {
                bucket,
                endpoint: require_env("S3_ENDPOINT")?,
                region: optional_env("S3_REGION").unwrap_or_else(|| "us-east-1".to_string()),
                access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
                secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
                key_prefix: optional_env("S3_KEY_PREFIX").unwrap_or_else(|| "timetables".to_string()),
            }),
            None => None,
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            render_timeout_secs: std::env::var("RENDER_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("RENDER_TIMEOUT_SECS must be a whole number of seconds")?,
            storage,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            render_timeout_secs: 30,
            storage: None,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and blank values are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
