use std::env;

use secrecy::SecretString;
use thiserror::Error;

/// An environment variable required by the service is not set.
#[derive(Debug, Error)]
#[error("Missing environment variable: {0}")]
pub struct MissingEnvVarError(pub String);

/// Service configuration derived from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind: String,
    pub port: u16,

    /// Root of the upstream price API.
    pub upstream_base_url: String,
    /// Bearer token for the upstream price API.
    pub upstream_token: SecretString,

    /// How long a fetched series stays valid before a refetch.
    pub cache_ttl_secs: u64,
}

fn env_str(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn env_required(name: &str) -> Result<String, MissingEnvVarError> {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| MissingEnvVarError(name.to_string()))
}

impl ServiceConfig {
    /// Reads configuration from the environment. Only the upstream bearer
    /// token is mandatory; everything else has a deployment default.
    pub fn from_env() -> Result<Self, MissingEnvVarError> {
        Ok(Self {
            bind: env_str("AGG_BIND", "0.0.0.0"),
            port: env_u16("AGG_PORT", 5000),
            upstream_base_url: env_str(
                "STOCK_FEED_BASE_URL",
                "http://20.244.56.144/evaluation-service",
            ),
            upstream_token: SecretString::new(env_required("STOCK_FEED_TOKEN")?.into()),
            cache_ttl_secs: env_u64("AGG_CACHE_TTL_SECS", 120),
        })
    }
}
