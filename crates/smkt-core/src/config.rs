use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/";
const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";
const DEFAULT_USER_AGENT: &str = "smkt/0.1 (grocery-price-comparison)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid. A missing `DATABASE_URL` is
/// only reported by [`AppConfig::require_database_url`].
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let database_url = lookup("DATABASE_URL").ok().filter(|url| !url.trim().is_empty());
    let env = parse_environment(&or_default("SMKT_ENV", "development"))?;

    let bind_addr = parse_addr("SMKT_BIND_ADDR", "0.0.0.0:8000")?;
    let log_level = or_default("SMKT_LOG_LEVEL", "info");

    let db_max_connections = parse_u32("SMKT_DB_MAX_CONNECTIONS", "10")?;
    let db_min_connections = parse_u32("SMKT_DB_MIN_CONNECTIONS", "1")?;
    let db_acquire_timeout_secs = parse_u64("SMKT_DB_ACQUIRE_TIMEOUT_SECS", "10")?;

    let geocoder_url = or_default("SMKT_GEOCODER_URL", DEFAULT_GEOCODER_URL);
    let geocoder_timeout_secs = parse_u64("SMKT_GEOCODER_TIMEOUT_SECS", "10")?;
    let overpass_url = or_default("SMKT_OVERPASS_URL", DEFAULT_OVERPASS_URL);
    let overpass_timeout_secs = parse_u64("SMKT_OVERPASS_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("SMKT_USER_AGENT", DEFAULT_USER_AGENT);
    let request_timeout_secs = parse_u64("SMKT_REQUEST_TIMEOUT_SECS", "30")?;

    Ok(AppConfig {
        database_url,
        env,
        bind_addr,
        log_level,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
        geocoder_url,
        geocoder_timeout_secs,
        overpass_url,
        overpass_timeout_secs,
        user_agent,
        request_timeout_secs,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SMKT_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
