//! Environment-variable configuration loading.

use thiserror::Error;

use crate::app_config::AppConfig;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env
/// vars.
///
/// # Errors
///
/// Returns [`ConfigError`] if a set variable fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns [`ConfigError`] if a set variable fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// The parsing/validation core is decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
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

    Ok(AppConfig {
        log_level: or_default("GMVLENS_LOG_LEVEL", "info"),
        shopee_base_url: or_default("GMVLENS_SHOPEE_BASE_URL", "https://shopee.co.id"),
        tiktok_base_url: or_default(
            "GMVLENS_TIKTOK_BASE_URL",
            "https://www.tiktokglobalshop.com",
        ),
        request_timeout_secs: parse_u64("GMVLENS_REQUEST_TIMEOUT_SECS", "30")?,
        user_agent: or_default("GMVLENS_USER_AGENT", DEFAULT_USER_AGENT),
        render_wait_ms: parse_u64("GMVLENS_RENDER_WAIT_MS", "5000")?,
        browser_timeout_secs: parse_u64("GMVLENS_BROWSER_TIMEOUT_SECS", "30")?,
        max_retries: parse_u32("GMVLENS_MAX_RETRIES", "0")?,
        retry_backoff_base_secs: parse_u64("GMVLENS_RETRY_BACKOFF_BASE_SECS", "1")?,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
