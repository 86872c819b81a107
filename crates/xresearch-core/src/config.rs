use crate::app_config::{AppConfig, DisplayLimits, OutputFormat};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; absent values fall back to defaults.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_limit = |var: &str, default: usize| -> Result<usize, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(default),
        }
    };

    let log_level = or_default("XRESEARCH_LOG_LEVEL", "info");
    let output_format = or_default("XRESEARCH_OUTPUT_FORMAT", "console").parse::<OutputFormat>()?;

    let defaults = DisplayLimits::default();
    let limits = DisplayLimits {
        influencers: parse_limit("XRESEARCH_INFLUENCER_LIMIT", defaults.influencers)?,
        keywords: parse_limit("XRESEARCH_KEYWORD_LIMIT", defaults.keywords)?,
        hours: parse_limit("XRESEARCH_HOUR_LIMIT", defaults.hours)?,
        urls: parse_limit("XRESEARCH_URL_LIMIT", defaults.urls)?,
    };

    Ok(AppConfig {
        log_level,
        output_format,
        limits,
    })
}
