use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_FTC_BASE_URL: &str = "https://api.ftc.gov/v0/dnc-complaints";
pub const DEFAULT_USER_AGENT: &str = "itasc/0.1 (complaint-ingest)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` instead of `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let ftc_api_key = require("FTC_API_KEY")?;
    let ftc_base_url = or_default("ITASC_FTC_BASE_URL", DEFAULT_FTC_BASE_URL);
    let ftc_request_timeout_secs = parse_u64("ITASC_FTC_REQUEST_TIMEOUT_SECS", "30")?;
    if ftc_request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "ITASC_FTC_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "timeout must be greater than zero".to_string(),
        });
    }
    let ftc_max_pages = parse_usize("ITASC_FTC_MAX_PAGES", "2000")?;
    let user_agent = or_default("ITASC_USER_AGENT", DEFAULT_USER_AGENT);
    let log_level = or_default("ITASC_LOG_LEVEL", "info");

    Ok(AppConfig {
        ftc_api_key,
        ftc_base_url,
        ftc_request_timeout_secs,
        ftc_max_pages,
        user_agent,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
