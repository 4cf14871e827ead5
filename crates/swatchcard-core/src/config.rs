use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load engine configuration from environment variables.
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

/// Load engine configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build engine configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can use a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

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

    let hover_delay_ms = parse_u64("SWATCHCARD_HOVER_DELAY_MS", "100")?;
    let preload_timeout_secs = parse_u64("SWATCHCARD_PRELOAD_TIMEOUT_SECS", "10")?;
    if preload_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SWATCHCARD_PRELOAD_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let default_color = or_default("SWATCHCARD_DEFAULT_COLOR", crate::color::DEFAULT_COLOR);
    if !crate::color::is_hex_color(&default_color) {
        return Err(ConfigError::InvalidEnvVar {
            var: "SWATCHCARD_DEFAULT_COLOR".to_string(),
            reason: format!("expected #rgb, #rrggbb, or #rrggbbaa, got '{default_color}'"),
        });
    }

    let palette_path = lookup("SWATCHCARD_PALETTE_PATH")
        .ok()
        .filter(|p| !p.is_empty())
        .map(PathBuf::from);
    let user_agent = or_default("SWATCHCARD_USER_AGENT", "swatchcard/0.1 (hover-preload)");
    let log_level = or_default("SWATCHCARD_LOG_LEVEL", "info");

    Ok(AppConfig {
        hover_delay_ms,
        default_color,
        palette_path,
        preload_timeout_secs,
        user_agent,
        log_level,
    })
}
