use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
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
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
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

    let url_override = |var: &str| -> Result<Option<String>, ConfigError> {
        let Ok(raw) = lookup(var) else {
            return Ok(None);
        };
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Ok(Some(raw))
        } else {
            Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("\"{raw}\" is not an http(s) URL"),
            })
        }
    };

    let log_level = or_default("PIZZABOX_LOG_LEVEL", "info");

    let request_timeout_secs = parse_u64("PIZZABOX_REQUEST_TIMEOUT_SECS", "10")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PIZZABOX_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least 1 second".to_string(),
        });
    }

    let user_agent = or_default("PIZZABOX_USER_AGENT", "pizzabox/0.1");
    let order_base_url = url_override("PIZZABOX_ORDER_BASE_URL")?;
    let tracker_base_url = url_override("PIZZABOX_TRACKER_BASE_URL")?;
    let referer_url = url_override("PIZZABOX_REFERER_URL")?;

    Ok(AppConfig {
        log_level,
        request_timeout_secs,
        user_agent,
        order_base_url,
        tracker_base_url,
        referer_url,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
