use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Default cap on ranked topics handed to synthesis.
pub const DEFAULT_MAX_TOPICS: usize = 6;

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
/// Decoupled from the real environment so tests can drive it from a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("TRENDCAST_ENV", "development"));
    let bind_addr = parse_addr("TRENDCAST_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("TRENDCAST_LOG_LEVEL", "info");
    let feeds_path = PathBuf::from(or_default("TRENDCAST_FEEDS_PATH", "./config/feeds.yaml"));

    let feed_timeout_secs = parse_u64("TRENDCAST_FEED_TIMEOUT_SECS", "8")?;
    if feed_timeout_secs == 0 {
        return Err(invalid(
            "TRENDCAST_FEED_TIMEOUT_SECS",
            "must be at least 1".to_string(),
        ));
    }
    let feed_user_agent = or_default(
        "TRENDCAST_FEED_USER_AGENT",
        "trendcast/0.1 (trend-intelligence)",
    );
    let feed_max_retries = parse_u32("TRENDCAST_FEED_MAX_RETRIES", "2")?;
    let feed_retry_backoff_base_ms = parse_u64("TRENDCAST_FEED_RETRY_BACKOFF_BASE_MS", "500")?;

    let max_topics = parse_usize("TRENDCAST_MAX_TOPICS", &DEFAULT_MAX_TOPICS.to_string())?;
    if max_topics == 0 {
        return Err(invalid(
            "TRENDCAST_MAX_TOPICS",
            "must be at least 1".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        feeds_path,
        feed_timeout_secs,
        feed_user_agent,
        feed_max_retries,
        feed_retry_backoff_base_ms,
        max_topics,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_known_values() {
        assert_eq!(parse_environment("development"), Environment::Development);
        assert_eq!(parse_environment("test"), Environment::Test);
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("staging"), Environment::Development);
    }

    #[test]
    fn build_app_config_uses_defaults_on_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("defaults are valid");
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.feeds_path.to_str(), Some("./config/feeds.yaml"));
        assert_eq!(cfg.feed_timeout_secs, 8);
        assert_eq!(cfg.feed_user_agent, "trendcast/0.1 (trend-intelligence)");
        assert_eq!(cfg.feed_max_retries, 2);
        assert_eq!(cfg.feed_retry_backoff_base_ms, 500);
        assert_eq!(cfg.max_topics, DEFAULT_MAX_TOPICS);
    }

    #[test]
    fn build_app_config_applies_overrides() {
        let mut map = HashMap::new();
        map.insert("TRENDCAST_ENV", "production");
        map.insert("TRENDCAST_BIND_ADDR", "127.0.0.1:8080");
        map.insert("TRENDCAST_FEEDS_PATH", "/etc/trendcast/feeds.yaml");
        map.insert("TRENDCAST_FEED_TIMEOUT_SECS", "3");
        map.insert("TRENDCAST_FEED_MAX_RETRIES", "0");
        map.insert("TRENDCAST_MAX_TOPICS", "10");
        let cfg = build_app_config(lookup_from_map(&map)).expect("overrides are valid");
        assert_eq!(cfg.env, Environment::Production);
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(cfg.feeds_path.to_str(), Some("/etc/trendcast/feeds.yaml"));
        assert_eq!(cfg.feed_timeout_secs, 3);
        assert_eq!(cfg.feed_max_retries, 0);
        assert_eq!(cfg.max_topics, 10);
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map = HashMap::new();
        map.insert("TRENDCAST_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(
                result,
                Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TRENDCAST_BIND_ADDR"
            ),
            "expected InvalidEnvVar(TRENDCAST_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_non_numeric_timeout() {
        let mut map = HashMap::new();
        map.insert("TRENDCAST_FEED_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(
                result,
                Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TRENDCAST_FEED_TIMEOUT_SECS"
            ),
            "expected InvalidEnvVar(TRENDCAST_FEED_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_zero_timeout() {
        let mut map = HashMap::new();
        map.insert("TRENDCAST_FEED_TIMEOUT_SECS", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
    }

    #[test]
    fn build_app_config_rejects_zero_max_topics() {
        let mut map = HashMap::new();
        map.insert("TRENDCAST_MAX_TOPICS", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(
                result,
                Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TRENDCAST_MAX_TOPICS"
            ),
            "expected InvalidEnvVar(TRENDCAST_MAX_TOPICS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_negative_retries() {
        let mut map = HashMap::new();
        map.insert("TRENDCAST_FEED_MAX_RETRIES", "-1");
        let result = build_app_config(lookup_from_map(&map));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
    }
}
