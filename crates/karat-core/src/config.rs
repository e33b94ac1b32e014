use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
/// In particular, `GOLD_API_KEY` is required: a missing upstream credential is
/// a startup-time failure, not a per-request one.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

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

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let gold_api_key = require("GOLD_API_KEY")?;

    let env = parse_environment(&or_default("KARAT_ENV", "development"));
    let bind_addr = parse_addr("KARAT_BIND_ADDR", "0.0.0.0:3001")?;
    let log_level = or_default("KARAT_LOG_LEVEL", "info");
    let products_path = PathBuf::from(or_default("KARAT_PRODUCTS_PATH", "./data/products.json"));
    let static_dir = PathBuf::from(or_default("KARAT_STATIC_DIR", "./dist"));
    let gold_api_base_url = or_default("KARAT_GOLD_API_BASE_URL", "https://www.goldapi.io/api");
    let gold_request_timeout_secs = parse_u64("KARAT_GOLD_REQUEST_TIMEOUT_SECS", "10")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        products_path,
        static_dir,
        gold_api_key,
        gold_api_base_url,
        gold_request_timeout_secs,
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

    /// Returns a map with all required env vars populated with valid values.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("GOLD_API_KEY", "goldapi-test-key");
        m
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("unknown"), Environment::Development);
    }

    #[test]
    fn build_app_config_fails_without_gold_api_key() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "GOLD_API_KEY"),
            "expected MissingEnvVar(GOLD_API_KEY), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map = full_env();
        map.insert("KARAT_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "KARAT_BIND_ADDR"),
            "expected InvalidEnvVar(KARAT_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_invalid_timeout() {
        let mut map = full_env();
        map.insert("KARAT_GOLD_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "KARAT_GOLD_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(KARAT_GOLD_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_defaults() {
        let map = full_env();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3001");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.products_path.to_str(), Some("./data/products.json"));
        assert_eq!(cfg.static_dir.to_str(), Some("./dist"));
        assert_eq!(cfg.gold_api_base_url, "https://www.goldapi.io/api");
        assert_eq!(cfg.gold_request_timeout_secs, 10);
    }

    #[test]
    fn build_app_config_applies_overrides() {
        let mut map = full_env();
        map.insert("KARAT_BIND_ADDR", "127.0.0.1:8080");
        map.insert("KARAT_PRODUCTS_PATH", "/srv/karat/products.json");
        map.insert("KARAT_GOLD_REQUEST_TIMEOUT_SECS", "30");
        map.insert("KARAT_ENV", "production");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.env, Environment::Production);
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(cfg.products_path.to_str(), Some("/srv/karat/products.json"));
        assert_eq!(cfg.gold_request_timeout_secs, 30);
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let cfg = build_app_config(lookup_from_map(&full_env())).unwrap();
        let debug = format!("{cfg:?}");
        assert!(debug.contains("[redacted]"));
        assert!(!debug.contains("goldapi-test-key"));
    }
}
