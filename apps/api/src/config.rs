use anyhow::{bail, Context, Result};

use crate::llm_client::DEFAULT_MODEL;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// When absent the assistant endpoints answer 503.
    pub anthropic_api_key: Option<String>,
    pub llm_model: String,
    /// Default sampling temperature for resume optimization, within 0.0 – 1.0.
    pub llm_temperature: f32,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            llm_model: optional_env("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            llm_temperature: parse_temperature("LLM_TEMPERATURE")?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            anthropic_api_key: None,
            llm_model: DEFAULT_MODEL.to_string(),
            llm_temperature: DEFAULT_TEMPERATURE,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

/// Reads a variable, treating unset and blank the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        None => Ok(default),
    }
}

/// Sampling temperature clamped to 0.0 – 1.0. NaN and infinities are rejected
/// because they serialize as JSON `null`.
fn parse_temperature(key: &str) -> Result<f32> {
    let temperature: f32 = parse_env(key, DEFAULT_TEMPERATURE)?;
    if !temperature.is_finite() {
        bail!("Environment variable '{key}' must be a finite number, got {temperature}");
    }
    Ok(temperature.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_falls_back_to_default_when_unset() {
        let port: u16 = parse_env("RESUME_API_TEST_UNSET_PORT", 9090).unwrap();
        assert_eq!(port, 9090);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("RESUME_API_TEST_BAD_PORT", "not-a-port");
        let result: Result<u16> = parse_env("RESUME_API_TEST_BAD_PORT", 8080);
        assert!(result.is_err());
    }

    #[test]
    fn test_temperature_rejects_non_finite_values() {
        std::env::set_var("RESUME_API_TEST_NAN_TEMPERATURE", "NaN");
        assert!(parse_temperature("RESUME_API_TEST_NAN_TEMPERATURE").is_err());

        std::env::set_var("RESUME_API_TEST_INF_TEMPERATURE", "inf");
        assert!(parse_temperature("RESUME_API_TEST_INF_TEMPERATURE").is_err());
    }

    #[test]
    fn test_temperature_is_clamped_and_defaults() {
        std::env::set_var("RESUME_API_TEST_HOT_TEMPERATURE", "1.7");
        assert_eq!(parse_temperature("RESUME_API_TEST_HOT_TEMPERATURE").unwrap(), 1.0);
        assert_eq!(
            parse_temperature("RESUME_API_TEST_UNSET_TEMPERATURE").unwrap(),
            DEFAULT_TEMPERATURE
        );
    }

    #[test]
    fn test_optional_env_treats_blank_as_unset() {
        std::env::set_var("RESUME_API_TEST_BLANK_KEY", "   ");
        assert_eq!(optional_env("RESUME_API_TEST_BLANK_KEY"), None);
    }

    #[test]
    fn test_default_config_has_no_api_key() {
        let config = Config::default();
        assert!(config.anthropic_api_key.is_none());
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    }
}
