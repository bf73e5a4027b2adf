use std::env;

use url::Url;
use warden_core::{AppError, AppResult};

const DEFAULT_PROVIDER_TYPE_NAME: &str = "commonfate";

/// Harness settings read from the environment.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub governance_api_url: Url,
    pub governance_api_token: Option<String>,
    pub http_timeout_seconds: u64,
}

impl HarnessConfig {
    pub fn load() -> AppResult<Self> {
        let raw_url = required_env("GOVERNANCE_API_URL")?;
        let trimmed_url = raw_url.trim().trim_end_matches('/');
        let governance_api_url = Url::parse(trimmed_url).map_err(|error| {
            AppError::Validation(format!(
                "invalid GOVERNANCE_API_URL value '{raw_url}': {error}"
            ))
        })?;
        let governance_api_token = env::var("GOVERNANCE_API_TOKEN")
            .ok()
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());
        let http_timeout_seconds = parse_env_u64("GOVERNANCE_HTTP_TIMEOUT_SECONDS", 30)?;

        if http_timeout_seconds == 0 {
            return Err(AppError::Validation(
                "GOVERNANCE_HTTP_TIMEOUT_SECONDS must be greater than zero".to_owned(),
            ));
        }

        Ok(Self {
            governance_api_url,
            governance_api_token,
            http_timeout_seconds,
        })
    }
}

/// Provider type name used as the resource type prefix.
pub fn provider_type_name() -> String {
    env::var("PROVIDER_TYPE_NAME")
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_PROVIDER_TYPE_NAME.to_owned())
}

fn required_env(name: &str) -> AppResult<String> {
    env::var(name).map_err(|_| AppError::Validation(format!("{name} is required")))
}

fn parse_env_u64(name: &str, default: u64) -> AppResult<u64> {
    match env::var(name) {
        Ok(value) => value.parse::<u64>().map_err(|error| {
            AppError::Validation(format!("invalid {name} value '{value}': {error}"))
        }),
        Err(_) => Ok(default),
    }
}
