//! Runtime configuration, read once from the environment at start-up.
//!
//! | Env Var                | Default                 |
//! |------------------------|-------------------------|
//! | `BIND_ADDRESS`         | `0.0.0.0:3000`          |
//! | `API_BASE_URL`         | `http://localhost:8080` |
//! | `REQUEST_TIMEOUT_MS`   | `10000`                 |
//! | `PAGE_SIZE`            | `5`                     |
//! | `SESSION_MAX_AGE_DAYS` | `30`                    |
//! | `SECURE_COOKIES`       | `false`                 |

use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_PAGE_SIZE: u32 = 5;
const DEFAULT_SESSION_MAX_AGE_DAYS: i64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_address: String,
    /// Base URL of the remote API, without a trailing slash.
    pub api_base_url: String,
    /// Applied to every backend call, login included.
    pub request_timeout: Duration,
    pub page_size: u32,
    pub session_max_age_days: i64,
    pub secure_cookies: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            page_size: DEFAULT_PAGE_SIZE,
            session_max_age_days: DEFAULT_SESSION_MAX_AGE_DAYS,
            secure_cookies: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let bind_address = lookup("BIND_ADDRESS").unwrap_or(defaults.bind_address);
        let api_base_url = lookup("API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);
        let timeout_ms: u64 = parse_var(&lookup, "REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS)?;
        let page_size: u32 = parse_var(&lookup, "PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            return Err(ConfigError::Invalid {
                var: "PAGE_SIZE",
                value: page_size.to_string(),
            });
        }
        let session_max_age_days =
            parse_var(&lookup, "SESSION_MAX_AGE_DAYS", DEFAULT_SESSION_MAX_AGE_DAYS)?;
        let secure_cookies = parse_var(&lookup, "SECURE_COOKIES", false)?;

        Ok(Self {
            bind_address,
            api_base_url,
            request_timeout: Duration::from_millis(timeout_ms),
            page_size,
            session_max_age_days,
            secure_cookies,
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
