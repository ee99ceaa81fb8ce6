// ABOUTME: Environment configuration for the HabitBite client
// ABOUTME: Reads API URL, timeouts, store location and sign-in route from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based client configuration

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use habitbite_core::constants::defaults;
use habitbite_core::errors::{AppError, AppResult};
use tracing::debug;
use url::Url;

use crate::logging::LoggingConfig;

/// Environment variable names
pub mod vars {
    /// API base URL, including the `/api` prefix
    pub const API_URL: &str = "HABITBITE_API_URL";
    /// Whole-request timeout in seconds
    pub const TIMEOUT_SECS: &str = "HABITBITE_TIMEOUT_SECS";
    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: &str = "HABITBITE_CONNECT_TIMEOUT_SECS";
    /// User agent override
    pub const USER_AGENT: &str = "HABITBITE_USER_AGENT";
    /// Path of the JSON file backing the client store
    pub const STORE_PATH: &str = "HABITBITE_STORE_PATH";
    /// Route treated as the sign-in page
    pub const SIGN_IN_PATH: &str = "HABITBITE_SIGN_IN_PATH";
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, without trailing slash
    pub api_url: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// User agent header value
    pub user_agent: String,
    /// Store file override; `None` uses the platform data directory
    pub store_path: Option<PathBuf>,
    /// Sign-in route used by the redirect-loop guard
    pub sign_in_path: String,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: defaults::API_URL.to_owned(),
            timeout_secs: defaults::TIMEOUT_SECS,
            connect_timeout_secs: defaults::CONNECT_TIMEOUT_SECS,
            user_agent: defaults::USER_AGENT.to_owned(),
            store_path: None,
            sign_in_path: defaults::SIGN_IN_PATH.to_owned(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable cannot be parsed or the result fails validation
    pub fn from_env() -> AppResult<Self> {
        debug!("Loading client configuration from environment variables");

        let config = Self {
            api_url: normalize_base(&env_var_or(vars::API_URL, defaults::API_URL)),
            timeout_secs: parse_number(vars::TIMEOUT_SECS, defaults::TIMEOUT_SECS)?,
            connect_timeout_secs: parse_number(
                vars::CONNECT_TIMEOUT_SECS,
                defaults::CONNECT_TIMEOUT_SECS,
            )?,
            user_agent: env_var_or(vars::USER_AGENT, defaults::USER_AGENT),
            store_path: env::var(vars::STORE_PATH).ok().map(PathBuf::from),
            sign_in_path: env_var_or(vars::SIGN_IN_PATH, defaults::SIGN_IN_PATH),
            logging: LoggingConfig::from_env(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Point the client at a different API base URL
    #[must_use]
    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api_url = normalize_base(url);
        self
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for non-HTTP(S) URLs or zero timeouts
    pub fn validate(&self) -> AppResult<()> {
        let url = Url::parse(&self.api_url).map_err(|e| {
            AppError::config(format!("Invalid {} '{}': {e}", vars::API_URL, self.api_url))
                .with_source(e)
        })?;
        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(AppError::config(format!(
                    "{} must use http or https, got {other}",
                    vars::API_URL
                )));
            }
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config(format!(
                "{} must be greater than zero",
                vars::TIMEOUT_SECS
            )));
        }
        if self.connect_timeout_secs == 0 {
            return Err(AppError::config(format!(
                "{} must be greater than zero",
                vars::CONNECT_TIMEOUT_SECS
            )));
        }
        Ok(())
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn parse_number<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| {
            AppError::config(format!("Invalid {key} '{raw}': {e}")).with_source(e)
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, "http://localhost:8080/api");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.sign_in_path, "/SignIn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let config = ClientConfig::default().with_api_url("ftp://example.com/api");
        assert!(config.validate().is_err());
        let config = ClientConfig::default().with_api_url("not a url");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ClientConfig::default().with_api_url("http://localhost:9000/api/");
        assert_eq!(config.api_url, "http://localhost:9000/api");
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = ClientConfig {
            timeout_secs: 0,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
