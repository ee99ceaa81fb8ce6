// ABOUTME: HTTP client construction for HabitBite API calls
// ABOUTME: Builds a reqwest client with configured timeouts, JSON headers and a shared cookie jar
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Duration;

use habitbite_core::errors::{AppError, AppResult};
use reqwest::cookie::Jar;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder};

use crate::config::ClientConfig;

/// Build the HTTP client used by [`crate::api::HabitBiteClient`]
///
/// The cookie jar is passed in rather than created here so the CSRF guard can read the
/// `csrf_token` cookie the server sets.
///
/// # Errors
///
/// Returns `ConfigInvalid` if the TLS backend or header values cannot be initialized
pub fn build_client(config: &ClientConfig, cookies: Arc<Jar>) -> AppResult<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
        .cookie_provider(cookies)
        .build()
        .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")).with_source(e))
}
