// ABOUTME: HabitBite API gateway issuing authenticated JSON requests to the REST backend
// ABOUTME: Decorates requests with bearer, CSRF and request-id headers and maps failures to AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # API Gateway
//!
//! [`HabitBiteClient`] owns the HTTP client, the cookie jar, the session and the CSRF guard.
//! Every operation goes through one request pipeline:
//!
//! 1. attach `X-Request-Id`, the bearer token when signed in, and `X-CSRF-Token` on
//!    state-changing calls other than sign-in and registration
//! 2. send with the configured timeout
//! 3. cache any `X-CSRF-Token` the response carries
//! 4. on failure, prefer the server's `{"error": ...}` message over the operation's fallback;
//!    401 tears the session down, 403 on a mutation invalidates the CSRF token
//!
//! Operations are grouped by API area in the submodules.

/// Admin user management
pub mod admin;
/// Sign-in, registration, profile and session restore
pub mod auth;
/// Dietitian directory and the dietitian's client surface
pub mod dietitians;
/// Consumed food entries and nutrition totals
pub mod food_entries;
/// Food database search
pub mod foods;
/// Signed-in user's goals
pub mod goals;
/// Raw payload to model mapping
pub mod normalize;
/// Composite weekly view
pub mod weekly;

use std::sync::Arc;

use habitbite_core::constants::headers;
use habitbite_core::errors::{AppError, AppResult, ErrorCode};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;
use url::Url;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::csrf::{self, CsrfGuard};
use crate::http_client::build_client;
use crate::logging::ClientLogger;
use crate::navigation::SharedNavigator;
use crate::request_tracker::RequestTracker;
use crate::session::SessionManager;
use crate::storage::SharedStore;

pub use weekly::WeeklyOverview;

/// Client for the HabitBite REST API
#[derive(Clone)]
pub struct HabitBiteClient {
    http: Client,
    base_url: String,
    cookie_url: Url,
    cookies: Arc<Jar>,
    session: SessionManager,
    csrf: CsrfGuard,
    tracker: RequestTracker,
}

impl HabitBiteClient {
    /// Create a client from configuration
    ///
    /// Session and CSRF state live in `store`; sign-in redirects go to `navigator`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the configuration does not validate or the HTTP client
    /// cannot be built
    pub fn new(
        config: &ClientConfig,
        store: SharedStore,
        navigator: SharedNavigator,
    ) -> AppResult<Self> {
        config.validate()?;
        let cookie_url = Url::parse(&config.api_url).map_err(|e| {
            AppError::config(format!("Invalid API URL '{}'", config.api_url)).with_source(e)
        })?;
        let cookies = Arc::new(Jar::default());
        let http = build_client(config, Arc::clone(&cookies))?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_owned(),
            cookie_url,
            cookies,
            session: SessionManager::new(Arc::clone(&store), navigator),
            csrf: CsrfGuard::new(store),
            tracker: RequestTracker::new(),
        })
    }

    /// API base URL without trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Session state
    #[must_use]
    pub const fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Anti-forgery token state
    #[must_use]
    pub const fn csrf(&self) -> &CsrfGuard {
        &self.csrf
    }

    /// Generation counters for discarding stale responses
    #[must_use]
    pub const fn tracker(&self) -> &RequestTracker {
        &self.tracker
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `csrf_token` cookie currently held for the API origin
    fn csrf_cookie(&self) -> Option<String> {
        self.cookies
            .cookies(&self.cookie_url)
            .and_then(|header| header.to_str().ok().and_then(csrf::csrf_cookie_value))
    }

    /// Issue a GET and return the JSON payload
    pub(crate) async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
        fallback: &str,
    ) -> AppResult<Value> {
        self.execute(Method::GET, path, query, None, fallback).await
    }

    /// Issue a request with an optional JSON body and return the JSON payload
    pub(crate) async fn send_json<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        fallback: &str,
    ) -> AppResult<Value> {
        let body = body.map(serde_json::to_value).transpose()?;
        self.execute(method, path, &[], body, fallback).await
    }

    /// Run one request through the pipeline
    ///
    /// Success with an empty or non-JSON body yields `Value::Null`.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
        fallback: &str,
    ) -> AppResult<Value> {
        let request_id = Uuid::new_v4().to_string();
        let mutating = csrf::requires_token(&method, path);

        let mut request = self
            .http
            .request(method.clone(), self.url(path))
            .header(headers::REQUEST_ID, &request_id);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        if mutating {
            match self.csrf.resolve_token(self.csrf_cookie()) {
                Some(token) => request = request.header(headers::CSRF_TOKEN, token),
                None => warn!(path, "No CSRF token available for state-changing request"),
            }
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| transport_error(e, fallback, &request_id))?;
        let status = response.status();
        self.csrf.absorb(response.headers());
        ClientLogger::log_api_request(method.as_str(), path, status.as_u16(), &request_id);

        let text = response
            .text()
            .await
            .map_err(|e| transport_error(e, fallback, &request_id))?;
        let payload = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::Null)
        };

        if status.is_success() {
            return Ok(payload);
        }

        let message = normalize::error_message(&payload).unwrap_or_else(|| fallback.to_owned());
        let error = match status {
            StatusCode::UNAUTHORIZED => {
                self.session.handle_unauthorized();
                AppError::auth_required(message)
            }
            StatusCode::FORBIDDEN if mutating => self.csrf.reject(),
            StatusCode::FORBIDDEN => {
                AppError::new(ErrorCode::PermissionDenied, message).with_status(403)
            }
            StatusCode::NOT_FOUND => {
                AppError::new(ErrorCode::ResourceNotFound, message).with_status(404)
            }
            other => AppError::server(other.as_u16(), message),
        };
        Err(error.with_request_id(request_id))
    }
}

/// Wrap a reqwest failure; the raw error is only kept as the source
fn transport_error(error: reqwest::Error, fallback: &str, request_id: &str) -> AppError {
    let mapped = if error.is_timeout() {
        AppError::timeout(fallback)
    } else {
        AppError::network(fallback)
    };
    warn!(request_id, error = %error, "Request failed before a response was received");
    mapped.with_request_id(request_id).with_source(error)
}
