// ABOUTME: Client-side CSRF guard acquiring, caching, attaching and invalidating anti-forgery tokens
// ABOUTME: Decides which requests need X-CSRF-Token and resolves the token from cookie or store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! CSRF guard
//!
//! State-changing requests (POST, PUT, PATCH, DELETE) carry `X-CSRF-Token`, except sign-in
//! and registration which happen before any token can exist. The server may hand out the
//! token as a `csrf_token` cookie, as a response header, or both; the cookie wins when present.

use habitbite_core::constants::{cookies, endpoints, headers, storage_keys};
use habitbite_core::errors::AppError;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::storage::SharedStore;

/// Whether a request must carry the anti-forgery header
#[must_use]
pub fn requires_token(method: &Method, path: &str) -> bool {
    if !matches!(
        method,
        &Method::POST | &Method::PUT | &Method::DELETE | &Method::PATCH
    ) {
        return false;
    }
    !endpoints::CSRF_EXEMPT.contains(&path)
}

/// Extract the `csrf_token` value from a `Cookie` header string
#[must_use]
pub fn csrf_cookie_value(cookie_header: &str) -> Option<String> {
    cookie_header
        .split(';')
        .map(str::trim)
        .find_map(|pair| {
            pair.strip_prefix(cookies::CSRF_TOKEN)
                .and_then(|rest| rest.strip_prefix('='))
        })
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Anti-forgery token cache backed by the client store
#[derive(Clone)]
pub struct CsrfGuard {
    store: SharedStore,
}

impl CsrfGuard {
    /// Create a guard over `store`
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Cached token
    #[must_use]
    pub fn token(&self) -> Option<String> {
        match self.store.get(storage_keys::CSRF_TOKEN) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!(error = %e, "Failed to read cached CSRF token");
                None
            }
        }
    }

    /// Cache a token; empty values are ignored
    pub fn set_token(&self, token: &str) {
        if token.is_empty() {
            return;
        }
        if let Err(e) = self.store.set(storage_keys::CSRF_TOKEN, token) {
            warn!(error = %e, "Failed to cache CSRF token");
        }
    }

    /// Drop the cached token
    pub fn clear(&self) {
        if let Err(e) = self.store.remove(storage_keys::CSRF_TOKEN) {
            warn!(error = %e, "Failed to clear CSRF token");
        }
    }

    /// Token to attach: the cookie value wins over the cached one
    #[must_use]
    pub fn resolve_token(&self, cookie_value: Option<String>) -> Option<String> {
        cookie_value
            .filter(|value| !value.is_empty())
            .or_else(|| self.token())
    }

    /// Cache the token carried by a response, if any
    pub fn absorb(&self, response_headers: &HeaderMap) {
        if let Some(token) = response_headers
            .get(headers::CSRF_TOKEN)
            .and_then(|value| value.to_str().ok())
        {
            debug!("Received CSRF token from response header");
            self.set_token(token);
        }
    }

    /// Invalidate the cached token after a 403 on a mutating request
    #[must_use]
    pub fn reject(&self) -> AppError {
        self.clear();
        warn!("CSRF token rejected by server; cleared cached token");
        AppError::csrf_rejected()
    }

    /// Request a fresh token from `url`
    ///
    /// Never fails: any transport or status problem is logged and reported as `false`.
    pub async fn fetch_token(&self, http: &Client, url: &str) -> bool {
        let request_id = Uuid::new_v4().to_string();
        let response = match http
            .get(url)
            .header(headers::REQUEST_ID, &request_id)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, request_id = %request_id, "Failed to fetch CSRF token");
                return false;
            }
        };

        if !response.status().is_success() {
            warn!(
                status = response.status().as_u16(),
                request_id = %request_id,
                "CSRF token endpoint returned an error"
            );
            return false;
        }

        match response
            .headers()
            .get(headers::CSRF_TOKEN)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
        {
            Some(token) => {
                self.set_token(token);
                true
            }
            None => {
                warn!(
                    request_id = %request_id,
                    "CSRF token endpoint did not return a token header"
                );
                false
            }
        }
    }

    /// Fetch a token only when none is cached
    pub async fn ensure_token(&self, http: &Client, url: &str) -> bool {
        if self.token().is_some() {
            return true;
        }
        self.fetch_token(http, url).await
    }
}
