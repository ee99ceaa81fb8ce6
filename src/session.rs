// ABOUTME: Session manager owning the bearer token and cached user profile
// ABOUTME: Persists session state in the client store and tears it down on 401 responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session Manager
//!
//! The session is two store entries: `token` (bearer credential) and `user` (JSON profile).
//! A missing token means unauthenticated no matter what `user` holds. Every 401 from the API
//! ends up in [`SessionManager::handle_unauthorized`], which clears both entries and asks the
//! [`Navigator`](crate::navigation::Navigator) to show the sign-in route unless it already is.

use std::future::Future;

use habitbite_core::constants::storage_keys;
use habitbite_core::errors::{AppResult, ErrorCode};
use habitbite_core::models::{Session, UserProfile, UserRole};
use tracing::warn;

use crate::logging::ClientLogger;
use crate::navigation::SharedNavigator;
use crate::storage::SharedStore;

/// Result of re-validating a stored session at startup
#[derive(Debug, Clone, PartialEq)]
pub enum RestoreOutcome {
    /// No usable session; the user must sign in
    Unauthenticated,
    /// A token is held
    Restored {
        /// Profile now cached, if any
        user: Option<UserProfile>,
        /// True when the profile could not be refreshed and the cached copy was kept
        stale: bool,
    },
}

/// Owner of the persisted session
#[derive(Clone)]
pub struct SessionManager {
    store: SharedStore,
    navigator: SharedNavigator,
}

impl SessionManager {
    /// Create a session manager over `store`
    pub fn new(store: SharedStore, navigator: SharedNavigator) -> Self {
        Self { store, navigator }
    }

    /// Bearer token, if signed in
    #[must_use]
    pub fn token(&self) -> Option<String> {
        match self.store.get(storage_keys::TOKEN) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!(error = %e, "Failed to read session token; treating as signed out");
                None
            }
        }
    }

    /// Cached profile; `None` whenever the token is absent
    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        self.token()?;
        self.cached_user()
    }

    /// Cached profile regardless of token presence
    fn cached_user(&self) -> Option<UserProfile> {
        let raw = match self.store.get(storage_keys::USER) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(error = %e, "Failed to read cached user");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(error = %e, "Discarding malformed cached user");
                None
            }
        }
    }

    /// Snapshot of token and profile
    #[must_use]
    pub fn session(&self) -> Session {
        let token = self.token();
        let user = token.as_ref().and_then(|_| self.cached_user());
        Session { token, user }
    }

    /// Whether a bearer token is held
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Role of the signed-in user
    #[must_use]
    pub fn role(&self) -> Option<UserRole> {
        self.user().map(|user| user.role)
    }

    /// Replace both token and profile
    ///
    /// # Errors
    ///
    /// Returns `StorageError` or `SerializationError` if the store cannot be written
    pub fn set_session(&self, user: &UserProfile, token: &str) -> AppResult<()> {
        self.store.set(storage_keys::TOKEN, token)?;
        self.store
            .set(storage_keys::USER, &serde_json::to_string(user)?)?;
        ClientLogger::log_session_event("signed_in", Some(user.id));
        Ok(())
    }

    /// Replace the cached profile, keeping the token
    ///
    /// # Errors
    ///
    /// Returns `StorageError` or `SerializationError` if the store cannot be written
    pub fn update_user(&self, user: &UserProfile) -> AppResult<()> {
        self.store
            .set(storage_keys::USER, &serde_json::to_string(user)?)
    }

    /// Remove token and profile
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written
    pub fn clear_session(&self) -> AppResult<()> {
        self.store.remove(storage_keys::TOKEN)?;
        self.store.remove(storage_keys::USER)?;
        ClientLogger::log_session_event("signed_out", None);
        Ok(())
    }

    /// React to a 401: clear the session and redirect unless already on the sign-in route
    pub fn handle_unauthorized(&self) {
        if let Err(e) = self.clear_session() {
            warn!(error = %e, "Failed to clear session after 401");
        }
        if self.navigator.is_on_sign_in() {
            return;
        }
        self.navigator.redirect_to_sign_in();
    }

    /// Re-validate a persisted session with a profile fetch
    ///
    /// No token skips the fetch. A successful fetch refreshes the cached profile; a 401 ends
    /// the session; any other failure keeps the cached profile and reports it as stale.
    pub async fn restore_with<F, Fut>(&self, fetch_profile: F) -> RestoreOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<UserProfile>>,
    {
        if self.token().is_none() {
            return RestoreOutcome::Unauthenticated;
        }

        match fetch_profile().await {
            Ok(user) => {
                if let Err(e) = self.update_user(&user) {
                    warn!(error = %e, "Failed to cache refreshed profile");
                }
                RestoreOutcome::Restored {
                    user: Some(user),
                    stale: false,
                }
            }
            Err(e) if e.code == ErrorCode::AuthRequired => {
                if let Err(e) = self.clear_session() {
                    warn!(error = %e, "Failed to clear rejected session");
                }
                RestoreOutcome::Unauthenticated
            }
            Err(e) => {
                warn!(error = %e, "Profile fetch failed; keeping cached user");
                RestoreOutcome::Restored {
                    user: self.cached_user(),
                    stale: true,
                }
            }
        }
    }
}
