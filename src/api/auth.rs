// ABOUTME: Authentication operations: sign-in, registration, sign-out and profile refresh
// ABOUTME: Validates auth payload shape before touching the stored session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use habitbite_core::constants::endpoints;
use habitbite_core::errors::{AppError, AppResult};
use habitbite_core::models::{UserFields, UserProfile};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use super::{normalize, HabitBiteClient};
use crate::session::RestoreOutcome;

const LOGIN_FAILED: &str = "Failed to sign in. Please check your credentials.";
const REGISTER_FAILED: &str = "Failed to register. Please try again.";
const LOGOUT_FAILED: &str = "Failed to logout. Please try again.";
const PROFILE_FAILED: &str = "Failed to get profile. Please try again.";

/// Result of a successful sign-in or registration
#[derive(Debug, Clone, PartialEq)]
pub struct AuthResponse {
    /// Signed-in user
    pub user: UserProfile,
    /// Bearer token; registration may succeed without one
    pub token: Option<String>,
    /// Server message, if any
    pub message: Option<String>,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

fn non_empty_str<'a>(payload: &'a Value, key: &str) -> Option<&'a str> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

fn user_object<'a>(payload: &'a Value, key: &str) -> Option<&'a Value> {
    payload.get(key).filter(|value| value.is_object())
}

impl HabitBiteClient {
    /// Sign in and persist the session
    ///
    /// # Errors
    ///
    /// Returns `InvalidResponse` (session untouched) when the payload lacks `token` or `user`,
    /// or the server/transport error otherwise
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthResponse> {
        let payload = self
            .send_json(
                Method::POST,
                endpoints::AUTH_LOGIN,
                Some(&LoginRequest { email, password }),
                LOGIN_FAILED,
            )
            .await?;

        let (Some(token), Some(user)) = (
            non_empty_str(&payload, "token"),
            user_object(&payload, "user"),
        ) else {
            return Err(AppError::invalid_response("Invalid response from server"));
        };
        let user = normalize::user_profile(user)?;

        self.session.set_session(&user, token)?;
        info!(user_id = user.id, role = %user.role, "Signed in");

        Ok(AuthResponse {
            user,
            token: Some(token.to_owned()),
            message: non_empty_str(&payload, "message").map(str::to_owned),
        })
    }

    /// Create an account and persist whatever session the server returns
    ///
    /// A payload without `user` but with an `id` is taken to be the user itself; the token is
    /// stored only when present.
    ///
    /// # Errors
    ///
    /// Returns `InvalidResponse` when the payload holds neither shape
    pub async fn register(&self, fields: &UserFields) -> AppResult<AuthResponse> {
        let payload = self
            .send_json(
                Method::POST,
                endpoints::AUTH_REGISTER,
                Some(fields),
                REGISTER_FAILED,
            )
            .await?;

        let token = non_empty_str(&payload, "token").map(str::to_owned);
        let message = non_empty_str(&payload, "message").map(str::to_owned);

        let user = match (token.as_deref(), user_object(&payload, "user")) {
            (Some(token), Some(user)) => {
                let user = normalize::user_profile(user)?;
                self.session.set_session(&user, token)?;
                user
            }
            _ if payload.get("id").is_some_and(|id| !id.is_null()) => {
                warn!("Registration response missing token or user; using payload as user");
                let user = normalize::user_profile(&payload)?;
                match token.as_deref() {
                    Some(token) => self.session.set_session(&user, token)?,
                    None => self.session.update_user(&user)?,
                }
                user
            }
            _ => {
                return Err(AppError::invalid_response(
                    "Invalid response from server: missing token or user data",
                ))
            }
        };

        Ok(AuthResponse {
            user,
            token,
            message,
        })
    }

    /// Sign out; the local session is cleared whatever the server says
    ///
    /// # Errors
    ///
    /// Returns the server/transport error after clearing the local session
    pub async fn logout(&self) -> AppResult<()> {
        let result = self
            .send_json::<Value>(Method::POST, endpoints::AUTH_LOGOUT, None, LOGOUT_FAILED)
            .await;
        if let Err(e) = self.session.clear_session() {
            warn!(error = %e, "Failed to clear local session on logout");
        }
        result.map(|_| ())
    }

    /// Fetch the signed-in user's profile and refresh the cached copy
    ///
    /// # Errors
    ///
    /// Returns `InvalidResponse` when the payload has no `user`, `AuthRequired` on 401
    pub async fn get_profile(&self) -> AppResult<UserProfile> {
        let payload = self
            .get_json(endpoints::AUTH_PROFILE, &[], PROFILE_FAILED)
            .await?;
        let user = user_object(&payload, "user")
            .ok_or_else(|| AppError::invalid_response("Invalid profile response"))?;
        let user = normalize::user_profile(user)?;
        self.session.update_user(&user)?;
        Ok(user)
    }

    /// Request a fresh CSRF token; never fails
    pub async fn fetch_csrf_token(&self) -> bool {
        self.csrf
            .fetch_token(&self.http, &self.url(endpoints::AUTH_CSRF))
            .await
    }

    /// Fetch a CSRF token only when none is cached
    pub async fn ensure_csrf_token(&self) -> bool {
        self.csrf
            .ensure_token(&self.http, &self.url(endpoints::AUTH_CSRF))
            .await
    }

    /// Re-validate the stored session at startup
    pub async fn restore_session(&self) -> RestoreOutcome {
        self.session.restore_with(|| self.get_profile()).await
    }
}
