// ABOUTME: Admin user management operations
// ABOUTME: List, create, update and delete accounts under /admin/users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use habitbite_core::constants::endpoints;
use habitbite_core::errors::AppResult;
use habitbite_core::models::{AdminUser, UserFields};
use reqwest::Method;
use serde_json::Value;

use super::{normalize, HabitBiteClient};

const LIST_FAILED: &str = "Failed to fetch users. Please try again.";
const CREATE_FAILED: &str = "Failed to create user. Please try again.";
const UPDATE_FAILED: &str = "Failed to update user. Please try again.";
const DELETE_FAILED: &str = "Failed to delete user. Please try again.";

fn user_path(user_id: i64) -> String {
    format!("{}/{user_id}", endpoints::ADMIN_USERS)
}

/// User object from a bare or `{ "user": ... }` payload
fn returned_user(payload: &Value) -> AppResult<AdminUser> {
    match payload.get("user") {
        Some(user @ Value::Object(_)) => normalize::user_profile(user),
        _ => normalize::user_profile(payload),
    }
}

impl HabitBiteClient {
    /// All accounts
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` for non-admins or the server/transport error
    pub async fn list_users(&self) -> AppResult<Vec<AdminUser>> {
        let payload = self
            .get_json(endpoints::ADMIN_USERS, &[], LIST_FAILED)
            .await?;
        Ok(normalize::users(&payload, "admin users"))
    }

    /// Create an account
    ///
    /// # Errors
    ///
    /// Returns `InvalidResponse` if no user comes back, or the server/transport error
    pub async fn create_user(&self, fields: &UserFields) -> AppResult<AdminUser> {
        let payload = self
            .send_json(Method::POST, endpoints::ADMIN_USERS, Some(fields), CREATE_FAILED)
            .await?;
        returned_user(&payload)
    }

    /// Update the fields set in `fields`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown user, or the server/transport error
    pub async fn update_user(&self, user_id: i64, fields: &UserFields) -> AppResult<AdminUser> {
        let payload = self
            .send_json(Method::PUT, &user_path(user_id), Some(fields), UPDATE_FAILED)
            .await?;
        returned_user(&payload)
    }

    /// Delete an account
    ///
    /// # Errors
    ///
    /// Returns the server/transport error
    pub async fn delete_user(&self, user_id: i64) -> AppResult<()> {
        self.send_json::<Value>(Method::DELETE, &user_path(user_id), None, DELETE_FAILED)
            .await?;
        Ok(())
    }
}
