// ABOUTME: Dietitian directory for users and the client-management surface for dietitians
// ABOUTME: Subscriptions, subscribed clients, client progress and client goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use habitbite_core::constants::endpoints;
use habitbite_core::errors::AppResult;
use habitbite_core::models::{ClientGoals, Dietitian, SubscribedUser, UserProgress};
use reqwest::Method;
use serde_json::Value;

use super::{normalize, HabitBiteClient};

const DIETITIANS_FAILED: &str = "Failed to fetch available dietitians. Please try again.";
const SUBSCRIBE_FAILED: &str = "Failed to subscribe to dietitian. Please try again.";
const UNSUBSCRIBE_FAILED: &str = "Failed to unsubscribe from dietitian. Please try again.";
const CLIENTS_FAILED: &str = "Failed to get subscribed users. Please try again.";
const PROGRESS_FAILED: &str = "Failed to get user progress. Please try again.";
const GET_GOALS_FAILED: &str = "Failed to get user goals. Please try again.";
const UPDATE_GOALS_FAILED: &str = "Failed to update user goals. Please try again.";

fn subscription_path(dietitian_id: i64) -> String {
    format!("{}/{dietitian_id}/subscribe", endpoints::DIETITIANS)
}

fn client_path(user_id: i64, resource: &str) -> String {
    format!("{}/{user_id}/{resource}", endpoints::DIETITIAN_USERS)
}

impl HabitBiteClient {
    /// Dietitians a user can subscribe to
    ///
    /// # Errors
    ///
    /// Returns the server/transport error
    pub async fn get_available_dietitians(&self) -> AppResult<Vec<Dietitian>> {
        let payload = self
            .get_json(endpoints::DIETITIANS, &[], DIETITIANS_FAILED)
            .await?;
        Ok(normalize::users(&payload, "dietitians"))
    }

    /// Subscribe the signed-in user to a dietitian
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown dietitian or the server/transport error
    pub async fn subscribe_to_dietitian(&self, dietitian_id: i64) -> AppResult<()> {
        self.send_json::<Value>(
            Method::POST,
            &subscription_path(dietitian_id),
            None,
            SUBSCRIBE_FAILED,
        )
        .await?;
        Ok(())
    }

    /// Cancel a subscription
    ///
    /// # Errors
    ///
    /// Returns the server/transport error
    pub async fn unsubscribe_from_dietitian(&self, dietitian_id: i64) -> AppResult<()> {
        self.send_json::<Value>(
            Method::DELETE,
            &subscription_path(dietitian_id),
            None,
            UNSUBSCRIBE_FAILED,
        )
        .await?;
        Ok(())
    }

    /// Clients subscribed to the signed-in dietitian
    ///
    /// # Errors
    ///
    /// Returns the server/transport error
    pub async fn get_subscribed_users(&self) -> AppResult<Vec<SubscribedUser>> {
        let payload = self
            .get_json(endpoints::DIETITIAN_USERS, &[], CLIENTS_FAILED)
            .await?;
        Ok(normalize::users(&payload, "subscribed users"))
    }

    /// A client's nutrition history and details
    ///
    /// # Errors
    ///
    /// Returns `InvalidResponse` for a malformed payload or the server/transport error
    pub async fn get_user_progress(&self, user_id: i64) -> AppResult<UserProgress> {
        let payload = self
            .get_json(&client_path(user_id, "progress"), &[], PROGRESS_FAILED)
            .await?;
        normalize::user_progress(&payload)
    }

    /// A client's goals
    ///
    /// # Errors
    ///
    /// Returns `InvalidResponse` when the payload has no `goals` object
    pub async fn get_client_goals(&self, user_id: i64) -> AppResult<ClientGoals> {
        let payload = self
            .get_json(&client_path(user_id, "goals"), &[], GET_GOALS_FAILED)
            .await?;
        normalize::client_goals(&payload)
    }

    /// Replace a client's goals; returns the echoed goals, or `goals` if none were
    ///
    /// # Errors
    ///
    /// Returns the server/transport error
    pub async fn update_client_goals(
        &self,
        user_id: i64,
        goals: &ClientGoals,
    ) -> AppResult<ClientGoals> {
        let payload = self
            .send_json(
                Method::PUT,
                &client_path(user_id, "goals"),
                Some(goals),
                UPDATE_GOALS_FAILED,
            )
            .await?;
        Ok(normalize::client_goals(&payload).unwrap_or_else(|_| goals.clone()))
    }
}
