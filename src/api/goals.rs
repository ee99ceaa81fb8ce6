// ABOUTME: Signed-in user's nutrition goals
// ABOUTME: GET and wholesale PUT of /user/goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use habitbite_core::constants::endpoints;
use habitbite_core::errors::AppResult;
use habitbite_core::models::UserGoals;
use reqwest::Method;

use super::{normalize, HabitBiteClient};

const GET_GOALS_FAILED: &str = "Failed to get user goals. Please try again.";
const UPDATE_GOALS_FAILED: &str = "Failed to update user goals. Please try again.";

impl HabitBiteClient {
    /// Current goals
    ///
    /// # Errors
    ///
    /// Returns `InvalidResponse` when the payload has no `goals` object
    pub async fn get_user_goals(&self) -> AppResult<UserGoals> {
        let payload = self
            .get_json(endpoints::USER_GOALS, &[], GET_GOALS_FAILED)
            .await?;
        normalize::user_goals(&payload)
    }

    /// Replace all goals; returns the goals echoed by the server, or `goals` if none were
    ///
    /// # Errors
    ///
    /// Returns the server/transport error
    pub async fn update_user_goals(&self, goals: &UserGoals) -> AppResult<UserGoals> {
        let payload = self
            .send_json(
                Method::PUT,
                endpoints::USER_GOALS,
                Some(goals),
                UPDATE_GOALS_FAILED,
            )
            .await?;
        Ok(normalize::updated_goals(&payload).unwrap_or(*goals))
    }
}
