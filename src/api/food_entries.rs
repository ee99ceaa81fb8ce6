// ABOUTME: Consumed food entry operations and per-day nutrition totals
// ABOUTME: Add, list, delete entries plus daily summary and date-range history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use habitbite_core::constants::endpoints;
use habitbite_core::errors::AppResult;
use habitbite_core::models::{
    DailyNutritionSummary, FoodEntry, FoodEntryRequest, NewFoodEntry, NutritionHistoryRecord,
};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, warn};

use super::{normalize, HabitBiteClient};

const ADD_ENTRY_FAILED: &str = "Failed to add food entry. Please try again.";
const DAILY_ENTRIES_FAILED: &str = "Failed to get daily entries. Please try again.";
const DAILY_NUTRITION_FAILED: &str = "Failed to get daily nutrition. Please try again.";
const DELETE_ENTRY_FAILED: &str = "Failed to delete food entry. Please try again.";
const HISTORY_FAILED: &str = "Failed to get nutrition history. Please try again.";

fn date_param(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn entry_from_request(request: &FoodEntryRequest) -> FoodEntry {
    FoodEntry {
        id: 0,
        food_id: Some(request.food_id.clone()),
        name: request.name.clone(),
        amount: request.amount,
        date: Some(request.date.clone()),
        calories: request.calories,
        protein: request.protein,
        carbs: request.carbs,
        fat: request.fat,
    }
}

impl HabitBiteClient {
    /// Log a food entry
    ///
    /// The draft is validated locally first; a CSRF token is fetched when none is cached.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming missing fields, `CsrfRejected` on 403, or the
    /// server/transport error
    pub async fn add_food_entry(&self, entry: NewFoodEntry) -> AppResult<FoodEntry> {
        let request = entry.validate()?;
        if !self.ensure_csrf_token().await {
            warn!("Adding food entry without a fresh CSRF token");
        }

        let payload = self
            .send_json(
                Method::POST,
                endpoints::CONSUMED_FOODS,
                Some(&request),
                ADD_ENTRY_FAILED,
            )
            .await?;

        if payload.is_object() {
            Ok(normalize::food_entry(&payload))
        } else {
            debug!("Add-entry response carried no entry; echoing request");
            Ok(entry_from_request(&request))
        }
    }

    /// Entries logged on `date`; non-array payloads read as empty
    ///
    /// # Errors
    ///
    /// Returns the server/transport error
    pub async fn get_daily_entries(&self, date: NaiveDate) -> AppResult<Vec<FoodEntry>> {
        let payload = self
            .get_json(
                endpoints::CONSUMED_FOODS_DAILY,
                &[("date", date_param(date))],
                DAILY_ENTRIES_FAILED,
            )
            .await?;
        Ok(normalize::food_entries(&payload))
    }

    /// Totals for `date`; missing numbers read as 0
    ///
    /// # Errors
    ///
    /// Returns the server/transport error
    pub async fn get_daily_nutrition(&self, date: NaiveDate) -> AppResult<DailyNutritionSummary> {
        let payload = self
            .get_json(
                endpoints::CONSUMED_FOODS_NUTRITION,
                &[("date", date_param(date))],
                DAILY_NUTRITION_FAILED,
            )
            .await?;
        Ok(normalize::daily_summary(&payload))
    }

    /// Delete one entry
    ///
    /// # Errors
    ///
    /// Returns `CsrfRejected` on 403 or the server/transport error
    pub async fn delete_food_entry(&self, id: i64) -> AppResult<()> {
        let path = format!("{}/{id}", endpoints::CONSUMED_FOODS);
        self.send_json::<Value>(Method::DELETE, &path, None, DELETE_ENTRY_FAILED)
            .await?;
        Ok(())
    }

    /// Per-day totals for `start..=end`
    ///
    /// # Errors
    ///
    /// Returns the server/transport error
    pub async fn get_nutrition_history(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<NutritionHistoryRecord>> {
        let payload = self
            .get_json(
                endpoints::CONSUMED_FOODS_HISTORY,
                &[
                    ("startDate", date_param(start)),
                    ("endDate", date_param(end)),
                    ("combineData", "true".to_owned()),
                ],
                HISTORY_FAILED,
            )
            .await?;
        Ok(normalize::history_records(&payload))
    }
}
