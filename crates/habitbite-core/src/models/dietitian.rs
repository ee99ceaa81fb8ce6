// ABOUTME: Dietitian and admin surface models
// ABOUTME: UserProgress column arrays, client details, and listing aliases over UserProfile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::nutrition::{DailyNutritionSummary, NutritionHistoryRecord};
use super::user::UserProfile;

/// Entry in the dietitian directory
pub type Dietitian = UserProfile;

/// Client subscribed to the signed-in dietitian
pub type SubscribedUser = UserProfile;

/// Account as listed on the admin surface
pub type AdminUser = UserProfile;

/// Per-day nutrition history stored column-wise
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionHistoryColumns {
    /// Dates, one per row
    #[serde(default)]
    pub dates: Vec<String>,
    /// Energy per day
    #[serde(default)]
    pub calories: Vec<f64>,
    /// Protein per day
    #[serde(default)]
    pub protein: Vec<f64>,
    /// Carbohydrates per day
    #[serde(default)]
    pub carbs: Vec<f64>,
    /// Fat per day
    #[serde(default)]
    pub fats: Vec<f64>,
}

/// Client profile snippet shown next to their progress
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUserDetails {
    /// Display name
    #[serde(default)]
    pub full_name: String,
    /// Weight in kilograms
    #[serde(default)]
    pub weight: f64,
    /// Height in centimetres
    #[serde(default)]
    pub height: f64,
    /// `lose`, `gain` or `maintain`
    #[serde(default)]
    pub goal_type: String,
    /// Daily calorie goal
    #[serde(default)]
    pub daily_calorie_goal: f64,
}

/// Response of `/dietitian/users/:id/progress`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    /// History columns
    #[serde(default)]
    pub nutrition_history: NutritionHistoryColumns,
    /// Client details
    #[serde(default)]
    pub user_details: ProgressUserDetails,
}

impl UserProgress {
    /// Transpose the columns into history records
    ///
    /// Rows are keyed by `dates`; a shorter numeric column contributes 0 for missing rows.
    #[must_use]
    pub fn records(&self) -> Vec<NutritionHistoryRecord> {
        let columns = &self.nutrition_history;
        let at = |values: &[f64], i: usize| values.get(i).copied().unwrap_or_default();
        columns
            .dates
            .iter()
            .enumerate()
            .map(|(i, date)| NutritionHistoryRecord {
                date: date.clone(),
                totals: DailyNutritionSummary {
                    total_calories: at(&columns.calories, i),
                    total_protein: at(&columns.protein, i),
                    total_carbs: at(&columns.carbs, i),
                    total_fats: at(&columns.fats, i),
                    entry_count: 0,
                },
            })
            .collect()
    }
}
