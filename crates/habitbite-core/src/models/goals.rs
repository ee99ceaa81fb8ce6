// ABOUTME: Nutrition goal models for users and dietitian-managed clients
// ABOUTME: UserGoals (own targets) and ClientGoals (dietitian view of a client's targets)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Calorie and macro targets; always replaced wholesale
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserGoals {
    /// Owner, when the server includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Daily energy target in kcal
    #[serde(default, serialize_with = "super::kcal::serialize")]
    pub target_calories: f64,
    /// Daily protein target in grams
    #[serde(default)]
    pub target_protein: f64,
    /// Daily carbohydrate target in grams
    #[serde(default)]
    pub target_carbs: f64,
    /// Daily fat target in grams
    #[serde(default)]
    pub target_fats: f64,
    /// Target body weight in kilograms
    #[serde(default)]
    pub target_weight: f64,
}

/// A client's goals as seen and edited by their dietitian
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientGoals {
    /// Client id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Daily energy target in kcal
    #[serde(default, serialize_with = "super::kcal::serialize")]
    pub daily_calorie_goal: f64,
    /// Daily protein target in grams
    #[serde(default)]
    pub protein_goal: f64,
    /// Daily carbohydrate target in grams
    #[serde(default)]
    pub carbs_goal: f64,
    /// Daily fat target in grams
    #[serde(default)]
    pub fats_goal: f64,
    /// Target body weight in kilograms
    #[serde(default)]
    pub target_weight: f64,
    /// `lose`, `gain` or `maintain`; empty leaves the profile unchanged
    #[serde(default)]
    pub goal_type: String,
    /// Activity level; empty leaves the profile unchanged
    #[serde(default)]
    pub activity_level: String,
}

impl From<&ClientGoals> for UserGoals {
    fn from(goals: &ClientGoals) -> Self {
        Self {
            user_id: goals.user_id,
            target_calories: goals.daily_calorie_goal,
            target_protein: goals.protein_goal,
            target_carbs: goals.carbs_goal,
            target_fats: goals.fats_goal,
            target_weight: goals.target_weight,
        }
    }
}
