// ABOUTME: Response normalization mapping raw API payloads into canonical client models
// ABOUTME: Single mapping point per entity; absorbs field-name drift and lenient number encodings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Normalization
//!
//! The API is not consistent about field names. Entry listings use the database column names
//! (`food_name`, `quantity`, `entry_date`) while the add-entry response uses the JSON model
//! names (`name`, `amount`, `date`). Numbers sometimes arrive as strings. Everything is mapped
//! here, once per entity, so the rest of the crate only sees canonical shapes.
//!
//! List helpers degrade: a missing or non-array payload becomes an empty vector with a
//! warning. Helpers that guard a required shape return `InvalidResponse` instead.

use habitbite_core::constants::nutrition::{NUTRIENT_CARBS, NUTRIENT_FAT, NUTRIENT_PROTEIN};
use habitbite_core::errors::{AppError, AppResult};
use habitbite_core::models::{
    ClientGoals, DailyNutritionSummary, FoodEntry, FoodSearchPage, FoodSearchResult,
    NutrientsPer100g, NutritionHistoryRecord, UserGoals, UserProfile, UserProgress,
};
use serde_json::Value;
use tracing::warn;

use crate::nutrition::round2;

/// First present, non-null field among `keys`
fn field<'a>(raw: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| raw.get(key).filter(|value| !value.is_null()))
}

/// Number from a JSON number or numeric string; anything else is 0
fn number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or_default(),
        Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    }
}

fn integer(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or_default(),
        Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    }
}

fn text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Array payload, or `None` with a warning naming `what`
fn array<'a>(payload: &'a Value, what: &str) -> Option<&'a Vec<Value>> {
    match payload {
        Value::Array(items) => Some(items),
        Value::Null => None,
        other => {
            warn!(what, kind = json_kind(other), "Expected an array payload; using empty list");
            None
        }
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Server-provided error message from an `{"error": "..."}` body
#[must_use]
pub fn error_message(payload: &Value) -> Option<String> {
    payload
        .get("error")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_owned)
}

/// One consumed-food row in either the listing or the add-entry shape
#[must_use]
pub fn food_entry(raw: &Value) -> FoodEntry {
    FoodEntry {
        id: integer(raw.get("id")),
        food_id: text(field(raw, &["foodId", "food_id"])),
        name: text(field(raw, &["name", "food_name"])).unwrap_or_default(),
        amount: number(field(raw, &["amount", "quantity"])),
        date: text(field(raw, &["date", "entry_date"])),
        calories: number(raw.get("calories")),
        protein: number(raw.get("protein")),
        carbs: number(raw.get("carbs")),
        fat: number(field(raw, &["fat", "fats"])),
    }
}

/// Entry listing; non-array payloads degrade to an empty list
#[must_use]
pub fn food_entries(payload: &Value) -> Vec<FoodEntry> {
    array(payload, "daily entries")
        .map(|items| items.iter().map(food_entry).collect())
        .unwrap_or_default()
}

/// Daily totals; missing or malformed numbers become 0
#[must_use]
pub fn daily_summary(payload: &Value) -> DailyNutritionSummary {
    DailyNutritionSummary {
        total_calories: number(payload.get("total_calories")),
        total_protein: number(payload.get("total_protein")),
        total_carbs: number(payload.get("total_carbs")),
        total_fats: number(payload.get("total_fats")),
        entry_count: u32::try_from(integer(payload.get("entry_count"))).unwrap_or_default(),
    }
}

fn history_record(raw: &Value) -> NutritionHistoryRecord {
    NutritionHistoryRecord {
        date: text(raw.get("date")).unwrap_or_default(),
        totals: daily_summary(raw),
    }
}

/// History rows from either a bare array or a `{ "data": [...] }` envelope
#[must_use]
pub fn history_records(payload: &Value) -> Vec<NutritionHistoryRecord> {
    let rows = match payload {
        Value::Object(map) => match map.get("data") {
            Some(Value::Array(rows)) => Some(rows),
            _ => {
                warn!("Nutrition history object without a data array; using empty list");
                None
            }
        },
        other => array(other, "nutrition history"),
    };
    rows.map(|rows| rows.iter().map(history_record).collect())
        .unwrap_or_default()
}

fn goals_object(raw: &Value) -> UserGoals {
    UserGoals {
        user_id: raw.get("userId").map(|id| integer(Some(id))),
        target_calories: number(raw.get("targetCalories")),
        target_protein: number(raw.get("targetProtein")),
        target_carbs: number(raw.get("targetCarbs")),
        target_fats: number(raw.get("targetFats")),
        target_weight: number(raw.get("targetWeight")),
    }
}

/// `{ "goals": {...} }` envelope; a missing `goals` object is an invalid response
///
/// # Errors
///
/// Returns `InvalidResponse` when the envelope has no `goals` object
pub fn user_goals(payload: &Value) -> AppResult<UserGoals> {
    match payload.get("goals") {
        Some(goals @ Value::Object(_)) => Ok(goals_object(goals)),
        _ => Err(AppError::invalid_response("Invalid goals response")),
    }
}

/// Goals echoed by an update, if the server sent them
#[must_use]
pub fn updated_goals(payload: &Value) -> Option<UserGoals> {
    user_goals(payload).ok()
}

fn client_goals_object(raw: &Value) -> ClientGoals {
    ClientGoals {
        user_id: raw.get("userId").map(|id| integer(Some(id))),
        daily_calorie_goal: number(raw.get("dailyCalorieGoal")),
        protein_goal: number(raw.get("proteinGoal")),
        carbs_goal: number(raw.get("carbsGoal")),
        fats_goal: number(raw.get("fatsGoal")),
        target_weight: number(raw.get("targetWeight")),
        goal_type: text(raw.get("goalType")).unwrap_or_default(),
        activity_level: text(raw.get("activityLevel")).unwrap_or_default(),
    }
}

/// Dietitian view of a client's goals, `{ "goals": {...} }`
///
/// # Errors
///
/// Returns `InvalidResponse` when the envelope has no `goals` object
pub fn client_goals(payload: &Value) -> AppResult<ClientGoals> {
    match payload.get("goals") {
        Some(goals @ Value::Object(_)) => Ok(client_goals_object(goals)),
        _ => Err(AppError::invalid_response("Invalid goals response")),
    }
}

/// A user object
///
/// # Errors
///
/// Returns `InvalidResponse` if `raw` is not a user object
pub fn user_profile(raw: &Value) -> AppResult<UserProfile> {
    if !raw.is_object() {
        return Err(AppError::invalid_response("Invalid user data in response"));
    }
    serde_json::from_value(raw.clone()).map_err(|e| {
        AppError::invalid_response("Invalid user data in response").with_source(e)
    })
}

/// User listing; malformed rows are dropped with a warning
#[must_use]
pub fn users(payload: &Value, what: &str) -> Vec<UserProfile> {
    array(payload, what)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| match user_profile(item) {
                    Ok(user) => Some(user),
                    Err(e) => {
                        warn!(what, error = %e, "Dropping malformed user row");
                        None
                    }
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Client progress
///
/// # Errors
///
/// Returns `InvalidResponse` if the payload is not a progress object
pub fn user_progress(payload: &Value) -> AppResult<UserProgress> {
    if !payload.is_object() {
        return Err(AppError::invalid_response("Invalid progress response"));
    }
    serde_json::from_value(payload.clone())
        .map_err(|e| AppError::invalid_response("Invalid progress response").with_source(e))
}

fn nutrient(raw: &Value, name: &str) -> f64 {
    let value = raw
        .get("foodNutrients")
        .and_then(Value::as_array)
        .and_then(|nutrients| {
            nutrients
                .iter()
                .find(|n| n.get("nutrientName").and_then(Value::as_str) == Some(name))
        })
        .map(|n| number(n.get("value")))
        .unwrap_or_default();
    round2(value.max(0.0))
}

/// One food database hit with its per-100 g macros
#[must_use]
pub fn food_search_result(raw: &Value) -> FoodSearchResult {
    FoodSearchResult {
        id: text(field(raw, &["fdcId", "id"])).unwrap_or_default(),
        name: text(field(raw, &["description", "name"])).unwrap_or_default(),
        nutrients: NutrientsPer100g {
            protein: nutrient(raw, NUTRIENT_PROTEIN),
            carbs: nutrient(raw, NUTRIENT_CARBS),
            fat: nutrient(raw, NUTRIENT_FAT),
        },
    }
}

/// Search page; a malformed payload is an empty last page
#[must_use]
pub fn food_search_page(payload: &Value) -> FoodSearchPage {
    let foods = payload
        .get("foods")
        .and_then(|foods| array(foods, "food search results"))
        .map(|items| items.iter().map(food_search_result).collect())
        .unwrap_or_default();
    FoodSearchPage {
        foods,
        current_page: u32::try_from(integer(payload.get("currentPage"))).unwrap_or_default(),
        total_pages: u32::try_from(integer(payload.get("totalPages"))).unwrap_or_default(),
    }
}
