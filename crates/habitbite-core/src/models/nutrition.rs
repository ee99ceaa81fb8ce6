// ABOUTME: Nutrition tracking models for logged food and aggregated totals
// ABOUTME: FoodEntry, NewFoodEntry, daily summaries, history records and weekly series slots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// One logged food item in canonical client shape
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FoodEntry {
    /// Server-assigned id
    pub id: i64,
    /// Food database id, when the payload carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_id: Option<String>,
    /// Food name
    pub name: String,
    /// Amount in grams
    pub amount: f64,
    /// Entry date as sent by the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

/// Draft of an entry to log; validated into a [`FoodEntryRequest`] before sending
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewFoodEntry {
    /// Food database id
    pub food_id: Option<String>,
    /// Food name
    pub name: Option<String>,
    /// Amount in grams
    pub amount: Option<f64>,
    /// Day the food was eaten
    pub date: Option<NaiveDate>,
    /// Energy in kcal
    pub calories: Option<f64>,
    /// Protein in grams
    pub protein: Option<f64>,
    /// Carbohydrates in grams
    pub carbs: Option<f64>,
    /// Fat in grams
    pub fat: Option<f64>,
    /// Alternate spelling of `fat`; folded into it during validation
    pub fats: Option<f64>,
}

impl NewFoodEntry {
    /// Check that all eight required fields are present
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming every missing field
    pub fn validate(self) -> AppResult<FoodEntryRequest> {
        let fat = self.fat.or(self.fats);
        let mut missing = Vec::new();
        if self.food_id.is_none() {
            missing.push("foodId");
        }
        if self.name.is_none() {
            missing.push("name");
        }
        if self.amount.is_none() {
            missing.push("amount");
        }
        if self.date.is_none() {
            missing.push("date");
        }
        if self.calories.is_none() {
            missing.push("calories");
        }
        if self.protein.is_none() {
            missing.push("protein");
        }
        if self.carbs.is_none() {
            missing.push("carbs");
        }
        if fat.is_none() {
            missing.push("fat");
        }

        match (
            self.food_id,
            self.name,
            self.amount,
            self.date,
            self.calories,
            self.protein,
            self.carbs,
            fat,
        ) {
            (
                Some(food_id),
                Some(name),
                Some(amount),
                Some(date),
                Some(calories),
                Some(protein),
                Some(carbs),
                Some(fat),
            ) => Ok(FoodEntryRequest {
                food_id,
                name,
                amount,
                date: date.format("%Y-%m-%dT12:00:00Z").to_string(),
                calories,
                protein,
                carbs,
                fat,
            }),
            _ => Err(AppError::invalid_input(format!(
                "Missing required fields: {}",
                missing.join(", ")
            ))),
        }
    }
}

/// Validated body of `POST /consumed-foods`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodEntryRequest {
    /// Food database id
    pub food_id: String,
    /// Food name
    pub name: String,
    /// Amount in grams
    pub amount: f64,
    /// RFC 3339 timestamp at noon UTC of the entry day
    pub date: String,
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

/// Nutrition totals for one day
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DailyNutritionSummary {
    /// Energy in kcal
    #[serde(default)]
    pub total_calories: f64,
    /// Protein in grams
    #[serde(default)]
    pub total_protein: f64,
    /// Carbohydrates in grams
    #[serde(default)]
    pub total_carbs: f64,
    /// Fat in grams
    #[serde(default)]
    pub total_fats: f64,
    /// Number of entries behind these totals
    #[serde(default)]
    pub entry_count: u32,
}

impl DailyNutritionSummary {
    /// True when nothing has been logged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
            && self.total_calories == 0.0
            && self.total_protein == 0.0
            && self.total_carbs == 0.0
            && self.total_fats == 0.0
    }
}

/// One row of `/consumed-foods/history`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionHistoryRecord {
    /// Date exactly as the server sent it (`YYYY-MM-DD` or RFC 3339)
    pub date: String,
    /// Totals for that date
    #[serde(flatten)]
    pub totals: DailyNutritionSummary,
}

/// Day slot in a Sunday-first week
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayOfWeek {
    /// Sunday, slot 0
    Sun,
    /// Monday
    Mon,
    /// Tuesday
    Tue,
    /// Wednesday
    Wed,
    /// Thursday
    Thu,
    /// Friday
    Fri,
    /// Saturday, slot 6
    Sat,
}

impl DayOfWeek {
    /// All days in slot order
    pub const ALL: [Self; 7] = [
        Self::Sun,
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
    ];

    /// Slot index, Sunday = 0
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short label used on chart axes
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        Self::ALL[weekday.num_days_from_sunday() as usize]
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One slot of the weekly chart series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklySeriesEntry {
    /// Day this slot represents
    pub day: DayOfWeek,
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fats: f64,
    /// Slot for the reference date in the current week
    pub is_today: bool,
    /// Entries behind the totals, when known
    pub entries: u32,
}

impl WeeklySeriesEntry {
    /// Zero-valued slot for `day`
    #[must_use]
    pub const fn empty(day: DayOfWeek) -> Self {
        Self {
            day,
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fats: 0.0,
            is_today: false,
            entries: 0,
        }
    }

    /// Overwrite the totals of this slot
    pub fn apply(&mut self, totals: &DailyNutritionSummary) {
        self.calories = totals.total_calories;
        self.protein = totals.total_protein;
        self.carbs = totals.total_carbs;
        self.fats = totals.total_fats;
        self.entries = totals.entry_count;
    }

    /// True when nothing has been written into this slot
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.calories == 0.0 && self.protein == 0.0 && self.carbs == 0.0 && self.fats == 0.0
    }
}
