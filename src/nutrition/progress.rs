// ABOUTME: Daily goal progress, optimistic running totals and chart axis domains
// ABOUTME: Derived views over DailyNutritionSummary, UserGoals and the weekly series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use habitbite_core::constants::nutrition::{
    CHART_HEADROOM, DEFAULT_CALORIE_DOMAIN, DEFAULT_CALORIE_GOAL, DEFAULT_MACRO_DOMAIN,
};
use habitbite_core::models::{
    DailyNutritionSummary, FoodEntry, UserGoals, UserProfile, WeeklySeriesEntry,
};
use serde::Serialize;

use super::portion::round2;

/// Calorie goal to measure against
///
/// Explicit goals win, then the profile's daily goal, then 2000 kcal.
#[must_use]
pub fn effective_calorie_goal(goals: Option<&UserGoals>, profile: Option<&UserProfile>) -> f64 {
    goals
        .map(|g| g.target_calories)
        .filter(|calories| *calories > 0.0)
        .or_else(|| {
            profile
                .and_then(|p| p.daily_calorie_goal)
                .filter(|calories| *calories > 0.0)
        })
        .unwrap_or(DEFAULT_CALORIE_GOAL)
}

/// Progress of one nutrient against its goal
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutrientProgress {
    /// Amount consumed
    pub consumed: f64,
    /// Daily goal
    pub goal: f64,
    /// Amount left, never negative
    pub remaining: f64,
    /// Whole percent of goal reached, capped at 100
    pub percent: u32,
}

impl NutrientProgress {
    /// Compare `consumed` with `goal`; a zero goal counts as 1
    #[must_use]
    pub fn new(consumed: f64, goal: f64) -> Self {
        let divisor = if goal > 0.0 { goal } else { 1.0 };
        let percent = (consumed / divisor * 100.0).round().clamp(0.0, 100.0) as u32;
        Self {
            consumed,
            goal,
            remaining: round2((goal - consumed).max(0.0)),
            percent,
        }
    }

    /// Consumed meets or exceeds the goal
    #[must_use]
    pub const fn is_met(&self) -> bool {
        self.percent >= 100
    }
}

/// Progress of all tracked nutrients for one day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GoalProgress {
    /// Energy
    pub calories: NutrientProgress,
    /// Protein
    pub protein: NutrientProgress,
    /// Carbohydrates
    pub carbs: NutrientProgress,
    /// Fat
    pub fats: NutrientProgress,
}

impl GoalProgress {
    /// Measure `totals` against `goals`, falling back to the profile's calorie goal
    #[must_use]
    pub fn compute(totals: &DailyTotals, goals: &UserGoals, profile: Option<&UserProfile>) -> Self {
        Self {
            calories: NutrientProgress::new(
                totals.calories,
                effective_calorie_goal(Some(goals), profile),
            ),
            protein: NutrientProgress::new(totals.protein, goals.target_protein),
            carbs: NutrientProgress::new(totals.carbs, goals.target_carbs),
            fats: NutrientProgress::new(totals.fats, goals.target_fats),
        }
    }
}

/// Running totals for the day being edited
///
/// Adding or removing an entry updates the totals locally so the view does not wait for a
/// `/consumed-foods/nutrition` round trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DailyTotals {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fats: f64,
}

impl DailyTotals {
    /// Add an entry, rounding to two decimals
    pub fn add_entry(&mut self, entry: &FoodEntry) {
        self.calories = round2(self.calories + entry.calories);
        self.protein = round2(self.protein + entry.protein);
        self.carbs = round2(self.carbs + entry.carbs);
        self.fats = round2(self.fats + entry.fat);
    }

    /// Remove an entry; totals never drop below zero
    pub fn remove_entry(&mut self, entry: &FoodEntry) {
        self.calories = round2((self.calories - entry.calories).max(0.0));
        self.protein = round2((self.protein - entry.protein).max(0.0));
        self.carbs = round2((self.carbs - entry.carbs).max(0.0));
        self.fats = round2((self.fats - entry.fat).max(0.0));
    }
}

impl From<&DailyNutritionSummary> for DailyTotals {
    fn from(summary: &DailyNutritionSummary) -> Self {
        Self {
            calories: summary.total_calories,
            protein: summary.total_protein,
            carbs: summary.total_carbs,
            fats: summary.total_fats,
        }
    }
}

/// Upper bounds of the weekly chart axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartDomain {
    /// Calorie axis maximum
    pub calorie_max: f64,
    /// Shared macro axis maximum
    pub macro_max: f64,
}

impl Default for ChartDomain {
    fn default() -> Self {
        Self {
            calorie_max: DEFAULT_CALORIE_DOMAIN,
            macro_max: DEFAULT_MACRO_DOMAIN,
        }
    }
}

impl ChartDomain {
    /// Fit both axes to `series` with 20% headroom
    #[must_use]
    pub fn from_series(series: &[WeeklySeriesEntry]) -> Self {
        let max_calories = series.iter().map(|s| s.calories).fold(0.0_f64, f64::max);
        let max_macro = series
            .iter()
            .flat_map(|s| [s.protein, s.carbs, s.fats])
            .fold(0.0_f64, f64::max);

        Self {
            calorie_max: scaled_max(max_calories, DEFAULT_CALORIE_DOMAIN),
            macro_max: scaled_max(max_macro, DEFAULT_MACRO_DOMAIN),
        }
    }
}

fn scaled_max(max: f64, fallback: f64) -> f64 {
    if max > 0.0 {
        (max * CHART_HEADROOM).ceil()
    } else {
        fallback
    }
}
