// ABOUTME: Core data models for the HabitBite client
// ABOUTME: Re-exports user, nutrition, goal, dietitian and food database records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Canonical client-side records. The server is inconsistent about field names
//! (`food_name` vs `name`, `fat` vs `fats`, column arrays vs record lists); these types hold
//! exactly one spelling each, and the HTTP layer is responsible for mapping payloads into
//! them.
//!
//! ## Core Models
//!
//! - `UserProfile`: Authenticated user, dietitian client, or admin-managed account
//! - `FoodEntry`: One logged food item
//! - `DailyNutritionSummary`: Per-day totals
//! - `WeeklySeriesEntry`: One slot of the Sunday-to-Saturday chart series
//! - `UserGoals`: Calorie and macro targets

mod dietitian;
mod food;
mod goals;
mod kcal;
mod nutrition;
mod user;

// User domain
pub use user::{Session, UserFields, UserProfile, UserRole};

// Nutrition domain
pub use nutrition::{
    DailyNutritionSummary, DayOfWeek, FoodEntry, FoodEntryRequest, NewFoodEntry,
    NutritionHistoryRecord, WeeklySeriesEntry,
};

// Goals domain
pub use goals::{ClientGoals, UserGoals};

// Dietitian domain
pub use dietitian::{
    AdminUser, Dietitian, NutritionHistoryColumns, ProgressUserDetails, SubscribedUser,
    UserProgress,
};

// Food database
pub use food::{FoodSearchPage, FoodSearchResult, NutrientsPer100g};
