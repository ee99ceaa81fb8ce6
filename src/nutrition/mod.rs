// ABOUTME: Client-side nutrition derivations computed from API data
// ABOUTME: Portion scaling, goal progress, chart domains, week windows and weekly aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition
//!
//! Pure functions over the `habitbite-core` models. Nothing here touches the network or the
//! store; the API layer feeds these with server data and hands the results to the caller.

/// Per-100 g to portion scaling
pub mod portion;
/// Goal progress, running totals and chart axis domains
pub mod progress;
/// Week-offset date ranges
pub mod week_window;
/// Seven-slot weekly series
pub mod weekly;

pub use portion::{new_food_entry, round2, Portion};
pub use progress::{effective_calorie_goal, ChartDomain, DailyTotals, GoalProgress, NutrientProgress};
pub use week_window::{DateRange, WeekWindow};
pub use weekly::{aggregate_week, empty_week, parse_record_date};
