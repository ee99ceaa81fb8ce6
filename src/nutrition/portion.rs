// ABOUTME: Scales a food's per-100 g macro profile to a logged portion
// ABOUTME: Two-decimal rounding, Atwater calories and the add-entry draft built from a search hit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use habitbite_core::constants::nutrition::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN, MIN_LOGGED_VALUE,
};
use habitbite_core::models::{FoodSearchResult, NewFoodEntry, NutrientsPer100g};

/// Round to two decimal places
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Macros and energy of one portion
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Portion {
    /// Grams eaten
    pub grams: f64,
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

impl Portion {
    /// Scale `per_100g` to `grams`
    ///
    /// Calories are derived from the rounded macros, not read from the database.
    #[must_use]
    pub fn from_per_100g(per_100g: &NutrientsPer100g, grams: f64) -> Self {
        let grams = grams.max(0.0);
        let protein = round2(per_100g.protein * grams / 100.0);
        let carbs = round2(per_100g.carbs * grams / 100.0);
        let fat = round2(per_100g.fat * grams / 100.0);
        let calories = round2(
            protein.mul_add(
                KCAL_PER_GRAM_PROTEIN,
                carbs.mul_add(KCAL_PER_GRAM_CARBS, fat * KCAL_PER_GRAM_FAT),
            ),
        );
        Self {
            grams: round2(grams),
            calories,
            protein,
            carbs,
            fat,
        }
    }
}

/// Build the add-entry draft for `grams` of `food` eaten on `date`
///
/// The endpoint rejects zero values, so every number is floored at 0.01.
#[must_use]
pub fn new_food_entry(food: &FoodSearchResult, grams: f64, date: NaiveDate) -> NewFoodEntry {
    let portion = Portion::from_per_100g(&food.nutrients, grams);
    NewFoodEntry {
        food_id: Some(food.id.clone()),
        name: Some(food.name.clone()),
        amount: Some(portion.grams.max(MIN_LOGGED_VALUE)),
        date: Some(date),
        calories: Some(portion.calories.max(MIN_LOGGED_VALUE)),
        protein: Some(portion.protein.max(MIN_LOGGED_VALUE)),
        carbs: Some(portion.carbs.max(MIN_LOGGED_VALUE)),
        fat: Some(portion.fat.max(MIN_LOGGED_VALUE)),
        fats: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chicken() -> FoodSearchResult {
        FoodSearchResult {
            id: "171077".to_owned(),
            name: "Chicken, breast, roasted".to_owned(),
            nutrients: NutrientsPer100g {
                protein: 31.02,
                carbs: 0.0,
                fat: 3.6,
            },
        }
    }

    #[test]
    fn test_round2() {
        assert!((round2(1.005_1) - 1.01).abs() < 1e-9);
        assert!((round2(2.0 / 3.0) - 0.67).abs() < 1e-9);
    }

    #[test]
    fn test_portion_scales_and_derives_calories() {
        let portion = Portion::from_per_100g(&chicken().nutrients, 150.0);
        assert!((portion.protein - 46.53).abs() < 1e-9);
        assert!((portion.fat - 5.4).abs() < 1e-9);
        assert!(portion.carbs.abs() < 1e-9);
        // 46.53 * 4 + 5.4 * 9
        assert!((portion.calories - 234.72).abs() < 1e-9);
    }

    #[test]
    fn test_draft_floors_zero_values() -> Result<(), Box<dyn std::error::Error>> {
        let date = NaiveDate::from_ymd_opt(2025, 3, 12).ok_or("invalid date")?;
        let draft = new_food_entry(&chicken(), 100.0, date);
        assert_eq!(draft.carbs, Some(MIN_LOGGED_VALUE));
        assert_eq!(draft.food_id.as_deref(), Some("171077"));
        assert!(draft.validate().is_ok(), "draft from a search hit must be complete");
        Ok(())
    }

    #[test]
    fn test_negative_grams_treated_as_zero() {
        let portion = Portion::from_per_100g(&chicken().nutrients, -20.0);
        assert_eq!(portion, Portion::default());
    }
}
