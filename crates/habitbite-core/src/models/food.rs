// ABOUTME: Food database search models
// ABOUTME: Per-100 g macro profile, search result rows and paged search results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Macro nutrients per 100 g of a food
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NutrientsPer100g {
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

/// One food in a search page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FoodSearchResult {
    /// Food database id
    pub id: String,
    /// Description shown to the user
    pub name: String,
    /// Macro profile used for portion calculation
    pub nutrients: NutrientsPer100g,
}

/// One page of food search results
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FoodSearchPage {
    /// Results on this page
    pub foods: Vec<FoodSearchResult>,
    /// 1-based page number
    pub current_page: u32,
    /// Total pages available
    pub total_pages: u32,
}

impl FoodSearchPage {
    /// Whether another page can be requested
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }
}
