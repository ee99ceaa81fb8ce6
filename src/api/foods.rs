// ABOUTME: Food database search and lookup
// ABOUTME: Short queries never leave the client; the tracked variant drops superseded pages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use habitbite_core::constants::{defaults, endpoints};
use habitbite_core::errors::{AppError, AppResult};
use habitbite_core::models::{FoodSearchPage, FoodSearchResult};
use tracing::debug;

use super::{normalize, HabitBiteClient};

const SEARCH_FAILED: &str = "Failed to search foods. Please try again.";
const FOOD_FAILED: &str = "Failed to get food details. Please try again.";

/// Channel used by [`HabitBiteClient::search_foods_latest`]
pub const FOOD_SEARCH_CHANNEL: &str = "food-search";

impl HabitBiteClient {
    /// One page of search results for `query`
    ///
    /// Queries shorter than three characters return an empty page without a request.
    ///
    /// # Errors
    ///
    /// Returns the server/transport error
    pub async fn search_foods(&self, query: &str, page: u32) -> AppResult<FoodSearchPage> {
        let query = query.trim();
        if query.chars().count() < defaults::MIN_SEARCH_QUERY_LEN {
            debug!(len = query.len(), "Food search query too short; skipping request");
            return Ok(FoodSearchPage::default());
        }

        let payload = self
            .get_json(
                endpoints::FOODS_SEARCH,
                &[("q", query.to_owned()), ("page", page.max(1).to_string())],
                SEARCH_FAILED,
            )
            .await?;
        Ok(normalize::food_search_page(&payload))
    }

    /// Search, returning `None` when a newer search started before this one finished
    ///
    /// # Errors
    ///
    /// Returns the server/transport error of a search that is still current
    pub async fn search_foods_latest(
        &self,
        query: &str,
        page: u32,
    ) -> AppResult<Option<FoodSearchPage>> {
        let generation = self.tracker.begin(FOOD_SEARCH_CHANNEL);
        let result = self.search_foods(query, page).await;
        if !self.tracker.is_current(&generation) {
            debug!(generation = generation.value(), "Discarding superseded food search");
            return Ok(None);
        }
        result.map(Some)
    }

    /// Look up one food
    ///
    /// # Errors
    ///
    /// Returns `InvalidResponse` if the payload is not a food object
    pub async fn get_food(&self, id: &str) -> AppResult<FoodSearchResult> {
        let path = format!("{}/{id}", endpoints::FOODS);
        let payload = self.get_json(&path, &[], FOOD_FAILED).await?;
        if !payload.is_object() {
            return Err(AppError::invalid_response("Invalid food response"));
        }
        Ok(normalize::food_search_result(&payload))
    }
}
