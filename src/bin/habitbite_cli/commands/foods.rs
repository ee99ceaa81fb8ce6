// ABOUTME: Food search command for habitbite-cli
// ABOUTME: Pages through the food database with per-100 g macros

use anyhow::Result;
use habitbite_client::api::HabitBiteClient;
use habitbite_client::constants::defaults::MIN_SEARCH_QUERY_LEN;

use crate::helpers::display::display_search;

/// Search the food database
pub async fn search(client: &HabitBiteClient, query: &str, page: u32) -> Result<()> {
    if query.trim().chars().count() < MIN_SEARCH_QUERY_LEN {
        println!("Type at least three characters to search.");
        return Ok(());
    }
    let results = client.search_foods(query, page).await?;
    display_search(&results);
    Ok(())
}
