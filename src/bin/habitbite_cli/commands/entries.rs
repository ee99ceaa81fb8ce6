// ABOUTME: Food entry commands for habitbite-cli
// ABOUTME: today, log-food, delete-entry and week

use anyhow::Result;
use chrono::{Local, NaiveDate};
use habitbite_client::api::HabitBiteClient;
use habitbite_client::models::UserGoals;
use habitbite_client::nutrition::{new_food_entry, DailyTotals, GoalProgress, Portion};
use tracing::warn;

use crate::helpers::display::{display_entries, display_progress, display_week};

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Entries and goal progress for one day
pub async fn today(client: &HabitBiteClient, date: Option<NaiveDate>) -> Result<()> {
    let date = date.unwrap_or_else(local_today);
    let entries = client.get_daily_entries(date).await?;
    let summary = client.get_daily_nutrition(date).await?;
    let goals = client.get_user_goals().await.unwrap_or_else(|e| {
        warn!(error = %e, "Could not fetch goals; progress uses defaults");
        UserGoals::default()
    });
    let profile = client.session().user();

    println!("\n{}", date.format("%A %b %-d, %Y"));
    display_entries(&entries);
    let totals = DailyTotals::from(&summary);
    display_progress(&GoalProgress::compute(&totals, &goals, profile.as_ref()));
    Ok(())
}

/// Log `grams` of a database food
pub async fn log_food(
    client: &HabitBiteClient,
    food_id: &str,
    grams: f64,
    date: Option<NaiveDate>,
) -> Result<()> {
    let food = client.get_food(food_id).await?;
    let portion = Portion::from_per_100g(&food.nutrients, grams);
    let draft = new_food_entry(&food, grams, date.unwrap_or_else(local_today));
    let entry = client.add_food_entry(draft).await?;
    println!(
        "Logged {:.1} g of {} ({:.1} kcal, P {:.1} / C {:.1} / F {:.1})",
        portion.grams, entry.name, portion.calories, portion.protein, portion.carbs, portion.fat
    );
    Ok(())
}

/// Remove a logged entry
pub async fn delete(client: &HabitBiteClient, id: i64) -> Result<()> {
    client.delete_food_entry(id).await?;
    println!("Deleted entry {id}.");
    Ok(())
}

/// Seven-day series for a week window
pub async fn week(client: &HabitBiteClient, offset: u32) -> Result<()> {
    let overview = client.load_weekly_series(offset).await?;
    display_week(&overview);
    Ok(())
}
