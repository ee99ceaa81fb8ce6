// ABOUTME: Goal commands for habitbite-cli
// ABOUTME: Show and replace the signed-in user's daily targets

use anyhow::Result;
use habitbite_client::api::HabitBiteClient;
use habitbite_client::models::UserGoals;

use crate::helpers::display::display_goals;

/// Print current goals
pub async fn show(client: &HabitBiteClient) -> Result<()> {
    let goals = client.get_user_goals().await?;
    display_goals(&goals);
    Ok(())
}

/// Replace all goals
pub async fn set(
    client: &HabitBiteClient,
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
    weight: f64,
) -> Result<()> {
    let goals = UserGoals {
        user_id: client.session().user().map(|user| user.id),
        target_calories: calories,
        target_protein: protein,
        target_carbs: carbs,
        target_fats: fats,
        target_weight: weight,
    };
    let saved = client.update_user_goals(&goals).await?;
    println!("Goals updated.");
    display_goals(&saved);
    Ok(())
}
