// ABOUTME: Output formatting helpers for habitbite-cli
// ABOUTME: Consistent terminal rendering for profiles, entries, progress, weeks and search results

use habitbite_client::api::auth::AuthResponse;
use habitbite_client::api::WeeklyOverview;
use habitbite_client::models::{FoodEntry, FoodSearchPage, UserGoals, UserProfile};
use habitbite_client::nutrition::{GoalProgress, NutrientProgress};

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Signed-in confirmation
pub fn display_signed_in(auth: &AuthResponse) {
    println!(
        "\nSigned in as {} ({})",
        auth.user.display_name(),
        auth.user.role
    );
    if let Some(message) = &auth.message {
        println!("   {message}");
    }
}

/// Profile summary
pub fn display_profile(user: &UserProfile, stale: bool) {
    println!("\n{}", rule());
    println!("User: {}", user.display_name());
    println!("   Email: {}", user.email);
    println!("   Role: {}", user.role);
    if let Some(goal) = user.daily_calorie_goal {
        println!("   Daily calorie goal: {goal:.0} kcal");
    }
    if let Some(goal_type) = &user.goal_type {
        println!("   Goal type: {goal_type}");
    }
    if stale {
        println!("   (offline: showing cached profile)");
    }
    println!("{}", rule());
}

/// Logged entries for a day
pub fn display_entries(entries: &[FoodEntry]) {
    if entries.is_empty() {
        println!("No entries logged.");
        return;
    }
    println!(
        "{:>6}  {:<28} {:>8} {:>8} {:>7} {:>7} {:>7}",
        "ID", "Food", "Grams", "kcal", "P", "C", "F"
    );
    for entry in entries {
        println!(
            "{:>6}  {:<28} {:>8.1} {:>8.1} {:>7.1} {:>7.1} {:>7.1}",
            entry.id,
            truncate(&entry.name, 28),
            entry.amount,
            entry.calories,
            entry.protein,
            entry.carbs,
            entry.fat
        );
    }
}

fn progress_line(label: &str, unit: &str, progress: &NutrientProgress) {
    println!(
        "   {label:<9} {:>8.1} / {:<8.1}{unit:<4} {:>3}%   remaining {:.1}{unit}",
        progress.consumed, progress.goal, progress.percent, progress.remaining
    );
}

/// Goal progress block
pub fn display_progress(progress: &GoalProgress) {
    println!("\nProgress");
    progress_line("Calories", "kcal", &progress.calories);
    progress_line("Protein", "g", &progress.protein);
    progress_line("Carbs", "g", &progress.carbs);
    progress_line("Fats", "g", &progress.fats);
}

/// Goals block
pub fn display_goals(goals: &UserGoals) {
    println!("\nGoals");
    println!("   Calories: {:.0} kcal", goals.target_calories);
    println!("   Protein:  {:.1} g", goals.target_protein);
    println!("   Carbs:    {:.1} g", goals.target_carbs);
    println!("   Fats:     {:.1} g", goals.target_fats);
    if goals.target_weight > 0.0 {
        println!("   Weight:   {:.1} kg", goals.target_weight);
    }
}

/// Weekly series as a table
pub fn display_week(overview: &WeeklyOverview) {
    println!("\n{} ({})", overview.label(), overview.window.caption());
    println!("{}", rule());
    for slot in &overview.series {
        let marker = if slot.is_today { "*" } else { " " };
        println!(
            "{marker}{:<4} {:>8.0} kcal  P {:>6.1}  C {:>6.1}  F {:>6.1}",
            slot.day.to_string(),
            slot.calories,
            slot.protein,
            slot.carbs,
            slot.fats
        );
    }
    println!("{}", rule());
    println!(
        "Axis max: {:.0} kcal / {:.0} g",
        overview.chart_domain.calorie_max, overview.chart_domain.macro_max
    );
    if overview.can_go_next() {
        println!("Newer week available: --offset {}", overview.window.offset() - 1);
    }
}

/// Search results page
pub fn display_search(page: &FoodSearchPage) {
    if page.foods.is_empty() {
        println!("No foods found.");
        return;
    }
    println!("{:>10}  {:<40} {:>7} {:>7} {:>7}", "ID", "Food (per 100 g)", "P", "C", "F");
    for food in &page.foods {
        println!(
            "{:>10}  {:<40} {:>7.2} {:>7.2} {:>7.2}",
            food.id,
            truncate(&food.name, 40),
            food.nutrients.protein,
            food.nutrients.carbs,
            food.nutrients.fat
        );
    }
    if page.has_more() {
        println!(
            "Page {} of {}; use --page {} for more",
            page.current_page,
            page.total_pages,
            page.current_page + 1
        );
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_owned()
    } else {
        let mut short: String = text.chars().take(width.saturating_sub(1)).collect();
        short.push('~');
        short
    }
}
