// ABOUTME: Integration tests for food entries, daily totals, goals and food search
// ABOUTME: Exercises payload normalization and local validation through the API client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use habitbite_client::errors::ErrorCode;
use habitbite_client::models::{NewFoodEntry, UserGoals};
use habitbite_client::nutrition::{new_food_entry, DailyTotals, GoalProgress};
use helpers::{sample_user, TestContext};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
}

fn oats_entry() -> NewFoodEntry {
    NewFoodEntry {
        food_id: Some("173904".to_owned()),
        name: Some("Oats".to_owned()),
        amount: Some(80.0),
        date: Some(day()),
        calories: Some(303.36),
        protein: Some(13.5),
        carbs: Some(53.02),
        fat: Some(5.52),
        fats: None,
    }
}

#[tokio::test]
async fn test_add_then_list_daily_entries() -> Result<()> {
    let ctx = TestContext::start().await?;
    ctx.sign_in(&sample_user())?;
    Mock::given(method("GET"))
        .and(path("/api/auth/csrf"))
        .respond_with(ResponseTemplate::new(200).insert_header("X-CSRF-Token", "t-1"))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/consumed-foods"))
        .and(body_partial_json(json!({
            "foodId": "173904",
            "amount": 80.0,
            "date": "2025-03-12T12:00:00Z"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 55,
            "foodId": "173904",
            "name": "Oats",
            "amount": 80,
            "calories": 303.36,
            "protein": 13.5,
            "carbs": 53.02,
            "fat": 5.52
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/consumed-foods/daily"))
        .and(query_param("date", "2025-03-12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 55,
            "food_id": "173904",
            "food_name": "Oats",
            "quantity": "80",
            "entry_date": "2025-03-12",
            "calories": 303.36,
            "protein": 13.5,
            "carbs": 53.02,
            "fats": 5.52
        }])))
        .mount(&ctx.server)
        .await;

    let added = ctx.client.add_food_entry(oats_entry()).await?;
    let listed = ctx.client.get_daily_entries(day()).await?;

    assert_eq!(added.id, 55);
    assert_eq!(listed.len(), 1);
    let row = &listed[0];
    assert_eq!(row.id, added.id);
    assert_eq!(row.name, "Oats");
    assert!((row.amount - 80.0).abs() < f64::EPSILON, "string quantity parses");
    assert!((row.fat - 5.52).abs() < f64::EPSILON, "fats alias maps to fat");
    assert_eq!(row.food_id.as_deref(), Some("173904"));
    Ok(())
}

#[tokio::test]
async fn test_add_entry_missing_fields_never_hits_server() -> Result<()> {
    let ctx = TestContext::start().await?;
    Mock::given(method("POST"))
        .and(path("/api/consumed-foods"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let draft = NewFoodEntry {
        food_id: Some("1".to_owned()),
        name: Some("Apple".to_owned()),
        ..NewFoodEntry::default()
    };
    let err = ctx
        .client
        .add_food_entry(draft)
        .await
        .expect_err("incomplete draft must be rejected");

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(
        err.message,
        "Missing required fields: amount, date, calories, protein, carbs, fat"
    );
    Ok(())
}

#[tokio::test]
async fn test_add_entry_echoes_request_on_empty_response() -> Result<()> {
    let ctx = TestContext::start().await?;
    ctx.cache_csrf("t-1");
    Mock::given(method("POST"))
        .and(path("/api/consumed-foods"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&ctx.server)
        .await;

    let entry = ctx.client.add_food_entry(oats_entry()).await?;

    assert_eq!(entry.id, 0);
    assert_eq!(entry.name, "Oats");
    assert_eq!(entry.date.as_deref(), Some("2025-03-12T12:00:00Z"));
    Ok(())
}

#[tokio::test]
async fn test_daily_nutrition_defaults_missing_numbers() -> Result<()> {
    let ctx = TestContext::start().await?;
    Mock::given(method("GET"))
        .and(path("/api/consumed-foods/nutrition"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_calories": "1520.5",
            "total_protein": 98,
            "entry_count": 4
        })))
        .mount(&ctx.server)
        .await;

    let summary = ctx.client.get_daily_nutrition(day()).await?;

    assert!((summary.total_calories - 1520.5).abs() < f64::EPSILON);
    assert!((summary.total_protein - 98.0).abs() < f64::EPSILON);
    assert!(summary.total_carbs.abs() < f64::EPSILON);
    assert!(summary.total_fats.abs() < f64::EPSILON);
    assert_eq!(summary.entry_count, 4);
    Ok(())
}

#[tokio::test]
async fn test_goal_progress_from_fetched_totals() -> Result<()> {
    let ctx = TestContext::start().await?;
    Mock::given(method("GET"))
        .and(path("/api/consumed-foods/nutrition"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_calories": 1500,
            "total_protein": 150,
            "total_carbs": 100,
            "total_fats": 30
        })))
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/user/goals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "goals": {
                "targetCalories": 2000,
                "targetProtein": 120,
                "targetCarbs": 250,
                "targetFats": 60
            }
        })))
        .mount(&ctx.server)
        .await;

    let summary = ctx.client.get_daily_nutrition(day()).await?;
    let goals = ctx.client.get_user_goals().await?;
    let progress = GoalProgress::compute(&DailyTotals::from(&summary), &goals, None);

    assert_eq!(progress.calories.percent, 75);
    assert!((progress.calories.remaining - 500.0).abs() < f64::EPSILON);
    assert_eq!(progress.protein.percent, 100, "percent is capped");
    assert!(progress.protein.remaining.abs() < f64::EPSILON);
    assert_eq!(progress.carbs.percent, 40);
    assert_eq!(progress.fats.percent, 50);
    Ok(())
}

#[tokio::test]
async fn test_goals_without_envelope_are_invalid() -> Result<()> {
    let ctx = TestContext::start().await?;
    Mock::given(method("GET"))
        .and(path("/api/user/goals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"targetCalories": 1})))
        .mount(&ctx.server)
        .await;

    let err = ctx
        .client
        .get_user_goals()
        .await
        .expect_err("bare object is not a goals envelope");
    assert_eq!(err.code, ErrorCode::InvalidResponse);
    assert_eq!(err.message, "Invalid goals response");
    Ok(())
}

#[tokio::test]
async fn test_update_goals_falls_back_to_submitted() -> Result<()> {
    let ctx = TestContext::start().await?;
    ctx.cache_csrf("t-1");
    Mock::given(method("PUT"))
        .and(path("/api/user/goals"))
        .and(body_json(json!({
            "userId": 7,
            "targetCalories": 2100,
            "targetProtein": 140.0,
            "targetCarbs": 220.0,
            "targetFats": 70.0,
            "targetWeight": 68.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "saved"})))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let goals = UserGoals {
        user_id: Some(7),
        target_calories: 2100.0,
        target_protein: 140.0,
        target_carbs: 220.0,
        target_fats: 70.0,
        target_weight: 68.0,
    };
    let saved = ctx.client.update_user_goals(&goals).await?;
    assert_eq!(saved, goals);
    Ok(())
}

#[tokio::test]
async fn test_goal_calories_sent_as_whole_number() -> Result<()> {
    let ctx = TestContext::start().await?;
    ctx.cache_csrf("t-1");
    Mock::given(method("PUT"))
        .and(path("/api/user/goals"))
        .and(body_partial_json(json!({"targetCalories": 1850})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "saved"})))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let goals = UserGoals {
        target_calories: 1849.6,
        ..UserGoals::default()
    };
    ctx.client.update_user_goals(&goals).await?;

    let requests = ctx.requests().await;
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body)?;
    assert!(body["targetCalories"].is_i64(), "integer on the wire: {body}");
    Ok(())
}

#[tokio::test]
async fn test_short_search_makes_no_request() -> Result<()> {
    let ctx = TestContext::start().await?;
    Mock::given(method("GET"))
        .and(path("/api/foods/search"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let page = ctx.client.search_foods("  eg ", 1).await?;
    assert!(page.foods.is_empty());
    assert!(!page.has_more());
    Ok(())
}

#[tokio::test]
async fn test_search_normalizes_nutrients_and_logs_portion() -> Result<()> {
    let ctx = TestContext::start().await?;
    Mock::given(method("GET"))
        .and(path("/api/foods/search"))
        .and(query_param("q", "chicken"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "foods": [{
                "fdcId": 171077,
                "description": "Chicken breast, roasted",
                "foodNutrients": [
                    {"nutrientName": "Protein", "value": 31.02},
                    {"nutrientName": "Total lipid (fat)", "value": 3.6},
                    {"nutrientName": "Carbohydrate, by difference", "value": -1}
                ]
            }],
            "currentPage": 1,
            "totalPages": 4
        })))
        .mount(&ctx.server)
        .await;

    let page = ctx.client.search_foods("chicken", 0).await?;

    assert!(page.has_more());
    let food = &page.foods[0];
    assert_eq!(food.id, "171077");
    assert!((food.nutrients.protein - 31.02).abs() < f64::EPSILON);
    assert!(food.nutrients.carbs.abs() < f64::EPSILON, "negative clamps to 0");

    let draft = new_food_entry(food, 150.0, day());
    assert_eq!(draft.protein, Some(46.53));
    assert_eq!(draft.fat, Some(5.4));
    assert_eq!(draft.carbs, Some(0.01), "zero values are floored for logging");
    assert_eq!(draft.calories, Some(234.72));
    Ok(())
}

#[tokio::test]
async fn test_superseded_search_is_discarded() -> Result<()> {
    let ctx = TestContext::start().await?;
    Mock::given(method("GET"))
        .and(path("/api/foods/search"))
        .and(query_param("q", "chick"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(300))
                .set_body_json(json!({"foods": [], "currentPage": 1, "totalPages": 1})),
        )
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/foods/search"))
        .and(query_param("q", "chicken"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"foods": [], "currentPage": 1, "totalPages": 2})),
        )
        .mount(&ctx.server)
        .await;

    let slow = ctx.client.search_foods_latest("chick", 1);
    let fast = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        ctx.client.search_foods_latest("chicken", 1).await
    };
    let (slow, fast) = tokio::join!(slow, fast);

    assert!(slow?.is_none(), "older search must be dropped");
    assert_eq!(fast?.map(|page| page.total_pages), Some(2));
    Ok(())
}

#[tokio::test]
async fn test_unknown_food_is_not_found() -> Result<()> {
    let ctx = TestContext::start().await?;
    Mock::given(method("GET"))
        .and(path("/api/foods/999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&ctx.server)
        .await;

    let err = ctx.client.get_food("999").await.expect_err("404 must fail");
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.status, Some(404));
    Ok(())
}
