// ABOUTME: Integration tests for sign-in, registration, logout and session restore
// ABOUTME: Covers session persistence, invalid payloads and 401 teardown with redirect
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use habitbite_client::constants::storage_keys;
use habitbite_client::errors::ErrorCode;
use habitbite_client::models::{UserFields, UserRole};
use habitbite_client::session::RestoreOutcome;
use helpers::{header_value, sample_user, sample_user_json, TestContext};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_login_persists_session() -> Result<()> {
    let ctx = TestContext::start().await?;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "ada@example.com", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok-abc",
            "user": sample_user_json(),
            "message": "Welcome back"
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let auth = ctx.client.login("ada@example.com", "secret").await?;

    assert_eq!(auth.user.id, 7);
    assert_eq!(auth.token.as_deref(), Some("tok-abc"));
    assert_eq!(auth.message.as_deref(), Some("Welcome back"));
    assert_eq!(ctx.client.session().token().as_deref(), Some("tok-abc"));
    assert_eq!(
        ctx.client.session().user().map(|u| u.full_name),
        Some("Ada Lovelace".to_owned()),
        "cached profile should match the login payload"
    );
    Ok(())
}

#[tokio::test]
async fn test_login_never_sends_csrf_header() -> Result<()> {
    let ctx = TestContext::start().await?;
    ctx.cache_csrf("cached-token");
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok-abc",
            "user": sample_user_json()
        })))
        .mount(&ctx.server)
        .await;

    ctx.client.login("ada@example.com", "secret").await?;

    let requests = ctx.requests().await;
    assert_eq!(requests.len(), 1);
    assert!(
        header_value(&requests[0], "x-csrf-token").is_none(),
        "sign-in is exempt from the anti-forgery header"
    );
    assert!(header_value(&requests[0], "x-request-id").is_some());
    Ok(())
}

#[tokio::test]
async fn test_login_without_token_leaves_session_untouched() -> Result<()> {
    let ctx = TestContext::start().await?;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": sample_user_json()
        })))
        .mount(&ctx.server)
        .await;

    let err = ctx
        .client
        .login("ada@example.com", "secret")
        .await
        .expect_err("login without token must fail");

    assert_eq!(err.code, ErrorCode::InvalidResponse);
    assert_eq!(err.message, "Invalid response from server");
    assert!(!ctx.has_token(), "no token may be stored");
    assert!(ctx.stored(storage_keys::USER).is_none());
    Ok(())
}

#[tokio::test]
async fn test_login_failure_prefers_server_message() -> Result<()> {
    let ctx = TestContext::start().await?;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Email not verified"})),
        )
        .mount(&ctx.server)
        .await;

    let err = ctx
        .client
        .login("ada@example.com", "secret")
        .await
        .expect_err("400 must fail");
    assert_eq!(err.message, "Email not verified");
    assert_eq!(err.status, Some(400));
    assert!(err.request_id.is_some(), "errors carry the request id");
    Ok(())
}

#[tokio::test]
async fn test_login_failure_without_body_uses_fallback() -> Result<()> {
    let ctx = TestContext::start().await?;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&ctx.server)
        .await;

    let err = ctx
        .client
        .login("ada@example.com", "secret")
        .await
        .expect_err("500 must fail");
    assert_eq!(
        err.message,
        "Failed to sign in. Please check your credentials."
    );
    assert_eq!(err.code, ErrorCode::ServerError);
    Ok(())
}

#[tokio::test]
async fn test_unauthorized_clears_session_and_redirects() -> Result<()> {
    let ctx = TestContext::start().await?;
    ctx.sign_in(&sample_user())?;
    Mock::given(method("GET"))
        .and(path("/api/consumed-foods/daily"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Token expired"})),
        )
        .mount(&ctx.server)
        .await;

    let date = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
    let err = ctx
        .client
        .get_daily_entries(date)
        .await
        .expect_err("401 must fail");

    assert_eq!(err.code, ErrorCode::AuthRequired);
    assert_eq!(err.message, "Token expired");
    assert!(!ctx.has_token());
    assert!(ctx.client.session().user().is_none());
    assert_eq!(ctx.navigator.redirect_count(), 1);
    assert_eq!(ctx.navigator.current_path(), "/SignIn");
    Ok(())
}

#[tokio::test]
async fn test_unauthorized_on_sign_in_route_does_not_redirect() -> Result<()> {
    let ctx = TestContext::start_at("/SignIn").await?;
    ctx.sign_in(&sample_user())?;
    Mock::given(method("GET"))
        .and(path("/api/user/goals"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&ctx.server)
        .await;

    let _ = ctx.client.get_user_goals().await;

    assert!(!ctx.has_token());
    assert_eq!(ctx.navigator.redirect_count(), 0, "no redirect loop");
    Ok(())
}

#[tokio::test]
async fn test_bearer_token_attached_when_signed_in() -> Result<()> {
    let ctx = TestContext::start().await?;
    ctx.sign_in(&sample_user())?;
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"user": sample_user_json()})),
        )
        .mount(&ctx.server)
        .await;

    ctx.client.get_profile().await?;

    let requests = ctx.requests().await;
    assert_eq!(
        header_value(&requests[0], "authorization").as_deref(),
        Some("Bearer tok-123")
    );
    Ok(())
}

#[tokio::test]
async fn test_logout_clears_session_even_when_server_fails() -> Result<()> {
    let ctx = TestContext::start().await?;
    ctx.sign_in(&sample_user())?;
    ctx.cache_csrf("csrf-1");
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&ctx.server)
        .await;

    let result = ctx.client.logout().await;

    assert!(result.is_err());
    assert!(!ctx.has_token());
    assert!(ctx.stored(storage_keys::USER).is_none());
    Ok(())
}

#[tokio::test]
async fn test_register_with_bare_user_payload() -> Result<()> {
    let ctx = TestContext::start().await?;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({
            "email": "kim@example.com",
            "password": "hunter22",
            "dailyCalorieGoal": 2000
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 12,
            "email": "kim@example.com",
            "role": "dietitian"
        })))
        .mount(&ctx.server)
        .await;

    let fields = UserFields {
        email: Some("kim@example.com".to_owned()),
        password: Some("hunter22".to_owned()),
        daily_calorie_goal: Some(2000.0),
        ..UserFields::default()
    };
    let auth = ctx.client.register(&fields).await?;

    assert_eq!(auth.user.id, 12);
    assert_eq!(auth.user.role, UserRole::Dietitian);
    assert!(auth.token.is_none());
    assert!(!ctx.has_token(), "no token was issued");
    assert!(
        ctx.stored(storage_keys::USER).is_some(),
        "the returned user is still cached"
    );
    Ok(())
}

#[tokio::test]
async fn test_register_without_user_data_fails() -> Result<()> {
    let ctx = TestContext::start().await?;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .mount(&ctx.server)
        .await;

    let err = ctx
        .client
        .register(&UserFields::default())
        .await
        .expect_err("payload without user must fail");
    assert_eq!(err.code, ErrorCode::InvalidResponse);
    assert_eq!(
        err.message,
        "Invalid response from server: missing token or user data"
    );
    Ok(())
}

#[tokio::test]
async fn test_restore_keeps_cached_profile_when_api_down() -> Result<()> {
    let ctx = TestContext::start().await?;
    ctx.sign_in(&sample_user())?;
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&ctx.server)
        .await;

    let outcome = ctx.client.restore_session().await;

    assert_eq!(
        outcome,
        RestoreOutcome::Restored {
            user: Some(sample_user()),
            stale: true
        }
    );
    assert!(ctx.has_token());
    Ok(())
}

#[tokio::test]
async fn test_restore_refreshes_profile() -> Result<()> {
    let ctx = TestContext::start().await?;
    ctx.sign_in(&sample_user())?;
    let mut refreshed = sample_user_json();
    refreshed["fullName"] = json!("Ada King");
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": refreshed})))
        .mount(&ctx.server)
        .await;

    let RestoreOutcome::Restored { user, stale } = ctx.client.restore_session().await else {
        panic!("session should be restored");
    };
    assert!(!stale);
    assert_eq!(user.map(|u| u.full_name), Some("Ada King".to_owned()));
    assert_eq!(
        ctx.client.session().user().map(|u| u.full_name),
        Some("Ada King".to_owned()),
        "refreshed profile is cached"
    );
    Ok(())
}

#[tokio::test]
async fn test_restore_without_token_makes_no_request() -> Result<()> {
    let ctx = TestContext::start().await?;
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.server)
        .await;

    assert_eq!(
        ctx.client.restore_session().await,
        RestoreOutcome::Unauthenticated
    );
    Ok(())
}
