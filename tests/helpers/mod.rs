// ABOUTME: Shared test helpers for HabitBite client integration tests
// ABOUTME: Builds a client against a wiremock server with an in-memory store and tracked navigator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use habitbite_client::api::HabitBiteClient;
use habitbite_client::config::ClientConfig;
use habitbite_client::constants::storage_keys;
use habitbite_client::models::{UserProfile, UserRole};
use habitbite_client::navigation::PathNavigator;
use habitbite_client::storage::{KeyValueStore, MemoryStore, SharedStore};
use serde_json::{json, Value};
use wiremock::{MockServer, Request};

/// Client wired to a mock API
pub struct TestContext {
    pub server: MockServer,
    pub client: HabitBiteClient,
    pub store: SharedStore,
    pub navigator: Arc<PathNavigator>,
}

impl TestContext {
    /// Start a mock server; the UI is parked on `/dashboard`
    pub async fn start() -> Result<Self> {
        Self::start_at("/dashboard").await
    }

    /// Start a mock server with the UI on `path`
    pub async fn start_at(path: &str) -> Result<Self> {
        let server = MockServer::start().await;
        let config = ClientConfig::default().with_api_url(&format!("{}/api", server.uri()));
        let store = MemoryStore::shared();
        let navigator = Arc::new(PathNavigator::new("/SignIn", path));
        let client = HabitBiteClient::new(&config, Arc::clone(&store), navigator.clone())?;
        Ok(Self {
            server,
            client,
            store,
            navigator,
        })
    }

    /// Seed a signed-in session without going through login
    pub fn sign_in(&self, user: &UserProfile) -> Result<()> {
        self.client.session().set_session(user, "tok-123")?;
        Ok(())
    }

    /// Seed a cached CSRF token
    pub fn cache_csrf(&self, token: &str) {
        self.client.csrf().set_token(token);
    }

    /// Requests the mock server has seen so far
    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Raw store value
    pub fn stored(&self, key: &str) -> Option<String> {
        self.store.get(key).ok().flatten()
    }

    /// Whether the store still holds a bearer token
    pub fn has_token(&self) -> bool {
        self.stored(storage_keys::TOKEN).is_some()
    }
}

/// A plain user profile
pub fn sample_user() -> UserProfile {
    UserProfile {
        id: 7,
        email: "ada@example.com".to_owned(),
        username: "ada".to_owned(),
        full_name: "Ada Lovelace".to_owned(),
        role: UserRole::User,
        daily_calorie_goal: Some(2200.0),
        ..UserProfile::default()
    }
}

/// Wire form of [`sample_user`]
pub fn sample_user_json() -> Value {
    json!({
        "id": 7,
        "email": "ada@example.com",
        "username": "ada",
        "fullName": "Ada Lovelace",
        "role": "user",
        "dailyCalorieGoal": 2200
    })
}

/// Value of `name` on a captured request
pub fn header_value(request: &Request, name: &str) -> Option<String> {
    request
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}
