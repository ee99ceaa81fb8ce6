// ABOUTME: Main library entry point for the HabitBite nutrition tracking client
// ABOUTME: Session, CSRF, API gateway and nutrition derivations over the HabitBite REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # HabitBite Client
//!
//! Client library for the HabitBite nutrition tracking service. It holds the signed-in
//! session, talks to the REST API, normalizes what comes back, and derives the views a UI
//! renders (daily goal progress, the seven-day chart series, portion math).
//!
//! ## Architecture
//!
//! - **Session**: bearer token and cached profile in an injectable key/value store
//! - **CSRF**: anti-forgery token acquisition, attachment and invalidation
//! - **API**: one async method per server operation on [`api::HabitBiteClient`]
//! - **Nutrition**: pure derivations over the `habitbite-core` models
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use habitbite_client::api::HabitBiteClient;
//! use habitbite_client::config::ClientConfig;
//! use habitbite_client::errors::AppResult;
//! use habitbite_client::navigation::LoggingNavigator;
//! use habitbite_client::storage::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ClientConfig::from_env()?;
//!     let client = HabitBiteClient::new(&config, MemoryStore::shared(), Arc::new(LoggingNavigator))?;
//!
//!     let auth = client.login("ada@example.com", "secret").await?;
//!     let week = client.load_weekly_series(0).await?;
//!     println!("{} logged {} kcal today", auth.user.display_name(), week.series[0].calories);
//!     Ok(())
//! }
//! ```

/// HabitBite REST API gateway
pub mod api;

/// Environment-driven client configuration
pub mod config;

/// Anti-forgery token handling
pub mod csrf;

/// HTTP client construction
pub mod http_client;

/// Structured logging setup
pub mod logging;

/// Sign-in redirect collaborator
pub mod navigation;

/// Client-side nutrition derivations
pub mod nutrition;

/// Stale-response and duplicate-submission guards
pub mod request_tracker;

/// Persisted session state
pub mod session;

/// Persistent key/value store
pub mod storage;

/// Light/dark preference
pub mod theme;

pub use habitbite_core::{constants, errors, models};
