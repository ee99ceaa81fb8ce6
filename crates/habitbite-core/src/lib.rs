// ABOUTME: Core types and constants for the HabitBite nutrition tracking client
// ABOUTME: Foundation crate with error handling, domain models, and API constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # HabitBite Core
//!
//! Foundation crate providing the shared types used by the HabitBite client. It has no
//! network or storage dependencies so models and errors can be reused by any front end
//! (CLI, tests, benches) without pulling in the HTTP stack.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: API paths, header names, storage keys and defaults
//! - **models**: Canonical client-side records (users, food entries, goals, weekly series)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Canonical client-side data models
pub mod models;
