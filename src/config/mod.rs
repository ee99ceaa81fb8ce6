// ABOUTME: Configuration management module for the HabitBite client
// ABOUTME: Re-exports the environment-driven ClientConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Configuration comes from environment variables only; there is no config file.

/// Environment-driven client configuration
pub mod environment;

pub use environment::ClientConfig;
