// ABOUTME: Constants module with domain-separated organization
// ABOUTME: API paths, header names, persisted keys and nutrition defaults for HabitBite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in one flat list. Paths are relative to
//! the configured API base URL (which already ends in `/api`).

/// REST API paths
pub mod endpoints {
    /// Sign in
    pub const AUTH_LOGIN: &str = "/auth/login";
    /// Create an account
    pub const AUTH_REGISTER: &str = "/auth/register";
    /// End the server session
    pub const AUTH_LOGOUT: &str = "/auth/logout";
    /// Current user's profile
    pub const AUTH_PROFILE: &str = "/auth/profile";
    /// Issue an anti-forgery token
    pub const AUTH_CSRF: &str = "/auth/csrf";
    /// Current user's nutrition goals
    pub const USER_GOALS: &str = "/user/goals";
    /// Consumed food entries collection
    pub const CONSUMED_FOODS: &str = "/consumed-foods";
    /// Entries logged on one day
    pub const CONSUMED_FOODS_DAILY: &str = "/consumed-foods/daily";
    /// Nutrition totals for one day
    pub const CONSUMED_FOODS_NUTRITION: &str = "/consumed-foods/nutrition";
    /// Per-day totals over a date range
    pub const CONSUMED_FOODS_HISTORY: &str = "/consumed-foods/history";
    /// Food database search
    pub const FOODS_SEARCH: &str = "/foods/search";
    /// Food database lookup prefix
    pub const FOODS: &str = "/foods";
    /// Dietitian directory
    pub const DIETITIANS: &str = "/dietitians";
    /// Users subscribed to the signed-in dietitian
    pub const DIETITIAN_USERS: &str = "/dietitian/users";
    /// User administration
    pub const ADMIN_USERS: &str = "/admin/users";

    /// Paths that must never carry an anti-forgery token
    pub const CSRF_EXEMPT: [&str; 2] = [AUTH_LOGIN, AUTH_REGISTER];
}

/// HTTP header names
pub mod headers {
    /// Anti-forgery token header, both directions
    pub const CSRF_TOKEN: &str = "X-CSRF-Token";
    /// Per-request correlation id
    pub const REQUEST_ID: &str = "X-Request-Id";
}

/// Keys used in the persistent client store
pub mod storage_keys {
    /// Bearer token
    pub const TOKEN: &str = "token";
    /// JSON-encoded user profile
    pub const USER: &str = "user";
    /// Cached anti-forgery token
    pub const CSRF_TOKEN: &str = "csrf_token";
    /// Light/dark preference
    pub const THEME: &str = "theme";
}

/// Cookie names set by the server
pub mod cookies {
    /// Anti-forgery cookie; wins over the cached token
    pub const CSRF_TOKEN: &str = "csrf_token";
}

/// Client defaults
pub mod defaults {
    /// API base URL
    pub const API_URL: &str = "http://localhost:8080/api";
    /// Whole-request timeout in seconds
    pub const TIMEOUT_SECS: u64 = 5;
    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 3;
    /// Route the UI treats as the sign-in page
    pub const SIGN_IN_PATH: &str = "/SignIn";
    /// User agent sent with every request
    pub const USER_AGENT: &str = concat!("habitbite-client/", env!("CARGO_PKG_VERSION"));
    /// Food search queries shorter than this are not sent
    pub const MIN_SEARCH_QUERY_LEN: usize = 3;
}

/// Nutrition math constants
pub mod nutrition {
    /// Energy per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Energy per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Energy per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
    /// Calorie goal used when neither goals nor profile provide one
    pub const DEFAULT_CALORIE_GOAL: f64 = 2000.0;
    /// Calorie chart ceiling when there is no data
    pub const DEFAULT_CALORIE_DOMAIN: f64 = 2000.0;
    /// Macro chart ceiling when there is no data
    pub const DEFAULT_MACRO_DOMAIN: f64 = 100.0;
    /// Headroom factor above the largest charted value
    pub const CHART_HEADROOM: f64 = 1.2;
    /// Smallest value accepted by the add-entry endpoint
    pub const MIN_LOGGED_VALUE: f64 = 0.01;
    /// Nutrient names in the food database payload
    pub const NUTRIENT_PROTEIN: &str = "Protein";
    /// Carbohydrate nutrient name
    pub const NUTRIENT_CARBS: &str = "Carbohydrate, by difference";
    /// Fat nutrient name
    pub const NUTRIENT_FAT: &str = "Total lipid (fat)";
}
