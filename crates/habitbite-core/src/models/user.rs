// ABOUTME: User identity models for the HabitBite client
// ABOUTME: UserProfile, UserRole, Session and the UserFields request body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Account role as reported by the server
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Platform administrator
    Admin,
    /// Dietitian with subscribed clients
    Dietitian,
    /// Standard user; also used for any role string the client does not recognise
    #[default]
    #[serde(other)]
    User,
}

impl UserRole {
    /// Parse a role string, mapping unknown values to `User`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "admin" => Self::Admin,
            "dietitian" => Self::Dietitian,
            _ => Self::User,
        }
    }

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Dietitian => "dietitian",
            Self::User => "user",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User profile as returned by `/auth/profile`, login, and the admin/dietitian listings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Server-assigned id
    #[serde(default)]
    pub id: i64,
    /// Email address
    #[serde(default)]
    pub email: String,
    /// Login name
    #[serde(default)]
    pub username: String,
    /// Display name
    #[serde(default)]
    pub full_name: String,
    /// Account role
    #[serde(default)]
    pub role: UserRole,
    /// `lose`, `gain` or `maintain`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_type: Option<String>,
    /// Activity level used for goal calculation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
    /// Gender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Height in centimetres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Birthdate as sent by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    /// Daily calorie goal stored on the profile
    #[serde(
        default,
        alias = "calorieGoal",
        skip_serializing_if = "Option::is_none",
        serialize_with = "super::kcal::serialize_opt"
    )]
    pub daily_calorie_goal: Option<f64>,
    /// Fields the client does not model (timestamps and the like)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Name to greet the user with
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.full_name.is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }
}

/// Authenticated session held by the client
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// Bearer token; absent means unauthenticated
    pub token: Option<String>,
    /// Cached profile of the signed-in user
    pub user: Option<UserProfile>,
}

impl Session {
    /// A token is the only thing that makes a session authenticated
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Request body for registration and admin user create/update
///
/// Every field is optional so the same type serves partial admin updates; the server
/// enforces which fields registration requires.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserFields {
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Login name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Plain-text password, only sent over the wire
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    /// `male`, `female` or `other`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Height in centimetres
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// `lose`, `gain` or `maintain`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_type: Option<String>,
    /// Activity level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
    /// Daily calorie goal
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "super::kcal::serialize_opt"
    )]
    pub daily_calorie_goal: Option<f64>,
    /// Role (admin endpoints only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}
