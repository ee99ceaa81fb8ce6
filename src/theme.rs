// ABOUTME: Persisted light/dark theme preference
// ABOUTME: Reads and writes the `theme` key of the client store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use habitbite_core::constants::storage_keys;
use habitbite_core::errors::AppResult;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::storage::SharedStore;

/// UI color scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Light background
    #[default]
    Light,
    /// Dark background
    Dark,
}

impl ThemePreference {
    /// Stored representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme preference persisted in the client store
#[derive(Clone)]
pub struct ThemeStore {
    store: SharedStore,
}

impl ThemeStore {
    /// Create a theme store over `store`
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Stored preference; anything other than `dark` reads as light
    #[must_use]
    pub fn load(&self) -> ThemePreference {
        match self.store.get(storage_keys::THEME) {
            Ok(Some(value)) if value == "dark" => ThemePreference::Dark,
            Ok(_) => ThemePreference::Light,
            Err(e) => {
                warn!(error = %e, "Failed to read theme preference");
                ThemePreference::Light
            }
        }
    }

    /// Persist `theme`
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written
    pub fn save(&self, theme: ThemePreference) -> AppResult<()> {
        self.store.set(storage_keys::THEME, theme.as_str())
    }

    /// Flip and persist the preference, returning the new value
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written
    pub fn toggle(&self) -> AppResult<ThemePreference> {
        let next = self.load().toggled();
        self.save(next)?;
        Ok(next)
    }
}
