// ABOUTME: Navigation collaborator receiving sign-in redirects from the session layer
// ABOUTME: Navigator trait plus a path-tracking implementation and a logging one for the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{info, warn};

/// Receiver of "go to sign-in" side effects
pub trait Navigator: Send + Sync {
    /// Whether the UI is already showing the sign-in route
    fn is_on_sign_in(&self) -> bool;

    /// Send the user to the sign-in route
    fn redirect_to_sign_in(&self);
}

/// Shared navigator handle
pub type SharedNavigator = Arc<dyn Navigator>;

/// Navigator that tracks the current route as a string
///
/// Mirrors a browser location: the sign-in check is a substring match on the current path,
/// and a redirect replaces the path with the sign-in route.
#[derive(Debug)]
pub struct PathNavigator {
    sign_in_path: String,
    current: Mutex<String>,
    redirects: AtomicU32,
}

impl PathNavigator {
    /// Start at `initial_path`
    pub fn new(sign_in_path: impl Into<String>, initial_path: impl Into<String>) -> Self {
        Self {
            sign_in_path: sign_in_path.into(),
            current: Mutex::new(initial_path.into()),
            redirects: AtomicU32::new(0),
        }
    }

    /// Current route
    #[must_use]
    pub fn current_path(&self) -> String {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Move to another route
    pub fn navigate(&self, path: impl Into<String>) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = path.into();
    }

    /// Number of sign-in redirects issued so far
    #[must_use]
    pub fn redirect_count(&self) -> u32 {
        self.redirects.load(Ordering::Relaxed)
    }
}

impl Navigator for PathNavigator {
    fn is_on_sign_in(&self) -> bool {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&self.sign_in_path)
    }

    fn redirect_to_sign_in(&self) {
        self.redirects.fetch_add(1, Ordering::Relaxed);
        self.navigate(self.sign_in_path.clone());
        info!(route = %self.sign_in_path, "Redirected to sign-in");
    }
}

/// Navigator for headless front ends: a redirect becomes a warning telling the user to log in
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn is_on_sign_in(&self) -> bool {
        false
    }

    fn redirect_to_sign_in(&self) {
        warn!("Session expired or invalid; run `habitbite-cli login` to sign in again");
    }
}
