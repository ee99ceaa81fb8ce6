// ABOUTME: Tests for session, CSRF and theme state persisted in the file-backed client store
// ABOUTME: Simulates process restarts by reopening the same store file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;

use anyhow::Result;
use habitbite_client::csrf::CsrfGuard;
use habitbite_client::models::{UserProfile, UserRole};
use habitbite_client::navigation::LoggingNavigator;
use habitbite_client::session::SessionManager;
use habitbite_client::storage::{FileStore, SharedStore};
use habitbite_client::theme::{ThemePreference, ThemeStore};
use tempfile::TempDir;

fn open(dir: &TempDir) -> Result<SharedStore> {
    Ok(Arc::new(FileStore::open(dir.path().join("store.json"))?))
}

#[test]
fn test_session_survives_restart() -> Result<()> {
    let dir = TempDir::new()?;
    let user = UserProfile {
        id: 9,
        email: "sam@example.com".to_owned(),
        role: UserRole::Admin,
        ..UserProfile::default()
    };

    {
        let session = SessionManager::new(open(&dir)?, Arc::new(LoggingNavigator));
        session.set_session(&user, "tok-9")?;
        CsrfGuard::new(open(&dir)?).set_token("csrf-9");
    }

    let store = open(&dir)?;
    let session = SessionManager::new(Arc::clone(&store), Arc::new(LoggingNavigator));
    assert_eq!(session.token().as_deref(), Some("tok-9"));
    assert_eq!(session.role(), Some(UserRole::Admin));
    assert_eq!(CsrfGuard::new(store).token().as_deref(), Some("csrf-9"));
    Ok(())
}

#[test]
fn test_cleared_session_stays_cleared() -> Result<()> {
    let dir = TempDir::new()?;
    {
        let session = SessionManager::new(open(&dir)?, Arc::new(LoggingNavigator));
        session.set_session(&UserProfile::default(), "tok")?;
        session.clear_session()?;
    }

    let session = SessionManager::new(open(&dir)?, Arc::new(LoggingNavigator));
    assert!(!session.is_authenticated());
    assert!(session.session().user.is_none());
    Ok(())
}

#[test]
fn test_theme_toggle_persists() -> Result<()> {
    let dir = TempDir::new()?;
    assert_eq!(ThemeStore::new(open(&dir)?).toggle()?, ThemePreference::Dark);
    assert_eq!(ThemeStore::new(open(&dir)?).load(), ThemePreference::Dark);
    Ok(())
}
