// ABOUTME: Session commands for habitbite-cli
// ABOUTME: login, logout and whoami backed by the persisted client store

use anyhow::Result;
use habitbite_client::api::HabitBiteClient;
use habitbite_client::session::RestoreOutcome;
use tracing::info;

use crate::helpers::display::{display_profile, display_signed_in};

/// Sign in and persist the session
pub async fn login(client: &HabitBiteClient, email: &str, password: &str) -> Result<()> {
    if !client.fetch_csrf_token().await {
        info!("No CSRF token issued before sign-in; continuing");
    }
    let auth = client.login(email, password).await?;
    display_signed_in(&auth);
    Ok(())
}

/// Sign out; the local session is gone even if the server call fails
pub async fn logout(client: &HabitBiteClient) -> Result<()> {
    client.logout().await?;
    println!("Signed out.");
    Ok(())
}

/// Show the signed-in user, refreshing the profile when the API is reachable
pub async fn whoami(client: &HabitBiteClient) -> Result<()> {
    match client.restore_session().await {
        RestoreOutcome::Unauthenticated => println!("Not signed in."),
        RestoreOutcome::Restored {
            user: Some(user),
            stale,
        } => display_profile(&user, stale),
        RestoreOutcome::Restored { user: None, .. } => {
            println!("Signed in, but no profile is cached and the API is unreachable.");
        }
    }
    Ok(())
}
