// ABOUTME: Theme commands for habitbite-cli
// ABOUTME: Reads and flips the persisted light/dark preference

use anyhow::Result;
use habitbite_client::storage::SharedStore;
use habitbite_client::theme::ThemeStore;

/// Print the stored preference
pub fn show(store: SharedStore) -> Result<()> {
    println!("Theme: {}", ThemeStore::new(store).load());
    Ok(())
}

/// Switch between light and dark
pub fn toggle(store: SharedStore) -> Result<()> {
    let theme = ThemeStore::new(store).toggle()?;
    println!("Theme set to {theme}.");
    Ok(())
}
