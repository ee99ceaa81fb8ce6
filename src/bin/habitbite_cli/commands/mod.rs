// ABOUTME: Command modules for habitbite-cli
// ABOUTME: Session, food entry, goals, food search and theme commands

pub mod entries;
pub mod foods;
pub mod goals;
pub mod session;
pub mod theme;
