// ABOUTME: HabitBite CLI - command-line front end for the HabitBite nutrition tracker
// ABOUTME: Sign in, log food, and inspect daily and weekly nutrition from a terminal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Sign in (session is kept in the local store)
//! habitbite-cli login --email ada@example.com --password secret
//!
//! # Today's entries and goal progress
//! habitbite-cli today
//!
//! # Find a food and log 150 g of it
//! habitbite-cli search "chicken breast"
//! habitbite-cli log-food --food-id 171077 --grams 150
//!
//! # Weekly chart data, two weeks back
//! habitbite-cli week --offset 2
//!
//! # Goals
//! habitbite-cli goals show
//! habitbite-cli goals set --calories 2100 --protein 140 --carbs 220 --fats 70
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use habitbite_client::api::HabitBiteClient;
use habitbite_client::config::ClientConfig;
use habitbite_client::navigation::LoggingNavigator;
use habitbite_client::storage::{default_store_path, FileStore, SharedStore};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "habitbite-cli",
    about = "HabitBite nutrition tracker CLI",
    long_about = "Command-line front end for the HabitBite API: sign in, log food and review nutrition."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// API base URL override
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Client store file override
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Sign in and keep the session
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long, env = "HABITBITE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Sign out and forget the session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Entries and goal progress for a day
    Today {
        /// Day to show (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Log a portion of a food from the database
    LogFood {
        /// Food database id (see `search`)
        #[arg(long)]
        food_id: String,

        /// Grams eaten
        #[arg(long)]
        grams: f64,

        /// Day eaten (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Delete a logged entry
    DeleteEntry {
        /// Entry id (see `today`)
        id: i64,
    },

    /// Weekly nutrition series
    Week {
        /// Weeks back from the current week
        #[arg(long, default_value = "0")]
        offset: u32,
    },

    /// Nutrition goals
    Goals {
        #[command(subcommand)]
        action: GoalsCommand,
    },

    /// Search the food database
    Search {
        /// Search text, at least three characters
        query: String,

        /// Result page
        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Light/dark preference
    Theme {
        #[command(subcommand)]
        action: ThemeCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum GoalsCommand {
    /// Print current goals
    Show,

    /// Replace all goals
    Set {
        /// Daily energy target in kcal
        #[arg(long)]
        calories: f64,

        /// Daily protein target in grams
        #[arg(long)]
        protein: f64,

        /// Daily carbohydrate target in grams
        #[arg(long)]
        carbs: f64,

        /// Daily fat target in grams
        #[arg(long)]
        fats: f64,

        /// Target body weight in kilograms
        #[arg(long, default_value = "0")]
        weight: f64,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ThemeCommand {
    /// Print the stored preference
    Show,
    /// Switch between light and dark
    Toggle,
}

fn open_store(cli_path: Option<PathBuf>, config: &ClientConfig) -> Result<SharedStore> {
    let path = match cli_path.or_else(|| config.store_path.clone()) {
        Some(path) => path,
        None => default_store_path()?,
    };
    let store = FileStore::open(path)?;
    debug!(store = %store.path().display(), "Using client store");
    Ok(Arc::new(store))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(url) = cli.api_url.as_deref() {
        config = config.with_api_url(url);
    }
    let logging = if cli.verbose {
        config.logging.clone().verbose()
    } else {
        config.logging.clone()
    };
    logging.init()?;

    let store = open_store(cli.store, &config)?;
    let client = HabitBiteClient::new(&config, Arc::clone(&store), Arc::new(LoggingNavigator))?;

    match cli.command {
        Command::Login { email, password } => {
            commands::session::login(&client, &email, &password).await?;
        }
        Command::Logout => commands::session::logout(&client).await?,
        Command::Whoami => commands::session::whoami(&client).await?,
        Command::Today { date } => commands::entries::today(&client, date).await?,
        Command::LogFood {
            food_id,
            grams,
            date,
        } => commands::entries::log_food(&client, &food_id, grams, date).await?,
        Command::DeleteEntry { id } => commands::entries::delete(&client, id).await?,
        Command::Week { offset } => commands::entries::week(&client, offset).await?,
        Command::Goals { action } => match action {
            GoalsCommand::Show => commands::goals::show(&client).await?,
            GoalsCommand::Set {
                calories,
                protein,
                carbs,
                fats,
                weight,
            } => {
                commands::goals::set(&client, calories, protein, carbs, fats, weight).await?;
            }
        },
        Command::Search { query, page } => commands::foods::search(&client, &query, page).await?,
        Command::Theme { action } => match action {
            ThemeCommand::Show => commands::theme::show(store)?,
            ThemeCommand::Toggle => commands::theme::toggle(store)?,
        },
    }

    Ok(())
}
