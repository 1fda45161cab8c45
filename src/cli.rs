use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// BrewBuddy: browse a drink menu by mood and nutrition limits, and compare favorites.
#[derive(Parser, Debug)]
#[command(name = "brew-buddy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a drink catalog JSON file. The built-in sample menu is used when omitted or unreadable.
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Path to the session JSON file holding filters and favorites.
    #[arg(short, long, default_value = "brew_session.json")]
    pub session: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List drinks matching the current filters.
    List {
        /// Ignore filters and list the whole catalog.
        #[arg(long)]
        all: bool,
    },

    /// Apply a mood preset (energize, relax, refresh, indulge, warm).
    Mood {
        /// Mood to apply. Prompts when omitted.
        mood: Option<String>,
    },

    /// Toggle a category in or out of the filter.
    Category {
        /// e.g. coffee, tea, coldBrew, "hot chocolate".
        category: String,
    },

    /// Set the search text. Run without text to clear it.
    Search { text: Option<String> },

    /// Choose the serving size used for nutrition (tall, grande, venti).
    Size { size: String },

    /// Set calorie and caffeine ceilings.
    Limits {
        /// Maximum calories (inclusive).
        #[arg(long)]
        calories: Option<f64>,

        /// Maximum caffeine in mg (inclusive).
        #[arg(long)]
        caffeine: Option<f64>,
    },

    /// Reset filters to defaults.
    Reset {
        /// Also clear favorites.
        #[arg(long)]
        favorites: bool,
    },

    /// Add or remove a drink from favorites.
    Favorite {
        /// Drink name or id; close matches are offered.
        drink: String,
    },

    /// Compare favorites by a nutrient.
    Favorites {
        /// calories, caffeine, sugar, fat, or protein.
        #[arg(short, long, default_value = "calories")]
        nutrient: String,
    },

    /// Show details of one drink.
    Show {
        drink: String,

        /// Size to show. Defaults to the session's size.
        #[arg(long)]
        size: Option<String>,
    },

    /// Averages over drinks matching the current filters.
    Stats,

    /// Export drinks matching the current filters to CSV.
    Export {
        path: PathBuf,

        /// Export the whole catalog instead.
        #[arg(long)]
        all: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::List { all: false }
    }
}
