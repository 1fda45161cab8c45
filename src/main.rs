use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use brew_buddy_rs::catalog::constants::{CAFFEINE_RANGE, CALORIES_RANGE};
use brew_buddy_rs::catalog::CatalogFilterEngine;
use brew_buddy_rs::cli::{Cli, Command};
use brew_buddy_rs::error::Result;
use brew_buddy_rs::interface::{
    display_comparison, display_criteria, display_drink_detail, display_drink_list,
    display_stats, prompt_drink, prompt_mood, prompt_yes_no, write_drinks_csv,
};
use brew_buddy_rs::models::{Drink, DrinkCategory, DrinkMood, DrinkSize, NutrientKind};
use brew_buddy_rs::state::{load_catalog_or_sample, load_session, save_session, CatalogStore};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let (drinks, origin) = load_catalog_or_sample(cli.catalog.as_deref());
    let store = CatalogStore::with_origin(drinks, origin);
    let mut engine = load_session(&cli.session)?;
    let session = cli.session.as_path();

    match command {
        Command::List { all } => cmd_list(&store, &engine, all),
        Command::Mood { mood } => cmd_mood(&store, &mut engine, session, mood),
        Command::Category { category } => {
            let category: DrinkCategory = category.parse()?;
            engine.toggle_category(category);
            let state = if engine.criteria().selected_categories.contains(&category) {
                "included"
            } else {
                "excluded"
            };
            println!("{} {}.", category.label(), state);
            save_and_list(&store, &engine, session)
        }
        Command::Search { text } => {
            engine.set_search_text(text.as_deref().unwrap_or("").trim());
            save_and_list(&store, &engine, session)
        }
        Command::Size { size } => {
            engine.set_selected_size(size.parse()?);
            save_and_list(&store, &engine, session)
        }
        Command::Limits { calories, caffeine } => {
            if let Some(value) = calories {
                engine.set_calories_threshold(value)?;
                note_outside_range("calories", value, CALORIES_RANGE);
            }
            if let Some(value) = caffeine {
                engine.set_caffeine_threshold(value)?;
                note_outside_range("caffeine", value, CAFFEINE_RANGE);
            }
            save_and_list(&store, &engine, session)
        }
        Command::Reset { favorites } => cmd_reset(&store, &mut engine, session, favorites),
        Command::Favorite { drink } => cmd_favorite(&store, &mut engine, session, &drink),
        Command::Favorites { nutrient } => cmd_favorites(&store, &mut engine, session, &nutrient),
        Command::Show { drink, size } => cmd_show(&store, &engine, &drink, size.as_deref()),
        Command::Stats => cmd_stats(&store, &engine),
        Command::Export { path, all } => cmd_export(&store, &engine, &path, all),
    }
}

fn note_outside_range(name: &str, value: f64, (low, high): (f64, f64)) {
    if !(low..=high).contains(&value) {
        println!(
            "Note: {} limit {:.0} is outside the usual {:.0}-{:.0} range.",
            name, value, low, high
        );
    }
}

fn visible_drinks<'a>(store: &'a CatalogStore, engine: &CatalogFilterEngine, all: bool) -> Vec<&'a Drink> {
    if all {
        store.all().iter().collect()
    } else {
        engine.filtered_drinks(store.all())
    }
}

fn save_and_list(store: &CatalogStore, engine: &CatalogFilterEngine, session: &Path) -> Result<()> {
    save_session(session, engine)?;
    cmd_list(store, engine, false)
}

/// List drinks matching the current filters, or the whole catalog.
fn cmd_list(store: &CatalogStore, engine: &CatalogFilterEngine, all: bool) -> Result<()> {
    if store.is_empty() {
        println!("The catalog is empty.");
        return Ok(());
    }

    let drinks = visible_drinks(store, engine, all);
    if all {
        display_drink_list(&drinks, engine, "Menu");
    } else {
        display_criteria(engine.criteria());
        display_drink_list(&drinks, engine, "Matching drinks");
    }

    Ok(())
}

/// Apply a mood preset, prompting for one when not given.
fn cmd_mood(
    store: &CatalogStore,
    engine: &mut CatalogFilterEngine,
    session: &Path,
    mood: Option<String>,
) -> Result<()> {
    let mood: DrinkMood = match mood {
        Some(name) => name.parse()?,
        None => prompt_mood()?,
    };

    engine.apply_mood_filter(mood);
    println!("Mood set: {} ({}).", mood, mood.blurb());
    save_and_list(store, engine, session)
}

/// Reset filters, optionally clearing favorites after confirmation.
fn cmd_reset(
    store: &CatalogStore,
    engine: &mut CatalogFilterEngine,
    session: &Path,
    favorites: bool,
) -> Result<()> {
    engine.reset_filters();
    println!("Filters reset.");

    if favorites && !engine.favorites().is_empty() {
        let prompt = format!("Remove all {} favorites?", engine.favorites().len());
        if prompt_yes_no(&prompt, false)? {
            engine.clear_favorites();
            println!("Favorites cleared.");
        }
    }

    save_and_list(store, engine, session)
}

/// Toggle a drink in the favorites.
fn cmd_favorite(
    store: &CatalogStore,
    engine: &mut CatalogFilterEngine,
    session: &Path,
    query: &str,
) -> Result<()> {
    let drink = prompt_drink(store, query)?;

    if engine.toggle_favorite(&drink.id) {
        println!("Added {} to favorites.", drink.name);
    } else {
        println!("Removed {} from favorites.", drink.name);
    }

    save_session(session, engine)?;
    Ok(())
}

/// Compare favorite drinks by a nutrient.
fn cmd_favorites(
    store: &CatalogStore,
    engine: &mut CatalogFilterEngine,
    session: &Path,
    nutrient: &str,
) -> Result<()> {
    let kind: NutrientKind = nutrient.parse()?;

    let pruned = store.prune_favorites(engine);
    if pruned > 0 {
        println!("Dropped {} favorites no longer on the menu.", pruned);
        save_session(session, engine)?;
    }

    let favorites = engine.favorite_drinks(store.all());
    if favorites.is_empty() {
        println!("No favorites yet. Add one with 'favorite <drink>'.");
        return Ok(());
    }

    display_comparison(&favorites, kind, engine.criteria().selected_size);
    display_drink_list(&favorites, engine, "Favorites");
    Ok(())
}

/// Show details of a single drink.
fn cmd_show(
    store: &CatalogStore,
    engine: &CatalogFilterEngine,
    query: &str,
    size: Option<&str>,
) -> Result<()> {
    let size: DrinkSize = match size {
        Some(s) => s.parse()?,
        None => engine.criteria().selected_size,
    };

    let drink = prompt_drink(store, query)?;
    display_drink_detail(drink, size, engine.is_favorite(&drink.id));
    Ok(())
}

/// Averages over the filtered drinks.
fn cmd_stats(store: &CatalogStore, engine: &CatalogFilterEngine) -> Result<()> {
    let drinks = engine.filtered_drinks(store.all());
    display_criteria(engine.criteria());
    display_stats(&drinks, engine);
    println!("On the menu: {} of {} available", store.available().len(), store.len());

    let featured = store.featured();
    if !featured.is_empty() {
        let names: Vec<&str> = featured.iter().map(|d| d.name.as_str()).collect();
        println!("Featured: {}", names.join(", "));
    }

    Ok(())
}

/// Export drinks to CSV.
fn cmd_export(store: &CatalogStore, engine: &CatalogFilterEngine, path: &Path, all: bool) -> Result<()> {
    let drinks = visible_drinks(store, engine, all);
    write_drinks_csv(&drinks, engine, path)?;
    println!("Exported {} drinks to {}.", drinks.len(), path.display());
    Ok(())
}
