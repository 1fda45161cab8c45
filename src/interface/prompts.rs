use dialoguer::{Confirm, Select};

use crate::error::{BrewError, Result};
use crate::models::{Drink, DrinkMood};
use crate::state::{CatalogStore, NameMatch};

/// Most fuzzy candidates offered at once.
const MAX_CANDIDATES: usize = 5;

/// Prompt for a mood preset.
pub fn prompt_mood() -> Result<DrinkMood> {
    let options: Vec<String> = DrinkMood::ALL
        .iter()
        .map(|m| format!("{:<9} ({})", m.ident(), m.blurb()))
        .collect();

    let selection = Select::new()
        .with_prompt("How are you feeling?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(DrinkMood::ALL[selection])
}

/// Resolve a typed drink name against the catalog, asking when it is ambiguous.
pub fn prompt_drink<'a>(store: &'a CatalogStore, query: &str) -> Result<&'a Drink> {
    let candidates = match store.resolve_name(query) {
        NameMatch::Exact(drink) => return Ok(drink),
        NameMatch::Fuzzy(candidates) => candidates,
        NameMatch::None => return Err(BrewError::DrinkNotFound(query.to_string())),
    };

    if candidates.len() == 1 {
        let drink = candidates[0];
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", drink.name))
            .default(true)
            .interact()?;

        return if confirm {
            Ok(drink)
        } else {
            Err(BrewError::DrinkNotFound(query.to_string()))
        };
    }

    let options: Vec<&Drink> = candidates.into_iter().take(MAX_CANDIDATES).collect();
    let mut labels: Vec<String> = options.iter().map(|d| d.name.clone()).collect();
    labels.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&labels)
        .default(0)
        .interact()?;

    options
        .get(selection)
        .copied()
        .ok_or_else(|| BrewError::DrinkNotFound(query.to_string()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
