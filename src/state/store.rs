use std::collections::HashMap;

use strsim::jaro_winkler;
use tracing::{debug, warn};

use crate::catalog::CatalogFilterEngine;
use crate::models::Drink;

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Result of resolving a user-typed drink name.
#[derive(Debug, Clone, PartialEq)]
pub enum NameMatch<'a> {
    /// Exact (case-insensitive) hit on a name or id.
    Exact(&'a Drink),

    /// Similar names, best first.
    Fuzzy(Vec<&'a Drink>),

    None,
}

/// Where the drinks in a store came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// The user's catalog file.
    File,

    /// The built-in sample menu, used when no catalog file could be read.
    Sample,
}

/// The loaded drink catalog, in catalog order, with id lookups.
pub struct CatalogStore {
    drinks: Vec<Drink>,
    origin: CatalogOrigin,

    /// Position in `drinks` keyed by lowercase id.
    index: HashMap<String, usize>,
}

impl CatalogStore {
    /// Build a store from drinks read from a catalog file.
    pub fn new(drinks: Vec<Drink>) -> Self {
        Self::with_origin(drinks, CatalogOrigin::File)
    }

    /// Build a store, recording where the drinks came from.
    ///
    /// Every drink is kept. A drink whose id is already taken gets the first free
    /// `<id>-<n>` id, starting at 2.
    pub fn with_origin(drinks: Vec<Drink>, origin: CatalogOrigin) -> Self {
        let mut store = Self {
            drinks: Vec::with_capacity(drinks.len()),
            origin,
            index: HashMap::new(),
        };
        for drink in drinks {
            store.insert(drink);
        }
        debug!(count = store.len(), ?origin, "built catalog store");
        store
    }

    fn insert(&mut self, mut drink: Drink) {
        if self.index.contains_key(&drink.key()) {
            let base = drink.id.clone();
            let mut n = 2;
            while self.index.contains_key(&format!("{}-{}", base, n).to_lowercase()) {
                n += 1;
            }
            drink.id = format!("{}-{}", base, n);
            warn!(duplicate = %base, id = %drink.id, name = %drink.name, "drink id already taken, renamed");
        }

        self.index.insert(drink.key(), self.drinks.len());
        self.drinks.push(drink);
    }

    pub fn origin(&self) -> CatalogOrigin {
        self.origin
    }

    /// Drop favorites that are not on this menu.
    ///
    /// Does nothing for the sample menu: favorites from the user's own catalog must
    /// survive a run where that catalog could not be read.
    pub fn prune_favorites(&self, engine: &mut CatalogFilterEngine) -> usize {
        match self.origin {
            CatalogOrigin::File => engine.prune_favorites(&self.drinks),
            CatalogOrigin::Sample => 0,
        }
    }

    /// Get a drink by id (case-insensitive).
    pub fn get(&self, id: &str) -> Option<&Drink> {
        self.index
            .get(&id.to_lowercase())
            .map(|&pos| &self.drinks[pos])
    }

    /// All drinks in catalog order.
    pub fn all(&self) -> &[Drink] {
        &self.drinks
    }

    pub fn featured(&self) -> Vec<&Drink> {
        self.drinks.iter().filter(|d| d.is_featured).collect()
    }

    pub fn available(&self) -> Vec<&Drink> {
        self.drinks.iter().filter(|d| d.is_available).collect()
    }

    /// Find the drink a user most likely meant.
    pub fn resolve_name(&self, query: &str) -> NameMatch<'_> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return NameMatch::None;
        }

        if let Some(drink) = self
            .drinks
            .iter()
            .find(|d| d.name.to_lowercase() == query || d.key() == query)
        {
            return NameMatch::Exact(drink);
        }

        let mut candidates: Vec<(&Drink, f64)> = self
            .drinks
            .iter()
            .map(|d| (d, jaro_winkler(&d.name.to_lowercase(), &query)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        if candidates.is_empty() {
            return NameMatch::None;
        }

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        NameMatch::Fuzzy(candidates.into_iter().map(|(d, _)| d).collect())
    }

    /// Count of drinks in the store.
    pub fn len(&self) -> usize {
        self.drinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drinks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DrinkCategory;

    fn sample_drinks() -> Vec<Drink> {
        vec![
            Drink::new("Caffe Latte", "Espresso and milk", DrinkCategory::Coffee).featured(),
            Drink::new("Cold Brew", "Slow steeped", DrinkCategory::ColdBrew),
            Drink::new("Chai Tea Latte", "Spiced black tea", DrinkCategory::Tea),
        ]
    }

    #[test]
    fn test_get_case_insensitive() {
        let store = CatalogStore::new(sample_drinks());
        assert!(store.get("cold-brew").is_some());
        assert!(store.get("COLD-BREW").is_some());
        assert!(store.get("mocha").is_none());
    }

    #[test]
    fn test_duplicate_ids_keep_both_drinks() {
        let mut drinks = sample_drinks();
        drinks.push(Drink::new("caffe latte", "Oat milk now", DrinkCategory::Coffee));
        drinks.push(Drink::new("Caffe Latte", "Soy milk", DrinkCategory::Coffee));

        let store = CatalogStore::new(drinks);
        assert_eq!(store.len(), 5);
        assert_eq!(store.all()[0].description, "Espresso and milk");
        assert_eq!(store.all()[3].id, "caffe-latte-2");
        assert_eq!(store.all()[4].id, "caffe-latte-3");
        assert_eq!(store.get("caffe-latte-2").unwrap().description, "Oat milk now");
        assert_eq!(store.get("caffe-latte").unwrap().description, "Espresso and milk");
    }

    #[test]
    fn test_prune_favorites_only_for_file_catalog() {
        let mut engine = CatalogFilterEngine::new();
        engine.toggle_favorite("house-blend");
        engine.toggle_favorite("cold-brew");

        let sample = CatalogStore::with_origin(sample_drinks(), CatalogOrigin::Sample);
        assert_eq!(sample.origin(), CatalogOrigin::Sample);
        assert_eq!(sample.prune_favorites(&mut engine), 0);
        assert!(engine.is_favorite("house-blend"));

        let file = CatalogStore::new(sample_drinks());
        assert_eq!(file.prune_favorites(&mut engine), 1);
        assert!(!engine.is_favorite("house-blend"));
        assert!(engine.is_favorite("cold-brew"));
    }

    #[test]
    fn test_featured_and_available() {
        let mut drinks = sample_drinks();
        drinks[2].is_available = false;
        let store = CatalogStore::new(drinks);

        assert_eq!(store.featured().len(), 1);
        assert_eq!(store.available().len(), 2);
    }

    #[test]
    fn test_resolve_exact_name_or_id() {
        let store = CatalogStore::new(sample_drinks());
        match store.resolve_name("cold brew") {
            NameMatch::Exact(d) => assert_eq!(d.id, "cold-brew"),
            other => panic!("expected exact match, got {:?}", other),
        }
        assert!(matches!(store.resolve_name("chai-tea-latte"), NameMatch::Exact(_)));
    }

    #[test]
    fn test_resolve_fuzzy_best_first() {
        let store = CatalogStore::new(sample_drinks());
        match store.resolve_name("caffe latt") {
            NameMatch::Fuzzy(found) => assert_eq!(found[0].name, "Caffe Latte"),
            other => panic!("expected fuzzy match, got {:?}", other),
        }
        assert_eq!(store.resolve_name("zzzz"), NameMatch::None);
        assert_eq!(store.resolve_name("  "), NameMatch::None);
    }
}
