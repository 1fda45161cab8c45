use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::constants::{
    mood_preset, DEFAULT_CAFFEINE_THRESHOLD, DEFAULT_CALORIES_THRESHOLD, DEFAULT_SIZE,
};
use crate::error::{BrewError, Result};
use crate::models::{Drink, DrinkCategory, DrinkMood, DrinkSize, NutrientKind};

/// The current filter settings of a browsing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub selected_categories: BTreeSet<DrinkCategory>,

    /// Inclusive calorie ceiling.
    pub calories_threshold: f64,

    /// Inclusive caffeine ceiling in mg.
    pub caffeine_threshold: f64,

    #[serde(default)]
    pub search_text: String,

    pub selected_size: DrinkSize,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            selected_categories: DrinkCategory::ALL.into_iter().collect(),
            calories_threshold: DEFAULT_CALORIES_THRESHOLD,
            caffeine_threshold: DEFAULT_CAFFEINE_THRESHOLD,
            search_text: String::new(),
            selected_size: DEFAULT_SIZE,
        }
    }
}

/// Drink ids the user has marked as favorites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoritesSet(BTreeSet<String>);

impl FavoritesSet {
    /// Add the id if absent, remove it if present. Returns true if it is now a favorite.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.0.remove(id) {
            false
        } else {
            self.0.insert(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Filtering and aggregation over a drink list for one session.
///
/// Holds the session's [`FilterCriteria`] and [`FavoritesSet`]. Queries never touch
/// the drinks passed in; only the mutators change session state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFilterEngine {
    criteria: FilterCriteria,
    favorites: FavoritesSet,
}

impl CatalogFilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    /// Whether a single drink passes the current criteria.
    ///
    /// Guards run in order and the first rejection wins: category, then the
    /// nutrition ceilings for the selected size (skipped when the drink has no
    /// entry for it), then the search text.
    pub fn matches(&self, drink: &Drink) -> bool {
        let criteria = &self.criteria;

        if !criteria.selected_categories.contains(&drink.category) {
            return false;
        }

        if let Some(nutrition) = drink.nutrition(criteria.selected_size) {
            if nutrition.calories as f64 > criteria.calories_threshold {
                return false;
            }
            if nutrition.caffeine_mg as f64 > criteria.caffeine_threshold {
                return false;
            }
        }

        if !criteria.search_text.is_empty() {
            let needle = criteria.search_text.to_lowercase();
            return drink.name.to_lowercase().contains(&needle)
                || drink.description.to_lowercase().contains(&needle);
        }

        true
    }

    /// Drinks passing the current criteria, in input order.
    pub fn filtered_drinks<'a>(&self, drinks: &'a [Drink]) -> Vec<&'a Drink> {
        let filtered: Vec<&Drink> = drinks.iter().filter(|d| self.matches(d)).collect();
        debug!(
            input = drinks.len(),
            output = filtered.len(),
            "filtered drinks"
        );
        filtered
    }

    /// Overwrite categories, ceilings and size with a mood's preset.
    ///
    /// Search text is left as is.
    pub fn apply_mood_filter(&mut self, mood: DrinkMood) {
        let preset = mood_preset(mood);
        self.criteria.selected_categories = preset.categories.iter().copied().collect();
        self.criteria.caffeine_threshold = preset.caffeine_threshold;
        self.criteria.calories_threshold = preset.calories_threshold;
        self.criteria.selected_size = preset.size;
        debug!(%mood, "applied mood preset");
    }

    /// Back to defaults. Favorites are kept.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    /// Select the category if unselected, deselect it otherwise.
    pub fn toggle_category(&mut self, category: DrinkCategory) {
        if !self.criteria.selected_categories.remove(&category) {
            self.criteria.selected_categories.insert(category);
        }
    }

    /// Returns true if the drink is a favorite after the toggle.
    pub fn toggle_favorite(&mut self, drink_id: &str) -> bool {
        let now_favorite = self.favorites.toggle(drink_id);
        debug!(drink_id, now_favorite, "toggled favorite");
        now_favorite
    }

    pub fn is_favorite(&self, drink_id: &str) -> bool {
        self.favorites.contains(drink_id)
    }

    /// Favorite drinks in input order.
    pub fn favorite_drinks<'a>(&self, all_drinks: &'a [Drink]) -> Vec<&'a Drink> {
        all_drinks
            .iter()
            .filter(|d| self.favorites.contains(&d.id))
            .collect()
    }

    pub fn clear_favorites(&mut self) {
        self.favorites.clear();
    }

    /// Drop favorite ids that no drink in the catalog carries any more.
    pub fn prune_favorites(&mut self, all_drinks: &[Drink]) -> usize {
        let known: HashSet<&str> = all_drinks.iter().map(|d| d.id.as_str()).collect();
        let stale: Vec<String> = self
            .favorites
            .iter()
            .filter(|id| !known.contains(id.as_str()))
            .cloned()
            .collect();
        for id in &stale {
            self.favorites.toggle(id);
        }
        stale.len()
    }

    pub fn set_search_text(&mut self, text: &str) {
        self.criteria.search_text = text.to_string();
    }

    pub fn set_selected_size(&mut self, size: DrinkSize) {
        self.criteria.selected_size = size;
    }

    pub fn set_calories_threshold(&mut self, value: f64) -> Result<()> {
        self.criteria.calories_threshold = validate_threshold("calories", value)?;
        Ok(())
    }

    pub fn set_caffeine_threshold(&mut self, value: f64) -> Result<()> {
        self.criteria.caffeine_threshold = validate_threshold("caffeine", value)?;
        Ok(())
    }

    /// Check criteria that did not come through the setters, such as a loaded session.
    pub fn validate(&self) -> Result<()> {
        validate_threshold("calories", self.criteria.calories_threshold)?;
        validate_threshold("caffeine", self.criteria.caffeine_threshold)?;
        Ok(())
    }

    /// Mean of a nutrient at the selected size over drinks that have an entry for it.
    ///
    /// Returns 0.0 when no drink qualifies.
    pub fn average_nutrient<'a, I>(&self, drinks: I, kind: NutrientKind) -> f64
    where
        I: IntoIterator<Item = &'a Drink>,
    {
        let size = self.criteria.selected_size;
        let (total, count) = drinks
            .into_iter()
            .filter_map(|d| d.nutrition(size))
            .fold((0.0, 0usize), |(sum, n), p| (sum + kind.value(p), n + 1));

        if count == 0 {
            0.0
        } else {
            total / count as f64
        }
    }

    pub fn average_calories<'a, I>(&self, drinks: I) -> f64
    where
        I: IntoIterator<Item = &'a Drink>,
    {
        self.average_nutrient(drinks, NutrientKind::Calories)
    }

    pub fn average_caffeine<'a, I>(&self, drinks: I) -> f64
    where
        I: IntoIterator<Item = &'a Drink>,
    {
        self.average_nutrient(drinks, NutrientKind::Caffeine)
    }
}

fn validate_threshold(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(BrewError::InvalidInput(format!(
            "{} threshold must be a non-negative number, got {}",
            name, value
        )))
    }
}
