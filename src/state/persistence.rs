use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::catalog::CatalogFilterEngine;
use crate::error::Result;
use crate::models::Drink;
use crate::state::sample::sample_drinks;
use crate::state::store::CatalogOrigin;

/// Load drinks from a JSON catalog file.
///
/// The file holds an array of drink records. Unknown categories load as `other`.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Drink>> {
    let content = fs::read_to_string(path)?;
    let drinks: Vec<Drink> = serde_json::from_str(&content)?;

    for drink in drinks.iter().filter(|d| !d.nutrition_by_size.values().all(|p| p.is_valid())) {
        warn!(drink = %drink.name, "catalog entry has negative or non-finite nutrition values");
    }

    Ok(drinks)
}

/// Load the catalog file, or the built-in sample set if there is none or it is unusable.
///
/// The returned origin says which of the two was used.
pub fn load_catalog_or_sample(path: Option<&Path>) -> (Vec<Drink>, CatalogOrigin) {
    let Some(path) = path else {
        info!("no catalog file given, using sample drinks");
        return (sample_drinks(), CatalogOrigin::Sample);
    };

    match load_catalog(path) {
        Ok(drinks) => {
            info!(count = drinks.len(), path = %path.display(), "loaded catalog");
            (drinks, CatalogOrigin::File)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not load catalog, using sample drinks");
            (sample_drinks(), CatalogOrigin::Sample)
        }
    }
}

/// Load a saved session. A missing file starts a fresh one.
pub fn load_session<P: AsRef<Path>>(path: P) -> Result<CatalogFilterEngine> {
    let path = path.as_ref();
    if !path.exists() {
        info!(path = %path.display(), "no saved session, starting fresh");
        return Ok(CatalogFilterEngine::new());
    }

    let content = fs::read_to_string(path)?;
    let engine: CatalogFilterEngine = serde_json::from_str(&content)?;
    engine.validate()?;
    Ok(engine)
}

/// Save the session's criteria and favorites as pretty JSON.
pub fn save_session<P: AsRef<Path>>(path: P, engine: &CatalogFilterEngine) -> Result<()> {
    let json = serde_json::to_string_pretty(engine)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    use crate::models::{DrinkCategory, DrinkMood, DrinkSize};
    use crate::state::store::CatalogStore;

    #[test]
    fn test_load_catalog() {
        let json = r#"[
            {"name": "Latte", "description": "Milky", "category": "coffee", "isFeatured": true,
             "nutritionGrande": {"calories": 250, "caffeine": 150, "fat": 10, "sugar": 23, "protein": 13}},
            {"name": "Horchata", "description": "Rice and cinnamon", "category": "seasonal"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let drinks = load_catalog(file.path()).unwrap();
        assert_eq!(drinks.len(), 2);
        assert_eq!(drinks[0].name, "Latte");
        assert!(drinks[0].is_featured);
        assert_eq!(drinks[0].nutrition(DrinkSize::Grande).unwrap().caffeine_mg, 150);
        assert_eq!(drinks[1].category, DrinkCategory::Other);
        assert!(drinks[1].nutrition_by_size.is_empty());
    }

    #[test]
    fn test_bad_catalog_falls_back_to_sample() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        assert!(load_catalog(file.path()).is_err());
        let (drinks, origin) = load_catalog_or_sample(Some(file.path()));
        assert_eq!(drinks.len(), sample_drinks().len());
        assert_eq!(origin, CatalogOrigin::Sample);

        let (missing, origin) = load_catalog_or_sample(Some(Path::new("/definitely/not/here.json")));
        assert_eq!(missing.len(), sample_drinks().len());
        assert_eq!(origin, CatalogOrigin::Sample);

        let (drinks, origin) = load_catalog_or_sample(None);
        assert_eq!(drinks.len(), sample_drinks().len());
        assert_eq!(origin, CatalogOrigin::Sample);
    }

    #[test]
    fn test_broken_catalog_keeps_favorites() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"[{"name": "House Blend", "description": "Our drip", "categ"#)
            .unwrap();

        let (drinks, origin) = load_catalog_or_sample(Some(file.path()));
        let store = CatalogStore::with_origin(drinks, origin);

        let mut engine = CatalogFilterEngine::new();
        engine.toggle_favorite("house-blend");

        assert_eq!(store.prune_favorites(&mut engine), 0);
        assert!(engine.is_favorite("house-blend"));
    }

    #[test]
    fn test_load_catalog_legacy_categories() {
        let json = r#"[
            {"name": "Drip", "description": "Hot", "category": "咖啡"},
            {"name": "Nitro", "description": "Cold", "category": "冷萃咖啡"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let (drinks, origin) = load_catalog_or_sample(Some(file.path()));
        assert_eq!(origin, CatalogOrigin::File);
        assert_eq!(drinks[0].category, DrinkCategory::Coffee);
        assert_eq!(drinks[1].category, DrinkCategory::ColdBrew);
    }

    #[test]
    fn test_session_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let fresh = load_session(&path).unwrap();
        assert_eq!(fresh, CatalogFilterEngine::new());

        let mut engine = CatalogFilterEngine::new();
        engine.apply_mood_filter(DrinkMood::Relax);
        engine.set_search_text("tea");
        engine.toggle_favorite("latte");
        save_session(&path, &engine).unwrap();

        let reloaded = load_session(&path).unwrap();
        assert_eq!(reloaded, engine);
        assert!(reloaded.is_favorite("latte"));
        assert_eq!(reloaded.criteria().caffeine_threshold, 100.0);
    }

    #[test]
    fn test_session_with_negative_threshold_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"criteria":{"selectedCategories":["coffee"],"caloriesThreshold":-5.0,"caffeineThreshold":300.0,"searchText":"","selectedSize":"grande"},"favorites":[]}"#,
        )
        .unwrap();

        assert!(matches!(
            load_session(file.path()),
            Err(crate::error::BrewError::InvalidInput(_))
        ));
    }
}
