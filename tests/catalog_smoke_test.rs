use std::fs;

use brew_buddy_rs::catalog::{comparison_rows, CatalogFilterEngine};
use brew_buddy_rs::interface::write_drinks_csv;
use brew_buddy_rs::models::{DrinkCategory, DrinkMood, DrinkSize, NutrientKind};
use brew_buddy_rs::state::{
    load_catalog, load_catalog_or_sample, load_session, sample_drinks, save_session, CatalogOrigin, CatalogStore,
    NameMatch,
};
use tempfile::tempdir;

#[test]
fn test_sample_menu_moods() {
    let store = CatalogStore::new(sample_drinks());
    let mut engine = CatalogFilterEngine::new();

    engine.apply_mood_filter(DrinkMood::Energize);
    let names: Vec<&str> = engine
        .filtered_drinks(store.all())
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(names, vec!["Latte", "Caffe Americano", "Cold Brew", "Espresso"]);

    engine.apply_mood_filter(DrinkMood::Relax);
    let names: Vec<&str> = engine
        .filtered_drinks(store.all())
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(names, vec!["Matcha Tea Latte", "Strawberry Acai Refresher"]);

    engine.set_search_text("STRAWBERRY");
    assert_eq!(engine.filtered_drinks(store.all()).len(), 1);
}

#[test]
fn test_favorites_comparison_on_sample_menu() {
    let store = CatalogStore::new(sample_drinks());
    let mut engine = CatalogFilterEngine::new();

    let latte = match store.resolve_name("latte") {
        NameMatch::Exact(d) => d.id.clone(),
        other => panic!("expected exact match, got {:?}", other),
    };
    engine.toggle_favorite(&latte);
    engine.toggle_favorite("mocha-frappuccino");
    engine.toggle_favorite("espresso");

    let favorites = engine.favorite_drinks(store.all());
    assert_eq!(favorites.len(), 3);

    let rows = comparison_rows(favorites.iter().copied(), NutrientKind::Calories, DrinkSize::Grande);
    let values: Vec<f64> = rows.iter().map(|r| r.value).collect();
    assert_eq!(values, vec![250.0, 400.0, 15.0]);
    assert_eq!(rows[1].ratio, 1.0);
    assert!((rows[0].ratio - 0.625).abs() < 1e-9);
}

#[test]
fn test_catalog_file_session_and_export() {
    let dir = tempdir().unwrap();
    let catalog_path = dir.path().join("drinks.json");
    let session_path = dir.path().join("session.json");
    let csv_path = dir.path().join("out.csv");

    fs::write(&catalog_path, serde_json::to_string_pretty(&sample_drinks()).unwrap()).unwrap();
    let reloaded = load_catalog(&catalog_path).unwrap();
    assert_eq!(reloaded, sample_drinks());

    let (drinks, origin) = load_catalog_or_sample(Some(catalog_path.as_path()));
    assert_eq!(origin, CatalogOrigin::File);
    let store = CatalogStore::with_origin(drinks, origin);
    let mut engine = load_session(&session_path).unwrap();
    engine.toggle_category(DrinkCategory::Coffee);
    engine.set_selected_size(DrinkSize::Venti);
    engine.toggle_favorite("cold-brew");
    save_session(&session_path, &engine).unwrap();

    let engine = load_session(&session_path).unwrap();
    assert!(!engine.criteria().selected_categories.contains(&DrinkCategory::Coffee));
    assert_eq!(engine.criteria().selected_size, DrinkSize::Venti);

    // Venti: Cold Brew 310 mg and Mocha Frappuccino 520 cal are over the default ceilings.
    let filtered = engine.filtered_drinks(store.all());
    let names: Vec<&str> = filtered.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Matcha Tea Latte", "Strawberry Acai Refresher", "Espresso"]
    );

    write_drinks_csv(&filtered, &engine, &csv_path).unwrap();
    let csv_text = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv_text.lines().count(), 4);
    assert!(csv_text.contains("espresso,Espresso,espresso,Venti,20,225"));
}
