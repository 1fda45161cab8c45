use std::path::Path;

use crate::catalog::CatalogFilterEngine;
use crate::error::Result;
use crate::models::{Drink, DrinkSize};

fn nutrition_cells(drink: &Drink, size: DrinkSize) -> [String; 5] {
    match drink.nutrition(size) {
        Some(p) => [
            p.calories.to_string(),
            p.caffeine_mg.to_string(),
            format!("{:.1}", p.fat_grams),
            format!("{:.1}", p.sugar_grams),
            format!("{:.1}", p.protein_grams),
        ],
        None => Default::default(),
    }
}

/// Write drinks with their nutrition at the session's size to a CSV file.
///
/// Nutrition cells are left empty when a drink has no entry for that size.
pub fn write_drinks_csv(drinks: &[&Drink], engine: &CatalogFilterEngine, path: &Path) -> Result<()> {
    let size = engine.criteria().selected_size;
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "name",
        "category",
        "size",
        "calories",
        "caffeine_mg",
        "fat_g",
        "sugar_g",
        "protein_g",
        "featured",
        "favorite",
    ])?;

    for drink in drinks {
        let [calories, caffeine, fat, sugar, protein] = nutrition_cells(drink, size);
        wtr.write_record([
            drink.id.clone(),
            drink.name.clone(),
            drink.category.ident().to_string(),
            size.label().to_string(),
            calories,
            caffeine,
            fat,
            sugar,
            protein,
            drink.is_featured.to_string(),
            engine.is_favorite(&drink.id).to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DrinkCategory, NutritionProfile};
    use tempfile::tempdir;

    #[test]
    fn test_write_drinks_csv() {
        let latte = Drink::new("Latte", "", DrinkCategory::Coffee).with_nutrition(
            DrinkSize::Grande,
            NutritionProfile::new(250, 150, 10.0, 23.0, 13.0),
        );
        let bare = Drink::new("Mystery", "", DrinkCategory::Other);
        let mut engine = CatalogFilterEngine::new();
        engine.toggle_favorite("latte");

        let dir = tempdir().unwrap();
        let path = dir.path().join("drinks.csv");
        write_drinks_csv(&[&latte, &bare], &engine, &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "latte");
        assert_eq!(&rows[0][4], "250");
        assert_eq!(&rows[0][6], "10.0");
        assert_eq!(&rows[0][10], "true");
        assert_eq!(&rows[1][4], "");
        assert_eq!(&rows[1][10], "false");
    }
}
