use crate::catalog::{
    calorie_equivalent, caffeine_duration_hours, comparison_rows, format_nutrient_value,
    gauge_ratio, CatalogFilterEngine, FilterCriteria,
};
use crate::models::{Drink, DrinkCategory, DrinkSize, NutrientKind};

/// Width of a full comparison bar, in characters.
const BAR_WIDTH: usize = 30;

fn bar(ratio: f64, width: usize) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
}

/// Display the active filter settings on one line.
pub fn display_criteria(criteria: &FilterCriteria) {
    let categories = if criteria.selected_categories.len() == DrinkCategory::ALL.len() {
        "all".to_string()
    } else if criteria.selected_categories.is_empty() {
        "none".to_string()
    } else {
        criteria
            .selected_categories
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let search = if criteria.search_text.is_empty() {
        String::new()
    } else {
        format!(" | search \"{}\"", criteria.search_text)
    };

    println!(
        "Filters: {} | {} | <= {:.0} cal | <= {:.0} mg caffeine{}",
        categories,
        criteria.selected_size,
        criteria.calories_threshold,
        criteria.caffeine_threshold,
        search
    );
}

/// Display drinks as a table with nutrition at the given size.
pub fn display_drink_list(drinks: &[&Drink], engine: &CatalogFilterEngine, title: &str) {
    if drinks.is_empty() {
        println!("{}: (none)", title);
        println!("Try loosening the filters or run 'reset'.");
        return;
    }

    let size = engine.criteria().selected_size;

    println!();
    println!("=== {} ({} drinks) ===", title, drinks.len());
    println!();

    let max_name_len = drinks.iter().map(|d| d.name.len()).max().unwrap_or(10);

    for (i, drink) in drinks.iter().enumerate() {
        let mut tags = Vec::new();
        if engine.is_favorite(&drink.id) {
            tags.push("[Fav]");
        }
        if drink.is_featured {
            tags.push("[Featured]");
        }
        if !drink.is_available {
            tags.push("[Unavailable]");
        }

        let nutrition = match drink.nutrition(size) {
            Some(p) => format!("{:>4} cal | {:>3} mg", p.calories, p.caffeine_mg),
            None => "no nutrition info".to_string(),
        };

        println!(
            "{:>3}. {:<width$} - {:<13} | {}  {}",
            i + 1,
            drink.name,
            drink.category.label(),
            nutrition,
            tags.join(" "),
            width = max_name_len
        );
    }

    println!();
}

/// Display averages over a list of drinks.
pub fn display_stats(drinks: &[&Drink], engine: &CatalogFilterEngine) {
    let size = engine.criteria().selected_size;
    let with_size = drinks.iter().filter(|d| d.nutrition(size).is_some()).count();

    println!();
    println!("--- Summary ({}) ---", size);
    println!("Drinks: {} ({} with {} nutrition)", drinks.len(), with_size, size);
    for kind in NutrientKind::ALL {
        let avg = engine.average_nutrient(drinks.iter().copied(), kind);
        println!("Average {}: {:.1}{}", kind, avg, kind.unit());
    }
    println!("Favorites: {}", engine.favorites().len());
    println!();
}

/// Display a bar chart comparing one nutrient across drinks.
pub fn display_comparison(drinks: &[&Drink], kind: NutrientKind, size: DrinkSize) {
    let rows = comparison_rows(drinks.iter().copied(), kind, size);
    if rows.is_empty() {
        println!("No {} nutrition data to compare.", size);
        return;
    }

    println!();
    println!("=== {} comparison ({}) ===", kind, size);
    println!();

    let max_name_len = rows.iter().map(|r| r.name.len()).max().unwrap_or(10);

    for row in &rows {
        println!(
            "{:<width$}  {}  {}{}",
            row.name,
            bar(row.ratio, BAR_WIDTH),
            format_nutrient_value(row.value),
            kind.unit(),
            width = max_name_len
        );
    }

    println!();
}

/// Display everything known about one drink at a size.
pub fn display_drink_detail(drink: &Drink, size: DrinkSize, is_favorite: bool) {
    println!();
    println!("=== {} ===", drink.name);
    println!("{}", drink.description);
    println!();
    println!("Category: {}", drink.category.label());
    if drink.is_featured {
        println!("Featured drink");
    }
    if !drink.is_available {
        println!("Currently unavailable");
    }
    if let Some(image) = &drink.image_ref {
        println!("Image: {}", image);
    }
    println!("Favorite: {}", if is_favorite { "yes" } else { "no" });
    println!();

    let Some(profile) = drink.nutrition(size) else {
        println!("No nutrition info for {}.", size);
        let sizes: Vec<&str> = drink.nutrition_by_size.keys().map(|s| s.label()).collect();
        if !sizes.is_empty() {
            println!("Available sizes: {}", sizes.join(", "));
        }
        println!();
        return;
    };

    println!("--- Nutrition ({}) ---", size);
    for kind in NutrientKind::ALL {
        let value = kind.value(profile);
        let note = match kind {
            NutrientKind::Calories => format!("  {}", calorie_equivalent(value).describe()),
            NutrientKind::Caffeine => caffeine_duration_hours(value)
                .map(|h| format!("  lasts about {:.1} hours", h))
                .unwrap_or_default(),
            _ => String::new(),
        };
        println!(
            "{:<9} {:>6}{:<2} {}{}",
            kind.label(),
            format_nutrient_value(value),
            kind.unit(),
            bar(gauge_ratio(kind, value), 10),
            note
        );
    }
    println!();
}
