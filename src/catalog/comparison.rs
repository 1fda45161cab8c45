use crate::catalog::constants::{
    gauge_reference, BANANA_CALORIES, CAFFEINE_HOURS_PER_100MG, GAUGE_MIN_RATIO,
    RICE_BOWL_CALORIES, RICE_BOWL_CUTOFF,
};
use crate::models::{Drink, DrinkSize, NutrientKind};

/// One bar of a side-by-side nutrient comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub name: String,
    pub value: f64,

    /// Value relative to the largest value in the comparison, 0.0..=1.0.
    pub ratio: f64,
}

/// Compare one nutrient across drinks at a given size.
///
/// Drinks without an entry for `size` are left out. Order follows the input.
pub fn comparison_rows<'a, I>(drinks: I, kind: NutrientKind, size: DrinkSize) -> Vec<ComparisonRow>
where
    I: IntoIterator<Item = &'a Drink>,
{
    let values: Vec<(&str, f64)> = drinks
        .into_iter()
        .filter_map(|d| d.nutrition(size).map(|p| (d.name.as_str(), kind.value(p))))
        .collect();

    let max = values
        .iter()
        .map(|(_, v)| *v)
        .reduce(f64::max)
        .unwrap_or(1.0);

    values
        .into_iter()
        .map(|(name, value)| ComparisonRow {
            name: name.to_string(),
            value,
            ratio: if max > 0.0 { value / max } else { 0.0 },
        })
        .collect()
}

/// Whole numbers without decimals, everything else with one.
pub fn format_nutrient_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// Gauge fill for a single value, clamped to `GAUGE_MIN_RATIO..=1.0`.
pub fn gauge_ratio(kind: NutrientKind, value: f64) -> f64 {
    let ratio = (value / gauge_reference(kind)).min(1.0);
    ratio.max(GAUGE_MIN_RATIO)
}

/// Rough hours of alertness from a dose of caffeine.
pub fn caffeine_duration_hours(caffeine_mg: f64) -> Option<f64> {
    let hours = caffeine_mg / 100.0 * CAFFEINE_HOURS_PER_100MG;
    (hours > 0.0).then_some(hours)
}

/// Everyday food with about the same calories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalorieEquivalent {
    Bananas(f64),
    RiceBowls(f64),
}

impl CalorieEquivalent {
    pub fn describe(&self) -> String {
        match self {
            CalorieEquivalent::Bananas(n) => format!("about {:.1} bananas", n),
            CalorieEquivalent::RiceBowls(n) => format!("about {:.1} bowls of rice", n),
        }
    }
}

pub fn calorie_equivalent(calories: f64) -> CalorieEquivalent {
    if calories > RICE_BOWL_CUTOFF {
        CalorieEquivalent::RiceBowls(calories / RICE_BOWL_CALORIES)
    } else {
        CalorieEquivalent::Bananas(calories / BANANA_CALORIES)
    }
}
