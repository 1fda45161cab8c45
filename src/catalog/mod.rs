pub mod comparison;
pub mod constants;
pub mod filter;

pub use comparison::{
    calorie_equivalent, caffeine_duration_hours, comparison_rows, format_nutrient_value,
    gauge_ratio, CalorieEquivalent, ComparisonRow,
};
pub use constants::{mood_preset, MoodPreset};
pub use filter::{CatalogFilterEngine, FavoritesSet, FilterCriteria};
