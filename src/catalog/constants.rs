use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{DrinkCategory, DrinkMood, DrinkSize, NutrientKind};

/// Default inclusive calorie ceiling.
pub const DEFAULT_CALORIES_THRESHOLD: f64 = 500.0;

/// Default inclusive caffeine ceiling in mg.
pub const DEFAULT_CAFFEINE_THRESHOLD: f64 = 300.0;

pub const DEFAULT_SIZE: DrinkSize = DrinkSize::Grande;

// ─────────────────────────────────────────────────────────────────────────────
// Slider ranges offered by the front end. The engine itself accepts any
// non-negative threshold.
// ─────────────────────────────────────────────────────────────────────────────

pub const CALORIES_RANGE: (f64, f64) = (100.0, 600.0);

pub const CAFFEINE_RANGE: (f64, f64) = (50.0, 400.0);

// ─────────────────────────────────────────────────────────────────────────────
// Mood presets
// ─────────────────────────────────────────────────────────────────────────────

/// Filter values applied together when a mood is picked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodPreset {
    pub categories: &'static [DrinkCategory],
    pub caffeine_threshold: f64,
    pub calories_threshold: f64,
    pub size: DrinkSize,
}

pub fn mood_preset(mood: DrinkMood) -> MoodPreset {
    use DrinkCategory::*;

    match mood {
        DrinkMood::Energize => MoodPreset {
            categories: &[Coffee, Espresso, ColdBrew],
            caffeine_threshold: 500.0,
            calories_threshold: 500.0,
            size: DrinkSize::Grande,
        },
        DrinkMood::Relax => MoodPreset {
            categories: &[Tea, Refreshers],
            caffeine_threshold: 100.0,
            calories_threshold: 500.0,
            size: DrinkSize::Grande,
        },
        DrinkMood::Refresh => MoodPreset {
            categories: &[Refreshers, ColdBrew, Frappuccino],
            caffeine_threshold: 500.0,
            calories_threshold: 300.0,
            size: DrinkSize::Grande,
        },
        DrinkMood::Indulge => MoodPreset {
            categories: &[Frappuccino, HotChocolate],
            caffeine_threshold: 500.0,
            calories_threshold: 600.0,
            size: DrinkSize::Grande,
        },
        DrinkMood::Warm => MoodPreset {
            categories: &[Coffee, Tea, HotChocolate, Espresso],
            caffeine_threshold: 500.0,
            calories_threshold: 500.0,
            size: DrinkSize::Grande,
        },
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Detail view gauges and equivalents
// ─────────────────────────────────────────────────────────────────────────────

/// Smallest gauge fill, so tiny values stay visible.
pub const GAUGE_MIN_RATIO: f64 = 0.4;

/// Roughly how long 100 mg of caffeine keeps you going.
pub const CAFFEINE_HOURS_PER_100MG: f64 = 5.0;

pub const BANANA_CALORIES: f64 = 100.0;
pub const RICE_BOWL_CALORIES: f64 = 200.0;

/// Above this many calories, equivalents are given in bowls of rice.
pub const RICE_BOWL_CUTOFF: f64 = 300.0;

/// Value at which a nutrient gauge reads full.
pub static GAUGE_REFERENCE: LazyLock<HashMap<NutrientKind, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(NutrientKind::Calories, 500.0);
    m.insert(NutrientKind::Caffeine, 300.0);
    m.insert(NutrientKind::Sugar, 50.0);
    m.insert(NutrientKind::Fat, 30.0);
    m.insert(NutrientKind::Protein, 20.0);
    m
});

/// Get the full-scale gauge value for a nutrient.
pub fn gauge_reference(kind: NutrientKind) -> f64 {
    *GAUGE_REFERENCE.get(&kind).unwrap_or(&1.0)
}
