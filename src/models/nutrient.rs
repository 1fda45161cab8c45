use std::fmt;
use std::str::FromStr;

use crate::error::BrewError;
use crate::models::NutritionProfile;

/// A single comparable nutrition field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NutrientKind {
    Calories,
    Caffeine,
    Sugar,
    Fat,
    Protein,
}

impl NutrientKind {
    pub const ALL: [NutrientKind; 5] = [
        NutrientKind::Calories,
        NutrientKind::Caffeine,
        NutrientKind::Sugar,
        NutrientKind::Fat,
        NutrientKind::Protein,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NutrientKind::Calories => "calories",
            NutrientKind::Caffeine => "caffeine",
            NutrientKind::Sugar => "sugar",
            NutrientKind::Fat => "fat",
            NutrientKind::Protein => "protein",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            NutrientKind::Calories => "",
            NutrientKind::Caffeine => "mg",
            NutrientKind::Sugar | NutrientKind::Fat | NutrientKind::Protein => "g",
        }
    }

    /// Read this field from a profile.
    pub fn value(self, profile: &NutritionProfile) -> f64 {
        match self {
            NutrientKind::Calories => profile.calories as f64,
            NutrientKind::Caffeine => profile.caffeine_mg as f64,
            NutrientKind::Sugar => profile.sugar_grams,
            NutrientKind::Fat => profile.fat_grams,
            NutrientKind::Protein => profile.protein_grams,
        }
    }
}

impl FromStr for NutrientKind {
    type Err = BrewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BrewError::UnknownValue {
                kind: "nutrient",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for NutrientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
