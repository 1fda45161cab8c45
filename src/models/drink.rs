use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BrewError;

/// Menu category of a drink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrinkCategory {
    Coffee,
    Tea,
    Refreshers,
    Frappuccino,
    ColdBrew,
    Espresso,
    HotChocolate,
    Other,
}

impl DrinkCategory {
    pub const ALL: [DrinkCategory; 8] = [
        DrinkCategory::Coffee,
        DrinkCategory::Tea,
        DrinkCategory::Refreshers,
        DrinkCategory::Frappuccino,
        DrinkCategory::ColdBrew,
        DrinkCategory::Espresso,
        DrinkCategory::HotChocolate,
        DrinkCategory::Other,
    ];

    /// Wire identifier, as written in catalog and session files.
    pub fn ident(self) -> &'static str {
        match self {
            DrinkCategory::Coffee => "coffee",
            DrinkCategory::Tea => "tea",
            DrinkCategory::Refreshers => "refreshers",
            DrinkCategory::Frappuccino => "frappuccino",
            DrinkCategory::ColdBrew => "coldBrew",
            DrinkCategory::Espresso => "espresso",
            DrinkCategory::HotChocolate => "hotChocolate",
            DrinkCategory::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DrinkCategory::Coffee => "Coffee",
            DrinkCategory::Tea => "Tea",
            DrinkCategory::Refreshers => "Refreshers",
            DrinkCategory::Frappuccino => "Frappuccino",
            DrinkCategory::ColdBrew => "Cold Brew",
            DrinkCategory::Espresso => "Espresso",
            DrinkCategory::HotChocolate => "Hot Chocolate",
            DrinkCategory::Other => "Other",
        }
    }

    /// Raw value written by the Brewbuddy iOS app's `drinks.json`.
    pub fn legacy_raw_value(self) -> &'static str {
        match self {
            DrinkCategory::Coffee => "咖啡",
            DrinkCategory::Tea => "茶",
            DrinkCategory::Refreshers => "清爽饮料",
            DrinkCategory::Frappuccino => "星冰乐",
            DrinkCategory::ColdBrew => "冷萃咖啡",
            DrinkCategory::Espresso => "浓缩咖啡",
            DrinkCategory::HotChocolate => "热巧克力",
            DrinkCategory::Other => "其他",
        }
    }

    /// Match an identifier, a display label (ignoring case) or a legacy raw value.
    fn lookup(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|c| {
            c.ident().eq_ignore_ascii_case(value)
                || c.label().eq_ignore_ascii_case(value)
                || c.legacy_raw_value() == value
        })
    }

    /// Lenient parse used at the catalog boundary: anything unknown is `Other`.
    pub fn from_catalog_str(value: &str) -> Self {
        Self::lookup(value).unwrap_or(DrinkCategory::Other)
    }
}

impl FromStr for DrinkCategory {
    type Err = BrewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| BrewError::UnknownValue {
            kind: "category",
            value: s.to_string(),
        })
    }
}

impl fmt::Display for DrinkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Serving size.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum DrinkSize {
    Tall,
    #[default]
    Grande,
    Venti,
}

impl DrinkSize {
    pub const ALL: [DrinkSize; 3] = [DrinkSize::Tall, DrinkSize::Grande, DrinkSize::Venti];

    pub fn label(self) -> &'static str {
        match self {
            DrinkSize::Tall => "Tall",
            DrinkSize::Grande => "Grande",
            DrinkSize::Venti => "Venti",
        }
    }
}

impl FromStr for DrinkSize {
    type Err = BrewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BrewError::UnknownValue {
                kind: "size",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for DrinkSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Nutrition facts for one serving size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionProfile {
    pub calories: u32,

    /// Milligrams.
    #[serde(rename = "caffeine")]
    pub caffeine_mg: u32,

    #[serde(rename = "fat")]
    pub fat_grams: f64,

    #[serde(rename = "sugar")]
    pub sugar_grams: f64,

    #[serde(rename = "protein")]
    pub protein_grams: f64,
}

impl NutritionProfile {
    pub fn new(calories: u32, caffeine_mg: u32, fat: f64, sugar: f64, protein: f64) -> Self {
        Self {
            calories,
            caffeine_mg,
            fat_grams: fat,
            sugar_grams: sugar,
            protein_grams: protein,
        }
    }

    /// Gram fields must be finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.fat_grams, self.sugar_grams, self.protein_grams]
            .into_iter()
            .all(|g| g.is_finite() && g >= 0.0)
    }
}

/// A catalog entry.
///
/// Nutrition is keyed by size and any size may be missing. A missing entry is
/// "unknown", not zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DrinkRecord", into = "DrinkRecord")]
pub struct Drink {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_ref: Option<String>,
    pub category: DrinkCategory,
    pub is_featured: bool,
    pub is_available: bool,
    pub nutrition_by_size: BTreeMap<DrinkSize, NutritionProfile>,
}

impl Drink {
    /// Create an available, non-featured drink with no nutrition data.
    pub fn new(name: &str, description: &str, category: DrinkCategory) -> Self {
        Self {
            id: Self::derive_id(name),
            name: name.to_string(),
            description: description.to_string(),
            image_ref: None,
            category,
            is_featured: false,
            is_available: true,
            nutrition_by_size: BTreeMap::new(),
        }
    }

    pub fn with_nutrition(mut self, size: DrinkSize, profile: NutritionProfile) -> Self {
        self.nutrition_by_size.insert(size, profile);
        self
    }

    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    pub fn with_image(mut self, image_ref: &str) -> Self {
        self.image_ref = Some(image_ref.to_string());
        self
    }

    pub fn nutrition(&self, size: DrinkSize) -> Option<&NutritionProfile> {
        self.nutrition_by_size.get(&size)
    }

    /// Id used when a record carries none: lowercase name, words joined by `-`.
    pub fn derive_id(name: &str) -> String {
        name.split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Canonical key for lookups (lowercase id).
    pub fn key(&self) -> String {
        self.id.to_lowercase()
    }
}

/// On-disk shape of a drink in a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DrinkRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "imageURL", default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(default)]
    category: String,
    #[serde(default)]
    is_featured: Option<bool>,
    #[serde(default)]
    is_available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nutrition_tall: Option<NutritionProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nutrition_grande: Option<NutritionProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nutrition_venti: Option<NutritionProfile>,
}

impl From<DrinkRecord> for Drink {
    fn from(record: DrinkRecord) -> Self {
        let id = record
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Drink::derive_id(&record.name));

        let nutrition_by_size = [
            (DrinkSize::Tall, record.nutrition_tall),
            (DrinkSize::Grande, record.nutrition_grande),
            (DrinkSize::Venti, record.nutrition_venti),
        ]
        .into_iter()
        .filter_map(|(size, profile)| profile.map(|p| (size, p)))
        .collect();

        Drink {
            id,
            name: record.name,
            description: record.description,
            image_ref: record.image_url,
            category: DrinkCategory::from_catalog_str(&record.category),
            is_featured: record.is_featured.unwrap_or(false),
            is_available: record.is_available.unwrap_or(true),
            nutrition_by_size,
        }
    }
}

impl From<Drink> for DrinkRecord {
    fn from(drink: Drink) -> Self {
        DrinkRecord {
            id: Some(drink.id),
            category: drink.category.ident().to_string(),
            is_featured: Some(drink.is_featured),
            is_available: Some(drink.is_available),
            nutrition_tall: drink.nutrition_by_size.get(&DrinkSize::Tall).copied(),
            nutrition_grande: drink.nutrition_by_size.get(&DrinkSize::Grande).copied(),
            nutrition_venti: drink.nutrition_by_size.get(&DrinkSize::Venti).copied(),
            name: drink.name,
            description: drink.description,
            image_url: drink.image_ref,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_lenient_parse() {
        assert_eq!(DrinkCategory::from_catalog_str("coldBrew"), DrinkCategory::ColdBrew);
        assert_eq!(DrinkCategory::from_catalog_str("Hot Chocolate"), DrinkCategory::HotChocolate);
        assert_eq!(DrinkCategory::from_catalog_str("COFFEE"), DrinkCategory::Coffee);
        assert_eq!(DrinkCategory::from_catalog_str("咖啡"), DrinkCategory::Coffee);
        assert_eq!(DrinkCategory::from_catalog_str("冷萃咖啡"), DrinkCategory::ColdBrew);
        assert_eq!(DrinkCategory::from_catalog_str(" 热巧克力 "), DrinkCategory::HotChocolate);
        assert_eq!(DrinkCategory::from_catalog_str("星冰乐"), DrinkCategory::Frappuccino);
        assert_eq!(DrinkCategory::from_catalog_str("smoothie"), DrinkCategory::Other);
        assert_eq!(DrinkCategory::from_catalog_str(""), DrinkCategory::Other);
    }

    #[test]
    fn test_category_strict_parse() {
        assert_eq!("tea".parse::<DrinkCategory>().unwrap(), DrinkCategory::Tea);
        assert!("smoothie".parse::<DrinkCategory>().is_err());
    }

    #[test]
    fn test_legacy_raw_values_round_trip() {
        for category in DrinkCategory::ALL {
            assert_eq!(DrinkCategory::from_catalog_str(category.legacy_raw_value()), category);
        }
    }

    #[test]
    fn test_default_size_is_grande() {
        assert_eq!(DrinkSize::default(), DrinkSize::Grande);
    }

    #[test]
    fn test_size_parse() {
        assert_eq!("venti".parse::<DrinkSize>().unwrap(), DrinkSize::Venti);
        assert_eq!(" Tall ".parse::<DrinkSize>().unwrap(), DrinkSize::Tall);
        assert!("trenta".parse::<DrinkSize>().is_err());
    }

    #[test]
    fn test_record_without_id_or_sizes() {
        let json = r#"{
            "name": "Caramel  Macchiato",
            "description": "Vanilla, milk, espresso",
            "category": "coffee",
            "nutritionGrande": {"calories": 250, "caffeine": 150, "fat": 7, "sugar": 33, "protein": 10}
        }"#;

        let drink: Drink = serde_json::from_str(json).unwrap();
        assert_eq!(drink.id, "caramel-macchiato");
        assert!(!drink.is_featured);
        assert!(drink.is_available);
        assert!(drink.image_ref.is_none());
        assert_eq!(drink.nutrition(DrinkSize::Grande).unwrap().calories, 250);
        assert!(drink.nutrition(DrinkSize::Tall).is_none());
        assert!(drink.nutrition(DrinkSize::Venti).is_none());
    }

    #[test]
    fn test_record_roundtrip_keeps_wire_names() {
        let drink = Drink::new("Flat White", "Ristretto and whole milk", DrinkCategory::Espresso)
            .with_image("https://example.com/flat-white.jpg")
            .with_nutrition(DrinkSize::Tall, NutritionProfile::new(170, 130, 9.0, 13.0, 9.0));

        let value = serde_json::to_value(&drink).unwrap();
        assert_eq!(value["category"], "espresso");
        assert_eq!(value["imageURL"], "https://example.com/flat-white.jpg");
        assert_eq!(value["nutritionTall"]["caffeine"], 130);
        assert!(value.get("nutritionGrande").is_none());

        let back: Drink = serde_json::from_value(value).unwrap();
        assert_eq!(back, drink);
    }

    #[test]
    fn test_profile_validation() {
        assert!(NutritionProfile::new(5, 205, 0.0, 0.0, 0.0).is_valid());
        assert!(!NutritionProfile::new(5, 205, -1.0, 0.0, 0.0).is_valid());
        assert!(!NutritionProfile::new(5, 205, 0.0, f64::NAN, 0.0).is_valid());
    }
}
