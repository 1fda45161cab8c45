use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BrewError;

/// A named bundle of filter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrinkMood {
    Energize,
    Relax,
    Refresh,
    Indulge,
    Warm,
}

impl DrinkMood {
    pub const ALL: [DrinkMood; 5] = [
        DrinkMood::Energize,
        DrinkMood::Relax,
        DrinkMood::Refresh,
        DrinkMood::Indulge,
        DrinkMood::Warm,
    ];

    pub fn ident(self) -> &'static str {
        match self {
            DrinkMood::Energize => "energize",
            DrinkMood::Relax => "relax",
            DrinkMood::Refresh => "refresh",
            DrinkMood::Indulge => "indulge",
            DrinkMood::Warm => "warm",
        }
    }

    /// One-line description shown in the mood picker.
    pub fn blurb(self) -> &'static str {
        match self {
            DrinkMood::Energize => "high caffeine pick-me-ups",
            DrinkMood::Relax => "low caffeine teas and refreshers",
            DrinkMood::Refresh => "cold and light",
            DrinkMood::Indulge => "sweet treats, calories be damned",
            DrinkMood::Warm => "hot and cozy",
        }
    }
}

impl FromStr for DrinkMood {
    type Err = BrewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.ident().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BrewError::UnknownValue {
                kind: "mood",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for DrinkMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ident())
    }
}
