pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use catalog::{CatalogFilterEngine, FavoritesSet, FilterCriteria};
pub use error::{BrewError, Result};
pub use models::{Drink, DrinkCategory, DrinkMood, DrinkSize, NutritionProfile};
