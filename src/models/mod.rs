mod drink;
mod mood;
mod nutrient;

pub use drink::{Drink, DrinkCategory, DrinkSize, NutritionProfile};
pub use mood::DrinkMood;
pub use nutrient::NutrientKind;
