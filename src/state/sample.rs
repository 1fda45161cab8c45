use crate::models::{Drink, DrinkCategory, DrinkSize, NutritionProfile};

const IMAGE_BASE: &str = "https://www.starbucks.com.cn/images/products";

fn sized(
    drink: Drink,
    tall: NutritionProfile,
    grande: NutritionProfile,
    venti: NutritionProfile,
) -> Drink {
    drink
        .with_nutrition(DrinkSize::Tall, tall)
        .with_nutrition(DrinkSize::Grande, grande)
        .with_nutrition(DrinkSize::Venti, venti)
}

fn image(file: &str) -> String {
    format!("{}/{}", IMAGE_BASE, file)
}

/// Built-in catalog used when no catalog file can be loaded.
pub fn sample_drinks() -> Vec<Drink> {
    type N = NutritionProfile;

    vec![
        sized(
            Drink::new(
                "Latte",
                "Rich espresso blended with silky steamed milk for a mellow cup.",
                DrinkCategory::Coffee,
            )
            .with_image(&image("latte.jpg"))
            .featured(),
            N::new(190, 75, 7.0, 18.0, 10.0),
            N::new(250, 150, 10.0, 23.0, 13.0),
            N::new(340, 225, 14.0, 31.0, 17.0),
        ),
        sized(
            Drink::new(
                "Caffe Americano",
                "Espresso topped up with hot water for a bold, clean coffee flavor.",
                DrinkCategory::Coffee,
            )
            .with_image(&image("caffe-americano.jpg")),
            N::new(15, 150, 0.0, 0.0, 1.0),
            N::new(20, 225, 0.0, 0.0, 1.0),
            N::new(25, 300, 0.0, 0.0, 1.0),
        ),
        sized(
            Drink::new(
                "Cold Brew",
                "Beans steeped cold for 20 hours for a smooth, velvety body.",
                DrinkCategory::ColdBrew,
            )
            .with_image(&image("cold-brew.jpg"))
            .featured(),
            N::new(5, 155, 0.0, 0.0, 0.0),
            N::new(5, 205, 0.0, 0.0, 0.0),
            N::new(10, 310, 0.0, 0.0, 0.0),
        ),
        sized(
            Drink::new(
                "Mocha Frappuccino",
                "Coffee, milk and ice blended with mocha sauce under whipped cream.",
                DrinkCategory::Frappuccino,
            )
            .with_image(&image("mocha-frappuccino.jpg")),
            N::new(290, 65, 11.0, 40.0, 4.0),
            N::new(400, 95, 15.0, 55.0, 5.0),
            N::new(520, 130, 19.0, 73.0, 7.0),
        ),
        sized(
            Drink::new(
                "Matcha Tea Latte",
                "Premium matcha powder with steamed milk for a distinct green tea taste.",
                DrinkCategory::Tea,
            )
            .with_image(&image("green-tea-latte.jpg")),
            N::new(240, 55, 7.0, 31.0, 9.0),
            N::new(320, 80, 9.0, 41.0, 12.0),
            N::new(430, 110, 12.0, 55.0, 16.0),
        ),
        sized(
            Drink::new(
                "Strawberry Acai Refresher",
                "Strawberry juice shaken with ice and real strawberry pieces.",
                DrinkCategory::Refreshers,
            )
            .with_image(&image("strawberry-acai.jpg")),
            N::new(90, 20, 0.0, 20.0, 0.0),
            N::new(130, 30, 0.0, 29.0, 0.0),
            N::new(170, 40, 0.0, 38.0, 0.0),
        ),
        sized(
            Drink::new(
                "Espresso",
                "Carefully pulled espresso, intense and full bodied, the base of many drinks.",
                DrinkCategory::Espresso,
            )
            .with_image(&image("espresso.jpg")),
            N::new(10, 75, 0.0, 0.0, 0.0),
            N::new(15, 150, 0.0, 0.0, 1.0),
            N::new(20, 225, 0.0, 0.0, 1.0),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_drinks_complete() {
        let drinks = sample_drinks();
        assert_eq!(drinks.len(), 7);
        for drink in &drinks {
            assert_eq!(drink.nutrition_by_size.len(), 3, "{}", drink.name);
            assert!(drink.nutrition_by_size.values().all(|p| p.is_valid()));
        }
        assert_eq!(drinks.iter().filter(|d| d.is_featured).count(), 2);
    }
}
