use std::collections::HashMap;

use lazy_static::lazy_static;

/// Nutrient values for one serving of a food.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodRecord {
    pub name: &'static str,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

const fn food(
    name: &'static str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
) -> FoodRecord {
    FoodRecord {
        name,
        calories,
        protein,
        carbs,
        fat,
    }
}

const FOODS: &[FoodRecord] = &[
    food("apple", 95.0, 0.5, 25.0, 0.3),
    food("banana", 105.0, 1.3, 27.0, 0.4),
    food("chicken breast", 165.0, 31.0, 0.0, 3.6),
    food("rice", 206.0, 4.3, 45.0, 0.4),
];

lazy_static! {
    static ref FOOD_TABLE: HashMap<&'static str, FoodRecord> =
        FOODS.iter().map(|f| (f.name, *f)).collect();
}

/// Case-insensitive lookup. Unknown names are `None`, never an error.
pub fn lookup(name: &str) -> Option<&'static FoodRecord> {
    FOOD_TABLE.get(name.to_lowercase().as_str())
}
