use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::foods;

/// Calories, protein, carbs and fat summed over some set of foods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl AddAssign for NutrientTotals {
    fn add_assign(&mut self, rhs: Self) {
        self.calories += rhs.calories;
        self.protein += rhs.protein;
        self.carbs += rhs.carbs;
        self.fat += rhs.fat;
    }
}

/// Sums the reference values of every resolvable `(name, quantity)` pair.
///
/// Names missing from the food table contribute nothing. Quantities are
/// used as given; callers validate them.
pub fn sum_nutrients<'a, I>(items: I) -> NutrientTotals
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut totals = NutrientTotals::default();
    for (name, quantity) in items {
        let Some(food) = foods::lookup(name) else {
            continue;
        };
        totals += NutrientTotals {
            calories: food.calories * quantity,
            protein: food.protein * quantity,
            carbs: food.carbs * quantity,
            fat: food.fat * quantity,
        };
    }
    totals
}
