use serde::Deserialize;

use crate::meals::repo_types::{MealItem, MealType};

/// A meal to log, from the JSON API or a parsed webhook message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MealLogRequest {
    pub username: String,
    pub meal_type: MealType,
    pub items: Vec<MealItem>,
}
