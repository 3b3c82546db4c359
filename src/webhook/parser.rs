use thiserror::Error;

use crate::meals::{
    dto::MealLogRequest,
    repo_types::{MealItem, MealType},
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("Invalid message format: expected 3 '|' separated fields, got {0}")]
    FieldCount(usize),

    #[error("Invalid quantity {value:?} for {name:?}")]
    InvalidQuantity { name: String, value: String },

    #[error("Unknown meal type {0:?}")]
    UnknownMealType(String),
}

/// Parses `username|meal_type|food:qty,food:qty,...`.
///
/// Clauses without a `:` are dropped. An unparsable quantity or an unknown
/// meal type rejects the whole message.
pub fn parse_message(message: &str) -> Result<MealLogRequest, FormatError> {
    let parts: Vec<&str> = message.split('|').collect();
    let &[username, meal_type, items_str] = &parts[..] else {
        return Err(FormatError::FieldCount(parts.len()));
    };

    let meal_type: MealType = meal_type
        .parse()
        .map_err(|_| FormatError::UnknownMealType(meal_type.to_string()))?;

    let mut items = Vec::new();
    for clause in items_str.split(',') {
        let Some((name, qty)) = clause.split_once(':') else {
            continue;
        };
        let name = name.trim();
        let quantity = qty
            .trim()
            .parse::<f64>()
            .map_err(|_| FormatError::InvalidQuantity {
                name: name.to_string(),
                value: qty.to_string(),
            })?;
        items.push(MealItem {
            name: name.to_string(),
            quantity,
        });
    }

    Ok(MealLogRequest {
        username: username.to_string(),
        meal_type,
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, quantity: f64) -> MealItem {
        MealItem {
            name: name.into(),
            quantity,
        }
    }

    #[test]
    fn parses_well_formed_message() {
        let req = parse_message("alice|lunch|apple:1,banana:2").unwrap();
        assert_eq!(req.username, "alice");
        assert_eq!(req.meal_type, MealType::Lunch);
        assert_eq!(req.items, vec![item("apple", 1.0), item("banana", 2.0)]);
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        assert_eq!(
            parse_message("alice|lunch").unwrap_err(),
            FormatError::FieldCount(2)
        );
        assert_eq!(
            parse_message("alice|lunch|apple:1|extra").unwrap_err(),
            FormatError::FieldCount(4)
        );
        assert_eq!(parse_message("").unwrap_err(), FormatError::FieldCount(1));
    }

    #[test]
    fn unknown_meal_type_is_rejected() {
        assert_eq!(
            parse_message("alice|brunch|apple:1").unwrap_err(),
            FormatError::UnknownMealType("brunch".into())
        );
    }

    #[test]
    fn clauses_without_colon_are_dropped() {
        let req = parse_message("alice|snack|apple:1,garbage,,rice:0.5").unwrap();
        assert_eq!(req.items, vec![item("apple", 1.0), item("rice", 0.5)]);

        let empty = parse_message("alice|snack|").unwrap();
        assert!(empty.items.is_empty());
    }

    #[test]
    fn bad_quantity_fails_whole_message() {
        let err = parse_message("alice|dinner|apple:1,banana:lots").unwrap_err();
        assert_eq!(
            err,
            FormatError::InvalidQuantity {
                name: "banana".into(),
                value: "lots".into()
            }
        );
        assert!(matches!(
            parse_message("alice|dinner|apple:1:2").unwrap_err(),
            FormatError::InvalidQuantity { .. }
        ));
    }

    #[test]
    fn trims_names_and_quantities() {
        let req = parse_message("bob|breakfast| chicken breast : 1.5 ").unwrap();
        assert_eq!(req.items, vec![item("chicken breast", 1.5)]);
    }
}
