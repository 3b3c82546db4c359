use time::OffsetDateTime;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    error::AppError,
    meals::{dto::MealLogRequest, repo_types::MealEntry},
    nutrition::sum_nutrients,
    storage::Store,
};

fn validate_quantities(req: &MealLogRequest) -> Result<(), AppError> {
    match req
        .items
        .iter()
        .find(|i| !(i.quantity.is_finite() && i.quantity >= 0.0))
    {
        Some(bad) => Err(AppError::Validation(format!(
            "Invalid quantity {} for {:?}",
            bad.quantity, bad.name
        ))),
        None => Ok(()),
    }
}

/// Aggregates the request's nutrients and appends it to the owner's log.
pub async fn log_meal(
    store: &dyn Store,
    req: MealLogRequest,
) -> Result<MealEntry, AppError> {
    if store.get_user(&req.username).await?.is_none() {
        warn!(username = %req.username, "log meal for unknown user");
        return Err(AppError::user_not_found());
    }
    validate_quantities(&req)?;

    let totals = sum_nutrients(req.items.iter().map(|i| (i.name.as_str(), i.quantity)));
    let entry = MealEntry {
        id: Uuid::new_v4(),
        username: req.username,
        meal_type: req.meal_type,
        items: req.items,
        totals,
        created_at: OffsetDateTime::now_utc(),
    };

    if !store.append_meal(entry.clone()).await? {
        return Err(AppError::user_not_found());
    }

    info!(
        username = %entry.username,
        meal_id = %entry.id,
        meal_type = %entry.meal_type,
        calories = entry.totals.calories,
        "meal logged"
    );
    Ok(entry)
}

pub async fn list_meals(
    store: &dyn Store,
    username: &str,
) -> Result<Vec<MealEntry>, AppError> {
    store
        .list_meals(username)
        .await?
        .ok_or_else(AppError::user_not_found)
}
