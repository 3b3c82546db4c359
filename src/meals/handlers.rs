use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::{error::AppError, extract::AppJson, state::AppState};

use super::dto::MealLogRequest;
use super::repo_types::MealEntry;
use super::services;

pub fn meal_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", post(log_meal))
        .route("/meals/:username", get(list_meals))
}

#[instrument(skip(state, payload), fields(username = %payload.username))]
pub async fn log_meal(
    State(state): State<AppState>,
    AppJson(payload): AppJson<MealLogRequest>,
) -> Result<(StatusCode, Json<MealEntry>), AppError> {
    let entry = services::log_meal(state.store.as_ref(), payload).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

#[instrument(skip(state))]
pub async fn list_meals(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Vec<MealEntry>>, AppError> {
    Ok(Json(services::list_meals(state.store.as_ref(), &username).await?))
}
