use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use tracing::{instrument, warn};

use crate::{
    error::AppError,
    extract::AppJson,
    meals::{repo_types::MealEntry, services::log_meal},
    state::AppState,
};

use super::parse_message;

#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    pub message: String,
}

pub fn webhook_routes() -> Router<AppState> {
    Router::new().route("/webhook", post(receive))
}

#[instrument(skip(state, payload))]
pub async fn receive(
    State(state): State<AppState>,
    AppJson(payload): AppJson<WebhookPayload>,
) -> Result<(StatusCode, Json<MealEntry>), AppError> {
    let request = parse_message(&payload.message).map_err(|e| {
        warn!(error = %e, "rejected webhook message");
        e
    })?;
    let entry = log_meal(state.store.as_ref(), request).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}
