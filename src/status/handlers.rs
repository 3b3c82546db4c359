use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{error::AppError, state::AppState};

use super::{dto::StatusSnapshot, services::user_status};

pub fn status_routes() -> Router<AppState> {
    Router::new().route("/status/:username", get(get_status))
}

#[instrument(skip(state))]
pub async fn get_status(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<StatusSnapshot>, AppError> {
    Ok(Json(user_status(state.store.as_ref(), &username).await?))
}
