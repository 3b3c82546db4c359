pub mod handlers;
mod parser;

pub use parser::{parse_message, FormatError};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::webhook_routes())
}
