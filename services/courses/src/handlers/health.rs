use axum::extract::State;
use axum::http::StatusCode;

use ecourse_core::health::database_ready;

use crate::state::AppState;

pub use ecourse_core::health::healthz;

/// `GET /readyz`: ready once the database answers.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    database_ready(&state.db).await
}
