use axum::{Json, extract::State};

use crate::domain::types::OAuth2Info;
use crate::state::AppState;

// ── GET /oauth2-info ─────────────────────────────────────────────────────────

pub async fn get_oauth2_info(State(state): State<AppState>) -> Json<OAuth2Info> {
    Json(OAuth2Info::clone(&state.oauth2_info))
}
