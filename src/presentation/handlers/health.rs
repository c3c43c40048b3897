use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub local_model: String,
    pub cloud_api_key_configured: bool,
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            local_model: state.settings.local.model.clone(),
            cloud_api_key_configured: state
                .settings
                .cloud
                .api_key
                .as_deref()
                .is_some_and(|k| !k.trim().is_empty()),
        }),
    )
}
