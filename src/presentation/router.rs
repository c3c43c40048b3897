use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::domain::BackendKind;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{cloud_chat_handler, health_handler, local_chat_handler};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.settings.max_body_bytes());

    Router::new()
        .route("/health", get(health_handler))
        .route(BackendKind::Local.route(), post(local_chat_handler))
        .route(BackendKind::Cloud.route(), post(cloud_chat_handler))
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
