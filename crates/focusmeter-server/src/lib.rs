pub mod error;
pub mod routes;
pub mod state;

use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Request bodies are three small numbers; anything bigger is noise.
const MAX_BODY_BYTES: usize = 16 * 1024;

pub fn app(state: Arc<AppState>) -> Router {
    routes::system_routes()
        .merge(routes::predict_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
