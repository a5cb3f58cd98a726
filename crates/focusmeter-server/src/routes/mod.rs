pub mod predict;
pub mod system;

use crate::state::AppState;
use axum::Router;
use std::sync::Arc;

pub fn system_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", axum::routing::get(system::root))
        .route("/health", axum::routing::get(system::health))
}

pub fn predict_routes() -> Router<Arc<AppState>> {
    Router::new().route("/predict", axum::routing::post(predict::predict))
}
