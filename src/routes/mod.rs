pub mod feature_importance;
pub mod health;
pub mod metadata;
pub mod predict;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/metadata", get(metadata::get_metadata))
        .route("/predict", post(predict::predict))
        .route(
            "/feature-importance",
            get(feature_importance::get_feature_importance),
        )
        .route("/health", get(health::health_check))
        .with_state(state)
}
