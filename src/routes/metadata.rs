use crate::models::MetadataResponse;
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// GET /metadata
/// Dropdown options for the prediction form plus model metrics
pub async fn get_metadata(State(state): State<Arc<AppState>>) -> Json<MetadataResponse> {
    Json(state.reference.list_options())
}
