use crate::constants::TOP_FEATURE_COUNT;
use crate::models::FeatureImportanceResponse;
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// GET /feature-importance
pub async fn get_feature_importance(
    State(state): State<Arc<AppState>>,
) -> Json<FeatureImportanceResponse> {
    Json(
        state
            .reference
            .top_feature_importances(TOP_FEATURE_COUNT)
            .into_iter()
            .collect(),
    )
}
