use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /health - Report what was loaded at startup
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "num_trees": state.reference.model_info().num_trees,
        "line_count": state.reference.line_names().len(),
    }))
}
