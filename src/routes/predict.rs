use crate::error::{AppError, Result};
use crate::models::{JourneyInput, RiskAssessment};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

/// POST /predict
/// Score a single journey. Any malformed body is a 400 with `{error}`.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<RiskAssessment>> {
    let Json(body) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let input = JourneyInput::from_json(body)?;

    let assessment = state.scorer.assess(&input);

    tracing::info!(
        line = %input.line_name,
        direction = %input.direction,
        hour = input.departure_hour,
        prediction = assessment.prediction,
        "Prediction: {} (p={:.3}, confidence={:.3})",
        assessment.risk_label,
        assessment.probability,
        assessment.confidence
    );

    Ok(Json(assessment))
}
