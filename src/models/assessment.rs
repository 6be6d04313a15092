use crate::models::FeatureVector;
use serde::{Deserialize, Serialize};

/// Model details attached to every assessment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentModelInfo {
    pub model: String,
    pub trees: u32,
    pub threshold: f64,
}

/// Response body of `/api/predict`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RiskAssessment {
    /// 1 = high risk, 0 = low risk
    pub prediction: u8,
    pub risk_label: String,
    /// Clamped risk score in [0, 1]
    pub probability: f64,
    /// Distance from the decision boundary, scaled to [0, 1]
    pub confidence: f64,
    pub features_received: FeatureVector,
    pub model_info: AssessmentModelInfo,
    /// RFC 3339, UTC
    pub timestamp: String,
}
