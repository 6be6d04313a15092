use crate::error::{AppError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

/// Exported parameters of the trained random forest.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ModelParams {
    pub num_trees: u32,
    pub feature_names: Vec<String>,
    pub feature_importances: Vec<f64>,
}

impl ModelParams {
    pub fn validate(&self) -> Result<()> {
        if self.feature_names.len() != self.feature_importances.len() {
            return Err(AppError::StartupLoad(format!(
                "model params list {} feature names but {} importances",
                self.feature_names.len(),
                self.feature_importances.len()
            )));
        }
        if let Some((name, value)) = self
            .feature_names
            .iter()
            .zip(&self.feature_importances)
            .find(|(_, value)| !value.is_finite())
        {
            return Err(AppError::StartupLoad(format!(
                "feature '{}' has non-finite importance {}",
                name, value
            )));
        }
        Ok(())
    }
}

/// Feature metadata written next to the model. Only the decision threshold is read.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FeatureMetadata {
    pub threshold: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClassifierMetrics {
    pub accuracy: f64,
    pub auc_roc: f64,
    pub f1: f64,
}

/// Evaluation metrics keyed by model family.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ModelMetrics {
    pub random_forest: ClassifierMetrics,
}

/// Read and parse a JSON artifact, naming the file in any error.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        AppError::StartupLoad(format!("failed to read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        AppError::StartupLoad(format!("failed to parse {}: {}", path.display(), e))
    })
}
