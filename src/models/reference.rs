use serde::{Deserialize, Serialize};

/// Summary of the trained model shown by `/api/metadata`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelInfo {
    pub accuracy: f64,
    pub auc_roc: f64,
    pub f1: f64,
    pub num_trees: u32,
    pub threshold: f64,
}

/// Dropdown options and model summary for the prediction form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetadataResponse {
    pub line_names: Vec<String>,
    pub directions: Vec<String>,
    pub time_periods: Vec<String>,
    pub lat_zones: Vec<String>,
    pub model_info: ModelInfo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureImportance {
    pub name: String,
    pub importance: f64,
}

/// Parallel arrays, ordered by descending importance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureImportanceResponse {
    pub features: Vec<String>,
    pub importances: Vec<f64>,
}

impl FromIterator<FeatureImportance> for FeatureImportanceResponse {
    fn from_iter<I: IntoIterator<Item = FeatureImportance>>(iter: I) -> Self {
        let (features, importances) = iter
            .into_iter()
            .map(|fi| (fi.name, fi.importance))
            .unzip();
        FeatureImportanceResponse {
            features,
            importances,
        }
    }
}
