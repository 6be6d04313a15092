//! Read-only reference data loaded once at startup: dropdown options, model
//! metrics and feature importances.

pub mod artifacts;
pub mod dataset;

pub use artifacts::{ClassifierMetrics, FeatureMetadata, ModelMetrics, ModelParams};
pub use dataset::DatasetOptions;

use crate::config::ArtifactPaths;
use crate::error::Result;
use crate::models::{FeatureImportance, LatZone, MetadataResponse, ModelInfo, TimeOfDay};

#[derive(Debug, Clone)]
pub struct ReferenceData {
    line_names: Vec<String>,
    directions: Vec<String>,
    model_info: ModelInfo,
    /// In the order the model exported them
    feature_importances: Vec<FeatureImportance>,
}

impl ReferenceData {
    /// Load every startup artifact. Any missing or malformed file is fatal.
    pub fn load(paths: &ArtifactPaths) -> Result<Self> {
        tracing::info!("Loading model parameters from {}", paths.model_params.display());
        let params: ModelParams = artifacts::read_json(&paths.model_params)?;

        tracing::info!(
            "Loading feature metadata from {}",
            paths.feature_metadata.display()
        );
        let metadata: FeatureMetadata = artifacts::read_json(&paths.feature_metadata)?;

        tracing::info!("Loading model metrics from {}", paths.model_metrics.display());
        let metrics: ModelMetrics = artifacts::read_json(&paths.model_metrics)?;

        tracing::info!("Reading training data from {}", paths.train_data.display());
        let options = dataset::read_options(&paths.train_data)?;

        Self::from_parts(params, metadata, metrics, options)
    }

    pub fn from_parts(
        params: ModelParams,
        metadata: FeatureMetadata,
        metrics: ModelMetrics,
        options: DatasetOptions,
    ) -> Result<Self> {
        params.validate()?;

        let feature_importances = params
            .feature_names
            .into_iter()
            .zip(params.feature_importances)
            .map(|(name, importance)| FeatureImportance { name, importance })
            .collect();

        Ok(ReferenceData {
            line_names: options.line_names,
            directions: options.directions,
            model_info: ModelInfo {
                accuracy: metrics.random_forest.accuracy,
                auc_roc: metrics.random_forest.auc_roc,
                f1: metrics.random_forest.f1,
                num_trees: params.num_trees,
                threshold: metadata.threshold,
            },
            feature_importances,
        })
    }

    pub fn model_info(&self) -> &ModelInfo {
        &self.model_info
    }

    pub fn line_names(&self) -> &[String] {
        &self.line_names
    }

    pub fn directions(&self) -> &[String] {
        &self.directions
    }

    pub fn list_options(&self) -> MetadataResponse {
        MetadataResponse {
            line_names: self.line_names.clone(),
            directions: self.directions.clone(),
            time_periods: TimeOfDay::ALL.iter().map(|p| p.to_string()).collect(),
            lat_zones: LatZone::ALL.iter().map(|z| z.to_string()).collect(),
            model_info: self.model_info.clone(),
        }
    }

    /// The `n` most important features, highest first. Equal importances keep
    /// their exported order.
    pub fn top_feature_importances(&self, n: usize) -> Vec<FeatureImportance> {
        let mut ranked = self.feature_importances.clone();
        // stable sort
        ranked.sort_by(|a, b| b.importance.total_cmp(&a.importance));
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(names: &[&str], importances: &[f64]) -> ReferenceData {
        ReferenceData::from_parts(
            ModelParams {
                num_trees: 100,
                feature_names: names.iter().map(|s| s.to_string()).collect(),
                feature_importances: importances.to_vec(),
            },
            FeatureMetadata { threshold: 0.42 },
            ModelMetrics {
                random_forest: ClassifierMetrics {
                    accuracy: 0.9,
                    auc_roc: 0.93,
                    f1: 0.87,
                },
            },
            DatasetOptions {
                line_names: vec!["22".to_string()],
                directions: vec!["inbound".to_string(), "outbound".to_string()],
            },
        )
        .unwrap()
    }

    #[test]
    fn test_top_features_descending_with_stable_ties() {
        let data = reference(&["a", "b", "c", "d"], &[0.1, 0.3, 0.1, 0.5]);
        let names: Vec<_> = data
            .top_feature_importances(10)
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn test_top_features_truncates() {
        let names: Vec<String> = (0..20).map(|i| format!("f{}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let importances: Vec<f64> = (0..20).map(|i| i as f64 / 100.0).collect();
        let data = reference(&refs, &importances);

        let top = data.top_feature_importances(15);
        assert_eq!(top.len(), 15);
        assert_eq!(top[0].name, "f19");
        assert!(top.windows(2).all(|w| w[0].importance >= w[1].importance));
    }

    #[test]
    fn test_list_options() {
        let options = reference(&["a"], &[1.0]).list_options();

        assert_eq!(
            options.time_periods,
            vec!["night", "morning_rush", "midday", "evening_rush", "late_night"]
        );
        assert_eq!(
            options.lat_zones,
            vec!["south", "mid_south", "mid_north", "north"]
        );
        assert_eq!(options.model_info.num_trees, 100);
        assert_eq!(options.model_info.threshold, 0.42);
        assert_eq!(options.directions, vec!["inbound", "outbound"]);
    }
}
