use crate::constants::*;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub artifacts: ArtifactPaths,
    pub static_dir: PathBuf,
}

/// Filesystem locations of the four artifacts read at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactPaths {
    pub model_params: PathBuf,
    pub feature_metadata: PathBuf,
    pub model_metrics: PathBuf,
    pub train_data: PathBuf,
}

impl ArtifactPaths {
    /// Lay out artifacts the way the training pipeline writes them: model
    /// files under `model_dir`, the training split directly under `data_dir`.
    pub fn new(data_dir: &Path, model_dir: &Path, train_data_file: &str) -> Self {
        Self {
            model_params: model_dir.join(MODEL_PARAMS_FILE),
            feature_metadata: model_dir.join(FEATURE_METADATA_FILE),
            model_metrics: model_dir.join(MODEL_METRICS_FILE),
            train_data: data_dir.join(train_data_file),
        }
    }

    /// Convenience for the default layout where models live in `<data_dir>/models`.
    pub fn from_data_dir(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self::new(
            data_dir,
            &data_dir.join(MODELS_SUBDIR),
            DEFAULT_TRAIN_DATA_FILE,
        )
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let data_dir = PathBuf::from(
            env::var("DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string()),
        );
        let model_dir = env::var("MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join(MODELS_SUBDIR));

        let train_data_file =
            env::var("TRAIN_DATA_FILE").unwrap_or_else(|_| DEFAULT_TRAIN_DATA_FILE.to_string());
        if train_data_file.trim().is_empty() {
            return Err("TRAIN_DATA_FILE must not be empty".to_string());
        }

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            artifacts: ArtifactPaths::new(&data_dir, &model_dir, &train_data_file),
            static_dir: PathBuf::from(
                env::var("STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string()),
            ),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
