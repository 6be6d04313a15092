//! Stable application-wide constants.
//!
//! Values here are scoring coefficients, artifact file names, and default
//! fallbacks for env-var-based configuration. They should rarely change.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "5000";

// --- Artifact locations (used when DATA_DIR / MODEL_DIR env vars are absent) ---

/// Directory holding the processed training data.
pub const DEFAULT_DATA_DIR: &str = "data/processed";
/// Subdirectory of the data directory holding model artifacts.
pub const MODELS_SUBDIR: &str = "models";
/// Default training split used to enumerate line names and directions.
pub const DEFAULT_TRAIN_DATA_FILE: &str = "train_split.csv";
/// Directory served at `/`.
pub const DEFAULT_STATIC_DIR: &str = "static";

pub const MODEL_PARAMS_FILE: &str = "rf_model_params.json";
pub const FEATURE_METADATA_FILE: &str = "feature_metadata.json";
pub const MODEL_METRICS_FILE: &str = "model_metrics.json";

// --- Reference data ---

/// Display name of the model reported alongside each assessment.
pub const MODEL_NAME: &str = "Random Forest Classifier";
/// Number of entries returned by `/api/feature-importance`.
pub const TOP_FEATURE_COUNT: usize = 15;

// --- Feature derivation ---

/// Departure hours counted as commuter peak (7-9 and 17-19).
pub const PEAK_HOURS: [u8; 6] = [7, 8, 9, 17, 18, 19];
/// `day_of_week` values at or above this are weekend days (0 = Monday).
pub const WEEKEND_START_DAY: u8 = 5;
pub const HOURS_PER_DAY: f64 = 24.0;

// --- Risk scoring weights ---

pub const RUSH_HOUR_WEIGHT: f64 = 0.3;
pub const MIDDAY_WEIGHT: f64 = 0.15;
pub const WEEKDAY_WEIGHT: f64 = 0.25;
pub const WEEKEND_WEIGHT: f64 = 0.1;
pub const LONG_ROUTE_WEIGHT: f64 = 0.25;
pub const MEDIUM_ROUTE_WEIGHT: f64 = 0.15;
pub const CENTRAL_ZONE_WEIGHT: f64 = 0.15;

/// Route complexity (stops x minutes) above which a route counts as long.
pub const LONG_ROUTE_COMPLEXITY: f64 = 300.0;
/// Route complexity above which a route counts as medium length.
pub const MEDIUM_ROUTE_COMPLEXITY: f64 = 150.0;

/// Scores strictly above this are labelled high risk. Confidence is measured
/// as distance from this boundary.
pub const DECISION_BOUNDARY: f64 = 0.5;

pub const HIGH_RISK_LABEL: &str = "High Risk";
pub const LOW_RISK_LABEL: &str = "Low Risk";
