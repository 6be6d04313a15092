use axum::Router;
use busrisk::config::ArtifactPaths;
use busrisk::reference::ReferenceData;
use busrisk::AppState;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;

/// Directory holding the sample model artifacts
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Artifact paths in the default `<data>/models` layout
#[allow(dead_code)]
pub fn fixture_paths() -> ArtifactPaths {
    ArtifactPaths::from_data_dir(fixtures_dir())
}

#[allow(dead_code)]
pub fn load_reference() -> ReferenceData {
    ReferenceData::load(&fixture_paths()).expect("Failed to load fixture artifacts")
}

/// Router mounted the same way as the server binary
#[allow(dead_code)]
pub fn setup_test_app() -> Router {
    let state = Arc::new(AppState::new(load_reference()));
    Router::new().nest("/api", busrisk::routes::create_router(state))
}

/// The journey used in the API documentation
#[allow(dead_code)]
pub fn sample_journey() -> Value {
    json!({
        "line_name": "22",
        "direction": "outbound",
        "departure_hour": 8,
        "day_of_week": 1,
        "stop_sequence": 10,
        "latitude": 51.48,
        "longitude": 0.05,
        "run_time_min": 25,
        "time_of_day": "morning_rush",
        "lat_zone": "mid_south"
    })
}
