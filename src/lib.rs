// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod reference;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

use reference::ReferenceData;
use services::RiskScorer;

/// Immutable state shared by every request handler.
pub struct AppState {
    pub reference: ReferenceData,
    pub scorer: RiskScorer,
}

impl AppState {
    pub fn new(reference: ReferenceData) -> Self {
        let scorer = RiskScorer::new(&reference);
        AppState { reference, scorer }
    }
}
