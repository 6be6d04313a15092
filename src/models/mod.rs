pub mod assessment;
pub mod features;
pub mod journey;
pub mod reference;

pub use assessment::{AssessmentModelInfo, RiskAssessment};
pub use features::{DerivedFeatures, FeatureVector};
pub use journey::{JourneyInput, LatZone, TimeOfDay};
pub use reference::{FeatureImportance, FeatureImportanceResponse, MetadataResponse, ModelInfo};
