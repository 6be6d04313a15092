pub mod risk_scorer;

pub use risk_scorer::{default_rules, RiskScore, RiskScorer, ScoringRule};
