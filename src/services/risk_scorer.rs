use crate::constants::*;
use crate::models::{
    AssessmentModelInfo, DerivedFeatures, FeatureVector, JourneyInput, RiskAssessment, TimeOfDay,
};
use crate::reference::ReferenceData;
use std::fmt;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// One additive term of the risk score.
#[derive(Clone, Copy)]
pub struct ScoringRule {
    pub name: &'static str,
    pub weight: f64,
    pub applies: fn(&JourneyInput, &DerivedFeatures) -> bool,
}

impl ScoringRule {
    pub fn new(
        name: &'static str,
        weight: f64,
        applies: fn(&JourneyInput, &DerivedFeatures) -> bool,
    ) -> Self {
        Self {
            name,
            weight,
            applies,
        }
    }
}

impl fmt::Debug for ScoringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoringRule")
            .field("name", &self.name)
            .field("weight", &self.weight)
            .finish()
    }
}

/// The production scoring table. Rules within a group are mutually
/// exclusive, so at most one of each fires.
pub fn default_rules() -> Vec<ScoringRule> {
    vec![
        // time of day
        ScoringRule::new("rush_hour", RUSH_HOUR_WEIGHT, |input, _| {
            input.time_of_day.is_rush()
        }),
        ScoringRule::new("midday", MIDDAY_WEIGHT, |input, _| {
            input.time_of_day == TimeOfDay::Midday
        }),
        // day type
        ScoringRule::new("weekend", WEEKEND_WEIGHT, |_, features| features.is_weekend),
        ScoringRule::new("weekday", WEEKDAY_WEIGHT, |_, features| !features.is_weekend),
        // route length
        ScoringRule::new("long_route", LONG_ROUTE_WEIGHT, |_, features| {
            features.route_complexity > LONG_ROUTE_COMPLEXITY
        }),
        ScoringRule::new("medium_route", MEDIUM_ROUTE_WEIGHT, |_, features| {
            features.route_complexity > MEDIUM_ROUTE_COMPLEXITY
                && features.route_complexity <= LONG_ROUTE_COMPLEXITY
        }),
        // location
        ScoringRule::new("central_zone", CENTRAL_ZONE_WEIGHT, |input, _| {
            input.lat_zone.is_central()
        }),
    ]
}

/// Result of running the scoring table over one journey.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskScore {
    /// Sum of fired weights before clamping
    pub raw: f64,
    /// `raw` clamped to [0, 1]
    pub score: f64,
    pub fired: Vec<&'static str>,
}

impl RiskScore {
    pub fn new(raw: f64, fired: Vec<&'static str>) -> Self {
        RiskScore {
            raw,
            score: raw.clamp(0.0, 1.0),
            fired,
        }
    }

    /// 1 when the score is strictly above the decision boundary.
    pub fn prediction(&self) -> u8 {
        u8::from(self.score > DECISION_BOUNDARY)
    }

    pub fn risk_label(&self) -> &'static str {
        if self.prediction() == 1 {
            HIGH_RISK_LABEL
        } else {
            LOW_RISK_LABEL
        }
    }

    pub fn confidence(&self) -> f64 {
        (self.score - DECISION_BOUNDARY).abs() * 2.0
    }
}

/// Turns journeys into risk assessments using a fixed rule table.
///
/// Holds no mutable state; one instance serves every request.
#[derive(Debug, Clone)]
pub struct RiskScorer {
    rules: Vec<ScoringRule>,
    model_info: AssessmentModelInfo,
}

impl RiskScorer {
    pub fn new(reference: &ReferenceData) -> Self {
        let info = reference.model_info();
        Self::with_rules(
            default_rules(),
            AssessmentModelInfo {
                model: MODEL_NAME.to_string(),
                trees: info.num_trees,
                threshold: info.threshold,
            },
        )
    }

    pub fn with_rules(rules: Vec<ScoringRule>, model_info: AssessmentModelInfo) -> Self {
        Self { rules, model_info }
    }

    pub fn rules(&self) -> &[ScoringRule] {
        &self.rules
    }

    /// Sum the weights of every rule that applies, in table order.
    pub fn evaluate(&self, input: &JourneyInput, features: &DerivedFeatures) -> RiskScore {
        let mut raw = 0.0;
        let mut fired = Vec::new();

        for rule in &self.rules {
            if (rule.applies)(input, features) {
                raw += rule.weight;
                fired.push(rule.name);
            }
        }

        RiskScore::new(raw, fired)
    }

    /// Score a journey and stamp the assessment with the current time.
    pub fn assess(&self, input: &JourneyInput) -> RiskAssessment {
        self.assess_at(input, OffsetDateTime::now_utc())
    }

    pub fn assess_at(&self, input: &JourneyInput, at: OffsetDateTime) -> RiskAssessment {
        let features = DerivedFeatures::derive(input);
        let score = self.evaluate(input, &features);

        tracing::debug!(
            raw = score.raw,
            rules = ?score.fired,
            "Scoring rules fired for line {} {}",
            input.line_name,
            input.direction
        );

        RiskAssessment {
            prediction: score.prediction(),
            risk_label: score.risk_label().to_string(),
            probability: score.score,
            confidence: score.confidence(),
            features_received: FeatureVector::new(input, &features),
            model_info: self.model_info.clone(),
            timestamp: at.format(&Rfc3339).unwrap_or_else(|_| "unknown".to_string()),
        }
    }
}
