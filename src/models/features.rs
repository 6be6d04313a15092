use crate::constants::{HOURS_PER_DAY, PEAK_HOURS, WEEKEND_START_DAY};
use crate::models::{JourneyInput, LatZone, TimeOfDay};
use serde::{Serialize, Serializer};
use std::f64::consts::PI;

/// Features computed from a single journey. Built once per request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedFeatures {
    pub is_peak_hour: bool,
    pub is_weekend: bool,
    pub hour_sin: f64,
    pub hour_cos: f64,
    /// Stop count times scheduled run time
    pub route_complexity: f64,
}

impl DerivedFeatures {
    pub fn derive(input: &JourneyInput) -> Self {
        let (hour_sin, hour_cos) = cyclical_hour(input.departure_hour);

        DerivedFeatures {
            is_peak_hour: PEAK_HOURS.contains(&input.departure_hour),
            is_weekend: input.day_of_week >= WEEKEND_START_DAY,
            hour_sin,
            hour_cos,
            route_complexity: input.stop_sequence * input.run_time_min,
        }
    }
}

/// Encode an hour on the unit circle so 23:00 and 00:00 end up adjacent.
pub fn cyclical_hour(hour: u8) -> (f64, f64) {
    let angle = 2.0 * PI * f64::from(hour) / HOURS_PER_DAY;
    (angle.sin(), angle.cos())
}

/// The full feature set echoed back to clients as `features_received`.
///
/// Flags are serialized as `0`/`1` to match the model's training columns.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FeatureVector {
    pub departure_hour: f64,
    #[serde(serialize_with = "as_flag")]
    pub is_peak_hour: bool,
    pub day_of_week_num: u8,
    pub stop_sequence: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub run_time_min: f64,
    #[serde(serialize_with = "as_flag")]
    pub is_weekend: bool,
    pub hour_sin: f64,
    pub hour_cos: f64,
    pub route_complexity: f64,
    pub line_name: String,
    pub direction: String,
    pub time_of_day: TimeOfDay,
    pub lat_zone: LatZone,
}

impl FeatureVector {
    pub fn new(input: &JourneyInput, features: &DerivedFeatures) -> Self {
        FeatureVector {
            departure_hour: f64::from(input.departure_hour),
            is_peak_hour: features.is_peak_hour,
            day_of_week_num: input.day_of_week,
            stop_sequence: input.stop_sequence,
            latitude: input.latitude,
            longitude: input.longitude,
            run_time_min: input.run_time_min,
            is_weekend: features.is_weekend,
            hour_sin: features.hour_sin,
            hour_cos: features.hour_cos,
            route_complexity: features.route_complexity,
            line_name: input.line_name.clone(),
            direction: input.direction.clone(),
            time_of_day: input.time_of_day,
            lat_zone: input.lat_zone,
        }
    }
}

fn as_flag<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*flag))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn journey(hour: u8, day: u8, stops: f64, minutes: f64) -> JourneyInput {
        JourneyInput {
            line_name: "100".to_string(),
            direction: "inbound".to_string(),
            departure_hour: hour,
            day_of_week: day,
            stop_sequence: stops,
            latitude: 51.47,
            longitude: 0.32,
            run_time_min: minutes,
            time_of_day: TimeOfDay::Midday,
            lat_zone: LatZone::South,
        }
    }

    #[test]
    fn test_peak_hours() {
        let peak: Vec<u8> = (0..24)
            .filter(|&h| DerivedFeatures::derive(&journey(h, 0, 1.0, 1.0)).is_peak_hour)
            .collect();
        assert_eq!(peak, vec![7, 8, 9, 17, 18, 19]);
    }

    #[test]
    fn test_weekend_starts_saturday() {
        assert!(!DerivedFeatures::derive(&journey(12, 4, 1.0, 1.0)).is_weekend);
        assert!(DerivedFeatures::derive(&journey(12, 5, 1.0, 1.0)).is_weekend);
        assert!(DerivedFeatures::derive(&journey(12, 6, 1.0, 1.0)).is_weekend);
    }

    #[test]
    fn test_route_complexity() {
        let features = DerivedFeatures::derive(&journey(12, 0, 10.0, 25.0));
        assert_eq!(features.route_complexity, 250.0);
    }

    #[test]
    fn test_cyclical_hour_on_unit_circle() {
        for hour in 0..24 {
            let (sin, cos) = cyclical_hour(hour);
            assert!((sin * sin + cos * cos - 1.0).abs() < 1e-12, "hour {}", hour);
        }

        let (sin, cos) = cyclical_hour(6);
        assert!((sin - 1.0).abs() < 1e-12);
        assert!(cos.abs() < 1e-12);
    }

    #[test]
    fn test_feature_vector_flags_serialize_as_integers() {
        let input = journey(8, 6, 2.0, 3.0);
        let vector = FeatureVector::new(&input, &DerivedFeatures::derive(&input));
        let json = serde_json::to_value(&vector).unwrap();

        assert_eq!(json["is_peak_hour"], 1);
        assert_eq!(json["is_weekend"], 1);
        assert_eq!(json["day_of_week_num"], 6);
        assert_eq!(json["departure_hour"], 8.0);
        assert_eq!(json["time_of_day"], "midday");
        assert_eq!(json["lat_zone"], "south");
    }
}
