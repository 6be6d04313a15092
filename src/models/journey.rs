use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Night,
    MorningRush,
    Midday,
    EveningRush,
    LateNight,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 5] = [
        TimeOfDay::Night,
        TimeOfDay::MorningRush,
        TimeOfDay::Midday,
        TimeOfDay::EveningRush,
        TimeOfDay::LateNight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Night => "night",
            TimeOfDay::MorningRush => "morning_rush",
            TimeOfDay::Midday => "midday",
            TimeOfDay::EveningRush => "evening_rush",
            TimeOfDay::LateNight => "late_night",
        }
    }

    pub fn is_rush(&self) -> bool {
        matches!(self, TimeOfDay::MorningRush | TimeOfDay::EveningRush)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse latitude bucket of a stop within the network area.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LatZone {
    South,
    MidSouth,
    MidNorth,
    North,
}

impl LatZone {
    pub const ALL: [LatZone; 4] = [
        LatZone::South,
        LatZone::MidSouth,
        LatZone::MidNorth,
        LatZone::North,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LatZone::South => "south",
            LatZone::MidSouth => "mid_south",
            LatZone::MidNorth => "mid_north",
            LatZone::North => "north",
        }
    }

    pub fn is_central(&self) -> bool {
        matches!(self, LatZone::MidSouth | LatZone::MidNorth)
    }
}

impl fmt::Display for LatZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Journey attributes posted to `/api/predict`. Every field is required.
///
/// Numeric fields also accept numeric strings, since browser forms post
/// their values as text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JourneyInput {
    #[serde(deserialize_with = "lenient::label")]
    pub line_name: String,
    #[serde(deserialize_with = "lenient::label")]
    pub direction: String,
    #[serde(deserialize_with = "lenient::small_uint")]
    pub departure_hour: u8,
    /// 0 = Monday, 6 = Sunday
    #[serde(deserialize_with = "lenient::small_uint")]
    pub day_of_week: u8,
    #[serde(deserialize_with = "lenient::number")]
    pub stop_sequence: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub latitude: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub longitude: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub run_time_min: f64,
    pub time_of_day: TimeOfDay,
    pub lat_zone: LatZone,
}

impl JourneyInput {
    /// Decode a request body. Missing or mistyped fields become validation
    /// errors carrying serde's description of the problem.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        let input: JourneyInput =
            serde_json::from_value(value).map_err(|e| AppError::Validation(e.to_string()))?;
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> Result<()> {
        if self.line_name.trim().is_empty() {
            return Err(AppError::Validation(
                "line_name must not be empty".to_string(),
            ));
        }
        if self.direction.trim().is_empty() {
            return Err(AppError::Validation(
                "direction must not be empty".to_string(),
            ));
        }
        if self.departure_hour > 23 {
            return Err(AppError::Validation(format!(
                "departure_hour must be between 0 and 23, got {}",
                self.departure_hour
            )));
        }
        if self.day_of_week > 6 {
            return Err(AppError::Validation(format!(
                "day_of_week must be between 0 and 6, got {}",
                self.day_of_week
            )));
        }

        for (name, value) in [
            ("stop_sequence", self.stop_sequence),
            ("run_time_min", self.run_time_min),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::Validation(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(AppError::Validation(format!(
                "latitude must be between -90 and 90, got {}",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(AppError::Validation(format!(
                "longitude must be between -180 and 180, got {}",
                self.longitude
            )));
        }

        Ok(())
    }
}

/// Deserializers that accept both JSON numbers and their string forms.
mod lenient {
    use serde::de::{self, Deserializer, Unexpected, Visitor};
    use std::fmt;

    struct NumberVisitor;

    impl<'de> Visitor<'de> for NumberVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number or numeric string")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            v.trim()
                .parse()
                .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
        }
    }

    pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(NumberVisitor)
    }

    struct SmallUintVisitor;

    impl SmallUintVisitor {
        fn integral<E: de::Error>(&self, v: f64) -> Result<u8, E> {
            if v.fract() == 0.0 && (0.0..=u8::MAX as f64).contains(&v) {
                Ok(v as u8)
            } else {
                Err(E::invalid_value(Unexpected::Float(v), self))
            }
        }
    }

    impl<'de> Visitor<'de> for SmallUintVisitor {
        type Value = u8;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a non-negative integer")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u8, E> {
            u8::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u8, E> {
            u8::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<u8, E> {
            self.integral(v)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u8, E> {
            let parsed: f64 = v
                .trim()
                .parse()
                .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))?;
            self.integral(parsed)
        }
    }

    pub fn small_uint<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
        deserializer.deserialize_any(SmallUintVisitor)
    }

    struct LabelVisitor;

    impl<'de> Visitor<'de> for LabelVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.trim().to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v.trim().to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            // `22.0` names line "22"
            Ok(v.to_string())
        }
    }

    pub fn label<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        deserializer.deserialize_any(LabelVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
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

    #[test]
    fn test_decodes_typed_body() {
        let input = JourneyInput::from_json(sample()).unwrap();

        assert_eq!(input.line_name, "22");
        assert_eq!(input.departure_hour, 8);
        assert_eq!(input.stop_sequence, 10.0);
        assert_eq!(input.time_of_day, TimeOfDay::MorningRush);
        assert_eq!(input.lat_zone, LatZone::MidSouth);
    }

    #[test]
    fn test_decodes_form_style_strings() {
        let body = json!({
            "line_name": 22,
            "direction": " inbound ",
            "departure_hour": "17",
            "day_of_week": "6",
            "stop_sequence": "4",
            "latitude": "51.5",
            "longitude": "-0.1",
            "run_time_min": "12.5",
            "time_of_day": "evening_rush",
            "lat_zone": "north"
        });

        let input = JourneyInput::from_json(body).unwrap();
        assert_eq!(input.line_name, "22");
        assert_eq!(input.direction, "inbound");
        assert_eq!(input.departure_hour, 17);
        assert_eq!(input.day_of_week, 6);
        assert_eq!(input.run_time_min, 12.5);
        assert_eq!(input.longitude, -0.1);
    }

    #[test]
    fn test_integral_float_hour_accepted() {
        let mut body = sample();
        body["departure_hour"] = json!(9.0);
        assert_eq!(JourneyInput::from_json(body).unwrap().departure_hour, 9);
    }

    #[test]
    fn test_missing_field_rejected() {
        let mut body = sample();
        body.as_object_mut().unwrap().remove("latitude");

        let err = JourneyInput::from_json(body).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("latitude")));
    }

    #[test]
    fn test_non_numeric_latitude_rejected() {
        let mut body = sample();
        body["latitude"] = json!("north-ish");
        assert!(matches!(
            JourneyInput::from_json(body),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_fractional_hour_rejected() {
        let mut body = sample();
        body["departure_hour"] = json!(8.5);
        assert!(JourneyInput::from_json(body).is_err());
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        for (field, value) in [
            ("departure_hour", json!(24)),
            ("day_of_week", json!(7)),
            ("day_of_week", json!(-1)),
            ("stop_sequence", json!(-3)),
            ("run_time_min", json!("NaN")),
            ("latitude", json!(95.0)),
            ("longitude", json!(-200)),
            ("line_name", json!("  ")),
        ] {
            let mut body = sample();
            body[field] = value.clone();
            assert!(
                JourneyInput::from_json(body).is_err(),
                "{} = {} should be rejected",
                field,
                value
            );
        }
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let mut body = sample();
        body["time_of_day"] = json!("dawn");
        let err = JourneyInput::from_json(body).unwrap_err().to_string();
        assert!(err.contains("dawn"));
    }

    #[test]
    fn test_wire_names_match_display() {
        for period in TimeOfDay::ALL {
            assert_eq!(json!(period), json!(period.to_string()));
        }
        for zone in LatZone::ALL {
            assert_eq!(json!(zone), json!(zone.as_str()));
        }
    }
}
