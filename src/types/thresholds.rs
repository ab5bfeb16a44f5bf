//! Weather categories and the thresholds that decide whether a year falls into them.

use bon::Builder;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A named kind of notable weather on the target day.
///
/// Each category has a fixed comparison against its threshold, see
/// [`WeatherCategory::matches`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCategory {
    /// Maximum temperature at or above the threshold (°F).
    VeryHot,
    /// Precipitation at or above the threshold.
    VeryWet,
    /// Wind speed at or above the threshold.
    VeryWindy,
    /// Minimum temperature at or below the threshold (°F).
    VeryCold,
    /// Precipitation at or below the threshold.
    VeryDry,
}

impl WeatherCategory {
    pub const ALL: [WeatherCategory; 5] = [
        WeatherCategory::VeryHot,
        WeatherCategory::VeryWet,
        WeatherCategory::VeryWindy,
        WeatherCategory::VeryCold,
        WeatherCategory::VeryDry,
    ];

    /// The key used in JSON payloads (e.g. `"very_hot"`).
    pub fn key(&self) -> &'static str {
        match self {
            WeatherCategory::VeryHot => "very_hot",
            WeatherCategory::VeryWet => "very_wet",
            WeatherCategory::VeryWindy => "very_windy",
            WeatherCategory::VeryCold => "very_cold",
            WeatherCategory::VeryDry => "very_dry",
        }
    }

    /// Human readable label (e.g. `"Very Hot"`).
    pub fn label(&self) -> &'static str {
        match self {
            WeatherCategory::VeryHot => "Very Hot",
            WeatherCategory::VeryWet => "Very Wet",
            WeatherCategory::VeryWindy => "Very Windy",
            WeatherCategory::VeryCold => "Very Cold",
            WeatherCategory::VeryDry => "Very Dry",
        }
    }

    /// Threshold applied when the caller does not supply one.
    pub fn default_threshold(&self) -> f64 {
        match self {
            WeatherCategory::VeryHot => 90.0,
            WeatherCategory::VeryWet => 0.5,
            WeatherCategory::VeryWindy => 15.0,
            WeatherCategory::VeryCold => 32.0,
            WeatherCategory::VeryDry => 0.01,
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Caller supplied thresholds, one optional value per [`WeatherCategory`].
///
/// Unset categories resolve to [`WeatherCategory::default_threshold`]. Deserializing
/// never fails on bad entries: non-numeric values and unknown keys are logged and
/// ignored, leaving the default in place.
///
/// # Examples
///
/// ```
/// use day_odds::{ThresholdSet, WeatherCategory};
///
/// let thresholds = ThresholdSet::builder().very_hot(95.0).build();
/// assert_eq!(thresholds.resolve(WeatherCategory::VeryHot), 95.0);
/// assert_eq!(thresholds.resolve(WeatherCategory::VeryCold), 32.0);
///
/// let parsed: ThresholdSet =
///     serde_json::from_str(r#"{"very_wet": 1.0, "very_windy": "gusty"}"#).unwrap();
/// assert_eq!(parsed.resolve(WeatherCategory::VeryWet), 1.0);
/// assert_eq!(parsed.resolve(WeatherCategory::VeryWindy), 15.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Builder, Serialize)]
pub struct ThresholdSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub very_hot: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub very_wet: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub very_windy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub very_cold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub very_dry: Option<f64>,
}

impl ThresholdSet {
    /// The caller's threshold for `category`, if one was set and is finite.
    pub fn get(&self, category: WeatherCategory) -> Option<f64> {
        let value = match category {
            WeatherCategory::VeryHot => self.very_hot,
            WeatherCategory::VeryWet => self.very_wet,
            WeatherCategory::VeryWindy => self.very_windy,
            WeatherCategory::VeryCold => self.very_cold,
            WeatherCategory::VeryDry => self.very_dry,
        };
        value.filter(|v| v.is_finite())
    }

    /// The effective threshold for `category`.
    pub fn resolve(&self, category: WeatherCategory) -> f64 {
        self.get(category)
            .unwrap_or_else(|| category.default_threshold())
    }

    fn set(&mut self, category: WeatherCategory, value: f64) {
        let slot = match category {
            WeatherCategory::VeryHot => &mut self.very_hot,
            WeatherCategory::VeryWet => &mut self.very_wet,
            WeatherCategory::VeryWindy => &mut self.very_windy,
            WeatherCategory::VeryCold => &mut self.very_cold,
            WeatherCategory::VeryDry => &mut self.very_dry,
        };
        *slot = Some(value);
    }
}

impl<'de> Deserialize<'de> for ThresholdSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Object(entries) => entries,
            other => {
                warn!("Ignoring non-object thresholds {}, using defaults", other);
                return Ok(ThresholdSet::default());
            }
        };
        let mut thresholds = ThresholdSet::default();
        for (key, value) in entries {
            let Some(category) = WeatherCategory::from_key(&key) else {
                warn!("Ignoring unknown threshold category '{}'", key);
                continue;
            };
            let parsed = match &value {
                serde_json::Value::Number(n) => n.as_f64(),
                serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            };
            match parsed.filter(|v| v.is_finite()) {
                Some(v) => thresholds.set(category, v),
                None => warn!(
                    "Ignoring non-numeric threshold {} for '{}', using default {}",
                    value,
                    key,
                    category.default_threshold()
                ),
            }
        }
        Ok(thresholds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let thresholds = ThresholdSet::default();
        assert_eq!(thresholds.resolve(WeatherCategory::VeryHot), 90.0);
        assert_eq!(thresholds.resolve(WeatherCategory::VeryWet), 0.5);
        assert_eq!(thresholds.resolve(WeatherCategory::VeryWindy), 15.0);
        assert_eq!(thresholds.resolve(WeatherCategory::VeryCold), 32.0);
        assert_eq!(thresholds.resolve(WeatherCategory::VeryDry), 0.01);
    }

    #[test]
    fn test_non_finite_builder_value_falls_back() {
        let thresholds = ThresholdSet::builder()
            .very_cold(f64::NAN)
            .very_dry(0.0)
            .build();
        assert_eq!(thresholds.resolve(WeatherCategory::VeryCold), 32.0);
        assert_eq!(thresholds.resolve(WeatherCategory::VeryDry), 0.0);
    }

    #[test]
    fn test_lenient_deserialize() -> Result<(), serde_json::Error> {
        let thresholds: ThresholdSet = serde_json::from_str(
            r#"{
                "very_hot": 100,
                "very_cold": "20.5",
                "very_wet": null,
                "very_windy": [1, 2],
                "very_sticky": 3
            }"#,
        )?;
        assert_eq!(thresholds.very_hot, Some(100.0));
        assert_eq!(thresholds.very_cold, Some(20.5));
        assert_eq!(thresholds.very_wet, None);
        assert_eq!(thresholds.very_windy, None);
        assert_eq!(thresholds.resolve(WeatherCategory::VeryWindy), 15.0);
        Ok(())
    }

    #[test]
    fn test_non_object_payload_uses_defaults() -> Result<(), serde_json::Error> {
        for payload in ["null", "[90, 32]", "42", "\"hot\""] {
            let thresholds: ThresholdSet = serde_json::from_str(payload)?;
            assert_eq!(thresholds, ThresholdSet::default());
            assert_eq!(thresholds.resolve(WeatherCategory::VeryHot), 90.0);
        }
        Ok(())
    }

    #[test]
    fn test_category_keys_round_trip_through_serde() -> Result<(), serde_json::Error> {
        for category in WeatherCategory::ALL {
            let json = serde_json::to_string(&category)?;
            assert_eq!(json, format!("\"{}\"", category.key()));
        }
        Ok(())
    }
}
