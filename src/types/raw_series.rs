//! Defines the raw, per-variable daily time series handed to the analysis, and the
//! lookup that turns a single entry into an explicit [`Reading`].

use crate::types::variable::ClimateVariable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single value as delivered by the data source.
///
/// Sources normally deliver numbers, but nothing guarantees it: values may arrive as
/// text or as some unrelated JSON type. Interpretation is deferred to
/// [`RawParameterSeries::reading`], which never fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

/// The interpreted state of one variable on one date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    /// A finite numeric value.
    Value(f64),
    /// No entry for the date, or the entry was explicitly empty.
    Missing,
    /// An entry exists but cannot be read as a finite number.
    Malformed,
}

impl Reading {
    fn interpret(raw: Option<&RawValue>) -> Reading {
        match raw {
            None => Reading::Missing,
            Some(RawValue::Number(n)) if n.is_finite() => Reading::Value(*n),
            Some(RawValue::Text(s)) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Reading::Value(n),
                _ => Reading::Malformed,
            },
            Some(_) => Reading::Malformed,
        }
    }
}

/// Daily readings keyed by parameter code, then by `YYYYMMDD` date key.
///
/// The layout matches the `properties.parameter` object of a NASA POWER daily point
/// response, so a response body can be deserialized straight into this type.
///
/// # Examples
///
/// ```
/// use day_odds::{ClimateVariable, RawParameterSeries, Reading};
///
/// let mut series = RawParameterSeries::new();
/// series.insert(ClimateVariable::MaxTemperature, "19900701", 35.0);
///
/// assert_eq!(
///     series.reading(ClimateVariable::MaxTemperature, "19900701"),
///     Reading::Value(35.0)
/// );
/// assert_eq!(
///     series.reading(ClimateVariable::WindSpeed, "19900701"),
///     Reading::Missing
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawParameterSeries {
    parameters: HashMap<String, HashMap<String, Option<RawValue>>>,
}

impl RawParameterSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a value for `variable` on `date_key`, replacing any previous entry.
    pub fn insert(
        &mut self,
        variable: ClimateVariable,
        date_key: impl Into<String>,
        value: impl Into<RawValue>,
    ) {
        self.entry(variable)
            .insert(date_key.into(), Some(value.into()));
    }

    /// Records an explicitly empty entry (the source listed the date without a value).
    pub fn insert_missing(&mut self, variable: ClimateVariable, date_key: impl Into<String>) {
        self.entry(variable).insert(date_key.into(), None);
    }

    /// Looks up `variable` on `date_key`. A lookup miss is [`Reading::Missing`].
    pub fn reading(&self, variable: ClimateVariable, date_key: &str) -> Reading {
        let raw = self
            .parameters
            .get(variable.code())
            .and_then(|days| days.get(date_key))
            .and_then(Option::as_ref);
        Reading::interpret(raw)
    }

    /// Number of date entries held for `variable`.
    pub fn len(&self, variable: ClimateVariable) -> usize {
        self.parameters.get(variable.code()).map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.values().all(HashMap::is_empty)
    }

    /// Replaces every numeric entry equal to `marker` with an empty entry.
    ///
    /// Returns how many entries were cleared.
    pub fn mask_value(&mut self, marker: f64) -> usize {
        let mut cleared = 0;
        for days in self.parameters.values_mut() {
            for value in days.values_mut() {
                if matches!(value, Some(RawValue::Number(n)) if *n == marker) {
                    *value = None;
                    cleared += 1;
                }
            }
        }
        cleared
    }

    fn entry(&mut self, variable: ClimateVariable) -> &mut HashMap<String, Option<RawValue>> {
        self.parameters
            .entry(variable.code().to_string())
            .or_default()
    }
}
