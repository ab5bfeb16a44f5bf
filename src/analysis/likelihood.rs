//! Threshold-exceedance likelihoods over a set of yearly observations.

use crate::types::observation::YearlyObservation;
use crate::types::thresholds::{ThresholdSet, WeatherCategory};
use crate::units::round_to;
use serde::{Deserialize, Serialize};

impl WeatherCategory {
    /// Whether `observation` falls into this category given `threshold`.
    pub fn matches(&self, observation: &YearlyObservation, threshold: f64) -> bool {
        match self {
            WeatherCategory::VeryHot => observation.max_temp_f >= threshold,
            WeatherCategory::VeryCold => observation.min_temp_f <= threshold,
            WeatherCategory::VeryWet => observation.precipitation >= threshold,
            WeatherCategory::VeryDry => observation.precipitation <= threshold,
            WeatherCategory::VeryWindy => observation.wind_speed >= threshold,
        }
    }
}

/// Percentage (0–100, one decimal) of observed years in each category.
///
/// Serializes as a flat `{"very_hot": .., ...}` object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LikelihoodResult {
    pub very_hot: f64,
    pub very_wet: f64,
    pub very_windy: f64,
    pub very_cold: f64,
    pub very_dry: f64,
}

impl LikelihoodResult {
    pub fn get(&self, category: WeatherCategory) -> f64 {
        match category {
            WeatherCategory::VeryHot => self.very_hot,
            WeatherCategory::VeryWet => self.very_wet,
            WeatherCategory::VeryWindy => self.very_windy,
            WeatherCategory::VeryCold => self.very_cold,
            WeatherCategory::VeryDry => self.very_dry,
        }
    }

    /// Category and percentage pairs in the order hot, wet, windy, cold, dry.
    pub fn iter(&self) -> impl Iterator<Item = (WeatherCategory, f64)> + '_ {
        WeatherCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    fn set(&mut self, category: WeatherCategory, value: f64) {
        let slot = match category {
            WeatherCategory::VeryHot => &mut self.very_hot,
            WeatherCategory::VeryWet => &mut self.very_wet,
            WeatherCategory::VeryWindy => &mut self.very_windy,
            WeatherCategory::VeryCold => &mut self.very_cold,
            WeatherCategory::VeryDry => &mut self.very_dry,
        };
        *slot = value;
    }
}

/// Computes the likelihood of every category across `observations`.
///
/// An empty slice yields `0.0` for every category.
///
/// # Examples
///
/// ```
/// use day_odds::{calculate_likelihoods, ThresholdSet, YearlyObservation};
///
/// let years = [
///     YearlyObservation { year: 2001, max_temp_f: 95.0, min_temp_f: 70.0, precipitation: 0.0, wind_speed: 3.0 },
///     YearlyObservation { year: 2002, max_temp_f: 80.0, min_temp_f: 60.0, precipitation: 0.0, wind_speed: 3.0 },
///     YearlyObservation { year: 2003, max_temp_f: 85.0, min_temp_f: 65.0, precipitation: 0.0, wind_speed: 3.0 },
/// ];
/// let likelihoods = calculate_likelihoods(&years, &ThresholdSet::default());
///
/// assert_eq!(likelihoods.very_hot, 33.3);
/// assert_eq!(likelihoods.very_dry, 100.0);
/// ```
pub fn calculate_likelihoods(
    observations: &[YearlyObservation],
    thresholds: &ThresholdSet,
) -> LikelihoodResult {
    let mut result = LikelihoodResult::default();
    if observations.is_empty() {
        return result;
    }

    let total = observations.len() as f64;
    for category in WeatherCategory::ALL {
        let threshold = thresholds.resolve(category);
        let matching = observations
            .iter()
            .filter(|o| category.matches(o, threshold))
            .count();
        result.set(category, round_to(matching as f64 / total * 100.0, 1));
    }
    result
}
