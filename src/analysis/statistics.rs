//! Descriptive statistics of the target day across the observed years.

use crate::types::observation::YearlyObservation;
use crate::units::{mean, round_to};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Precipitation above this amount makes a year count as a rain day.
pub const RAIN_DAY_THRESHOLD: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureStatistics {
    pub max_avg: f64,
    pub max_high: f64,
    pub max_low: f64,
    pub min_avg: f64,
    pub min_high: f64,
    pub min_low: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationStatistics {
    pub avg: f64,
    pub max: f64,
    pub days_with_rain: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindStatistics {
    pub avg: f64,
    pub max: f64,
}

/// Summary of the observed years. Temperatures in °F rounded to one decimal,
/// precipitation to two, wind speed to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticsResult {
    pub temperature: TemperatureStatistics,
    pub precipitation: PrecipitationStatistics,
    pub wind: WindStatistics,
}

/// Summarizes `observations`, or returns `None` when there are none.
pub fn summarize(observations: &[YearlyObservation]) -> Option<StatisticsResult> {
    let max_temps: Vec<f64> = observations.iter().map(|o| o.max_temp_f).collect();
    let min_temps: Vec<f64> = observations.iter().map(|o| o.min_temp_f).collect();
    let precipitation: Vec<f64> = observations.iter().map(|o| o.precipitation).collect();
    let wind: Vec<f64> = observations.iter().map(|o| o.wind_speed).collect();

    // Every mean/extreme below is None only for an empty input.
    let temperature = TemperatureStatistics {
        max_avg: round_to(mean(&max_temps)?, 1),
        max_high: round_to(highest(&max_temps)?, 1),
        max_low: round_to(lowest(&max_temps)?, 1),
        min_avg: round_to(mean(&min_temps)?, 1),
        min_high: round_to(highest(&min_temps)?, 1),
        min_low: round_to(lowest(&min_temps)?, 1),
    };
    let precipitation = PrecipitationStatistics {
        avg: round_to(mean(&precipitation)?, 2),
        max: round_to(highest(&precipitation)?, 2),
        days_with_rain: precipitation
            .iter()
            .filter(|p| **p > RAIN_DAY_THRESHOLD)
            .count(),
    };
    let wind = WindStatistics {
        avg: round_to(mean(&wind)?, 1),
        max: round_to(highest(&wind)?, 1),
    };

    Some(StatisticsResult {
        temperature,
        precipitation,
        wind,
    })
}

fn highest(values: &[f64]) -> Option<f64> {
    values.iter().copied().map(OrderedFloat).max().map(|v| v.0)
}

fn lowest(values: &[f64]) -> Option<f64> {
    values.iter().copied().map(OrderedFloat).min().map(|v| v.0)
}
