use serde::{Deserialize, Serialize};

/// The readings of one year on the target calendar day, after unit conversion and
/// defaulting.
///
/// Temperatures are in °F. Precipitation and wind speed keep the source's units and
/// are `0.0` when the source had no value for the day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyObservation {
    pub year: i32,
    pub max_temp_f: f64,
    pub min_temp_f: f64,
    pub precipitation: f64,
    pub wind_speed: f64,
}
