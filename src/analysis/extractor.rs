//! Pulls one observation per year for the target calendar day out of a raw series.

use crate::types::observation::YearlyObservation;
use crate::types::raw_series::{RawParameterSeries, Reading};
use crate::types::variable::ClimateVariable;
use crate::types::window::HistoricalWindow;
use crate::units::celsius_to_fahrenheit;
use log::{debug, info};
use std::fmt;

/// Why a year produced no observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No maximum temperature on the target day.
    MissingMaxTemperature,
    /// No minimum temperature on the target day.
    MissingMinTemperature,
    /// A value for the variable exists but is not a usable number.
    Malformed(ClimateVariable),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingMaxTemperature => write!(f, "missing maximum temperature"),
            SkipReason::MissingMinTemperature => write!(f, "missing minimum temperature"),
            SkipReason::Malformed(variable) => write!(f, "malformed {} value", variable),
        }
    }
}

/// The result of looking at one year of the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum YearOutcome {
    Observed(YearlyObservation),
    Skipped { year: i32, reason: SkipReason },
}

impl YearOutcome {
    pub fn observation(self) -> Option<YearlyObservation> {
        match self {
            YearOutcome::Observed(observation) => Some(observation),
            YearOutcome::Skipped { .. } => None,
        }
    }
}

/// Reads the target day of `year` from `series`.
///
/// Both temperatures are required. Missing precipitation or wind speed counts as
/// `0.0`. A malformed value in any variable skips the year. Never fails.
pub fn extract_year(
    series: &RawParameterSeries,
    window: &HistoricalWindow,
    year: i32,
) -> YearOutcome {
    let key = window.date_key(year);
    match observe(series, &key, year) {
        Ok(observation) => YearOutcome::Observed(observation),
        Err(reason) => YearOutcome::Skipped { year, reason },
    }
}

/// Extracts an observation for every year of `window` with both temperatures
/// present, in ascending year order. Years without usable data are left out.
///
/// # Examples
///
/// ```
/// use day_odds::{extract_observations, ClimateVariable, HistoricalWindow, RawParameterSeries};
///
/// let mut series = RawParameterSeries::new();
/// series.insert(ClimateVariable::MaxTemperature, "20000101", 10.0);
/// series.insert(ClimateVariable::MinTemperature, "20000101", 0.0);
/// series.insert(ClimateVariable::MaxTemperature, "20010101", 12.0);
///
/// let window = HistoricalWindow::new(2000, 2001, 1, 1)?;
/// let observations = extract_observations(&series, &window);
///
/// assert_eq!(observations.len(), 1);
/// assert_eq!(observations[0].max_temp_f, 50.0);
/// assert_eq!(observations[0].precipitation, 0.0);
/// # Ok::<(), day_odds::DayOddsError>(())
/// ```
pub fn extract_observations(
    series: &RawParameterSeries,
    window: &HistoricalWindow,
) -> Vec<YearlyObservation> {
    let observations: Vec<YearlyObservation> = window
        .years()
        .filter_map(|year| match extract_year(series, window, year) {
            YearOutcome::Observed(observation) => Some(observation),
            YearOutcome::Skipped { year, reason } => {
                debug!("Skipping {} for {}: {}", year, window, reason);
                None
            }
        })
        .collect();

    info!(
        "Extracted {} of {} requested years for {}",
        observations.len(),
        window.years_requested(),
        window
    );
    observations
}

fn observe(
    series: &RawParameterSeries,
    key: &str,
    year: i32,
) -> Result<YearlyObservation, SkipReason> {
    let max_c = required(
        series.reading(ClimateVariable::MaxTemperature, key),
        ClimateVariable::MaxTemperature,
        SkipReason::MissingMaxTemperature,
    )?;
    let min_c = required(
        series.reading(ClimateVariable::MinTemperature, key),
        ClimateVariable::MinTemperature,
        SkipReason::MissingMinTemperature,
    )?;
    let precipitation = or_zero(
        series.reading(ClimateVariable::Precipitation, key),
        ClimateVariable::Precipitation,
    )?;
    let wind_speed = or_zero(
        series.reading(ClimateVariable::WindSpeed, key),
        ClimateVariable::WindSpeed,
    )?;

    Ok(YearlyObservation {
        year,
        max_temp_f: celsius_to_fahrenheit(max_c),
        min_temp_f: celsius_to_fahrenheit(min_c),
        precipitation,
        wind_speed,
    })
}

fn required(
    reading: Reading,
    variable: ClimateVariable,
    missing: SkipReason,
) -> Result<f64, SkipReason> {
    match reading {
        Reading::Value(v) => Ok(v),
        Reading::Missing => Err(missing),
        Reading::Malformed => Err(SkipReason::Malformed(variable)),
    }
}

fn or_zero(reading: Reading, variable: ClimateVariable) -> Result<f64, SkipReason> {
    match reading {
        Reading::Value(v) => Ok(v),
        Reading::Missing => Ok(0.0),
        Reading::Malformed => Err(SkipReason::Malformed(variable)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DayOddsError;

    fn full_day(series: &mut RawParameterSeries, key: &str, readings: [f64; 4]) {
        for (variable, value) in ClimateVariable::ALL.into_iter().zip(readings) {
            series.insert(variable, key, value);
        }
    }

    #[test]
    fn test_extracts_and_converts() -> Result<(), DayOddsError> {
        let mut series = RawParameterSeries::new();
        full_day(&mut series, "20200615", [100.0, 0.0, 2.5, 7.0]);
        let window = HistoricalWindow::new(2020, 2020, 6, 15)?;

        let observations = extract_observations(&series, &window);
        assert_eq!(
            observations,
            vec![YearlyObservation {
                year: 2020,
                max_temp_f: 212.0,
                min_temp_f: 32.0,
                precipitation: 2.5,
                wind_speed: 7.0,
            }]
        );
        Ok(())
    }

    #[test]
    fn test_missing_temperatures_skip_year() -> Result<(), DayOddsError> {
        let mut series = RawParameterSeries::new();
        series.insert(ClimateVariable::MinTemperature, "20000301", 1.0);
        series.insert(ClimateVariable::MaxTemperature, "20010301", 1.0);
        series.insert_missing(ClimateVariable::MinTemperature, "20010301");
        let window = HistoricalWindow::new(2000, 2001, 3, 1)?;

        assert_eq!(
            extract_year(&series, &window, 2000),
            YearOutcome::Skipped {
                year: 2000,
                reason: SkipReason::MissingMaxTemperature
            }
        );
        assert_eq!(
            extract_year(&series, &window, 2001),
            YearOutcome::Skipped {
                year: 2001,
                reason: SkipReason::MissingMinTemperature
            }
        );
        assert!(extract_observations(&series, &window).is_empty());
        Ok(())
    }

    #[test]
    fn test_malformed_value_skips_only_that_year() -> Result<(), DayOddsError> {
        let mut series = RawParameterSeries::new();
        full_day(&mut series, "20100704", [30.0, 20.0, 0.0, 3.0]);
        full_day(&mut series, "20110704", [31.0, 21.0, 0.0, 3.0]);
        full_day(&mut series, "20120704", [32.0, 22.0, 0.0, 3.0]);
        series.insert(ClimateVariable::WindSpeed, "20110704", "calm");

        let window = HistoricalWindow::new(2010, 2012, 7, 4)?;
        assert_eq!(
            extract_year(&series, &window, 2011),
            YearOutcome::Skipped {
                year: 2011,
                reason: SkipReason::Malformed(ClimateVariable::WindSpeed)
            }
        );

        let years: Vec<i32> = extract_observations(&series, &window)
            .iter()
            .map(|o| o.year)
            .collect();
        assert_eq!(years, vec![2010, 2012]);
        Ok(())
    }

    #[test]
    fn test_empty_series() -> Result<(), DayOddsError> {
        let window = HistoricalWindow::new(1950, 2020, 12, 25)?;
        assert!(extract_observations(&RawParameterSeries::new(), &window).is_empty());
        Ok(())
    }

    #[test]
    fn test_outcome_observation() {
        let skipped = YearOutcome::Skipped {
            year: 1999,
            reason: SkipReason::Malformed(ClimateVariable::Precipitation),
        };
        assert_eq!(skipped.observation(), None);
        assert_eq!(
            SkipReason::Malformed(ClimateVariable::Precipitation).to_string(),
            "malformed PRECTOTCORR value"
        );
    }
}
