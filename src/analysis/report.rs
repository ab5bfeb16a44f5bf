//! Combines extraction, likelihoods and statistics into a single report.

use crate::analysis::extractor::extract_observations;
use crate::analysis::likelihood::{calculate_likelihoods, LikelihoodResult};
use crate::analysis::statistics::{summarize, StatisticsResult};
use crate::types::location::LatLon;
use crate::types::raw_series::RawParameterSeries;
use crate::types::thresholds::ThresholdSet;
use crate::types::window::HistoricalWindow;
use serde::{Deserialize, Serialize};

/// The outcome of analysing one calendar day at one location.
///
/// Two year counts are reported: `years_analyzed` is the size of the requested
/// window, `years_observed` the number of years that had usable data and therefore
/// the denominator of every likelihood. They differ whenever the source has gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayReport {
    pub likelihoods: LikelihoodResult,
    /// `None` when no year in the window had usable data.
    pub statistics: Option<StatisticsResult>,
    pub years_analyzed: u64,
    pub years_observed: usize,
    pub location: LatLon,
    pub target_date: String,
}

/// Runs the full analysis over an already fetched series.
///
/// Pure: no I/O, no shared state, identical inputs give identical reports.
pub fn analyze_series(
    series: &RawParameterSeries,
    window: &HistoricalWindow,
    thresholds: &ThresholdSet,
    location: LatLon,
    target_date: impl Into<String>,
) -> DayReport {
    let observations = extract_observations(series, window);
    DayReport {
        likelihoods: calculate_likelihoods(&observations, thresholds),
        statistics: summarize(&observations),
        years_analyzed: window.years_requested(),
        years_observed: observations.len(),
        location,
        target_date: target_date.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::variable::ClimateVariable;
    use crate::DayOddsError;

    /// 1990 and 1991 complete, 1992 without a maximum temperature.
    fn july_first_series() -> RawParameterSeries {
        let mut series = RawParameterSeries::new();
        series.insert(ClimateVariable::MaxTemperature, "19900701", 35.0);
        series.insert(ClimateVariable::MinTemperature, "19900701", 20.0);
        series.insert(ClimateVariable::Precipitation, "19900701", 0.6);
        series.insert(ClimateVariable::WindSpeed, "19900701", 5.0);

        series.insert(ClimateVariable::MaxTemperature, "19910701", 30.0);
        series.insert(ClimateVariable::MinTemperature, "19910701", 15.0);
        series.insert(ClimateVariable::Precipitation, "19910701", 0.0);
        series.insert(ClimateVariable::WindSpeed, "19910701", 20.0);

        series.insert(ClimateVariable::MinTemperature, "19920701", 18.0);
        series.insert(ClimateVariable::Precipitation, "19920701", 1.0);
        series.insert(ClimateVariable::WindSpeed, "19920701", 30.0);
        series
    }

    #[test]
    fn test_july_first_scenario() -> Result<(), DayOddsError> {
        let window = HistoricalWindow::new(1990, 1992, 7, 1)?;
        let report = analyze_series(
            &july_first_series(),
            &window,
            &ThresholdSet::default(),
            LatLon(40.0, -105.0),
            "2025-07-01",
        );

        assert_eq!(report.years_analyzed, 3);
        assert_eq!(report.years_observed, 2);

        assert_eq!(report.likelihoods.very_hot, 50.0);
        assert_eq!(report.likelihoods.very_windy, 50.0);
        assert_eq!(report.likelihoods.very_wet, 50.0);
        assert_eq!(report.likelihoods.very_dry, 50.0);
        assert_eq!(report.likelihoods.very_cold, 0.0);

        let stats = report.statistics.expect("two observed years");
        assert_eq!(stats.temperature.max_high, 95.0);
        assert_eq!(stats.temperature.max_low, 86.0);
        assert_eq!(stats.temperature.min_avg, 63.5);
        assert_eq!(stats.precipitation.days_with_rain, 1);
        assert_eq!(stats.wind.max, 20.0);
        Ok(())
    }

    #[test]
    fn test_no_data_keeps_window_size() -> Result<(), DayOddsError> {
        let window = HistoricalWindow::new(2000, 2009, 2, 29)?;
        let report = analyze_series(
            &RawParameterSeries::new(),
            &window,
            &ThresholdSet::default(),
            LatLon(0.0, 0.0),
            "2024-02-29",
        );

        assert_eq!(report.years_analyzed, 10);
        assert_eq!(report.years_observed, 0);
        assert_eq!(report.likelihoods, LikelihoodResult::default());
        assert_eq!(report.statistics, None);
        Ok(())
    }

    #[test]
    fn test_repeat_runs_are_identical() -> Result<(), DayOddsError> {
        let series = july_first_series();
        let window = HistoricalWindow::new(1990, 1992, 7, 1)?;
        let thresholds = ThresholdSet::builder().very_hot(85.0).build();

        let first = analyze_series(&series, &window, &thresholds, LatLon(1.0, 2.0), "x");
        let second = analyze_series(&series, &window, &thresholds, LatLon(1.0, 2.0), "x");
        assert_eq!(first, second);
        assert_eq!(
            first.likelihoods.very_hot.to_bits(),
            second.likelihoods.very_hot.to_bits()
        );
        Ok(())
    }

    #[test]
    fn test_report_json_shape() -> Result<(), Box<dyn std::error::Error>> {
        let window = HistoricalWindow::new(1990, 1992, 7, 1)?;
        let report = analyze_series(
            &july_first_series(),
            &window,
            &ThresholdSet::default(),
            LatLon(40.0, -105.0),
            "2025-07-01",
        );
        let json = serde_json::to_value(&report)?;

        assert_eq!(json["years_analyzed"], 3);
        assert_eq!(json["location"]["lat"], 40.0);
        assert_eq!(json["target_date"], "2025-07-01");
        assert_eq!(json["statistics"]["temperature"]["max_high"], 95.0);
        assert_eq!(json["likelihoods"]["very_hot"], 50.0);
        Ok(())
    }
}
