//! This module provides the main entry point: a client that fetches the history of a
//! location through a [`SeriesSource`] and analyses one calendar day of it.

use crate::analysis::report::{analyze_series, DayReport};
use crate::error::DayOddsError;
use crate::power::client::PowerClient;
use crate::power::source::SeriesSource;
use crate::types::location::LatLon;
use crate::types::thresholds::ThresholdSet;
use crate::types::window::HistoricalWindow;
use bon::bon;
use chrono::{Datelike, NaiveDate, Utc};
use log::info;

/// Number of years analysed when the caller does not specify a span.
pub const DEFAULT_HISTORY_YEARS: u32 = 30;

/// Analyses how likely notable weather is on a calendar day, based on history.
///
/// The client owns its [`SeriesSource`]; use [`DayOdds::new()`] for the NASA POWER
/// source with default settings, or [`DayOdds::with_source()`] to supply any other.
///
/// # Examples
///
/// ```no_run
/// use day_odds::{DayOdds, DayOddsError, LatLon, ThresholdSet};
/// use chrono::NaiveDate;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), DayOddsError> {
/// let client = DayOdds::new()?;
/// let date = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
///
/// let report = client
///     .analyze(LatLon(40.01, -105.27), date)
///     .thresholds(ThresholdSet::builder().very_hot(95.0).build())
///     .call()
///     .await?;
///
/// println!(
///     "{}% of {} observed years were very hot",
///     report.likelihoods.very_hot, report.years_observed
/// );
/// # Ok(())
/// # }
/// ```
pub struct DayOdds<S> {
    source: S,
}

impl DayOdds<PowerClient> {
    /// Creates a client backed by a default [`PowerClient`].
    ///
    /// # Errors
    ///
    /// Returns [`DayOddsError::Fetch`] if the HTTP client cannot be initialised.
    pub fn new() -> Result<Self, DayOddsError> {
        Ok(Self::with_source(PowerClient::builder().build()?))
    }
}

#[bon]
impl<S: SeriesSource> DayOdds<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Analyses the month and day of `date` at `location`.
    ///
    /// This method uses a builder pattern. Optionally specify:
    /// *   `.thresholds(ThresholdSet)`: category thresholds (defaults per category).
    /// *   `.history_years(u32)`: length of the window (default [`DEFAULT_HISTORY_YEARS`]).
    /// *   `.end_year(i32)`: last year of the window (default: the year before the
    ///     current UTC year).
    ///
    /// Finish with `.call().await`.
    ///
    /// # Errors
    ///
    /// *   [`DayOddsError::InvalidLocation`] for out of range or non-finite coordinates.
    /// *   [`DayOddsError::InvalidWindow`] for a zero-year history.
    /// *   [`DayOddsError::Fetch`] if the source fails.
    ///
    /// Sparse or malformed data never fails the analysis; it lowers the number of
    /// observed years instead.
    #[builder(start_fn = analyze)]
    #[doc(hidden)]
    pub async fn build_analyze(
        &self,
        #[builder(start_fn)] location: LatLon,
        #[builder(start_fn)] date: NaiveDate,
        thresholds: Option<ThresholdSet>,
        history_years: Option<u32>,
        end_year: Option<i32>,
    ) -> Result<DayReport, DayOddsError> {
        if !location.is_valid() {
            return Err(DayOddsError::InvalidLocation {
                lat: location.lat(),
                lon: location.lon(),
            });
        }
        let end_year = end_year.unwrap_or_else(|| Utc::now().year() - 1);
        let window = HistoricalWindow::trailing(
            date.month(),
            date.day(),
            end_year,
            history_years.unwrap_or(DEFAULT_HISTORY_YEARS),
        )?;

        let series = self.source.fetch_series(location, &window).await?;
        let report = analyze_series(
            &series,
            &window,
            &thresholds.unwrap_or_default(),
            location,
            date.format("%Y-%m-%d").to_string(),
        );
        info!(
            "Analysed {}: {} of {} years observed",
            window, report.years_observed, report.years_analyzed
        );
        Ok(report)
    }
}
