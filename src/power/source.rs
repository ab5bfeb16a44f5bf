use crate::power::error::FetchError;
use crate::types::location::LatLon;
use crate::types::raw_series::RawParameterSeries;
use crate::types::window::HistoricalWindow;
use async_trait::async_trait;

/// Anything that can supply the raw daily series for a location and window.
///
/// [`crate::DayOdds`] receives its source explicitly, so the analysis can run
/// against [`crate::PowerClient`], a recorded series, or a test double.
#[async_trait]
pub trait SeriesSource: Send + Sync {
    async fn fetch_series(
        &self,
        location: LatLon,
        window: &HistoricalWindow,
    ) -> Result<RawParameterSeries, FetchError>;
}

/// An already fetched series serves every request as-is.
#[async_trait]
impl SeriesSource for RawParameterSeries {
    async fn fetch_series(
        &self,
        _location: LatLon,
        _window: &HistoricalWindow,
    ) -> Result<RawParameterSeries, FetchError> {
        Ok(self.clone())
    }
}
