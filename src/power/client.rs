//! HTTP source for the NASA POWER daily point API.

use crate::power::error::FetchError;
use crate::power::response::parse_power_response;
use crate::power::source::SeriesSource;
use crate::types::location::LatLon;
use crate::types::raw_series::RawParameterSeries;
use crate::types::variable::ClimateVariable;
use crate::types::window::HistoricalWindow;
use async_trait::async_trait;
use bon::bon;
use log::{info, warn};
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://power.larc.nasa.gov/api/temporal/daily/point";
pub const DEFAULT_COMMUNITY: &str = "RE";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Fetches daily series from NASA POWER.
///
/// Requests the four variables of [`ClimateVariable::ALL`] for every day of the
/// full years covered by the window.
///
/// # Examples
///
/// ```no_run
/// # use day_odds::{PowerClient, FetchError};
/// # use std::time::Duration;
/// # fn main() -> Result<(), FetchError> {
/// let default_client = PowerClient::builder().build()?;
/// let patient_client = PowerClient::builder()
///     .timeout(Duration::from_secs(180))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PowerClient {
    http: Client,
    base_url: String,
    community: String,
}

#[bon]
impl PowerClient {
    /// Creates a client. Unset options use [`DEFAULT_BASE_URL`],
    /// [`DEFAULT_COMMUNITY`] and [`DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ClientBuild`] if the HTTP client cannot be initialised.
    #[builder]
    pub fn new(
        #[builder(into)] base_url: Option<String>,
        #[builder(into)] community: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(FetchError::ClientBuild)?;
        Ok(Self {
            http,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            community: community.unwrap_or_else(|| DEFAULT_COMMUNITY.to_string()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn query(&self, location: LatLon, window: &HistoricalWindow) -> Vec<(&'static str, String)> {
        let (start, end) = window.fetch_range();
        vec![
            ("parameters", ClimateVariable::parameter_list()),
            ("community", self.community.clone()),
            ("longitude", location.lon().to_string()),
            ("latitude", location.lat().to_string()),
            ("start", start),
            ("end", end),
            ("format", "JSON".to_string()),
        ]
    }
}

#[async_trait]
impl SeriesSource for PowerClient {
    async fn fetch_series(
        &self,
        location: LatLon,
        window: &HistoricalWindow,
    ) -> Result<RawParameterSeries, FetchError> {
        let url = self.base_url.clone();
        info!(
            "Requesting NASA POWER daily data at ({}, {}) for {}",
            location.lat(),
            location.lon(),
            window
        );

        let response = self
            .http
            .get(&url)
            .query(&self.query(location, window))
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest(url, e)
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;
        info!("Received {} bytes from {}", body.len(), url);
        parse_power_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_parameters() -> Result<(), Box<dyn std::error::Error>> {
        let client = PowerClient::builder().community("AG").build()?;
        let window = HistoricalWindow::new(1995, 2024, 7, 4)?;
        let query = client.query(LatLon(40.5, -105.25), &window);

        assert_eq!(
            query,
            vec![
                ("parameters", "T2M_MAX,T2M_MIN,PRECTOTCORR,WS2M".to_string()),
                ("community", "AG".to_string()),
                ("longitude", "-105.25".to_string()),
                ("latitude", "40.5".to_string()),
                ("start", "19950101".to_string()),
                ("end", "20241231".to_string()),
                ("format", "JSON".to_string()),
            ]
        );
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        Ok(())
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() -> Result<(), Box<dyn std::error::Error>> {
        let client = PowerClient::builder()
            .base_url("http://127.0.0.1:9/power")
            .timeout(Duration::from_secs(2))
            .build()?;
        let window = HistoricalWindow::new(2000, 2000, 1, 1)?;

        let result = client.fetch_series(LatLon(0.0, 0.0), &window).await;
        assert!(matches!(result, Err(FetchError::NetworkRequest(..))));
        Ok(())
    }
}
