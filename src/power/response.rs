//! Decoding of NASA POWER daily point responses.

use crate::power::error::FetchError;
use crate::types::raw_series::RawParameterSeries;
use log::{debug, warn};
use serde::Deserialize;

/// Marker POWER uses for days without data when the header does not say otherwise.
pub const DEFAULT_FILL_VALUE: f64 = -999.0;

#[derive(Debug, Deserialize)]
struct PowerResponse {
    #[serde(default)]
    header: PowerHeader,
    properties: PowerProperties,
    #[serde(default)]
    messages: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PowerHeader {
    fill_value: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct PowerProperties {
    parameter: RawParameterSeries,
}

/// Decodes a POWER JSON body into a [`RawParameterSeries`], turning fill-value
/// readings into empty entries.
pub fn parse_power_response(body: &[u8]) -> Result<RawParameterSeries, FetchError> {
    let response: PowerResponse = serde_json::from_slice(body)?;
    for message in &response.messages {
        warn!("NASA POWER: {}", message);
    }

    let fill_value = response.header.fill_value.unwrap_or(DEFAULT_FILL_VALUE);
    let mut series = response.properties.parameter;
    let cleared = series.mask_value(fill_value);
    if cleared > 0 {
        debug!("Cleared {} fill-value readings ({})", cleared, fill_value);
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::raw_series::Reading;
    use crate::types::variable::ClimateVariable;

    const BODY: &str = r#"{
        "type": "Feature",
        "geometry": {"type": "Point", "coordinates": [-105.0, 40.0, 1600.0]},
        "properties": {
            "parameter": {
                "T2M_MAX": {"20230701": 31.2, "20230702": -999.0},
                "T2M_MIN": {"20230701": 14.8, "20230702": 15.1},
                "PRECTOTCORR": {"20230701": 0.0, "20230702": 2.4},
                "WS2M": {"20230701": 3.1, "20230702": -999}
            }
        },
        "header": {"title": "NASA/POWER", "fill_value": -999.0, "start": "20230701", "end": "20230702"},
        "messages": []
    }"#;

    #[test]
    fn test_parses_parameters_and_masks_fill_value() -> Result<(), FetchError> {
        let series = parse_power_response(BODY.as_bytes())?;

        assert_eq!(
            series.reading(ClimateVariable::MaxTemperature, "20230701"),
            Reading::Value(31.2)
        );
        assert_eq!(
            series.reading(ClimateVariable::MaxTemperature, "20230702"),
            Reading::Missing
        );
        assert_eq!(
            series.reading(ClimateVariable::WindSpeed, "20230702"),
            Reading::Missing
        );
        assert_eq!(
            series.reading(ClimateVariable::Precipitation, "20230702"),
            Reading::Value(2.4)
        );
        Ok(())
    }

    #[test]
    fn test_missing_header_uses_default_fill_value() -> Result<(), FetchError> {
        let body = r#"{"properties": {"parameter": {"T2M_MIN": {"20000101": -999}}}}"#;
        let series = parse_power_response(body.as_bytes())?;
        assert_eq!(
            series.reading(ClimateVariable::MinTemperature, "20000101"),
            Reading::Missing
        );
        Ok(())
    }

    #[test]
    fn test_rejects_body_without_parameters() {
        let result = parse_power_response(br#"{"messages": ["Invalid request"]}"#);
        assert!(matches!(result, Err(FetchError::JsonParse(_))));
    }
}
