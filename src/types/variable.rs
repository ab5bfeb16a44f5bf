//! Defines the daily climate variables consumed by the analysis and their
//! NASA POWER parameter codes.

use std::fmt;

/// A daily climate variable read from a [`crate::RawParameterSeries`].
///
/// Temperatures are reported by the source in degrees Celsius, precipitation and
/// wind speed in the source's native units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClimateVariable {
    /// Maximum air temperature at 2 meters for the day (°C).
    MaxTemperature,
    /// Minimum air temperature at 2 meters for the day (°C).
    MinTemperature,
    /// Bias-corrected total precipitation for the day.
    Precipitation,
    /// Mean wind speed at 2 meters for the day.
    WindSpeed,
}

impl ClimateVariable {
    /// Every variable, in the order they are requested from the source.
    pub const ALL: [ClimateVariable; 4] = [
        ClimateVariable::MaxTemperature,
        ClimateVariable::MinTemperature,
        ClimateVariable::Precipitation,
        ClimateVariable::WindSpeed,
    ];

    /// The parameter code used as the series key (e.g. `"T2M_MAX"`).
    pub fn code(&self) -> &'static str {
        match self {
            ClimateVariable::MaxTemperature => "T2M_MAX",
            ClimateVariable::MinTemperature => "T2M_MIN",
            ClimateVariable::Precipitation => "PRECTOTCORR",
            ClimateVariable::WindSpeed => "WS2M",
        }
    }

    /// Comma separated list of all parameter codes, as sent in a POWER request.
    pub(crate) fn parameter_list() -> String {
        Self::ALL
            .iter()
            .map(|v| v.code())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Formats a `ClimateVariable` using its parameter code.
///
/// # Examples
///
/// ```
/// use day_odds::ClimateVariable;
///
/// assert_eq!(ClimateVariable::WindSpeed.to_string(), "WS2M");
/// ```
impl fmt::Display for ClimateVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
