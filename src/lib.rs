mod analysis;
mod day_odds;
mod error;
mod export;
mod power;
mod types;
mod units;

pub use day_odds::*;
pub use error::DayOddsError;

pub use analysis::extractor::{extract_observations, extract_year, SkipReason, YearOutcome};
pub use analysis::likelihood::{calculate_likelihoods, LikelihoodResult};
pub use analysis::report::{analyze_series, DayReport};
pub use analysis::statistics::{
    summarize, PrecipitationStatistics, StatisticsResult, TemperatureStatistics, WindStatistics,
    RAIN_DAY_THRESHOLD,
};

pub use export::{export, suggested_filename, ExportError, ExportFormat};

pub use power::client::{PowerClient, DEFAULT_BASE_URL, DEFAULT_COMMUNITY, DEFAULT_TIMEOUT};
pub use power::error::FetchError;
pub use power::response::{parse_power_response, DEFAULT_FILL_VALUE};
pub use power::source::SeriesSource;

pub use types::location::LatLon;
pub use types::observation::YearlyObservation;
pub use types::raw_series::{RawParameterSeries, RawValue, Reading};
pub use types::thresholds::{ThresholdSet, WeatherCategory};
pub use types::variable::ClimateVariable;
pub use types::window::HistoricalWindow;

pub use units::{celsius_to_fahrenheit, round_to};
