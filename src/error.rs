use crate::export::ExportError;
use crate::power::error::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DayOddsError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Invalid historical window: start year {start_year} is after end year {end_year}")]
    InvalidWindow { start_year: i32, end_year: i32 },

    #[error("Invalid target day {month:02}-{day:02}: month must be 1-12 and day 1-31")]
    InvalidTargetDay { month: u32, day: u32 },

    #[error("Invalid location ({lat}, {lon}): latitude must be within ±90, longitude ±180")]
    InvalidLocation { lat: f64, lon: f64 },
}
