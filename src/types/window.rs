//! Defines the historical window sampled for one calendar day.

use crate::error::DayOddsError;
use std::fmt;
use std::ops::RangeInclusive;

/// An inclusive range of years plus the target month and day sampled in each.
///
/// The day is checked against 1–31 only; whether it exists in the month (or in a
/// given year, for February 29th) is the caller's concern. Years without the date
/// simply produce no readings.
///
/// # Examples
///
/// ```
/// use day_odds::HistoricalWindow;
///
/// let window = HistoricalWindow::new(1990, 1992, 7, 1)?;
/// assert_eq!(window.years_requested(), 3);
/// assert_eq!(window.date_key(1991), "19910701");
/// # Ok::<(), day_odds::DayOddsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoricalWindow {
    start_year: i32,
    end_year: i32,
    month: u32,
    day: u32,
}

impl HistoricalWindow {
    /// Creates a window covering `start_year..=end_year`.
    ///
    /// # Errors
    ///
    /// Returns [`DayOddsError::InvalidWindow`] if `start_year > end_year`, and
    /// [`DayOddsError::InvalidTargetDay`] if `month` is outside 1–12 or `day` outside 1–31.
    pub fn new(start_year: i32, end_year: i32, month: u32, day: u32) -> Result<Self, DayOddsError> {
        if start_year > end_year {
            return Err(DayOddsError::InvalidWindow {
                start_year,
                end_year,
            });
        }
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(DayOddsError::InvalidTargetDay { month, day });
        }
        Ok(Self {
            start_year,
            end_year,
            month,
            day,
        })
    }

    /// Creates the window of `span_years` years ending with `end_year`.
    ///
    /// # Errors
    ///
    /// Returns [`DayOddsError::InvalidWindow`] for a zero span or a span reaching
    /// below `i32::MIN`, plus the errors of [`HistoricalWindow::new`].
    pub fn trailing(
        month: u32,
        day: u32,
        end_year: i32,
        span_years: u32,
    ) -> Result<Self, DayOddsError> {
        let start_year = i64::from(end_year) - i64::from(span_years) + 1;
        let start_year = i32::try_from(start_year).map_err(|_| DayOddsError::InvalidWindow {
            start_year: i32::MIN,
            end_year,
        })?;
        Self::new(start_year, end_year, month, day)
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Every year in the window, ascending.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.start_year..=self.end_year
    }

    /// Number of years requested, `end_year - start_year + 1`, regardless of how many
    /// of them end up having data.
    pub fn years_requested(&self) -> u64 {
        (i64::from(self.end_year) - i64::from(self.start_year) + 1) as u64
    }

    /// The `YYYYMMDD` key of the target day in `year`.
    pub fn date_key(&self, year: i32) -> String {
        format!("{:04}{:02}{:02}", year, self.month, self.day)
    }

    /// First and last day of the full years covered, as `YYYYMMDD` keys.
    pub fn fetch_range(&self) -> (String, String) {
        (
            format!("{:04}0101", self.start_year),
            format!("{:04}1231", self.end_year),
        )
    }
}

impl fmt::Display for HistoricalWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}-{:02} over {}..={}",
            self.month, self.day, self.start_year, self.end_year
        )
    }
}
