//! Unit conversion and rounding helpers shared by the analysis stages.

/// Converts a temperature from degrees Celsius to degrees Fahrenheit.
///
/// ```
/// use day_odds::celsius_to_fahrenheit;
///
/// assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
/// assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
/// ```
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Rounds `value` to `decimals` decimal places. Exact ties go to the even digit.
///
/// ```
/// use day_odds::round_to;
///
/// assert_eq!(round_to(6.25, 1), 6.2);
/// assert_eq!(round_to(6.75, 1), 6.8);
/// ```
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Arithmetic mean. `None` for an empty slice.
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
