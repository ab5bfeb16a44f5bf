use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Serializes as `{"lat": .., "lon": ..}`.
///
/// # Examples
///
/// ```
/// use day_odds::LatLon;
///
/// let berlin_center = LatLon(52.5200, 13.4050);
/// assert_eq!(berlin_center.0, 52.5200); // Latitude
/// assert_eq!(berlin_center.1, 13.4050); // Longitude
/// assert!(berlin_center.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "Coordinates", from = "Coordinates")]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub fn lat(&self) -> f64 {
        self.0
    }

    pub fn lon(&self) -> f64 {
        self.1
    }

    /// `true` when both components are finite and within
    /// [-90, 90] / [-180, 180] degrees.
    pub fn is_valid(&self) -> bool {
        self.0.is_finite()
            && self.1.is_finite()
            && (-90.0..=90.0).contains(&self.0)
            && (-180.0..=180.0).contains(&self.1)
    }
}

#[derive(Serialize, Deserialize)]
struct Coordinates {
    lat: f64,
    lon: f64,
}

impl From<LatLon> for Coordinates {
    fn from(value: LatLon) -> Self {
        Coordinates {
            lat: value.0,
            lon: value.1,
        }
    }
}

impl From<Coordinates> for LatLon {
    fn from(value: Coordinates) -> Self {
        LatLon(value.lat, value.lon)
    }
}
