//! Location model for geographic coordinates and metadata

use serde::{Deserialize, Serialize};

/// A resolved place: name plus coordinates. Lives only for the duration of
/// one lookup cycle; nothing is persisted across requests.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Location name (city, region, etc.)
    pub name: String,
    /// Country code (ISO 3166-1 alpha-2)
    pub country: Option<String>,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, name: String) -> Self {
        Self {
            latitude,
            longitude,
            name,
            country: None,
        }
    }

    /// Create location with country
    #[must_use]
    pub fn with_country(latitude: f64, longitude: f64, name: String, country: String) -> Self {
        Self {
            latitude,
            longitude,
            name,
            country: Some(country),
        }
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }

    /// Bounding box of `delta` degrees around this point, returned as
    /// (west, south, east, north) in the order spatial queries expect.
    #[must_use]
    pub fn bounding_box(&self, delta: f64) -> (f64, f64, f64, f64) {
        (
            self.longitude - delta,
            self.latitude - delta,
            self.longitude + delta,
            self.latitude + delta,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_coordinates() {
        let location = Location::new(47.6062, -122.3321, "Seattle".to_string());
        assert_eq!(location.format_coordinates(), "47.6062, -122.3321");
    }

    #[test]
    fn test_bounding_box() {
        let location = Location::new(47.6, -122.3, "Seattle".to_string());
        let (west, south, east, north) = location.bounding_box(0.1);
        assert!((west - -122.4).abs() < 1e-9);
        assert!((south - 47.5).abs() < 1e-9);
        assert!((east - -122.2).abs() < 1e-9);
        assert!((north - 47.7).abs() < 1e-9);
    }

    #[test]
    fn test_with_country() {
        let location =
            Location::with_country(47.6062, -122.3321, "Seattle".to_string(), "US".to_string());
        assert_eq!(location.country.as_deref(), Some("US"));
    }
}
