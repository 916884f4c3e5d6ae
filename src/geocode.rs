//! City-name geocoding via the OpenWeatherMap direct geocoding API
//!
//! The lookup is constrained to a single best match (`limit=1`). A match
//! is `Ok(Some(..))`, an empty result array is `Ok(None)`; only transport,
//! status, and parse failures are errors.

use crate::config::AppConfig;
use crate::error::FetchError;
use crate::models::Location;
use crate::{HTTP_CLIENT, send_and_read};
use serde::Deserialize;
use tracing::{debug, info, warn};

const GEO_BASE_URL: &str = "https://api.openweathermap.org/geo/1.0/direct";

#[derive(Debug, Deserialize)]
struct GeoEntry {
    name: String,
    lat: f64,
    lon: f64,
    country: Option<String>,
    state: Option<String>,
}

/// Builds the geocoding request URL for a city name
pub fn build_geocode_url(city: &str, api_key: &str) -> String {
    format!(
        "{}?q={}&limit=1&appid={}",
        GEO_BASE_URL,
        urlencoding::encode(city),
        api_key
    )
}

/// Parses a geocoding response body into at most one [`Location`]
pub fn parse_geocode_response(body: &str) -> Result<Option<Location>, FetchError> {
    let entries: Vec<GeoEntry> = serde_json::from_str(body)
        .map_err(|e| FetchError::schema(format!("Geocoding response: {e}")))?;

    Ok(entries.into_iter().next().map(|entry| {
        let name = match entry.state {
            Some(state) => format!("{}, {}", entry.name, state),
            None => entry.name,
        };
        match entry.country {
            Some(country) => Location::with_country(entry.lat, entry.lon, name, country),
            None => Location::new(entry.lat, entry.lon, name),
        }
    }))
}

/// Resolve a city name to coordinates. `Ok(None)` means the service knows
/// no such city; the caller turns that into its own "not found" message.
pub async fn resolve_city(config: &AppConfig, city: &str) -> Result<Option<Location>, FetchError> {
    debug!("Geocoding city: '{}'", city);
    let url = build_geocode_url(city, &config.api_key);

    let body = send_and_read(
        HTTP_CLIENT
            .get(&url)
            .timeout(config.request_timeout()),
    )
    .await?;

    let resolved = parse_geocode_response(&body)?;
    match &resolved {
        Some(location) => info!(
            "Geocoded '{}' to {} ({})",
            city,
            location.name,
            location.format_coordinates()
        ),
        None => warn!("No geocoding results for '{}'", city),
    }
    Ok(resolved)
}
