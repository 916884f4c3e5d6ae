//! Current-conditions fetch from the OpenWeatherMap weather API
//!
//! Requests metric units and reduces the response to the four fields the
//! dashboard displays. Any missing required field is a schema failure; the
//! weather section then degrades on its own without touching siblings.

use crate::config::AppConfig;
use crate::error::FetchError;
use crate::models::{Location, WeatherReading};
use crate::{HTTP_CLIENT, send_and_read};
use serde::Deserialize;
use tracing::{debug, info};

const WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    weather: Vec<Condition>,
    main: MainBlock,
    wind: WindBlock,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
}

/// Builds the current-weather request URL with metric units
pub fn build_weather_url(lat: f64, lon: f64, api_key: &str) -> String {
    format!("{WEATHER_BASE_URL}?lat={lat}&lon={lon}&appid={api_key}&units=metric")
}

/// Parses a current-weather response body into a [`WeatherReading`]
pub fn parse_weather_response(body: &str) -> Result<WeatherReading, FetchError> {
    let response: WeatherResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::schema(format!("Weather response: {e}")))?;

    let condition = response
        .weather
        .first()
        .ok_or_else(|| FetchError::schema("Weather response has empty 'weather' array"))?;

    Ok(WeatherReading {
        description: condition.description.clone(),
        temperature_c: response.main.temp,
        wind_speed_ms: response.wind.speed,
        humidity_pct: response.main.humidity,
    })
}

/// Fetch current conditions for a location
pub async fn current_weather(
    config: &AppConfig,
    location: &Location,
) -> Result<WeatherReading, FetchError> {
    debug!(
        "Fetching current weather for {}",
        location.format_coordinates()
    );
    let url = build_weather_url(location.latitude, location.longitude, &config.api_key);

    let body = send_and_read(
        HTTP_CLIENT
            .get(&url)
            .timeout(config.request_timeout()),
    )
    .await?;

    let reading = parse_weather_response(&body)?;
    info!(
        "Current weather at {}: {} / {}",
        location.name,
        reading.format_description(),
        reading.format_temperature()
    );
    Ok(reading)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEATTLE_BODY: &str = r#"{
        "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
        "main": {"temp": 15.2, "feels_like": 14.8, "pressure": 1018, "humidity": 60},
        "wind": {"speed": 3.1, "deg": 220}
    }"#;

    #[test]
    fn test_build_url_requests_metric_units() {
        let url = build_weather_url(47.6, -122.3, "test-key");
        assert!(url.contains("lat=47.6"));
        assert!(url.contains("lon=-122.3"));
        assert!(url.contains("units=metric"), "must request metric units");
    }

    #[test]
    fn test_parse_seattle_fixture_renders_expected_lines() {
        let reading = parse_weather_response(SEATTLE_BODY).expect("fixture should parse");
        assert_eq!(reading.format_description(), "Clear sky");
        assert_eq!(reading.format_temperature(), "Temperature: 15.2 °C");
        assert_eq!(reading.format_wind(), "Wind Speed: 3.1 m/s");
        assert_eq!(reading.format_humidity(), "Humidity: 60%");
    }

    #[test]
    fn test_parse_empty_weather_array_is_schema_error() {
        let body = r#"{"weather": [], "main": {"temp": 1.0, "humidity": 50}, "wind": {"speed": 2.0}}"#;
        let result = parse_weather_response(body);
        assert!(matches!(result, Err(FetchError::Schema(_))));
    }

    #[test]
    fn test_parse_missing_wind_block_is_schema_error() {
        let body = r#"{"weather": [{"description": "mist"}], "main": {"temp": 1.0, "humidity": 50}}"#;
        let result = parse_weather_response(body);
        assert!(matches!(result, Err(FetchError::Schema(_))));
    }
}
