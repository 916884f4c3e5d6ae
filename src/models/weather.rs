//! Current weather conditions model

use serde::{Deserialize, Serialize};

/// Current conditions at a point, displayed once and discarded
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherReading {
    /// Human-readable description of weather conditions
    pub description: String,
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// Wind speed in m/s
    pub wind_speed_ms: f64,
    /// Relative humidity percentage (0-100)
    pub humidity_pct: u8,
}

impl WeatherReading {
    /// Description with the first letter capitalized, as displayed
    #[must_use]
    pub fn format_description(&self) -> String {
        let mut chars = self.description.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }

    /// Format temperature line with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("Temperature: {} °C", self.temperature_c)
    }

    /// Format wind speed line with unit
    #[must_use]
    pub fn format_wind(&self) -> String {
        format!("Wind Speed: {} m/s", self.wind_speed_ms)
    }

    /// Format humidity line
    #[must_use]
    pub fn format_humidity(&self) -> String {
        format!("Humidity: {}%", self.humidity_pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn seattle_reading() -> WeatherReading {
        WeatherReading {
            description: "clear sky".to_string(),
            temperature_c: 15.2,
            wind_speed_ms: 3.1,
            humidity_pct: 60,
        }
    }

    #[test]
    fn test_display_lines_match_expected_text() {
        let reading = seattle_reading();
        assert_eq!(reading.format_description(), "Clear sky");
        assert_eq!(reading.format_temperature(), "Temperature: 15.2 °C");
        assert_eq!(reading.format_wind(), "Wind Speed: 3.1 m/s");
        assert_eq!(reading.format_humidity(), "Humidity: 60%");
    }

    #[rstest]
    #[case("clear sky", "Clear sky")]
    #[case("light rain", "Light rain")]
    #[case("", "")]
    #[case("überwiegend bewölkt", "Überwiegend bewölkt")]
    fn test_format_description(#[case] raw: &str, #[case] expected: &str) {
        let mut reading = seattle_reading();
        reading.description = raw.to_string();
        assert_eq!(reading.format_description(), expected);
    }
}
