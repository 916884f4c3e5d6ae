//! Lookup orchestration: one city in, one dashboard out
//!
//! The flow is validate → geocode → fan out the three section fetches
//! concurrently → collapse each into its own [`Section`]. A failing
//! section degrades into an inline message and never blocks its siblings;
//! only empty input and geocoding problems abort the whole lookup.

use crate::config::AppConfig;
use crate::error::{FetchError, LookupError};
use crate::models::{Location, StreamflowSeries, WaterFeature, WeatherReading};
use crate::{geocode, streamflow, water, weather};
use serde::Serialize;
use tracing::{info, warn};

/// Message shown when the area has no water features, and when the water
/// fetch itself failed (the cause is still logged and typed upstream)
pub const NO_WATER_MESSAGE: &str = "No nearby lakes or rivers found.";

/// Message shown for any streamflow failure or empty result
pub const NO_STREAMFLOW_MESSAGE: &str = "No streamflow data available for this location.";

/// Message shown when the weather fetch failed
pub const NO_WEATHER_MESSAGE: &str = "Weather data is currently unavailable.";

/// Outcome of one dashboard section
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Section<T> {
    /// The fetch succeeded and the section has content to show
    Ready { data: T },
    /// The section degraded; `message` is what the user sees inline
    Unavailable { message: String },
}

impl<T> Section<T> {
    pub fn ready(data: T) -> Self {
        Self::Ready { data }
    }

    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

/// Everything one lookup produced, ready for rendering
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub location: Location,
    pub weather: Section<WeatherReading>,
    pub water: Section<Vec<WaterFeature>>,
    pub streamflow: Section<Vec<StreamflowSeries>>,
}

/// Run a full lookup for a city name.
///
/// Blank input short-circuits before any network call; a city with no
/// geocoding match short-circuits after the geocoding call. The three
/// section fetches run concurrently and fail independently.
pub async fn lookup(config: &AppConfig, city: &str) -> Result<Dashboard, LookupError> {
    let city = city.trim();
    if city.is_empty() {
        return Err(LookupError::EmptyCity);
    }

    let location = geocode::resolve_city(config, city)
        .await?
        .ok_or(LookupError::CityNotFound)?;

    info!(
        "Building dashboard for {} ({})",
        location.name,
        location.format_coordinates()
    );

    // The three fetches share only the immutable location, so they fan out
    // without synchronization and join before rendering.
    let (weather_result, water_result, streamflow_result) = tokio::join!(
        weather::current_weather(config, &location),
        water::nearby_water_bodies(config, &location),
        streamflow::streamflow_series(config, &location),
    );

    Ok(Dashboard {
        weather: weather_section(weather_result),
        water: water_section(water_result),
        streamflow: streamflow_section(streamflow_result),
        location,
    })
}

fn weather_section(result: Result<WeatherReading, FetchError>) -> Section<WeatherReading> {
    match result {
        Ok(reading) => Section::ready(reading),
        Err(e) => {
            warn!("Weather section degraded: {}", e);
            Section::unavailable(NO_WEATHER_MESSAGE)
        }
    }
}

fn water_section(result: Result<Vec<WaterFeature>, FetchError>) -> Section<Vec<WaterFeature>> {
    match result {
        Ok(features) if features.is_empty() => Section::unavailable(NO_WATER_MESSAGE),
        Ok(features) => Section::ready(features),
        Err(e) => {
            warn!("Water section degraded: {}", e);
            Section::unavailable(NO_WATER_MESSAGE)
        }
    }
}

fn streamflow_section(
    result: Result<Vec<StreamflowSeries>, FetchError>,
) -> Section<Vec<StreamflowSeries>> {
    match result {
        Ok(series) if series.is_empty() => Section::unavailable(NO_STREAMFLOW_MESSAGE),
        Ok(series) => Section::ready(series),
        Err(e) => {
            warn!("Streamflow section degraded: {}", e);
            Section::unavailable(NO_STREAMFLOW_MESSAGE)
        }
    }
}
