//! HTTP API surface for the dashboard frontend

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::dashboard::{self, Dashboard, Section};
use crate::error::LookupError;
use crate::models::{Location, StreamflowSeries, WaterFeature, WeatherReading};

#[derive(Serialize, Deserialize)]
pub struct ApiLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ApiWeather {
    pub description: String,
    pub temperature_c: f64,
    pub wind_speed_ms: f64,
    pub humidity_pct: u8,
}

#[derive(Serialize, Deserialize)]
pub struct ApiWaterFeature {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: f64,
}

#[derive(Serialize, Deserialize)]
pub struct ApiFlowPoint {
    pub timestamp: String,
    pub flow_cfs: f64,
}

#[derive(Serialize, Deserialize)]
pub struct ApiStreamflowSeries {
    pub site_name: String,
    pub points: Vec<ApiFlowPoint>,
}

/// One dashboard section as the frontend consumes it
#[derive(Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiSection<T> {
    Ready { data: T },
    Unavailable { message: String },
}

#[derive(Serialize, Deserialize)]
pub struct ApiDashboard {
    pub location: ApiLocation,
    pub weather: ApiSection<ApiWeather>,
    pub water: ApiSection<Vec<ApiWaterFeature>>,
    pub streamflow: ApiSection<Vec<ApiStreamflowSeries>>,
}

#[derive(Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl From<&Location> for ApiLocation {
    fn from(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
            country: location.country.clone(),
        }
    }
}

impl From<&WeatherReading> for ApiWeather {
    fn from(reading: &WeatherReading) -> Self {
        Self {
            description: reading.format_description(),
            temperature_c: reading.temperature_c,
            wind_speed_ms: reading.wind_speed_ms,
            humidity_pct: reading.humidity_pct,
        }
    }
}

impl From<&WaterFeature> for ApiWaterFeature {
    fn from(feature: &WaterFeature) -> Self {
        Self {
            name: feature.name.clone(),
            latitude: feature.latitude,
            longitude: feature.longitude,
            distance_km: feature.distance_km,
        }
    }
}

impl From<&StreamflowSeries> for ApiStreamflowSeries {
    fn from(series: &StreamflowSeries) -> Self {
        Self {
            site_name: series.site_name.clone(),
            points: series
                .points
                .iter()
                .map(|p| ApiFlowPoint {
                    timestamp: p.timestamp.to_rfc3339(),
                    flow_cfs: p.flow_cfs,
                })
                .collect(),
        }
    }
}

fn convert_section<T, U: for<'a> From<&'a T>>(section: &Section<T>) -> ApiSection<U> {
    match section {
        Section::Ready { data } => ApiSection::Ready { data: U::from(data) },
        Section::Unavailable { message } => ApiSection::Unavailable {
            message: message.clone(),
        },
    }
}

fn convert_list_section<T, U: for<'a> From<&'a T>>(section: &Section<Vec<T>>) -> ApiSection<Vec<U>> {
    match section {
        Section::Ready { data } => ApiSection::Ready {
            data: data.iter().map(U::from).collect(),
        },
        Section::Unavailable { message } => ApiSection::Unavailable {
            message: message.clone(),
        },
    }
}

impl From<&Dashboard> for ApiDashboard {
    fn from(dashboard: &Dashboard) -> Self {
        Self {
            location: ApiLocation::from(&dashboard.location),
            weather: convert_section(&dashboard.weather),
            water: convert_list_section(&dashboard.water),
            streamflow: convert_list_section(&dashboard.streamflow),
        }
    }
}

#[derive(Deserialize)]
struct DashboardQuery {
    city: Option<String>,
}

pub fn router(config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/health", get(health))
        .with_state(config)
}

async fn health() -> &'static str {
    "ok"
}

async fn get_dashboard(
    State(config): State<Arc<AppConfig>>,
    Query(params): Query<DashboardQuery>,
) -> Result<Json<ApiDashboard>, (StatusCode, Json<ApiError>)> {
    let city = params.city.unwrap_or_default();

    match dashboard::lookup(&config, &city).await {
        Ok(dashboard) => Ok(Json(ApiDashboard::from(&dashboard))),
        Err(e) => {
            let status = match &e {
                LookupError::EmptyCity => StatusCode::BAD_REQUEST,
                LookupError::CityNotFound => StatusCode::NOT_FOUND,
                LookupError::Geocode(_) => StatusCode::BAD_GATEWAY,
            };
            Err((
                status,
                Json(ApiError {
                    error: e.user_message(),
                }),
            ))
        }
    }
}
