//! Fishspot - city weather and fishing-water dashboard
//!
//! Given a city name, this library resolves coordinates, then gathers
//! current weather, nearby water bodies, and USGS streamflow series,
//! assembling them into one dashboard for terminal or web display.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod geocode;
pub mod models;
pub mod streamflow;
pub mod water;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::AppConfig;
pub use dashboard::{Dashboard, Section};
pub use error::{FetchError, LookupError};
pub use models::{FlowPoint, Location, StreamflowSeries, WaterFeature, WeatherReading};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use std::sync::LazyLock;

/// Shared HTTP client for all outbound requests. Per-request timeouts come
/// from [`AppConfig`], applied on each request builder.
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .user_agent(concat!("fishspot/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
});

/// Sends a prepared request and reads the body, mapping transport failures
/// and non-success statuses into [`FetchError`].
pub(crate) async fn send_and_read(request: reqwest::RequestBuilder) -> Result<String, FetchError> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status { status });
    }
    Ok(response.text().await?)
}
