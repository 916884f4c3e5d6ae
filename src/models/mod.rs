//! Data models for the Fishspot application
//!
//! Core domain types organized by concern:
//! - Location: Geographic coordinates and metadata
//! - Weather: Current weather conditions
//! - Water: Nearby water features from map data
//! - Streamflow: Discharge time series per monitoring site

pub mod location;
pub mod streamflow;
pub mod water;
pub mod weather;

// Re-export all public types for convenient access
pub use location::Location;
pub use streamflow::{FlowPoint, StreamflowSeries};
pub use water::WaterFeature;
pub use weather::WeatherReading;
