//! Nearby water bodies via the Overpass map-data API
//!
//! Selects ways tagged `natural=water` or carrying any `waterway` tag
//! within a radius of the point, asking Overpass to aggregate each way to
//! its center point. An empty result is a valid outcome, distinct from a
//! fetch failure.

use crate::config::AppConfig;
use crate::error::FetchError;
use crate::models::{Location, WaterFeature};
use crate::{HTTP_CLIENT, send_and_read};
use haversine::{Location as HaversineLocation, Units, distance};
use serde::Deserialize;
use tracing::{debug, info};

const OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    elements: Vec<Element>,
}

#[derive(Debug, Deserialize)]
struct Element {
    tags: Option<Tags>,
    center: Option<Center>,
}

#[derive(Debug, Deserialize)]
struct Tags {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Center {
    lat: f64,
    lon: f64,
}

/// Builds the Overpass QL query for water-tagged ways around a point
pub fn build_overpass_query(lat: f64, lon: f64, radius_m: u32) -> String {
    format!(
        "[out:json];(way(around:{radius_m},{lat},{lon})[\"natural\"=\"water\"];way(around:{radius_m},{lat},{lon})[\"waterway\"];);out center;"
    )
}

/// Parses an Overpass response into water features, sorted closest-first
/// from the queried point. Ways without an aggregated center are skipped;
/// ways without a name tag default to `"Unnamed"`.
pub fn parse_water_response(
    body: &str,
    origin_lat: f64,
    origin_lon: f64,
) -> Result<Vec<WaterFeature>, FetchError> {
    let response: OverpassResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::schema(format!("Overpass response: {e}")))?;

    let mut features: Vec<WaterFeature> = response
        .elements
        .into_iter()
        .filter_map(|element| {
            let center = element.center?;
            let name = element
                .tags
                .and_then(|tags| tags.name)
                .unwrap_or_else(|| "Unnamed".to_string());
            let distance_km = distance(
                HaversineLocation {
                    latitude: origin_lat,
                    longitude: origin_lon,
                },
                HaversineLocation {
                    latitude: center.lat,
                    longitude: center.lon,
                },
                Units::Kilometers,
            );
            Some(WaterFeature {
                name,
                latitude: center.lat,
                longitude: center.lon,
                distance_km,
            })
        })
        .collect();

    features.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    Ok(features)
}

/// Fetch water features within the configured radius of a location.
/// `Ok(vec![])` means the area genuinely has none.
pub async fn nearby_water_bodies(
    config: &AppConfig,
    location: &Location,
) -> Result<Vec<WaterFeature>, FetchError> {
    let radius_m = config.radius_meters();
    debug!(
        "Querying water bodies within {}m of {}",
        radius_m,
        location.format_coordinates()
    );
    let query = build_overpass_query(location.latitude, location.longitude, radius_m);

    let body = send_and_read(
        HTTP_CLIENT
            .get(OVERPASS_URL)
            .query(&[("data", query.as_str())])
            .timeout(config.request_timeout()),
    )
    .await?;

    let features = parse_water_response(&body, location.latitude, location.longitude)?;
    info!(
        "Found {} water features near {}",
        features.len(),
        location.name
    );
    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_selects_both_water_tags_with_center_output() {
        let query = build_overpass_query(47.6, -122.3, 10_000);
        assert!(query.contains("[out:json]"));
        assert!(
            query.contains("way(around:10000,47.6,-122.3)[\"natural\"=\"water\"]"),
            "must select natural=water ways, got: {query}"
        );
        assert!(
            query.contains("way(around:10000,47.6,-122.3)[\"waterway\"]"),
            "must select waterway-tagged ways, got: {query}"
        );
        assert!(query.contains("out center;"), "must request center aggregation");
    }

    #[test]
    fn test_parse_defaults_missing_name_to_unnamed() {
        let body = r#"{"elements": [
            {"type": "way", "id": 1, "center": {"lat": 47.61, "lon": -122.31}, "tags": {"waterway": "stream"}},
            {"type": "way", "id": 2, "center": {"lat": 47.62, "lon": -122.32}}
        ]}"#;
        let features = parse_water_response(body, 47.6, -122.3).expect("should parse");
        assert_eq!(features.len(), 2);
        assert!(features.iter().all(|f| f.name == "Unnamed"));
    }

    #[test]
    fn test_parse_sorts_closest_first() {
        let body = r#"{"elements": [
            {"type": "way", "id": 1, "center": {"lat": 47.9, "lon": -122.3}, "tags": {"name": "Far Lake"}},
            {"type": "way", "id": 2, "center": {"lat": 47.61, "lon": -122.3}, "tags": {"name": "Near Creek"}}
        ]}"#;
        let features = parse_water_response(body, 47.6, -122.3).expect("should parse");
        assert_eq!(features[0].name, "Near Creek");
        assert_eq!(features[1].name, "Far Lake");
        assert!(features[0].distance_km < features[1].distance_km);
    }

    #[test]
    fn test_parse_skips_elements_without_center() {
        let body = r#"{"elements": [
            {"type": "way", "id": 1, "tags": {"name": "No Center"}},
            {"type": "way", "id": 2, "center": {"lat": 47.61, "lon": -122.31}, "tags": {"name": "Good"}}
        ]}"#;
        let features = parse_water_response(body, 47.6, -122.3).expect("should parse");
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].name, "Good");
    }

    #[test]
    fn test_parse_empty_elements_is_ok_and_empty() {
        let features = parse_water_response(r#"{"elements": []}"#, 47.6, -122.3)
            .expect("empty elements is a valid outcome");
        assert!(features.is_empty());
    }

    #[test]
    fn test_parse_malformed_body_is_schema_error() {
        let result = parse_water_response("not json", 47.6, -122.3);
        assert!(matches!(result, Err(FetchError::Schema(_))));
    }
}
