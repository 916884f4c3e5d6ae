//! Streamflow time series from the USGS NWIS Instantaneous Values service
//!
//! Queries discharge (parameter code 00060) for all sites inside a ±0.1°
//! bounding box around the point. The IV service returns WaterML rendered
//! as JSON with string-encoded timestamps and values; parsing preserves
//! the order and count of valid observations per site.

use crate::config::AppConfig;
use crate::error::FetchError;
use crate::models::{FlowPoint, Location, StreamflowSeries};
use crate::{HTTP_CLIENT, send_and_read};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, info, warn};

const IV_BASE_URL: &str = "https://waterservices.usgs.gov/nwis/iv/";

/// Discharge in cubic feet per second
const PARAM_DISCHARGE: &str = "00060";

/// Bounding box half-width in degrees around the queried point
const BBOX_DELTA_DEG: f64 = 0.1;

/// USGS sentinel marking an observation with no usable value
const NO_DATA_SENTINEL: f64 = -999_999.0;

// ---------------------------------------------------------------------------
// Serde structures for WaterML JSON deserialization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct IvResponse {
    value: ValueWrapper,
}

#[derive(Deserialize)]
struct ValueWrapper {
    #[serde(rename = "timeSeries")]
    time_series: Vec<TimeSeries>,
}

#[derive(Deserialize)]
struct TimeSeries {
    #[serde(rename = "sourceInfo")]
    source_info: SourceInfo,
    values: Vec<Values>,
}

#[derive(Deserialize)]
struct SourceInfo {
    #[serde(rename = "siteName")]
    site_name: String,
}

#[derive(Deserialize)]
struct Values {
    value: Vec<ValueEntry>,
}

#[derive(Deserialize)]
struct ValueEntry {
    // USGS returns the numeric value as a string
    value: String,
    #[serde(rename = "dateTime")]
    date_time: String,
}

/// Builds the IV request URL for a discharge bounding-box query
pub fn build_streamflow_url(location: &Location) -> String {
    let (west, south, east, north) = location.bounding_box(BBOX_DELTA_DEG);
    format!(
        "{IV_BASE_URL}?format=json&bBox={west:.4},{south:.4},{east:.4},{north:.4}&parameterCd={PARAM_DISCHARGE}&siteStatus=all"
    )
}

/// Parses an IV response body into one series per site.
///
/// Observations with an unparseable value or timestamp, or carrying the
/// USGS sentinel, are skipped; a site with no surviving observations is
/// dropped. Surviving points keep their upstream order.
///
/// # Errors
/// - [`FetchError::Schema`] — malformed or unexpected JSON structure.
/// - [`FetchError::NoData`] — no site produced a usable observation.
pub fn parse_streamflow_response(body: &str) -> Result<Vec<StreamflowSeries>, FetchError> {
    let response: IvResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::schema(format!("Streamflow response: {e}")))?;

    if response.value.time_series.is_empty() {
        return Err(FetchError::no_data("No timeSeries entries in response"));
    }

    let mut series_list = Vec::new();

    for series in response.value.time_series {
        let site_name = series.source_info.site_name;

        let Some(values_wrapper) = series.values.first() else {
            warn!("Site '{}' has no values array, skipping", site_name);
            continue;
        };

        let mut points = Vec::with_capacity(values_wrapper.value.len());
        for entry in &values_wrapper.value {
            let Ok(flow_cfs) = entry.value.parse::<f64>() else {
                warn!(
                    "Skipping unparseable flow value '{}' for site '{}'",
                    entry.value, site_name
                );
                continue;
            };
            if (flow_cfs - NO_DATA_SENTINEL).abs() < 0.1 {
                continue;
            }
            let timestamp = match DateTime::parse_from_rfc3339(&entry.date_time) {
                Ok(parsed) => parsed.with_timezone(&Utc),
                Err(e) => {
                    warn!(
                        "Skipping observation with bad timestamp '{}' for site '{}': {}",
                        entry.date_time, site_name, e
                    );
                    continue;
                }
            };
            points.push(FlowPoint {
                timestamp,
                flow_cfs,
            });
        }

        if points.is_empty() {
            continue;
        }

        series_list.push(StreamflowSeries { site_name, points });
    }

    if series_list.is_empty() {
        return Err(FetchError::no_data(
            "All timeSeries entries were empty or contained sentinel values",
        ));
    }

    Ok(series_list)
}

/// Fetch discharge series for every site near a location
pub async fn streamflow_series(
    config: &AppConfig,
    location: &Location,
) -> Result<Vec<StreamflowSeries>, FetchError> {
    debug!(
        "Querying streamflow around {}",
        location.format_coordinates()
    );
    let url = build_streamflow_url(location);

    let body = send_and_read(
        HTTP_CLIENT
            .get(&url)
            .timeout(config.request_timeout()),
    )
    .await?;

    let series = parse_streamflow_response(&body)?;
    info!(
        "Found {} streamflow sites near {}",
        series.len(),
        location.name
    );
    Ok(series)
}
