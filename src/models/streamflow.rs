//! Streamflow time series models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One discharge observation
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FlowPoint {
    /// Observation timestamp
    pub timestamp: DateTime<Utc>,
    /// Discharge in cubic feet per second
    pub flow_cfs: f64,
}

/// Discharge time series for one monitoring site, ordered by time as
/// delivered upstream
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StreamflowSeries {
    /// Monitoring site name
    pub site_name: String,
    /// Ordered observations
    pub points: Vec<FlowPoint>,
}

impl StreamflowSeries {
    /// Most recent observation, if any
    #[must_use]
    pub fn latest(&self) -> Option<&FlowPoint> {
        self.points.last()
    }

    /// Summary line for list display
    #[must_use]
    pub fn format_summary(&self) -> String {
        match self.latest() {
            Some(point) => format!(
                "{}: {} readings, latest {} cfs at {}",
                self.site_name,
                self.points.len(),
                point.flow_cfs,
                point.timestamp.to_rfc3339()
            ),
            None => format!("{}: no readings", self.site_name),
        }
    }
}
