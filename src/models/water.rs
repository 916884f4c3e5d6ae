//! Water feature model for map-data results

use serde::{Deserialize, Serialize};

/// A water-tagged way from the map-data service, reduced to its center
/// point. Unnamed ways keep the `"Unnamed"` placeholder.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WaterFeature {
    /// Feature name, `"Unnamed"` when the source carries no name tag
    pub name: String,
    /// Center-point latitude in decimal degrees
    pub latitude: f64,
    /// Center-point longitude in decimal degrees
    pub longitude: f64,
    /// Distance from the queried location in kilometers
    pub distance_km: f64,
}

impl WaterFeature {
    /// Format the feature with its distance for list display
    #[must_use]
    pub fn format_entry(&self) -> String {
        format!(
            "{} ({:.1} km) at {:.4}, {:.4}",
            self.name, self.distance_km, self.latitude, self.longitude
        )
    }
}
