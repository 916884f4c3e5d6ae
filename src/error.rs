//! Error types for the Fishspot application

use thiserror::Error;

/// Failure of a single upstream fetch. Every fetcher collapses into this
/// taxonomy so callers can branch on cause rather than error text.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network-level failure, including timeouts
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success HTTP status
    #[error("Unexpected HTTP status: {status}")]
    Status { status: reqwest::StatusCode },

    /// Response body did not match the expected JSON shape
    #[error("Unexpected response shape: {0}")]
    Schema(String),

    /// Upstream answered but carried nothing usable
    #[error("No data available: {0}")]
    NoData(String),
}

impl FetchError {
    /// Create a new schema error
    pub fn schema<S: Into<String>>(message: S) -> Self {
        Self::Schema(message.into())
    }

    /// Create a new no-data error
    pub fn no_data<S: Into<String>>(message: S) -> Self {
        Self::NoData(message.into())
    }
}

/// Failure of a whole city lookup, raised before or during geocoding.
/// Post-geocode section failures never surface here; they degrade into
/// per-section messages instead.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Blank or whitespace-only city input, rejected before any network call
    #[error("City name is empty")]
    EmptyCity,

    /// Geocoding succeeded but returned zero matches
    #[error("No geocoding match for city")]
    CityNotFound,

    /// Geocoding itself failed (transport, status, or parse)
    #[error("Geocoding failed: {0}")]
    Geocode(#[from] FetchError),
}

impl LookupError {
    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            LookupError::EmptyCity => "Please enter a city name.".to_string(),
            LookupError::CityNotFound => "City not found. Please try again.".to_string(),
            LookupError::Geocode(_) => {
                "Unable to look up that city right now. Please try again later.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_creation() {
        let schema_err = FetchError::schema("missing field");
        assert!(matches!(schema_err, FetchError::Schema(_)));

        let no_data_err = FetchError::no_data("empty timeSeries");
        assert!(matches!(no_data_err, FetchError::NoData(_)));
    }

    #[test]
    fn test_not_found_user_message_is_exact() {
        assert_eq!(
            LookupError::CityNotFound.user_message(),
            "City not found. Please try again."
        );
    }

    #[test]
    fn test_geocode_failure_user_message() {
        let err = LookupError::Geocode(FetchError::schema("bad json"));
        assert!(err.user_message().contains("Unable to look up"));
    }
}
