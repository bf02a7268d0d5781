use thiserror::Error;

/// Errors returned by the geocoding client.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The provider answered but had no match for the address.
    #[error("address not found: {address}")]
    NotFound { address: String },

    /// Network or TLS failure, including timeouts.
    #[error("geocoding provider unreachable: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("geocoding provider returned HTTP {status}")]
    UnexpectedStatus { status: u16 },

    /// The response body did not have the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The provider returned coordinates that are not valid numbers.
    #[error("geocoding provider returned invalid coordinates ({lat}, {lon})")]
    InvalidCoordinates { lat: String, lon: String },

    #[error("invalid geocoder base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl GeocodeError {
    /// `true` when the address simply could not be resolved, as opposed to
    /// the provider failing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
