//! HTTP client for the Nominatim geocoding API.
//!
//! Resolves a free-text address to a single best match. There is no retry:
//! failures go straight back to the caller, who decides what to tell the user.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use smkt_core::{Coordinates, Location};

use crate::error::GeocodeError;
use crate::types::NominatimPlace;

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org/";

/// Client for Nominatim's `/search` endpoint.
///
/// Use [`NominatimClient::new`] for the public instance or
/// [`NominatimClient::with_base_url`] for a self-hosted one or a mock server.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: Client,
    base_url: Url,
}

impl NominatimClient {
    /// Creates a client pointed at the public Nominatim instance.
    ///
    /// Nominatim's usage policy requires an identifying `user_agent`.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self, GeocodeError> {
        Self::with_base_url(user_agent, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`GeocodeError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        user_agent: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so join("search") appends instead of
        // replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| GeocodeError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Resolves `address` to its best-matching [`Location`].
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::NotFound`] if the provider has no match.
    /// - [`GeocodeError::Http`] / [`GeocodeError::UnexpectedStatus`] if the
    ///   provider is unreachable or answers with an error status.
    /// - [`GeocodeError::Deserialize`] / [`GeocodeError::InvalidCoordinates`]
    ///   if the response cannot be interpreted.
    pub async fn geocode(&self, address: &str) -> Result<Location, GeocodeError> {
        let url = self.build_search_url(address)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "geocoding provider error");
            return Err(GeocodeError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let places: Vec<NominatimPlace> =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("search(q={address})"),
                source: e,
            })?;

        let Some(place) = places.into_iter().next() else {
            tracing::info!(address, "address not found");
            return Err(GeocodeError::NotFound {
                address: address.to_string(),
            });
        };

        let location = place_to_location(place)?;
        tracing::debug!(
            address,
            latitude = location.latitude,
            longitude = location.longitude,
            "address geocoded"
        );
        Ok(location)
    }

    /// Resolves `address` to bare coordinates.
    ///
    /// # Errors
    ///
    /// Same as [`NominatimClient::geocode`].
    pub async fn resolve(&self, address: &str) -> Result<Coordinates, GeocodeError> {
        self.geocode(address).await.map(|l| l.coordinates())
    }

    fn build_search_url(&self, address: &str) -> Result<Url, GeocodeError> {
        let mut url = self
            .base_url
            .join("search")
            .map_err(|e| GeocodeError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("q", address)
            .append_pair("format", "jsonv2")
            .append_pair("limit", "1");
        Ok(url)
    }
}

fn place_to_location(place: NominatimPlace) -> Result<Location, GeocodeError> {
    let invalid = || GeocodeError::InvalidCoordinates {
        lat: place.lat.clone(),
        lon: place.lon.clone(),
    };
    let latitude: f64 = place.lat.trim().parse().map_err(|_| invalid())?;
    let longitude: f64 = place.lon.trim().parse().map_err(|_| invalid())?;
    Coordinates::validated(latitude, longitude).map_err(|_| invalid())?;

    Ok(Location {
        latitude,
        longitude,
        address: place.display_name,
    })
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
