//! Supermarket discovery through the OpenStreetMap Overpass API.

pub mod brand;
pub mod elements;
pub mod query;

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use smkt_core::Coordinates;

use crate::error::ScraperError;
use crate::rate_limit::retry_with_backoff;
use crate::types::{DiscoveredSupermarket, OverpassResponse};

pub use brand::match_brand;
pub use elements::collect_supermarkets;
pub use query::supermarkets_query;

pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

/// HTTP client for an Overpass interpreter endpoint.
///
/// Throttling (429) and network failures are retried with exponential
/// backoff; any other non-2xx status is returned as
/// [`ScraperError::UnexpectedStatus`].
#[derive(Debug, Clone)]
pub struct OverpassClient {
    client: Client,
    endpoint: Url,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl OverpassClient {
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidBaseUrl`] if `endpoint` does not parse,
    /// or [`ScraperError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(
        endpoint: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, ScraperError> {
        let endpoint = Url::parse(endpoint).map_err(|e| ScraperError::InvalidBaseUrl {
            url: endpoint.to_owned(),
            reason: e.to_string(),
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            endpoint,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Runs a raw Overpass QL query.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::RateLimited`] / [`ScraperError::Http`] once retries
    ///   are exhausted.
    /// - [`ScraperError::UnexpectedStatus`] for any other non-2xx status.
    /// - [`ScraperError::Deserialize`] if the body is not an Overpass JSON
    ///   response.
    pub async fn run_query(&self, query: &str) -> Result<OverpassResponse, ScraperError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("data", query);

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let response = self.client.get(url.clone()).send().await?;
                let status = response.status();

                if status == StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(60);
                    return Err(ScraperError::RateLimited {
                        domain: url.host_str().unwrap_or_default().to_owned(),
                        retry_after_secs,
                    });
                }

                if !status.is_success() {
                    return Err(ScraperError::UnexpectedStatus {
                        status: status.as_u16(),
                        url: self.endpoint.to_string(),
                    });
                }

                let body = response.text().await?;
                serde_json::from_str::<OverpassResponse>(&body).map_err(|e| {
                    ScraperError::Deserialize {
                        context: format!("overpass response from {}", self.endpoint),
                        source: e,
                    }
                })
            }
        })
        .await
    }

    /// Finds recognised supermarket branches within `radius_km` of `center`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::run_query`].
    pub async fn find_supermarkets(
        &self,
        center: Coordinates,
        radius_km: f64,
    ) -> Result<Vec<DiscoveredSupermarket>, ScraperError> {
        let query = supermarkets_query(center, radius_km);
        let response = self.run_query(&query).await?;
        let found = collect_supermarkets(response.elements);
        tracing::info!(
            latitude = center.latitude,
            longitude = center.longitude,
            radius_km,
            found = found.len(),
            "supermarkets discovered"
        );
        Ok(found)
    }
}
