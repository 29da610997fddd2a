//! GBIF API HTTP client

use crate::error::{GbifError, Result};
use crate::types::{OccurrenceQuery, SearchPage};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Client for the GBIF (Global Biodiversity Information Facility) occurrence API
///
/// Issues a single request per search and never follows pagination: only the
/// first page of [`crate::OCCURRENCE_LIMIT`] records is returned.
pub struct GbifClient {
    http: reqwest::Client,
    base_url: String,
}

impl GbifClient {
    /// Base URL for GBIF API v1
    pub const V1_BASE_URL: &'static str = "https://api.gbif.org/v1";

    /// Create a new GBIF client with default settings (30 second timeout)
    pub fn new() -> Self {
        Self::with_base_url(Self::V1_BASE_URL)
    }

    /// Create a new GBIF client against a different API root
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_base_url_and_timeout(base_url, Duration::from_secs(30))
    }

    /// Create a new GBIF client with a custom API root and timeout
    pub fn with_base_url_and_timeout(base_url: &str, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search occurrence records by scientific name and country
    ///
    /// Returns the response body as untyped JSON on `200 OK`. Any other status
    /// becomes [`GbifError::RequestFailure`] with the raw body text; transport
    /// failures surface as [`GbifError::Http`].
    pub async fn search_occurrences(&self, query: &OccurrenceQuery) -> Result<Value> {
        let url = format!(
            "{}/occurrence/search?{}",
            self.base_url,
            query.to_query_string()
        );
        debug!(
            scientific_name = %query.scientific_name,
            country = %query.country,
            limit = query.limit(),
            "Searching GBIF occurrences"
        );

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "GBIF occurrence search failed");
            return Err(GbifError::RequestFailure {
                status: status.as_u16(),
                body,
            });
        }

        let data: Value = serde_json::from_str(&body)?;

        let page = SearchPage::from_payload(&data);
        debug!(
            count = ?page.count,
            offset = ?page.offset,
            end_of_records = ?page.end_of_records,
            "GBIF occurrence page received"
        );

        Ok(data)
    }
}

impl Default for GbifClient {
    fn default() -> Self {
        Self::new()
    }
}
