//! Request and response types for the GBIF occurrence search endpoint
//!
//! Occurrence records themselves stay untyped (`serde_json::Value`): their
//! schema belongs to GBIF and only the `results` key is ever inspected.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Country used when a query does not name one (Uruguay)
pub const DEFAULT_COUNTRY: &str = "UY";

/// Page size sent with every occurrence search; only the first page is fetched
pub const OCCURRENCE_LIMIT: u32 = 10;

/// Filters for `GET /occurrence/search`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceQuery {
    pub scientific_name: String,
    /// ISO 3166-1 alpha-2 country code
    pub country: String,
}

impl OccurrenceQuery {
    /// Query a species in the default country
    pub fn new(scientific_name: impl Into<String>) -> Self {
        Self::with_country(scientific_name, DEFAULT_COUNTRY)
    }

    pub fn with_country(scientific_name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            scientific_name: scientific_name.into(),
            country: country.into(),
        }
    }

    /// Always `limit` fixed to [`OCCURRENCE_LIMIT`]
    pub fn limit(&self) -> u32 {
        OCCURRENCE_LIMIT
    }

    /// Percent-encoded query string, without the leading `?`
    pub fn to_query_string(&self) -> String {
        format!(
            "scientificName={}&country={}&limit={}",
            urlencoding::encode(&self.scientific_name),
            urlencoding::encode(&self.country),
            self.limit()
        )
    }
}

/// Paging fields GBIF returns alongside `results`
///
/// Every field is optional and read leniently: a missing or mistyped field
/// is `None` rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default, deserialize_with = "lenient")]
    pub offset: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub limit: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub end_of_records: Option<bool>,
    /// Total number of matching occurrences
    #[serde(default, deserialize_with = "lenient")]
    pub count: Option<u64>,
}

impl SearchPage {
    pub fn from_payload(payload: &Value) -> Self {
        Self::deserialize(payload).unwrap_or_default()
    }

    /// Number of matches GBIF has beyond the records that were returned
    pub fn unreturned(&self, returned: usize) -> Option<u64> {
        let count = self.count?;
        let seen = self.offset.unwrap_or(0).saturating_add(returned as u64);
        (count > seen).then(|| count - seen)
    }
}

/// Deserialize a field, turning a type mismatch into `None`
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
