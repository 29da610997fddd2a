//! Rust client for the GBIF (Global Biodiversity Information Facility) API
//!
//! This crate wraps the GBIF occurrence search endpoint. Responses are kept as
//! untyped JSON because the record schema is owned by GBIF.
//!
//! # Example
//!
//! ```no_run
//! use gbif_api::{GbifClient, OccurrenceQuery};
//!
//! # async fn example() -> Result<(), gbif_api::GbifError> {
//! let client = GbifClient::new();
//!
//! let data = client
//!     .search_occurrences(&OccurrenceQuery::new("Puma concolor"))
//!     .await?;
//! if let Some(results) = data.get("results") {
//!     println!("{}", results);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! ## Occurrence API v1
//! - `GET /occurrence/search` - First page (10 records) of occurrences
//!   filtered by `scientificName` and `country`

mod client;
mod error;
mod types;

pub use client::GbifClient;
pub use error::{GbifError, Result};
pub use types::{OccurrenceQuery, SearchPage, DEFAULT_COUNTRY, OCCURRENCE_LIMIT};
