//! Command-line and environment configuration
//!
//! Defaults reproduce the stock lookup: Puma concolor in Uruguay against the
//! public GBIF v1 API.

use clap::Parser;
use gbif_api::{GbifClient, OccurrenceQuery, DEFAULT_COUNTRY};
use std::time::Duration;

/// Species looked up when none is given on the command line
pub const DEFAULT_SPECIES: &str = "Puma concolor";

/// Command-line and environment configuration
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gbif-occurrences",
    version,
    about = "Print the first page of GBIF occurrence records for a species in a country"
)]
pub struct Config {
    /// Scientific name of the species
    #[arg(default_value = DEFAULT_SPECIES)]
    pub species: String,

    /// ISO 3166-1 alpha-2 country code
    #[arg(short, long, env = "GBIF_COUNTRY", default_value = DEFAULT_COUNTRY)]
    pub country: String,

    /// GBIF API root
    #[arg(long, env = "GBIF_API_URL", default_value = GbifClient::V1_BASE_URL)]
    pub api_url: String,

    /// HTTP request timeout in seconds
    #[arg(long, env = "GBIF_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

impl Config {
    pub fn query(&self) -> OccurrenceQuery {
        OccurrenceQuery::with_country(self.species.clone(), self.country.clone())
    }

    pub fn client(&self) -> GbifClient {
        GbifClient::with_base_url_and_timeout(
            &self.api_url,
            Duration::from_secs(self.timeout_secs),
        )
    }
}
