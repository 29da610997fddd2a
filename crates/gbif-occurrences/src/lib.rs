//! GBIF occurrence lookup
//!
//! Fetches the first page of occurrence records for a species in a country
//! and renders them as a table.

pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod table;

pub use config::{Config, DEFAULT_SPECIES};
pub use driver::{lookup, run};
pub use error::{OccurrencesError, Result};
pub use table::{print_payload, render_payload, OccurrenceTable, NO_RESULTS};
