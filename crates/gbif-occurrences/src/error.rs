//! Error types for the occurrence lookup tool

use std::fmt;

#[derive(Debug)]
pub enum OccurrencesError {
    /// GBIF API error
    Gbif(gbif_api::GbifError),
    /// Configuration error
    Config(String),
}

impl OccurrencesError {
    /// HTTP status GBIF answered with, if the lookup got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Gbif(e) => e.status(),
            Self::Config(_) => None,
        }
    }
}

impl fmt::Display for OccurrencesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gbif(e) => write!(f, "{}", e),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for OccurrencesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gbif(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}

impl From<gbif_api::GbifError> for OccurrencesError {
    fn from(e: gbif_api::GbifError) -> Self {
        Self::Gbif(e)
    }
}

impl From<tracing_subscriber::filter::ParseError> for OccurrencesError {
    fn from(e: tracing_subscriber::filter::ParseError) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OccurrencesError>;
