//! Error types for GBIF API client

use std::fmt;

/// Errors that can occur when interacting with the GBIF API
#[derive(Debug)]
pub enum GbifError {
    /// GBIF answered with a status other than 200
    RequestFailure { status: u16, body: String },
    /// HTTP request failed at the transport level
    Http(reqwest::Error),
    /// Failed to parse JSON response
    Json(serde_json::Error),
}

impl GbifError {
    /// Status code of a rejected request, if GBIF answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailure { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Json(_) => None,
        }
    }
}

impl fmt::Display for GbifError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestFailure { status, body } => {
                write!(f, "Failed to fetch data: {} - {}", status, body)
            }
            Self::Http(e) => write!(f, "GBIF HTTP error: {}", e),
            Self::Json(e) => write!(f, "GBIF JSON parse error: {}", e),
        }
    }
}

impl std::error::Error for GbifError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RequestFailure { .. } => None,
            Self::Http(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for GbifError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for GbifError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Result type for GBIF API operations
pub type Result<T> = std::result::Result<T, GbifError>;
