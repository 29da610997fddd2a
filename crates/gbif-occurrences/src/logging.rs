//! Logging setup
//!
//! Events go to stderr so stdout only carries the table or the error line.

use crate::error::Result;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "gbif_occurrences=info,gbif_api=info";

/// Build the filter from a `RUST_LOG` value, falling back to the defaults
pub fn env_filter(rust_log: Option<&str>) -> Result<EnvFilter> {
    Ok(EnvFilter::try_new(rust_log.unwrap_or(DEFAULT_LOG_FILTER))?)
}

/// Install the global subscriber
pub fn init() -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let env_filter = env_filter(rust_log.as_deref())?;

    // Use JSON format for GCP Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    };

    Ok(())
}
