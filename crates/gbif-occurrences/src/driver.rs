//! One lookup: fetch the first page, then render it

use crate::error::Result;
use crate::table::{render_payload, OccurrenceTable};
use gbif_api::{GbifClient, OccurrenceQuery, SearchPage};
use serde_json::Value;
use tracing::{error, info};

/// Fetch occurrences and render them, propagating fetch failures
pub async fn lookup(client: &GbifClient, query: &OccurrenceQuery) -> Result<String> {
    let data = client.search_occurrences(query).await?;
    log_truncation(query, &data);
    Ok(render_payload(&data))
}

/// Fetch occurrences and return the text to print
///
/// Fetch failures are reported as `Error: {message}` instead of being
/// propagated, so the caller always exits normally.
pub async fn run(client: &GbifClient, query: &OccurrenceQuery) -> String {
    match lookup(client, query).await {
        Ok(output) => output,
        Err(e) => {
            error!(
                scientific_name = %query.scientific_name,
                country = %query.country,
                status = ?e.status(),
                error = %e,
                "Occurrence lookup failed"
            );
            format!("Error: {}", e)
        }
    }
}

fn log_truncation(query: &OccurrenceQuery, data: &Value) {
    let Some(table) = OccurrenceTable::from_payload(data) else {
        return;
    };
    if let Some(remaining) = SearchPage::from_payload(data).unreturned(table.row_count()) {
        info!(
            scientific_name = %query.scientific_name,
            shown = table.row_count(),
            remaining,
            "More occurrences match than are shown"
        );
    }
}
