//! Tabular rendering of an occurrence search payload

use comfy_table::{ContentArrangement, Table};
use serde_json::Value;

/// Notice printed when the payload has no `results` key
pub const NO_RESULTS: &str = "No results found in the data.";

/// Widest table rendered in full; beyond this the middle columns are elided
pub const MAX_DISPLAY_COLUMNS: usize = 20;

const ELLIPSIS: &str = "...";

/// Row-major view of the `results` array
///
/// Columns are the union of keys across all records, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl OccurrenceTable {
    /// Build the table, or `None` when the payload carries no `results`
    ///
    /// A `results` value that is not an array yields an empty table. Records
    /// that are not objects add no columns and become all-empty rows.
    pub fn from_payload(payload: &Value) -> Option<Self> {
        let records = match payload.get("results")? {
            Value::Array(records) => records.as_slice(),
            _ => &[],
        };

        let mut columns: Vec<String> = Vec::new();
        for record in records.iter().filter_map(Value::as_object) {
            for key in record.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }

        let rows: Vec<Vec<String>> = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| cell_text(record.get(column)))
                    .collect::<Vec<String>>()
            })
            .collect();

        Some(Self { columns, rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Render with borders, followed by a `[rows x columns]` shape line
    ///
    /// Tables wider than [`MAX_DISPLAY_COLUMNS`] keep their first and last
    /// columns with a `...` column in between. The shape line always counts
    /// every column.
    pub fn render(&self) -> String {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Disabled);
        table.set_header(elide(&self.columns));
        for row in &self.rows {
            table.add_row(elide(row));
        }

        format!(
            "{table}\n[{} rows x {} columns]",
            self.row_count(),
            self.column_count()
        )
    }
}

/// Keep the outer columns of a wide row, replacing the middle with `...`
fn elide(cells: &[String]) -> Vec<String> {
    if cells.len() <= MAX_DISPLAY_COLUMNS {
        return cells.to_vec();
    }
    let half = MAX_DISPLAY_COLUMNS / 2;
    let mut shown = cells[..half].to_vec();
    shown.push(ELLIPSIS.to_string());
    shown.extend_from_slice(&cells[cells.len() - half..]);
    shown
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null) | None => String::new(),
        Some(v) => v.to_string(),
    }
}

/// Text the printer writes for a payload
pub fn render_payload(payload: &Value) -> String {
    match OccurrenceTable::from_payload(payload) {
        Some(table) => table.render(),
        None => NO_RESULTS.to_string(),
    }
}

/// Write the payload to stdout as a table, or the no-results notice
pub fn print_payload(payload: &Value) {
    println!("{}", render_payload(payload));
}
