//! CSV rendering for tabular records

use crate::config::LatencyConfig;
use crate::core::Record;
use crate::core::field::FieldValue;

/// Render records as CSV
///
/// The header row comes from the record's field names. String and date
/// cells are double-quoted with embedded quotes doubled; numeric and
/// boolean cells stay bare; null cells are empty. Lines are joined with
/// a plain newline and there is no trailing one. No records means an
/// empty string, header included.
pub fn to_csv<T: Record>(rows: &[T]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(T::field_names().join(","));

    for row in rows {
        let cells: Vec<String> = T::field_names()
            .iter()
            .map(|field| csv_cell(&row.field_value(field).unwrap_or(FieldValue::Null)))
            .collect();
        lines.push(cells.join(","));
    }

    lines.join("\n")
}

fn csv_cell(value: &FieldValue) -> String {
    match value {
        FieldValue::String(s) => quote(s),
        FieldValue::Integer(i) => i.to_string(),
        FieldValue::Float(f) => f.to_string(),
        FieldValue::Boolean(b) => b.to_string(),
        FieldValue::Date(d) => quote(&d.to_string()),
        FieldValue::Null => String::new(),
    }
}

fn quote(field: &str) -> String {
    let escaped = field.replace('"', "\"\"");
    format!("\"{escaped}\"")
}

/// Export service wrapping the pure renderer with simulated latency
#[derive(Clone)]
pub struct CsvExporter {
    latency: LatencyConfig,
}

impl CsvExporter {
    pub fn new(latency: LatencyConfig) -> Self {
        Self { latency }
    }

    /// Render records as CSV, as the export endpoint would
    pub async fn export<T: Record>(&self, rows: &[T]) -> String {
        self.latency.export().await;

        let csv = to_csv(rows);
        tracing::debug!(rows = rows.len(), bytes = csv.len(), "CSV export rendered");
        csv
    }
}
