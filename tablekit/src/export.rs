//! CSV and JSON export of the filtered and sorted rows.

use std::fmt;
use std::str::FromStr;

use crate::column::Column;
use crate::error::ExportError;
use crate::store::TableStore;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Render rows as CSV.
///
/// The first line holds the column headers. Every field is quoted, with
/// embedded quotes doubled. Lines are separated by `\n`.
pub fn to_csv<R>(rows: &[&R], columns: &[&Column<R>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        columns
            .iter()
            .map(|c| quote(&c.header))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in rows {
        lines.push(
            columns
                .iter()
                .map(|c| quote(&c.text(row)))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

/// Render rows as a pretty-printed JSON array of objects keyed by column id.
pub fn to_json<R>(rows: &[&R], columns: &[&Column<R>]) -> Result<String, ExportError> {
    let records: Vec<serde_json::Value> = rows
        .iter()
        .map(|row| {
            let object: serde_json::Map<String, serde_json::Value> = columns
                .iter()
                .map(|c| (c.id.clone(), c.value(row).to_json()))
                .collect();
            serde_json::Value::Object(object)
        })
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

impl<R> TableStore<R> {
    /// Export the filtered and sorted rows (all pages) using the visible
    /// columns. `format` is `"csv"` or `"json"`, case-insensitive.
    pub fn export(&self, format: &str) -> Result<String, ExportError> {
        self.export_as(format.parse()?)
    }

    pub fn export_as(&self, format: ExportFormat) -> Result<String, ExportError> {
        if !self.options().features.export {
            return Err(ExportError::Disabled);
        }
        let rows = self.all_filtered_sorted_rows();
        let columns = self.visible_columns();
        log::debug!(
            "table: exporting {} rows x {} columns as {}",
            rows.len(),
            columns.len(),
            format
        );
        match format {
            ExportFormat::Csv => Ok(to_csv(&rows, &columns)),
            ExportFormat::Json => to_json(&rows, &columns),
        }
    }
}
