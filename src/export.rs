//! CSV and JSON rendering of inventory rows.

use crate::error::{ReleveError, Result};
use crate::inventory::{InventoryRecord, sanitize_field};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => f.write_str("csv"),
            ExportFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ReleveError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(ReleveError::Export {
                message: format!("unknown format '{}' (expected csv or json)", other),
            }),
        }
    }
}

/// Render rows in `format`.
///
/// `header` titles the two CSV columns; JSON keys are always
/// `location` and `room`.
pub fn render(
    rows: &[InventoryRecord],
    format: ExportFormat,
    header: (&str, &str),
    delimiter: char,
) -> Result<String> {
    match format {
        ExportFormat::Csv => to_csv(rows, header, delimiter),
        ExportFormat::Json => to_json(rows),
    }
}

/// Header line, then one line per row with every field quoted.
pub fn to_csv(rows: &[InventoryRecord], header: (&str, &str), delimiter: char) -> Result<String> {
    if delimiter == '"' || delimiter == '\n' || delimiter == '\r' {
        return Err(ReleveError::Export {
            message: format!("{:?} cannot be used as a CSV delimiter", delimiter),
        });
    }

    let mut out = format!("{}{}{}\n", header.0, delimiter, header.1);
    for row in rows {
        out.push_str(&quote(&row.location));
        out.push(delimiter);
        out.push_str(&quote(&row.room));
        out.push('\n');
    }
    Ok(out)
}

pub fn to_json(rows: &[InventoryRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

fn quote(field: &str) -> String {
    format!("\"{}\"", sanitize_field(field).replace('"', "\"\""))
}
