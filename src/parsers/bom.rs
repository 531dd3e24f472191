//! CSV BOM loader.

use crate::error::{BomerError, LoadErrorKind, Result};
use crate::model::{Cell, Table};
use std::io::Read;
use std::path::Path;

/// The only accepted BOM file extension.
pub const BOM_EXTENSION: &str = "csv";

/// Load a BOM spreadsheet into a raw [`Table`].
///
/// The file must have a `.csv` extension (any case), a header row and at
/// least one data row. Empty cells become nulls; short rows are padded.
pub fn load_bom(path: &Path) -> Result<Table> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    if !extension.eq_ignore_ascii_case(BOM_EXTENSION) {
        return Err(BomerError::bom_load(
            path,
            LoadErrorKind::UnsupportedExtension {
                found: extension.to_string(),
                expected: format!(".{BOM_EXTENSION}"),
            },
        ));
    }

    let file = std::fs::File::open(path).map_err(|e| {
        let kind = if e.kind() == std::io::ErrorKind::NotFound {
            LoadErrorKind::NotFound
        } else {
            LoadErrorKind::Read(e.to_string())
        };
        BomerError::bom_load(path, kind)
    })?;

    let table = read_bom(file).map_err(|kind| BomerError::bom_load(path, kind))?;
    tracing::info!(
        "Loaded BOM {} ({} rows, {} columns)",
        path.display(),
        table.row_count(),
        table.columns().len()
    );
    Ok(table)
}

/// Parse CSV text into a raw [`Table`].
pub fn parse_bom_str(content: &str) -> std::result::Result<Table, LoadErrorKind> {
    read_bom(content.as_bytes())
}

fn read_bom<R: Read>(reader: R) -> std::result::Result<Table, LoadErrorKind> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| LoadErrorKind::InvalidCsv(e.to_string()))?
        .iter()
        .map(ToString::to_string)
        .collect();
    if headers.is_empty() {
        return Err(LoadErrorKind::Empty);
    }

    let mut table = Table::new(headers);
    for record in reader.records() {
        let record = record.map_err(|e| LoadErrorKind::InvalidCsv(e.to_string()))?;
        let row: Vec<Cell> = record
            .iter()
            .map(|field| (!field.is_empty()).then(|| field.to_string()))
            .collect();
        table.push_row(row);
    }

    if table.is_empty() {
        return Err(LoadErrorKind::Empty);
    }
    Ok(table)
}
