//! CSV output for BOM tables.
//!
//! Null cells are written as empty fields; quoting follows RFC 4180.

use super::ReportError;
use crate::model::Table;
use std::io::Write;

/// Write a table, header first, to any writer.
pub fn write_table_csv<W: Write>(table: &Table, writer: W) -> Result<(), ReportError> {
    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    out.write_record(table.columns())?;
    for row in table.rows() {
        out.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
    }
    out.flush()?;
    Ok(())
}

/// Render a table as CSV text.
pub fn table_to_csv(table: &Table) -> Result<String, ReportError> {
    let mut buf = Vec::new();
    write_table_csv(table, &mut buf)?;
    String::from_utf8(buf).map_err(|e| ReportError::CsvError(e.to_string()))
}
