//! Aggregated BOM produced by the optimizer.

use super::field::format_number;
use super::table::{
    Cell, Table, DESCRIPTION, LIFECYCLE_STATUS, MANUFACTURER, PART_NUMBER, QUANTITY, ROHS,
};
use serde::{Deserialize, Serialize};

/// Column holding the optimizer marker.
pub const OPTIMIZED: &str = "Optimized";
/// Column holding the number of source rows merged into a line.
pub const SOURCE_ROWS: &str = "SourceRows";

/// One aggregated BOM line: a distinct part number and its total quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BomLine {
    pub part_number: String,
    pub quantity: f64,
    pub manufacturer: Option<String>,
    pub description: Option<String>,
    pub lifecycle_status: Option<String>,
    #[serde(rename = "RoHS")]
    pub rohs: Option<String>,
    pub source_rows: usize,
    pub optimized: bool,
}

impl BomLine {
    /// A line with only part number and quantity set.
    #[must_use]
    pub fn new(part_number: impl Into<String>, quantity: f64) -> Self {
        Self {
            part_number: part_number.into(),
            quantity,
            manufacturer: None,
            description: None,
            lifecycle_status: None,
            rohs: None,
            source_rows: 1,
            optimized: true,
        }
    }

    /// Set the lifecycle status.
    #[must_use]
    pub fn with_lifecycle(mut self, status: impl Into<String>) -> Self {
        self.lifecycle_status = Some(status.into());
        self
    }
}

/// The optimized BOM: one line per distinct part number, sorted by part number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizedBom {
    pub lines: Vec<BomLine>,
}

impl OptimizedBom {
    /// Wrap already-aggregated lines.
    #[must_use]
    pub fn new(lines: Vec<BomLine>) -> Self {
        Self { lines }
    }

    /// Number of distinct parts.
    #[must_use]
    pub fn part_count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render as a [`Table`] for tabular output.
    #[must_use]
    pub fn to_table(&self) -> Table {
        let columns = [
            PART_NUMBER,
            QUANTITY,
            MANUFACTURER,
            DESCRIPTION,
            LIFECYCLE_STATUS,
            ROHS,
            SOURCE_ROWS,
            OPTIMIZED,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();

        let rows = self
            .lines
            .iter()
            .map(|line| -> Vec<Cell> {
                vec![
                    Some(line.part_number.clone()),
                    Some(format_number(line.quantity)),
                    line.manufacturer.clone(),
                    line.description.clone(),
                    line.lifecycle_status.clone(),
                    line.rohs.clone(),
                    Some(line.source_rows.to_string()),
                    Some(line.optimized.to_string()),
                ]
            })
            .collect();

        Table::from_rows(columns, rows)
    }
}
