//! BOM aggregation: one line per distinct part number.

use crate::error::SchemaError;
use crate::model::{
    coerce_number, BomLine, OptimizedBom, RowView, Table, DESCRIPTION, LIFECYCLE_STATUS,
    MANUFACTURER, PART_NUMBER, QUANTITY, ROHS,
};
use crate::schema::check_required_columns;
use std::collections::BTreeMap;

/// Collapse duplicate part numbers into single lines.
///
/// Quantities are summed per exact `PartNumber`; a quantity that does not
/// parse counts as zero. Descriptive columns take the first non-null value
/// in source order. Rows with a null or blank part number are left out.
/// Output is sorted by part number and every line is marked optimized.
///
/// # Errors
///
/// Returns [`SchemaError::MissingColumns`] when `PartNumber` or `Quantity`
/// is absent.
pub fn optimize_bom(table: &Table) -> Result<OptimizedBom, SchemaError> {
    check_required_columns(table)?;

    let mut groups: BTreeMap<&str, BomLine> = BTreeMap::new();
    let mut skipped = 0usize;

    for row in table.iter() {
        let part = match row.get(PART_NUMBER) {
            Some(p) if !p.trim().is_empty() => p,
            _ => {
                skipped += 1;
                continue;
            }
        };
        let quantity = coerce_number(row.get(QUANTITY)).or_zero();

        groups
            .entry(part)
            .and_modify(|line| {
                line.quantity += quantity;
                line.source_rows += 1;
                fill_descriptive(line, &row);
            })
            .or_insert_with(|| {
                let mut line = BomLine::new(part, quantity);
                fill_descriptive(&mut line, &row);
                line
            });
    }

    if skipped > 0 {
        tracing::debug!("Optimizer skipped {skipped} row(s) without a part number");
    }

    let bom = OptimizedBom::new(groups.into_values().collect());
    tracing::debug!(
        "Aggregated {} row(s) into {} part(s)",
        table.row_count(),
        bom.part_count()
    );
    Ok(bom)
}

fn fill_descriptive(line: &mut BomLine, row: &RowView<'_>) {
    let slots = [
        (&mut line.manufacturer, MANUFACTURER),
        (&mut line.description, DESCRIPTION),
        (&mut line.lifecycle_status, LIFECYCLE_STATUS),
        (&mut line.rohs, ROHS),
    ];
    for (slot, column) in slots {
        if slot.is_none() {
            *slot = row.get(column).map(ToString::to_string);
        }
    }
}
