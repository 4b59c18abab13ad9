use std::ops::RangeInclusive;

use tracing::debug;

use crate::config::FieldMapping;
use crate::error::{Result, ToolError};
use crate::est::EstField;
use crate::model::{Column, FieldMap, Sheet};

/// A translation table entry with its source column already located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMapping {
    pub source: Column,
    pub target: EstField,
}

/// Resolves every source field of the translation table against the located
/// headers, failing on the first field that has no column.
pub fn resolve_translation(
    table: &[FieldMapping],
    fields: &FieldMap,
    sheet_name: &str,
) -> Result<Vec<ResolvedMapping>> {
    table
        .iter()
        .map(|mapping| {
            let source = fields
                .get(&mapping.source)
                .ok_or_else(|| ToolError::MissingField {
                    field: mapping.source.clone(),
                    sheet: sheet_name.to_string(),
                })?;
            Ok(ResolvedMapping {
                source,
                target: mapping.target,
            })
        })
        .collect()
}

/// Copies the values of each mapped source column into its destination field.
///
/// The first row of `data_rows` lands in row 2 of the destination, directly
/// under the header, and the following rows keep their relative order.
/// Destination fields without a mapping stay empty. Returns the number of
/// rows copied.
pub fn map_fields(
    source: &Sheet,
    data_rows: RangeInclusive<usize>,
    destination: &mut Sheet,
    mappings: &[ResolvedMapping],
) -> usize {
    let mut copied = 0;
    for (offset, source_row) in data_rows.enumerate() {
        let destination_row = offset + 2;
        for mapping in mappings {
            let value = source.get(source_row, mapping.source).map(str::to_string);
            destination.set(destination_row, mapping.target.column(), value);
        }
        copied += 1;
    }
    debug!(rows = copied, fields = mappings.len(), "source fields mapped");
    copied
}
