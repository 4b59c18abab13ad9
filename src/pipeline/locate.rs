use crate::error::{Result, ToolError};
use crate::model::{Column, FieldMap, Sheet};

/// Column probed when looking for the header row. QuickBooks exports leave
/// column A blank, so the table starts wherever column B first holds text.
const HEADER_PROBE_COLUMN: Column = Column::new(1);

/// Finds the header row of a contact sheet: the first row whose second
/// column holds a value.
pub fn find_header_row(sheet: &Sheet) -> Result<usize> {
    (1..=sheet.max_row())
        .find(|&row| !sheet.is_empty_at(row, HEADER_PROBE_COLUMN))
        .ok_or_else(|| ToolError::MissingHeaderRow(sheet.name().to_string()))
}

/// Maps each wanted field name to the column where it appears in `header_row`.
///
/// Matching is exact and case-sensitive. Names that never appear are absent
/// from the result; when a name appears twice the rightmost column wins.
pub fn locate_fields(sheet: &Sheet, header_row: usize, wanted: &[&str]) -> FieldMap {
    let mut fields = FieldMap::new();
    for (column, value) in sheet.cells_in_row(header_row) {
        if wanted.contains(&value) {
            fields.insert(value, column);
        }
    }
    fields
}

/// Like [`locate_fields`], but fails with the first wanted name that is missing.
pub fn require_fields(sheet: &Sheet, header_row: usize, wanted: &[&str]) -> Result<FieldMap> {
    let fields = locate_fields(sheet, header_row, wanted);
    match wanted.iter().find(|&&name| !fields.contains(name)) {
        Some(missing) => Err(ToolError::MissingField {
            field: (*missing).to_string(),
            sheet: sheet.name().to_string(),
        }),
        None => Ok(fields),
    }
}
