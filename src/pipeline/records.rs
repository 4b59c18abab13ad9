use tracing::debug;

use crate::model::{Column, Sheet};

/// Writes `marker` into `marker_column` of every data row whose
/// `name_column` is non-empty. Returns the number of rows marked.
pub fn mark_records(
    sheet: &mut Sheet,
    name_column: Column,
    marker_column: Column,
    marker: &str,
) -> usize {
    let mut marked = 0;
    for row in 2..=sheet.max_row() {
        if sheet.is_empty_at(row, name_column) {
            continue;
        }
        sheet.set(row, marker_column, Some(marker.to_string()));
        marked += 1;
    }
    debug!(marked, "exportable records marked");
    marked
}
