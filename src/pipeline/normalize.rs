use std::ops::RangeInclusive;

use tracing::debug;

use crate::model::{Column, Sheet};

/// Four adjacent address fragment columns, left to right. The last column
/// is the slot that ends up holding the combined "City, Province Postal" line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressBlock {
    pub columns: [Column; 4],
    /// The first column holds the contact name and never moves.
    pub keep_first: bool,
}

impl AddressBlock {
    pub fn new(columns: [Column; 4]) -> Self {
        Self {
            columns,
            keep_first: false,
        }
    }

    /// A block whose first column is pinned in place.
    pub fn keeping_first(columns: [Column; 4]) -> Self {
        Self {
            columns,
            keep_first: true,
        }
    }
}

/// Right-aligns the address fragments of every row in `rows`.
///
/// Rows whose last column already holds data are left alone. Otherwise the
/// trailing fragments move right so the last non-empty one lands in the last
/// column: when the third column holds data it shifts with the second, and
/// when only the second does it shifts with the first, unless the block keeps
/// its first column, in which case the second moves alone. Vacated cells are
/// cleared. Returns the number of rows that moved.
pub fn align_address_block(
    sheet: &mut Sheet,
    rows: RangeInclusive<usize>,
    block: AddressBlock,
) -> usize {
    let [a, b, c, d] = block.columns;
    let mut aligned = 0;

    for row in rows {
        if !sheet.is_empty_at(row, d) {
            continue;
        }
        if !sheet.is_empty_at(row, c) {
            shift(sheet, row, c, d);
            shift(sheet, row, b, c);
        } else if !sheet.is_empty_at(row, b) {
            shift(sheet, row, b, d);
            if !block.keep_first {
                shift(sheet, row, a, c);
            }
        } else {
            continue;
        }
        aligned += 1;
    }

    debug!(aligned, "address fragments right-aligned");
    aligned
}

fn shift(sheet: &mut Sheet, row: usize, from: Column, to: Column) {
    let value = sheet.take(row, from);
    sheet.set(row, to, value);
}
