//! Quoted, comma separated text output read by the EST 2.0 import.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::Result;
use crate::est::EstField;
use crate::model::{Column, Sheet};

/// Writes every marked data row of the destination sheet to `path`,
/// truncating any previous file. Returns the number of lines written.
pub fn write_import_file(path: &Path, sheet: &Sheet, marker_column: Column) -> Result<usize> {
    let file = File::create(path)?;
    write_records(file, sheet, marker_column)
}

/// Writes one line per data row whose `marker_column` holds a value.
///
/// Each line lists every EST field in layout order, always double quoted and
/// comma separated, ending in `\n`. Empty cells become `""` and embedded
/// quotes are doubled. Unmarked rows are skipped.
pub fn write_records<W: Write>(writer: W, sheet: &Sheet, marker_column: Column) -> Result<usize> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    let mut written = 0;
    for row in 2..=sheet.max_row() {
        if sheet.is_empty_at(row, marker_column) {
            continue;
        }
        csv_writer.write_record(
            EstField::ALL
                .iter()
                .map(|field| sheet.get(row, field.column()).unwrap_or_default()),
        )?;
        written += 1;
    }
    csv_writer.flush()?;
    Ok(written)
}
