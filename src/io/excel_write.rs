use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::model::Sheet;

/// Writes the provided sheets, in order, to an Excel workbook at `path`.
///
/// Every cell is written as text at the position it holds in the sheet.
pub fn write_sheets(path: &Path, sheets: &[&Sheet]) -> Result<()> {
    let mut workbook_writer = Workbook::new();

    for sheet in sheets {
        let worksheet = workbook_writer.add_worksheet();
        worksheet.set_name(sheet.name())?;

        for (row, cells) in sheet.rows() {
            for (col_idx, cell) in cells.iter().enumerate() {
                if let Some(value) = cell {
                    worksheet.write_string((row - 1) as u32, col_idx as u16, value)?;
                }
            }
        }
    }

    workbook_writer.save(path)?;
    Ok(())
}
