use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};

use crate::error::{Result, ToolError};
use crate::model::{Column, Sheet};

/// Reads one worksheet of an Excel workbook into a [`Sheet`].
///
/// Cells keep their absolute positions: a table that starts below row 1 or
/// right of column A keeps its leading blank rows and columns.
pub fn read_sheet(path: &Path, name: &str) -> Result<Sheet> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = read_required_sheet(&mut workbook, name)?;
    Ok(range_to_sheet(name, &range))
}

/// Names of the worksheets in a workbook, in workbook order.
pub fn sheet_names(path: &Path) -> Result<Vec<String>> {
    let workbook: Xlsx<_> = open_workbook(path)?;
    Ok(workbook.sheet_names().to_vec())
}

fn read_required_sheet<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
    name: &str,
) -> Result<calamine::Range<DataType>> {
    let range_result = workbook
        .worksheet_range(name)
        .ok_or_else(|| ToolError::MissingSheet(name.to_string()))?;
    let range = range_result.map_err(ToolError::from)?;
    Ok(range)
}

fn range_to_sheet(name: &str, range: &calamine::Range<DataType>) -> Sheet {
    let mut sheet = Sheet::new(name);
    let Some((first_row, first_column)) = range.start() else {
        return sheet;
    };

    for (row_offset, cells) in range.rows().enumerate() {
        let row = first_row as usize + row_offset + 1;
        for (column_offset, cell) in cells.iter().enumerate() {
            let column = Column::new(first_column as usize + column_offset);
            sheet.set(row, column, cell_to_string(cell));
        }
    }

    sheet
}

fn cell_to_string(cell: &DataType) -> Option<String> {
    let text = match cell {
        DataType::String(value) => value.clone(),
        DataType::Float(value) => value.to_string(),
        DataType::Int(value) => value.to_string(),
        DataType::Bool(value) => value.to_string(),
        DataType::Empty => return None,
        other => other.to_string(),
    };
    Some(text)
}
