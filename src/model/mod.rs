use std::fmt;

use rust_xlsxwriter::utility::column_number_to_name;

/// A single cell value. `None` is an empty cell; empty strings are never stored.
pub type Cell = Option<String>;

/// Zero-based column position inside a [`Sheet`].
///
/// Displays as the spreadsheet letter (`A`, `B`, ..., `AA`) so log output
/// matches what a user sees when opening the workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Column(usize);

impl Column {
    /// Creates a column from its zero-based index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Zero-based index of the column.
    pub const fn index(self) -> usize {
        self.0
    }

    /// Spreadsheet letter of the column.
    /// Indices past the last worksheet column are clamped.
    pub fn letter(self) -> String {
        column_number_to_name(u16::try_from(self.0).unwrap_or(u16::MAX))
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letter())
    }
}

/// An ordered grid of cells addressed by 1-based row and [`Column`].
///
/// Row 1 is conventionally the header. The grid grows on demand when cells
/// beyond its current bounds are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    name: String,
    rows: Vec<Vec<Cell>>,
}

impl Sheet {
    /// Creates an empty sheet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Creates a sheet whose first row holds the provided headers.
    pub fn with_headers<I, S>(name: impl Into<String>, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sheet = Self::new(name);
        sheet.push_row(headers.into_iter().map(|header| Some(header.into())));
        sheet
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of the last row in the grid, or zero for an empty sheet.
    pub fn max_row(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn max_column(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Appends a row after the current last row.
    pub fn push_row<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = Cell>,
    {
        self.rows.push(cells.into_iter().map(normalize_cell).collect());
    }

    /// Returns the text held at the given position, if any.
    pub fn get(&self, row: usize, column: Column) -> Option<&str> {
        let row_index = row.checked_sub(1)?;
        self.rows
            .get(row_index)?
            .get(column.index())?
            .as_deref()
    }

    /// Returns `true` when the given position holds no text.
    pub fn is_empty_at(&self, row: usize, column: Column) -> bool {
        self.get(row, column).is_none()
    }

    /// Stores a value at the given position. Empty strings clear the cell.
    /// Row 0 does not exist and writes to it are ignored.
    pub fn set(&mut self, row: usize, column: Column, value: Cell) {
        let Some(row_index) = row.checked_sub(1) else {
            return;
        };
        let value = normalize_cell(value);
        if value.is_none() && self.get(row, column).is_none() {
            return;
        }
        if self.rows.len() <= row_index {
            self.rows.resize_with(row_index + 1, Vec::new);
        }
        let cells = &mut self.rows[row_index];
        if cells.len() <= column.index() {
            cells.resize(column.index() + 1, None);
        }
        cells[column.index()] = value;
    }

    /// Removes and returns the value at the given position.
    pub fn take(&mut self, row: usize, column: Column) -> Cell {
        let row_index = row.checked_sub(1)?;
        self.rows
            .get_mut(row_index)?
            .get_mut(column.index())?
            .take()
    }

    /// Non-empty cells of a row, left to right.
    pub fn cells_in_row(&self, row: usize) -> impl Iterator<Item = (Column, &str)> {
        row.checked_sub(1)
            .and_then(|index| self.rows.get(index))
            .into_iter()
            .flat_map(|cells| {
                cells
                    .iter()
                    .enumerate()
                    .filter_map(|(index, cell)| Some((Column::new(index), cell.as_deref()?)))
            })
    }

    /// Every row as a slice of cells, paired with its 1-based row number.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[Cell])> {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, cells)| (index + 1, cells.as_slice()))
    }
}

fn normalize_cell(cell: Cell) -> Cell {
    cell.filter(|value| !value.is_empty())
}

/// Ordered mapping from a header name to the column where it was found.
///
/// Built once per sheet by the header locator and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(String, Column)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name` at `column`. A later insert of the same name replaces
    /// the earlier column.
    pub fn insert(&mut self, name: impl Into<String>, column: Column) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = column,
            None => self.entries.push((name, column)),
        }
    }

    pub fn get(&self, name: &str) -> Option<Column> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, column)| *column)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Column)> {
        self.entries
            .iter()
            .map(|(name, column)| (name.as_str(), *column))
    }
}
