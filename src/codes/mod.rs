//! Free-text to standard code translation for country and province columns.
//!
//! Resolution is best-effort: an unknown name is a normal outcome, and the
//! cell keeps its original text.

pub mod country;
pub mod province;

use tracing::debug;

use crate::model::{Column, Sheet};

pub use country::CountryTable;
pub use province::ProvinceTable;

/// Looks up the standard code for a free-text name.
pub trait CodeResolver {
    /// Returns the code for `text`, or `None` when it is not recognised.
    fn resolve(&self, text: &str) -> Option<&'static str>;
}

/// Replaces every resolvable value of `column`, from `first_row` to the last
/// row, with its code. Returns the number of cells replaced.
pub fn translate_column<R>(
    sheet: &mut Sheet,
    column: Column,
    first_row: usize,
    resolver: &R,
) -> usize
where
    R: CodeResolver + ?Sized,
{
    let mut translated = 0;
    for row in first_row..=sheet.max_row() {
        let Some(code) = sheet.get(row, column).and_then(|text| resolver.resolve(text)) else {
            continue;
        };
        sheet.set(row, column, Some(code.to_string()));
        translated += 1;
    }
    debug!(%column, translated, "column codes translated");
    translated
}

/// Converts country names or abbreviations to ISO 3166-1 alpha-2 codes.
pub fn convert_countries<R>(
    sheet: &mut Sheet,
    column: Column,
    first_row: usize,
    resolver: &R,
) -> usize
where
    R: CodeResolver + ?Sized,
{
    translate_column(sheet, column, first_row, resolver)
}

/// Converts province and state names to postal codes, skipping the header row.
pub fn convert_provinces<R>(sheet: &mut Sheet, column: Column, resolver: &R) -> usize
where
    R: CodeResolver + ?Sized,
{
    translate_column(sheet, column, 2, resolver)
}
