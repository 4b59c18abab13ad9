use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::model::{Column, Sheet};

/// Tolerant "City, Province Postal" pattern.
///
/// The city runs up to the first comma and is followed by two characters
/// drawn from comma and space. The province is either a two letter
/// uppercase code or any run without commas, then an optional single space
/// or ", " precedes the postal or zip code, which is everything left.
static ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        (?P<city>[^,]+)
        [,\ ]{2}
        (?P<province>[A-Z]{2}|[^,]+)
        (?:\s|,\ )?
        (?P<postal>.*)
        ",
    )
    .expect("address pattern is valid")
});

/// Pieces of a combined address line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressParts {
    pub city: String,
    pub province: String,
    pub postal: String,
}

/// Splits a combined address line, or returns `None` when it does not match.
pub fn parse_address(text: &str) -> Option<AddressParts> {
    let captures = ADDRESS_REGEX.captures(text)?;
    let part = |name: &str| {
        captures
            .name(name)
            .map(|found| found.as_str().to_string())
            .unwrap_or_default()
    };
    Some(AddressParts {
        city: part("city"),
        province: part("province"),
        postal: part("postal"),
    })
}

/// Target columns of the address splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitColumns {
    /// Column holding the combined line; receives the city.
    pub combined: Column,
    pub province: Column,
    pub postal: Column,
}

/// Splits the combined address of every data row into city, province and
/// postal code. Rows that do not match keep their values unchanged.
/// Returns the number of rows split.
pub fn split_addresses(sheet: &mut Sheet, columns: SplitColumns) -> usize {
    let mut split = 0;
    for row in 2..=sheet.max_row() {
        let Some(parts) = sheet.get(row, columns.combined).and_then(parse_address) else {
            continue;
        };
        sheet.set(row, columns.province, Some(parts.province));
        sheet.set(row, columns.postal, Some(parts.postal));
        sheet.set(row, columns.combined, Some(parts.city));
        split += 1;
    }
    debug!(split, "combined addresses split");
    split
}
