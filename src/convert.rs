use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::codes::{
    CodeResolver, CountryTable, ProvinceTable, convert_countries, convert_provinces,
};
use crate::config::ConversionConfig;
use crate::error::{Result, ToolError};
use crate::est::{EstField, make_import_sheet};
use crate::io::{est_text, excel_read, excel_write};
use crate::model::{Column, FieldMap, Sheet};
use crate::pipeline::locate::{find_header_row, require_fields};
use crate::pipeline::mapping::{map_fields, resolve_translation};
use crate::pipeline::normalize::{AddressBlock, align_address_block};
use crate::pipeline::records::mark_records;
use crate::pipeline::split::{SplitColumns, split_addresses};

/// Counts gathered while converting one contact sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Row of the contact sheet holding the headers.
    pub header_row: usize,
    /// Data rows read from the contact sheet.
    pub rows_scanned: usize,
    /// Rows whose address fragments were right-aligned.
    pub addresses_aligned: usize,
    /// Country cells replaced by an alpha-2 code.
    pub countries_translated: usize,
    /// Combined address lines split into city, province and postal code.
    pub addresses_split: usize,
    /// Province cells replaced by a postal code.
    pub provinces_translated: usize,
    /// Rows marked as exportable records.
    pub records_marked: usize,
    /// Lines written to the import file.
    pub records_written: usize,
}

/// Both sheets after a conversion, plus the counts gathered on the way.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Contact sheet after address alignment and country translation.
    pub source: Sheet,
    /// Destination sheet in EST layout, header in row 1.
    pub destination: Sheet,
    pub summary: ConversionSummary,
}

/// Default import file path: the input path with a `.txt` extension.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("txt")
}

/// Reads the contact sheet from `input`, converts it, and writes the EST
/// import file to `output`. When `xlsx_copy` is given, the converted sheets
/// are also saved there as an Excel workbook.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display(), sheet = %config.sheet)
)]
pub fn convert_workbook(
    input: &Path,
    output: &Path,
    config: &ConversionConfig,
    xlsx_copy: Option<&Path>,
) -> Result<ConversionSummary> {
    if !input.exists() {
        return Err(ToolError::MissingInput(input.to_path_buf()));
    }

    let source = excel_read::read_sheet(input, &config.sheet)?;
    debug!(rows = source.max_row(), columns = source.max_column(), "contact sheet loaded");

    let mut conversion = transform(source, config)?;
    let marker_column = config.record_type_field.column();
    conversion.summary.records_written =
        est_text::write_import_file(output, &conversion.destination, marker_column)?;

    if let Some(path) = xlsx_copy {
        excel_write::write_sheets(path, &[&conversion.source, &conversion.destination])?;
        info!(path = %path.display(), "converted sheets saved to workbook");
    }

    let summary = conversion.summary;
    info!(
        rows = summary.rows_scanned,
        aligned = summary.addresses_aligned,
        countries = summary.countries_translated,
        split = summary.addresses_split,
        provinces = summary.provinces_translated,
        written = summary.records_written,
        "EST import file written"
    );
    Ok(summary)
}

/// Converts a contact sheet in memory using the built-in code tables.
pub fn transform(source: Sheet, config: &ConversionConfig) -> Result<Conversion> {
    transform_with(source, config, &CountryTable, &ProvinceTable)
}

/// Converts a contact sheet in memory with the given code resolvers.
///
/// Every source field the configuration references must be present in the
/// header row; the first missing one is reported before any cell changes.
pub fn transform_with(
    mut source: Sheet,
    config: &ConversionConfig,
    countries: &dyn CodeResolver,
    provinces: &dyn CodeResolver,
) -> Result<Conversion> {
    let header_row = find_header_row(&source)?;
    let fields = require_fields(&source, header_row, &config.source_fields())?;
    for (name, column) in fields.iter() {
        debug!(field = name, %column, "source field located");
    }

    let sheet_name = source.name().to_string();
    let mut block = [Column::new(0); 4];
    for (slot, name) in block.iter_mut().zip(&config.address_block) {
        *slot = field_column(&fields, name, &sheet_name)?;
    }
    let block = if config.address_block_holds_name() {
        AddressBlock::keeping_first(block)
    } else {
        AddressBlock::new(block)
    };
    let country_column = field_column(&fields, &config.country_field, &sheet_name)?;
    let mappings = resolve_translation(&config.translation, &fields, &sheet_name)?;

    let first_data_row = header_row + 1;
    let data_rows = first_data_row..=source.max_row();
    let mut summary = ConversionSummary {
        header_row,
        rows_scanned: data_rows.clone().count(),
        ..ConversionSummary::default()
    };

    summary.addresses_aligned =
        align_address_block(&mut source, data_rows.clone(), block);
    summary.countries_translated =
        convert_countries(&mut source, country_column, first_data_row, countries);

    let mut destination = make_import_sheet();
    map_fields(&source, data_rows, &mut destination, &mappings);

    summary.addresses_split = split_addresses(
        &mut destination,
        SplitColumns {
            combined: EstField::City.column(),
            province: EstField::ProvinceOrState.column(),
            postal: EstField::PostalCode.column(),
        },
    );
    summary.provinces_translated =
        convert_provinces(&mut destination, EstField::ProvinceOrState.column(), provinces);
    summary.records_marked = mark_records(
        &mut destination,
        config.name_field.column(),
        config.record_type_field.column(),
        &config.record_marker,
    );

    Ok(Conversion {
        source,
        destination,
        summary,
    })
}

fn field_column(fields: &FieldMap, name: &str, sheet: &str) -> Result<Column> {
    fields.get(name).ok_or_else(|| ToolError::MissingField {
        field: name.to_string(),
        sheet: sheet.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoCodes;

    impl CodeResolver for NoCodes {
        fn resolve(&self, _text: &str) -> Option<&'static str> {
            None
        }
    }

    fn text(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    fn contacts() -> Sheet {
        let mut sheet = Sheet::new("Sheet1");
        sheet.push_row(
            [
                "", "Ship to 1", "Ship to 2", "Ship to 3", "Ship to 4", "Ship to 5",
                "Main Phone", "Main Email",
            ]
            .map(text),
        );
        sheet.push_row(
            [
                "", "Doe", "123 Main St", "", "Ottawa, ON K1A0B1", "", "555-1234", "",
            ]
            .map(text),
        );
        sheet.push_row(
            [
                "", "Roe", "9 Side Rd", "Toronto, Ontario M5V 2T6", "", "Canada", "",
                "roe@example.com",
            ]
            .map(text),
        );
        sheet.push_row(["", "", "", "", "", "", "", ""].map(text));
        sheet
    }

    fn row_text(sheet: &Sheet, row: usize) -> Vec<&str> {
        EstField::ALL
            .iter()
            .map(|field| sheet.get(row, field.column()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn pipeline_fills_destination_layout() {
        let conversion = transform(contacts(), &ConversionConfig::default()).expect("converted");
        let destination = &conversion.destination;

        assert_eq!(
            row_text(destination, 2),
            vec![
                "1", "", "", "", "Doe", "", "", "", "123 Main St", "", "Ottawa", "ON", "K1A0B1",
                "", "555-1234", "", "", "", "",
            ]
        );
        assert_eq!(destination.get(3, EstField::LastName.column()), Some("Roe"));
        assert_eq!(destination.get(3, EstField::AddressLine1.column()), None);
        assert_eq!(destination.get(3, EstField::AddressLine2.column()), Some("9 Side Rd"));
        assert_eq!(destination.get(3, EstField::City.column()), Some("Toronto"));
        assert_eq!(
            destination.get(3, EstField::ProvinceOrState.column()),
            Some("Ontario M5V 2T6")
        );
        assert_eq!(destination.get(3, EstField::CountryCode.column()), Some("CA"));
        assert_eq!(destination.get(4, EstField::RecordType.column()), None);

        let summary = conversion.summary;
        assert_eq!(summary.header_row, 1);
        assert_eq!(summary.rows_scanned, 3);
        assert_eq!(summary.addresses_aligned, 1);
        assert_eq!(summary.countries_translated, 1);
        assert_eq!(summary.addresses_split, 2);
        assert_eq!(summary.records_marked, 2);
    }

    #[test]
    fn name_with_only_a_city_line_is_exported() {
        let mut sheet = contacts();
        sheet.push_row(["", "Poe", "Ottawa, ON K1A0B1", "", "", "", "555", ""].map(text));

        let conversion = transform(sheet, &ConversionConfig::default()).expect("converted");
        let destination = &conversion.destination;
        let mut buffer = Vec::new();
        let written = est_text::write_records(&mut buffer, destination, EstField::RecordType.column())
            .expect("records written");

        assert_eq!(written, 3);
        assert_eq!(destination.get(5, EstField::LastName.column()), Some("Poe"));
        assert_eq!(destination.get(5, EstField::AddressLine1.column()), None);
        assert_eq!(destination.get(5, EstField::AddressLine2.column()), None);
        assert_eq!(destination.get(5, EstField::City.column()), Some("Ottawa"));
        let output = String::from_utf8(buffer).expect("utf-8 output");
        assert_eq!(
            output.lines().last(),
            Some(
                "\"1\",\"\",\"\",\"\",\"Poe\",\"\",\"\",\"\",\"\",\"\",\"Ottawa\",\"ON\",\"K1A0B1\",\"\",\"555\",\"\",\"\",\"\",\"\""
            )
        );
    }

    #[test]
    fn resolvers_are_injected() {
        let conversion =
            transform_with(contacts(), &ConversionConfig::default(), &NoCodes, &NoCodes)
                .expect("converted");
        assert_eq!(
            conversion.destination.get(3, EstField::CountryCode.column()),
            Some("Canada")
        );
        assert_eq!(conversion.summary.countries_translated, 0);
    }

    #[test]
    fn missing_header_fails_before_changes() {
        let mut config = ConversionConfig::default();
        config.country_field = "Ship to Country".to_string();
        let error = transform(contacts(), &config).expect_err("field is missing");
        assert!(matches!(
            error,
            ToolError::MissingField { ref field, .. } if field == "Ship to Country"
        ));
    }

    #[test]
    fn default_output_replaces_extension() {
        assert_eq!(
            default_output_path(Path::new("exports/contacts.xlsx")),
            PathBuf::from("exports/contacts.txt")
        );
    }
}
