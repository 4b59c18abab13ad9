use std::fs;
use std::path::Path;

use qb2est::config::ConversionConfig;
use qb2est::convert::convert_workbook;
use qb2est::est::{EST_SHEET, EstField};
use qb2est::io::excel_read;
use qb2est::ToolError;
use rust_xlsxwriter::Workbook;
use tempfile::tempdir;

const HEADERS: [&str; 8] = [
    "Customer",
    "Ship to 1",
    "Ship to 2",
    "Ship to 3",
    "Ship to 4",
    "Ship to 5",
    "Main Phone",
    "Main Email",
];

/// Writes a QuickBooks-style export: blank first row, blank column A for
/// data rows, headers in the second row starting at column B.
fn write_export(path: &Path, sheet_name: &str, headers: &[&str], rows: &[[&str; 8]]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name).expect("sheet named");
    for (col_idx, header) in headers.iter().enumerate() {
        worksheet
            .write_string(1, (col_idx + 1) as u16, *header)
            .expect("header written");
    }
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            worksheet
                .write_string((row_idx + 2) as u32, (col_idx + 1) as u16, *value)
                .expect("cell written");
        }
    }
    workbook.save(path).expect("workbook saved");
}

fn split_line(line: &str) -> Vec<&str> {
    let inner = line
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .expect("line is quoted");
    inner.split("\",\"").collect()
}

#[test]
fn end_to_end_line_matches_est_layout() {
    let dir = tempdir().expect("temporary directory");
    let input = dir.path().join("export.xlsx");
    let output = dir.path().join("export.txt");
    write_export(
        &input,
        "Sheet1",
        &HEADERS,
        &[
            ["Doe Co", "Doe", "123 Main St", "", "Ottawa, ON K1A0B1", "", "555-1234", ""],
            ["", "", "", "", "", "", "", ""],
            ["Nobody", "", "", "", "", "", "", ""],
        ],
    );

    let summary = convert_workbook(&input, &output, &ConversionConfig::default(), None)
        .expect("conversion succeeded");

    let written = fs::read_to_string(&output).expect("import file read");
    assert_eq!(
        written,
        "\"1\",\"\",\"\",\"\",\"Doe\",\"\",\"\",\"\",\"123 Main St\",\"\",\"Ottawa\",\"ON\",\"K1A0B1\",\"\",\"555-1234\",\"\",\"\",\"\",\"\"\n"
    );
    assert_eq!(summary.header_row, 2);
    assert_eq!(summary.records_written, 1);
}

#[test]
fn name_stays_when_only_a_city_line_follows() {
    let dir = tempdir().expect("temporary directory");
    let input = dir.path().join("short.xlsx");
    let output = dir.path().join("short.txt");
    write_export(
        &input,
        "Sheet1",
        &HEADERS,
        &[["", "Doe", "Ottawa, ON K1A0B1", "", "", "", "555", ""]],
    );

    let summary = convert_workbook(&input, &output, &ConversionConfig::default(), None)
        .expect("conversion succeeded");

    let written = fs::read_to_string(&output).expect("import file read");
    let lines: Vec<Vec<&str>> = written.lines().map(split_line).collect();
    assert_eq!(summary.records_written, 1);
    assert_eq!(lines.len(), 1);
    let doe = &lines[0];
    assert_eq!(doe[EstField::LastName as usize], "Doe");
    assert_eq!(doe[EstField::AddressLine1 as usize], "");
    assert_eq!(doe[EstField::AddressLine2 as usize], "");
    assert_eq!(doe[EstField::City as usize], "Ottawa");
    assert_eq!(doe[EstField::ProvinceOrState as usize], "ON");
    assert_eq!(doe[EstField::PostalCode as usize], "K1A0B1");
    assert_eq!(doe[EstField::VoicePhone as usize], "555");
}

#[test]
fn rows_keep_order_and_codes_are_translated() {
    let dir = tempdir().expect("temporary directory");
    let input = dir.path().join("contacts.xlsx");
    let output = dir.path().join("contacts.txt");
    write_export(
        &input,
        "Sheet1",
        &HEADERS,
        &[
            ["", "Zed", "1 King St", "Toronto, Ontario", "", "Canada", "", "zed@example.com"],
            ["", "", "2 Queen St", "", "Halifax, NS B3H1A1", "", "", ""],
            ["", "Amy", "PO Box 7", "Apt 3", "Buffalo, New York 14201", "USA", "", ""],
        ],
    );

    let summary = convert_workbook(&input, &output, &ConversionConfig::default(), None)
        .expect("conversion succeeded");
    let written = fs::read_to_string(&output).expect("import file read");
    let lines: Vec<Vec<&str>> = written
        .lines()
        .map(split_line)
        .collect();

    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|fields| fields.len() == EstField::ALL.len()));

    let zed = &lines[0];
    assert_eq!(zed[EstField::LastName as usize], "Zed");
    assert_eq!(zed[EstField::AddressLine1 as usize], "");
    assert_eq!(zed[EstField::AddressLine2 as usize], "1 King St");
    assert_eq!(zed[EstField::City as usize], "Toronto");
    assert_eq!(zed[EstField::ProvinceOrState as usize], "ON");
    assert_eq!(zed[EstField::PostalCode as usize], "");
    assert_eq!(zed[EstField::CountryCode as usize], "CA");
    assert_eq!(zed[EstField::EmailAddress as usize], "zed@example.com");

    let amy = &lines[1];
    assert_eq!(amy[EstField::LastName as usize], "Amy");
    assert_eq!(amy[EstField::AddressLine1 as usize], "PO Box 7");
    assert_eq!(amy[EstField::AddressLine2 as usize], "Apt 3");
    assert_eq!(amy[EstField::City as usize], "Buffalo");
    assert_eq!(amy[EstField::ProvinceOrState as usize], "New York 14201");
    assert_eq!(amy[EstField::CountryCode as usize], "US");

    assert_eq!(summary.rows_scanned, 3);
    assert_eq!(summary.countries_translated, 2);
    assert_eq!(summary.provinces_translated, 1);
    assert_eq!(summary.records_marked, 2);
}

#[test]
fn existing_output_is_truncated() {
    let dir = tempdir().expect("temporary directory");
    let input = dir.path().join("export.xlsx");
    let output = dir.path().join("export.txt");
    fs::write(&output, "stale line\n").expect("stale file written");
    write_export(&input, "Sheet1", &HEADERS, &[["", "", "", "", "", "", "", ""]]);

    let summary = convert_workbook(&input, &output, &ConversionConfig::default(), None)
        .expect("conversion succeeded");

    assert_eq!(summary.records_written, 0);
    assert_eq!(fs::read_to_string(&output).expect("import file read"), "");
}

#[test]
fn missing_header_names_the_field() {
    let dir = tempdir().expect("temporary directory");
    let input = dir.path().join("export.xlsx");
    let output = dir.path().join("export.txt");
    let mut headers = HEADERS;
    headers[7] = "Email";
    write_export(&input, "Sheet1", &headers, &[["", "Doe", "", "", "", "", "", ""]]);

    let error = convert_workbook(&input, &output, &ConversionConfig::default(), None)
        .expect_err("Main Email header is missing");

    assert!(matches!(
        error,
        ToolError::MissingField { ref field, ref sheet } if field == "Main Email" && sheet == "Sheet1"
    ));
    assert!(!output.exists());
}

#[test]
fn missing_sheet_and_input_are_reported() {
    let dir = tempdir().expect("temporary directory");
    let input = dir.path().join("export.xlsx");
    let output = dir.path().join("export.txt");
    write_export(&input, "Contacts", &HEADERS, &[]);

    let error = convert_workbook(&input, &output, &ConversionConfig::default(), None)
        .expect_err("Sheet1 is missing");
    assert!(matches!(error, ToolError::MissingSheet(ref name) if name == "Sheet1"));
    assert!(!output.exists());

    let config = ConversionConfig {
        sheet: "Contacts".to_string(),
        ..ConversionConfig::default()
    };
    convert_workbook(&input, &output, &config, None).expect("named sheet converts");

    let absent = dir.path().join("absent.xlsx");
    let error = convert_workbook(&absent, &output, &config, None).expect_err("no input");
    assert!(matches!(error, ToolError::MissingInput(_)));
}

#[test]
fn xlsx_copy_holds_both_sheets() {
    let dir = tempdir().expect("temporary directory");
    let input = dir.path().join("export.xlsx");
    let output = dir.path().join("export.txt");
    let copy = dir.path().join("debug.xlsx");
    write_export(
        &input,
        "Sheet1",
        &HEADERS,
        &[["", "Doe", "123 Main St", "Ottawa, ON K1A0B1", "", "", "", ""]],
    );

    convert_workbook(&input, &output, &ConversionConfig::default(), Some(&copy))
        .expect("conversion succeeded");

    let names = excel_read::sheet_names(&copy).expect("sheet names read");
    assert_eq!(names, vec!["Sheet1".to_string(), EST_SHEET.to_string()]);

    let est = excel_read::read_sheet(&copy, EST_SHEET).expect("EST sheet read");
    assert_eq!(est.get(1, EstField::RecordType.column()), Some("Record Type"));
    assert_eq!(est.get(2, EstField::City.column()), Some("Ottawa"));
    assert_eq!(est.get(2, EstField::AddressLine2.column()), Some("123 Main St"));

    let contacts = excel_read::read_sheet(&copy, "Sheet1").expect("contact sheet read");
    assert_eq!(contacts.get(3, qb2est::model::Column::new(5)), Some("Ottawa, ON K1A0B1"));
    assert_eq!(contacts.get(3, qb2est::model::Column::new(3)), None);
}

#[test]
fn config_file_overrides_translation() {
    let dir = tempdir().expect("temporary directory");
    let input = dir.path().join("export.xlsx");
    let output = dir.path().join("export.txt");
    let config_path = dir.path().join("mapping.json");
    fs::write(
        &config_path,
        r#"{
            "record_marker": "2",
            "translation": [
                { "source": "Customer", "target": "Company Name" },
                { "source": "Ship to 1", "target": "Last Name" },
                { "source": "Ship to 4", "target": "City" }
            ]
        }"#,
    )
    .expect("config written");
    write_export(
        &input,
        "Sheet1",
        &HEADERS,
        &[["Doe Co", "Doe", "1 Main", "", "Ottawa, ON K1A0B1", "", "", ""]],
    );

    let config = ConversionConfig::load(&config_path).expect("config loaded");
    convert_workbook(&input, &output, &config, None).expect("conversion succeeded");

    let written = fs::read_to_string(&output).expect("import file read");
    assert!(written.starts_with("\"2\",\"\",\"\",\"\",\"Doe\",\"\",\"Doe Co\","));
    assert!(written.contains("\"Ottawa\",\"ON\",\"K1A0B1\""));
}
