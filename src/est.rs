//! Destination layout of the EST 2.0 address import file.
//!
//! The import file carries nineteen fields in a fixed order. Each field owns
//! one column of the destination sheet, so the enum discriminant doubles as
//! the column index and no header scan is needed on the destination side.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Column, Sheet};

/// Name of the destination sheet.
pub const EST_SHEET: &str = "EST";

/// One field of the EST import layout, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EstField {
    #[serde(rename = "Record Type")]
    RecordType,
    #[serde(rename = "Client ID")]
    ClientId,
    #[serde(rename = "Title Name")]
    TitleName,
    #[serde(rename = "First Name")]
    FirstName,
    #[serde(rename = "Last Name")]
    LastName,
    #[serde(rename = "Title/Dept.")]
    TitleDept,
    #[serde(rename = "Company Name")]
    CompanyName,
    #[serde(rename = "Additional Address Information")]
    AdditionalAddressInformation,
    #[serde(rename = "Address Line 1")]
    AddressLine1,
    #[serde(rename = "Address Line 2")]
    AddressLine2,
    #[serde(rename = "City")]
    City,
    #[serde(rename = "Province or State")]
    ProvinceOrState,
    #[serde(rename = "Postal Code or Zip Code")]
    PostalCode,
    #[serde(rename = "Country Code")]
    CountryCode,
    #[serde(rename = "Client Voice Phone")]
    VoicePhone,
    #[serde(rename = "Client Fax Number")]
    FaxNumber,
    #[serde(rename = "Client Email Address")]
    EmailAddress,
    #[serde(rename = "Tax ID/IRS/VAT")]
    TaxId,
    #[serde(rename = "Email #2")]
    SecondEmail,
}

impl EstField {
    /// All fields in the order they appear in the import file.
    pub const ALL: [EstField; 19] = [
        EstField::RecordType,
        EstField::ClientId,
        EstField::TitleName,
        EstField::FirstName,
        EstField::LastName,
        EstField::TitleDept,
        EstField::CompanyName,
        EstField::AdditionalAddressInformation,
        EstField::AddressLine1,
        EstField::AddressLine2,
        EstField::City,
        EstField::ProvinceOrState,
        EstField::PostalCode,
        EstField::CountryCode,
        EstField::VoicePhone,
        EstField::FaxNumber,
        EstField::EmailAddress,
        EstField::TaxId,
        EstField::SecondEmail,
    ];

    /// Header text written to row 1 of the destination sheet.
    pub const fn header(self) -> &'static str {
        match self {
            EstField::RecordType => "Record Type",
            EstField::ClientId => "Client ID",
            EstField::TitleName => "Title Name",
            EstField::FirstName => "First Name",
            EstField::LastName => "Last Name",
            EstField::TitleDept => "Title/Dept.",
            EstField::CompanyName => "Company Name",
            EstField::AdditionalAddressInformation => "Additional Address Information",
            EstField::AddressLine1 => "Address Line 1",
            EstField::AddressLine2 => "Address Line 2",
            EstField::City => "City",
            EstField::ProvinceOrState => "Province or State",
            EstField::PostalCode => "Postal Code or Zip Code",
            EstField::CountryCode => "Country Code",
            EstField::VoicePhone => "Client Voice Phone",
            EstField::FaxNumber => "Client Fax Number",
            EstField::EmailAddress => "Client Email Address",
            EstField::TaxId => "Tax ID/IRS/VAT",
            EstField::SecondEmail => "Email #2",
        }
    }

    /// Column of the destination sheet holding this field.
    pub const fn column(self) -> Column {
        Column::new(self as usize)
    }
}

impl fmt::Display for EstField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Creates the destination sheet with the EST headers in row 1.
pub fn make_import_sheet() -> Sheet {
    Sheet::with_headers(EST_SHEET, EstField::ALL.iter().map(|field| field.header()))
}
