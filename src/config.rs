use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ToolError};
use crate::est::EstField;

/// Name of the sheet QuickBooks writes contacts to.
pub const DEFAULT_SHEET: &str = "Sheet1";
/// Marker written into the record type field of exportable rows.
pub const DEFAULT_RECORD_MARKER: &str = "1";

/// Copies one source column into one destination field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Header text of the source column.
    pub source: String,
    /// Destination field that receives the value.
    pub target: EstField,
}

impl FieldMapping {
    pub fn new(source: impl Into<String>, target: EstField) -> Self {
        Self {
            source: source.into(),
            target,
        }
    }
}

/// Static description of how a contact export is turned into EST rows.
///
/// Every key is optional when loaded from JSON; missing keys take the
/// QuickBooks defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConversionConfig {
    /// Sheet holding the contact table.
    pub sheet: String,
    /// Four adjacent address fragment fields, left to right. The last one
    /// receives the combined "City, Province Postal" line.
    pub address_block: [String; 4],
    /// Source field holding free-text country names.
    pub country_field: String,
    /// Destination field that must be non-empty for a row to be exported.
    pub name_field: EstField,
    /// Destination field that receives the record marker.
    pub record_type_field: EstField,
    /// Literal written into `record_type_field` for exportable rows.
    pub record_marker: String,
    /// Source column to destination field translation table.
    pub translation: Vec<FieldMapping>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            sheet: DEFAULT_SHEET.to_string(),
            address_block: [
                "Ship to 1".to_string(),
                "Ship to 2".to_string(),
                "Ship to 3".to_string(),
                "Ship to 4".to_string(),
            ],
            country_field: "Ship to 5".to_string(),
            name_field: EstField::LastName,
            record_type_field: EstField::RecordType,
            record_marker: DEFAULT_RECORD_MARKER.to_string(),
            translation: vec![
                FieldMapping::new("Ship to 1", EstField::LastName),
                FieldMapping::new("Ship to 2", EstField::AddressLine1),
                FieldMapping::new("Ship to 3", EstField::AddressLine2),
                FieldMapping::new("Ship to 4", EstField::City),
                FieldMapping::new("Ship to 5", EstField::CountryCode),
                FieldMapping::new("Main Phone", EstField::VoicePhone),
                FieldMapping::new("Main Email", EstField::EmailAddress),
            ],
        }
    }
}

impl ConversionConfig {
    /// Loads a configuration from a JSON file and validates it.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let config: ConversionConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration for internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.sheet.trim().is_empty() {
            return Err(ToolError::InvalidConfig("sheet name is empty".into()));
        }
        if self.translation.is_empty() {
            return Err(ToolError::InvalidConfig("translation table is empty".into()));
        }
        if self.record_marker.is_empty() {
            return Err(ToolError::InvalidConfig("record marker is empty".into()));
        }
        if self.name_field == self.record_type_field {
            return Err(ToolError::InvalidConfig(format!(
                "name field and record type field are both '{}'",
                self.name_field
            )));
        }
        for (index, name) in self.address_block.iter().enumerate() {
            if self.address_block[..index].contains(name) {
                return Err(ToolError::InvalidConfig(format!(
                    "address block lists '{name}' more than once"
                )));
            }
        }
        for (index, mapping) in self.translation.iter().enumerate() {
            let duplicate = self.translation[..index]
                .iter()
                .any(|earlier| earlier.target == mapping.target);
            if duplicate {
                return Err(ToolError::InvalidConfig(format!(
                    "destination field '{}' is mapped more than once",
                    mapping.target
                )));
            }
        }
        Ok(())
    }

    /// Whether the first address block field is the source of the name field.
    /// That column must stay put when the block is right-aligned.
    pub fn address_block_holds_name(&self) -> bool {
        self.translation
            .iter()
            .any(|mapping| {
                mapping.target == self.name_field && mapping.source == self.address_block[0]
            })
    }

    /// Every source field the conversion reads, without duplicates, in the
    /// order they are first referenced.
    pub fn source_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        let referenced = self
            .translation
            .iter()
            .map(|mapping| mapping.source.as_str())
            .chain(self.address_block.iter().map(String::as_str))
            .chain(std::iter::once(self.country_field.as_str()));
        for field in referenced {
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        fields
    }
}
