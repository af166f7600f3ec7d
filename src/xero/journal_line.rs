//! Xero journal line record kind
//!
//! Purely structural: declared fields, no derived properties. Amounts are
//! declared as floats and tracking categories as a list of references to
//! the tracking-category kind.

use crate::schema::{FieldDef, FieldType, Schema, SchemaRegistry, SchemaResult};

use super::tracking_category;

/// Schema id for journal line records.
pub const SCHEMA_ID: &str = "xero_journal_line";

/// Builds the journal line schema.
pub fn schema() -> Schema {
    Schema::new(
        SCHEMA_ID,
        vec![
            FieldDef::optional_string("JournalLineID"),
            FieldDef::optional_string("AccountID"),
            FieldDef::required_string("AccountCode"),
            FieldDef::optional_string("AccountType"),
            FieldDef::optional_string("AccountName"),
            FieldDef::optional_string("Description"),
            FieldDef::optional_float("NetAmount"),
            FieldDef::optional_float("GrossAmount"),
            FieldDef::optional_float("TaxAmount"),
            FieldDef::optional_string("TaxType"),
            FieldDef::optional_string("TaxName"),
            FieldDef::optional_list(
                "TrackingCategories",
                FieldType::Record {
                    schema: tracking_category::SCHEMA_ID.to_string(),
                },
            ),
        ],
    )
}

/// Registers the journal line schema.
pub fn register(registry: &mut SchemaRegistry) -> SchemaResult<()> {
    registry.register(schema())
}
