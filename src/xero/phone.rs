//! Xero phone record kind
//!
//! Carries the one derived property in the crate: `getPhone`, the canonical
//! phone string `CountryCode-AreaCode-Number` with literal hyphens, in that
//! fixed order. No normalization and no length checks; an empty component
//! embeds as an empty segment, an absent one fails the whole computation
//! with `MissingField`.

use serde_json::Value;

use crate::record::Record;
use crate::schema::{FieldDef, Schema, SchemaRegistry, SchemaResult};

/// Schema id for phone records.
pub const SCHEMA_ID: &str = "xero_phone";

/// Derived-property name for the canonical phone string.
pub const GET_PHONE: &str = "getPhone";

/// Builds the phone schema.
pub fn schema() -> Schema {
    Schema::new(
        SCHEMA_ID,
        vec![
            FieldDef::optional_string("PhoneType"),
            FieldDef::required_string("PhoneCountryCode"),
            FieldDef::required_string("PhoneAreaCode"),
            FieldDef::required_string("PhoneNumber"),
        ],
    )
}

/// Registers the phone schema and its `getPhone` derived property.
pub fn register(registry: &mut SchemaRegistry) -> SchemaResult<()> {
    registry.register(schema())?;
    registry.register_derived(SCHEMA_ID, GET_PHONE, get_phone)
}

/// Computes the canonical phone string.
fn get_phone(record: &Record) -> SchemaResult<Value> {
    Ok(Value::String(format!(
        "{}-{}-{}",
        record.get_str("PhoneCountryCode")?,
        record.get_str("PhoneAreaCode")?,
        record.get_str("PhoneNumber")?
    )))
}
