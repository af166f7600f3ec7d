//! Xero tracking category record kind
//!
//! The record kind `TrackingCategories` elements of a journal line refer
//! to. Structural only.

use crate::schema::{FieldDef, Schema, SchemaRegistry, SchemaResult};

/// Schema id for tracking category records.
pub const SCHEMA_ID: &str = "xero_tracking_category";

/// Builds the tracking category schema.
pub fn schema() -> Schema {
    Schema::new(
        SCHEMA_ID,
        vec![
            FieldDef::optional_string("TrackingCategoryID"),
            FieldDef::optional_string("TrackingOptionID"),
            FieldDef::required_string("Name"),
            FieldDef::optional_string("Option"),
            FieldDef::optional_string("Status"),
        ],
    )
}

/// Registers the tracking category schema.
pub fn register(registry: &mut SchemaRegistry) -> SchemaResult<()> {
    registry.register(schema())
}
