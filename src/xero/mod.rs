//! Record kinds for Xero accounting-API resources
//!
//! Each submodule declares one record kind: its schema id, its field
//! layout, and any derived properties. `register_all` wires the lot into a
//! registry at startup; raw payloads come from whatever client fetched
//! them, already decoded to key/value maps.

pub mod journal_line;
pub mod phone;
pub mod tracking_category;

use crate::schema::{SchemaRegistry, SchemaResult};

/// Registers every Xero record kind and its derived properties.
///
/// # Errors
///
/// Returns `DuplicateSchema` if any of the ids is already registered.
pub fn register_all(registry: &mut SchemaRegistry) -> SchemaResult<()> {
    tracking_category::register(registry)?;
    journal_line::register(registry)?;
    phone::register(registry)?;
    Ok(())
}
