//! Derived-property resolution
//!
//! Derived properties are pure functions registered against a schema; the
//! resolver finds and invokes them on demand. Nothing is cached: every
//! computation reads the record's fields fresh, which keeps results
//! deterministic for immutable records.

use serde_json::Value;

use crate::record::Record;
use crate::schema::{SchemaError, SchemaRegistry, SchemaResult};

/// Resolver for derived properties, backed by a built registry.
pub struct DerivedPropertyResolver<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> DerivedPropertyResolver<'a> {
    /// Creates a resolver over the given registry.
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Computes a named derived property for a record.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSchema` if the record's schema is not registered,
    /// `UnknownProperty` if no such property exists for that schema, and
    /// whatever the property function itself fails with — a missing
    /// dependent field propagates as `MissingField` with no default
    /// substituted.
    pub fn compute(&self, record: &Record, property: &str) -> SchemaResult<Value> {
        let schema_id = record.schema_id();
        // Resolve the schema first so a stale record reports UnknownSchema,
        // not UnknownProperty
        self.registry.lookup(schema_id)?;

        let f = self
            .registry
            .derived(schema_id, property)
            .ok_or_else(|| SchemaError::unknown_property(schema_id, property))?;

        f(record)
    }
}
