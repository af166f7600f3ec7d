//! In-memory schema registry
//!
//! Registration is an initialization-phase concern: callers register every
//! schema (and its derived properties) up front, then treat the registry as
//! read-only. Mutation takes `&mut self`, every lookup takes `&self`, so a
//! fully built registry can be shared freely across threads.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::errors::{SchemaError, SchemaResult};
use super::types::Schema;
use crate::record::Record;

/// A pure derived-property function evaluated against a record's fields.
pub type DerivedFn = Arc<dyn Fn(&Record) -> SchemaResult<Value> + Send + Sync>;

/// Registry of record schemas and their derived properties, indexed by id.
#[derive(Default)]
pub struct SchemaRegistry {
    /// Registered schemas by id
    schemas: HashMap<String, Schema>,
    /// Derived-property functions, keyed by schema id then property name
    derived: HashMap<String, HashMap<String, DerivedFn>>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema.
    ///
    /// # Errors
    ///
    /// Returns `MalformedSchema` if the schema's own structure is invalid
    /// (empty id, duplicate field names), or `DuplicateSchema` if the id is
    /// already registered. Schemas are immutable once registered.
    pub fn register(&mut self, schema: Schema) -> SchemaResult<()> {
        schema
            .validate_structure()
            .map_err(SchemaError::malformed_schema)?;

        if self.schemas.contains_key(&schema.id) {
            return Err(SchemaError::duplicate_schema(&schema.id));
        }

        tracing::debug!(schema_id = %schema.id, fields = schema.fields.len(), "schema registered");
        self.schemas.insert(schema.id.clone(), schema);
        Ok(())
    }

    /// Registers a schema declared as JSON.
    ///
    /// This replaces the annotation-driven discovery of the original plugin
    /// model: record kinds are declared data, registered explicitly.
    ///
    /// # Errors
    ///
    /// Returns `MalformedSchema` if the JSON does not parse as a schema
    /// declaration, plus everything `register` can return.
    pub fn register_json(&mut self, declaration: &str) -> SchemaResult<()> {
        let schema: Schema = serde_json::from_str(declaration)
            .map_err(|e| SchemaError::malformed_schema(format!("Invalid JSON: {}", e)))?;
        self.register(schema)
    }

    /// Attaches a derived property to a registered schema.
    ///
    /// The function must be pure: it reads the record's fields and nothing
    /// else. Registering the same property name again replaces the earlier
    /// function; like schema registration this happens once at startup.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSchema` if no schema with this id is registered.
    pub fn register_derived<F>(
        &mut self,
        schema_id: &str,
        property: impl Into<String>,
        f: F,
    ) -> SchemaResult<()>
    where
        F: Fn(&Record) -> SchemaResult<Value> + Send + Sync + 'static,
    {
        if !self.schemas.contains_key(schema_id) {
            return Err(SchemaError::unknown_schema(schema_id));
        }

        self.derived
            .entry(schema_id.to_string())
            .or_default()
            .insert(property.into(), Arc::new(f));
        Ok(())
    }

    /// Gets a schema by id.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSchema` if the id is not registered.
    pub fn lookup(&self, schema_id: &str) -> SchemaResult<&Schema> {
        self.schemas
            .get(schema_id)
            .ok_or_else(|| SchemaError::unknown_schema(schema_id))
    }

    /// Gets a derived-property function for a schema, if registered.
    pub fn derived(&self, schema_id: &str, property: &str) -> Option<&DerivedFn> {
        self.derived.get(schema_id)?.get(property)
    }

    /// Checks if a schema id is registered.
    pub fn contains(&self, schema_id: &str) -> bool {
        self.schemas.contains_key(schema_id)
    }

    /// Returns all registered schemas.
    pub fn all_schemas(&self) -> impl Iterator<Item = &Schema> {
        self.schemas.values()
    }

    /// Returns the number of registered schemas.
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // DerivedFn is opaque; show the property names only
        let derived: HashMap<&str, Vec<&str>> = self
            .derived
            .iter()
            .map(|(id, props)| (id.as_str(), props.keys().map(String::as_str).collect()))
            .collect();
        f.debug_struct("SchemaRegistry")
            .field("schemas", &self.schemas)
            .field("derived", &derived)
            .finish()
    }
}
