//! Record construction and field access
//!
//! A `Record` wraps one raw key/value map after checking it against a
//! registered schema. Construction enforces field presence only:
//! - every `required` field of the schema must be present in the input
//! - undeclared input keys are dropped (default) or rejected (strict)
//! - values are stored exactly as supplied, no coercion
//!
//! Type conformance is advisory: `typecheck` reports mismatches without
//! failing, so a caller can decide what a stray type is worth.

use std::fmt;

use serde_json::{Map, Value};

use crate::schema::{FieldType, SchemaError, SchemaRegistry, SchemaResult};

/// Policy for input keys the schema does not declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFieldPolicy {
    /// Silently drop undeclared keys (permissive, the default)
    #[default]
    Drop,
    /// Fail construction with `UnrecognizedField` (strict)
    Reject,
}

/// An immutable, schema-checked record.
///
/// Records reference their schema by id only; they stay valid however long
/// the caller keeps them, and are safely shared across threads. To change
/// data, construct a new record.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    schema_id: String,
    values: Map<String, Value>,
}

impl Record {
    /// Creates a record from a raw map using the default permissive policy.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSchema` if `schema_id` is not registered, or
    /// `MissingField` if a required field is absent from `raw`.
    pub fn create(
        registry: &SchemaRegistry,
        schema_id: &str,
        raw: Map<String, Value>,
    ) -> SchemaResult<Self> {
        Self::create_with(registry, schema_id, raw, UnknownFieldPolicy::Drop)
    }

    /// Creates a record from a raw map with an explicit unknown-field policy.
    ///
    /// # Errors
    ///
    /// As `create`, plus `UnrecognizedField` under `Reject` when `raw`
    /// contains a key the schema does not declare.
    pub fn create_with(
        registry: &SchemaRegistry,
        schema_id: &str,
        raw: Map<String, Value>,
        policy: UnknownFieldPolicy,
    ) -> SchemaResult<Self> {
        let schema = registry.lookup(schema_id)?;

        let mut values = Map::with_capacity(raw.len());
        for (key, value) in raw {
            if schema.declares(&key) {
                values.insert(key, value);
            } else {
                match policy {
                    UnknownFieldPolicy::Reject => {
                        return Err(SchemaError::unrecognized_field(schema_id, key));
                    }
                    UnknownFieldPolicy::Drop => {
                        tracing::debug!(schema_id, field = %key, "dropping undeclared field");
                    }
                }
            }
        }

        for field in schema.required_fields() {
            if !values.contains_key(&field.name) {
                return Err(SchemaError::missing_field(schema_id, &field.name));
            }
        }

        Ok(Self {
            schema_id: schema_id.to_string(),
            values,
        })
    }

    /// Returns the id of the schema this record was constructed against.
    pub fn schema_id(&self) -> &str {
        &self.schema_id
    }

    /// Gets a field value.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` if the field is absent from the record,
    /// whether or not the schema declares it.
    pub fn get(&self, field: &str) -> SchemaResult<&Value> {
        self.values
            .get(field)
            .ok_or_else(|| SchemaError::missing_field(&self.schema_id, field))
    }

    /// Gets a field value rendered as a plain string.
    ///
    /// String values come back as-is; anything else renders in its JSON
    /// form. Fails like `get` when the field is absent.
    pub fn get_str(&self, field: &str) -> SchemaResult<String> {
        Ok(match self.get(field)? {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Checks whether the record holds a value for a field.
    pub fn has(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Returns the stored field names and values.
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Returns the number of stored fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Checks whether the record holds no fields.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reports fields whose stored value does not conform to the declared
    /// type. Advisory only: mismatches never fail construction or access.
    pub fn typecheck(&self, registry: &SchemaRegistry) -> SchemaResult<Vec<TypeMismatch>> {
        let schema = registry.lookup(&self.schema_id)?;

        let mut mismatches = Vec::new();
        for field in &schema.fields {
            if let Some(value) = self.values.get(&field.name) {
                check_value(&field.name, value, &field.field_type, &mut mismatches);
            }
        }
        Ok(mismatches)
    }
}

/// One advisory type-conformance finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMismatch {
    /// Field path (list elements as `Tags[2]`)
    pub field: String,
    /// Declared type name
    pub expected: String,
    /// Type of the stored value
    pub actual: String,
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}': expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}

/// Checks one value against a declared type, collecting mismatches.
fn check_value(path: &str, value: &Value, expected: &FieldType, out: &mut Vec<TypeMismatch>) {
    let conforms = match expected {
        FieldType::String => value.is_string(),
        FieldType::Int => value.is_i64() || value.is_u64(),
        FieldType::Bool => value.is_boolean(),
        // Integers are acceptable where a float is declared
        FieldType::Float => value.is_number(),
        FieldType::Record { .. } => value.is_object(),
        FieldType::List { element } => {
            if let Some(items) = value.as_array() {
                for (i, item) in items.iter().enumerate() {
                    check_value(&format!("{}[{}]", path, i), item, element, out);
                }
                return;
            }
            false
        }
    };

    if !conforms {
        out.push(TypeMismatch {
            field: path.to_string(),
            expected: expected.type_name().to_string(),
            actual: json_type_name(value).to_string(),
        });
    }
}

/// Returns the type name of a JSON value for mismatch reports.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "record",
    }
}
