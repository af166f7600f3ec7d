//! Schema type definitions
//!
//! Supported field types:
//! - string: UTF-8 string
//! - int: 64-bit signed integer
//! - bool: Boolean
//! - float: 64-bit floating point
//! - record: Reference to another registered record kind, by schema id
//! - list: Homogeneous sequence with an element type

use serde::{Deserialize, Serialize};

/// Supported field types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
    /// Boolean
    Bool,
    /// 64-bit floating point
    Float,
    /// Reference to another record kind by schema id
    Record {
        /// Schema id of the referenced kind
        schema: String,
    },
    /// Homogeneous sequence with a single element type
    List {
        /// Element type (boxed to allow recursive types)
        element: Box<FieldType>,
    },
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Bool => "bool",
            FieldType::Float => "float",
            FieldType::Record { .. } => "record",
            FieldType::List { .. } => "list",
        }
    }
}

/// A named, typed field declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name, unique within the owning schema
    pub name: String,
    /// Field data type
    #[serde(flatten)]
    pub field_type: FieldType,
    /// Whether the field must be present in raw input
    pub required: bool,
}

impl FieldDef {
    /// Create a field definition with an arbitrary type
    pub fn new(name: impl Into<String>, field_type: FieldType, required: bool) -> Self {
        Self {
            name: name.into(),
            field_type,
            required,
        }
    }

    /// Create a required string field
    pub fn required_string(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::String, true)
    }

    /// Create an optional string field
    pub fn optional_string(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::String, false)
    }

    /// Create a required int field
    pub fn required_int(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Int, true)
    }

    /// Create an optional int field
    pub fn optional_int(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Int, false)
    }

    /// Create a required bool field
    pub fn required_bool(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Bool, true)
    }

    /// Create an optional float field
    pub fn optional_float(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Float, false)
    }

    /// Create an optional field referencing another record kind
    pub fn optional_record(name: impl Into<String>, schema: impl Into<String>) -> Self {
        Self::new(
            name,
            FieldType::Record {
                schema: schema.into(),
            },
            false,
        )
    }

    /// Create an optional list field
    pub fn optional_list(name: impl Into<String>, element: FieldType) -> Self {
        Self::new(
            name,
            FieldType::List {
                element: Box::new(element),
            },
            false,
        )
    }
}

/// Complete schema for one record kind
///
/// Created at initialization, immutable thereafter, looked up by `id`.
/// Fields keep their declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Unique schema identifier
    pub id: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered field definitions
    pub fields: Vec<FieldDef>,
}

impl Schema {
    /// Create a new schema
    pub fn new(id: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            id: id.into(),
            description: None,
            fields,
        }
    }

    /// Looks up a field definition by name
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Checks whether a field name is declared
    pub fn declares(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Iterates the required field definitions
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.required)
    }

    /// Validates the schema structure itself (not a record)
    pub fn validate_structure(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("Schema id must not be empty".into());
        }

        // Field names must be unique within the schema
        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(format!("Duplicate field name '{}'", field.name));
            }
        }

        Ok(())
    }
}
