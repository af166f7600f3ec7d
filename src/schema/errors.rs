//! Error types for schema registration, record construction, and
//! derived-property resolution.
//!
//! All failures are local, synchronous, and non-retriable; nothing here is
//! swallowed or logged internally. The caller owns presentation.

use thiserror::Error;

/// Result type for schema and record operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema and record errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Schema id not found in the registry
    #[error("Schema '{schema_id}' not found")]
    UnknownSchema {
        /// The id that failed to resolve
        schema_id: String,
    },

    /// Attempt to register an id that is already present
    #[error("Schema '{schema_id}' is already registered")]
    DuplicateSchema {
        /// The id registered twice
        schema_id: String,
    },

    /// A field required by the schema is absent, or an accessor was asked
    /// for a field the record does not hold
    #[error("Schema '{schema_id}': missing field '{field}'")]
    MissingField {
        /// Owning schema id
        schema_id: String,
        /// The absent field name
        field: String,
    },

    /// Strict construction saw an input key the schema does not declare
    #[error("Schema '{schema_id}': unrecognized field '{field}'")]
    UnrecognizedField {
        /// Owning schema id
        schema_id: String,
        /// The undeclared key
        field: String,
    },

    /// No derived property with this name is registered for the schema
    #[error("Schema '{schema_id}': no derived property '{property}'")]
    UnknownProperty {
        /// Owning schema id
        schema_id: String,
        /// The property that failed to resolve
        property: String,
    },

    /// A schema declaration could not be parsed or is structurally invalid
    #[error("Malformed schema: {reason}")]
    MalformedSchema {
        /// What was wrong with the declaration
        reason: String,
    },
}

impl SchemaError {
    /// Create an unknown schema error
    pub fn unknown_schema(schema_id: impl Into<String>) -> Self {
        Self::UnknownSchema {
            schema_id: schema_id.into(),
        }
    }

    /// Create a duplicate schema error
    pub fn duplicate_schema(schema_id: impl Into<String>) -> Self {
        Self::DuplicateSchema {
            schema_id: schema_id.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(schema_id: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            schema_id: schema_id.into(),
            field: field.into(),
        }
    }

    /// Create an unrecognized field error
    pub fn unrecognized_field(schema_id: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnrecognizedField {
            schema_id: schema_id.into(),
            field: field.into(),
        }
    }

    /// Create an unknown derived-property error
    pub fn unknown_property(schema_id: impl Into<String>, property: impl Into<String>) -> Self {
        Self::UnknownProperty {
            schema_id: schema_id.into(),
            property: property.into(),
        }
    }

    /// Create a malformed schema error
    pub fn malformed_schema(reason: impl Into<String>) -> Self {
        Self::MalformedSchema {
            reason: reason.into(),
        }
    }
}
