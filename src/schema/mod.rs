//! Schema subsystem: declarative record-kind definitions and the registry
//! that holds them.
//!
//! # Design Principles
//!
//! - Schemas are registered once at startup and immutable afterwards
//! - Records reference their schema by id, never by pointer
//! - Field presence is enforced at construction; field types are advisory
//! - Errors surface to the caller, nothing is swallowed

mod errors;
mod registry;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use registry::{DerivedFn, SchemaRegistry};
pub use types::{FieldDef, FieldType, Schema};
