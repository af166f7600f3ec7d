//! typedrec - declarative typed-record registry
//!
//! Declare record schemas once at startup, construct immutable records from
//! raw key/value maps, and compute derived properties from their fields.
//! Ships ready-made record kinds for Xero accounting-API resources.

pub mod derived;
pub mod record;
pub mod schema;
pub mod xero;
