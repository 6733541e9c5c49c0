//! Schema subsystem
//!
//! Supplies, for a model name, the ordered list of field descriptors the
//! validation engine checks records against.
//!
//! # Design Principles
//!
//! - Schemas are read through the `SchemaAccessor` trait only
//! - Accessors hand out read-only borrows; the engine never mutates them
//! - Registered models are immutable

mod accessor;
mod errors;
mod loader;
mod types;

pub use accessor::SchemaAccessor;
pub use errors::{SchemaError, SchemaResult};
pub use loader::SchemaRegistry;
pub use types::{FieldDescriptor, ModelSchema, TypeTag};
