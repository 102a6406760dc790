//! Schema front end for resource names.
//!
//! Reads a TOML [`Manifest`] listing resources and messages, compiles every
//! resource through `resname_ir`, and binds message fields to the resources
//! they hold names of. The compiled [`Schema`] hands out:
//!
//! - [`Binding`]s: parse a record's field through its resource;
//! - [`ResourceDescriptor`]s: identifiers and compiled patterns for an
//!   emission step.

mod accessor;
mod descriptor;
mod error;
mod manifest;
mod schema;

pub use accessor::{Binding, FieldSource};
pub use descriptor::{AccessorDescriptor, FieldDescriptor, ResourceDescriptor, VariantDescriptor};
pub use error::SchemaError;
pub use manifest::{Manifest, MessageDecl, ResourceDecl};
pub use schema::{Accessor, AccessorKind, Record, ResourceId, Schema, DEFAULT_NAME_FIELD};
