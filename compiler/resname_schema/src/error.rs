use std::path::PathBuf;

use resname_ir::{CompileError, Quoted};
use thiserror::Error;

/// Failure while loading or compiling a schema. The first one stops the run.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(
        "{message} specifies {} as name field, but no field with that name exists",
        Quoted(.field)
    )]
    MissingNameField { message: String, field: String },

    #[error(
        "{message} references {} from field {}, but no field with that name exists",
        Quoted(.ty),
        Quoted(.field)
    )]
    MissingReferenceField {
        message: String,
        field: String,
        ty: String,
    },

    #[error("{message}.{field} references unknown resource type {}", Quoted(.ty))]
    UnknownResourceReference {
        message: String,
        field: String,
        ty: String,
    },

    #[error("resource type {} is declared more than once", Quoted(.0))]
    DuplicateResource(String),

    #[error("message {} is declared more than once", Quoted(.0))]
    DuplicateMessage(String),

    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest: {0}")]
    Manifest(#[from] toml::de::Error),
}
