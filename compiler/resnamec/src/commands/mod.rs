//! Command handlers for the `resnamec` CLI.
//!
//! Each submodule implements one command. Commands take an already compiled
//! [`Schema`] and write to `out`; loading and exit codes are left to the
//! binary.

use std::io;
use std::path::Path;

use resname_ir::{Quoted, Resource};
use resname_match::{FormatError, ParseError};
use resname_schema::{Schema, SchemaError};
use thiserror::Error;

mod check;
mod describe;
mod format;
mod parse;

pub use check::check;
pub use describe::describe;
pub use format::{format_name, FormatOptions};
pub use parse::parse_name;

/// Any failure a command reports to the user.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("unknown resource type {}", Quoted(.0))]
    UnknownResource(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("{0}")]
    InvalidArgument(String),
}

/// Read and compile the manifest at `path`.
pub fn load_schema(path: impl AsRef<Path>) -> Result<Schema, CommandError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading schema");
    Ok(Schema::load(path)?)
}

fn lookup<'s>(schema: &'s Schema, ty: &str) -> Result<&'s Resource, CommandError> {
    schema
        .resource(ty)
        .ok_or_else(|| CommandError::UnknownResource(ty.to_owned()))
}
