//! TOML schema manifest.
//!
//! ```toml
//! [[resource_definition]]
//! type = "example.com/External"
//! pattern = ["external/{external}"]
//!
//! [[message]]
//! name = "Thing"
//! fields = ["name"]
//!
//! [message.resource]
//! type = "example.com/Thing"
//! pattern = ["things/{thing}"]
//!
//! [message.references]
//! owner = "example.com/External"
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::SchemaError;

/// Root of a manifest document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// File-level resources, not bound to any message.
    #[serde(default)]
    pub resource_definition: Vec<ResourceDecl>,
    #[serde(default)]
    pub message: Vec<MessageDecl>,
}

/// A resource declaration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceDecl {
    /// Qualified type name, `namespace/TypeName`.
    #[serde(rename = "type")]
    pub ty: String,
    /// Templates in match order.
    #[serde(default)]
    pub pattern: Vec<String>,
    /// Overrides the default `//<namespace>/` authority.
    pub authority: Option<String>,
    /// Name-bearing field of the owning message; `name` when absent. Ignored
    /// for file-level definitions.
    pub name_field: Option<String>,
}

/// A record type (message) and the resource bindings on its fields.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageDecl {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<String>,
    /// Resource this message is the canonical record of.
    pub resource: Option<ResourceDecl>,
    /// Field name to referenced resource type.
    #[serde(default)]
    pub references: IndexMap<String, String>,
}

impl Manifest {
    pub fn parse(source: &str) -> Result<Self, SchemaError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let source = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Manifest::parse(&source)
    }
}
