//! Schema compilation.
//!
//! Resources are compiled in declaration order: file-level definitions
//! first, then message resources. Reference fields are resolved in a second
//! pass so a message may reference a resource declared after it.

use std::path::Path;

use resname_ir::{naming, Resource};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::manifest::{Manifest, MessageDecl, ResourceDecl};
use crate::SchemaError;

/// Field holding a message's own resource name when none is configured.
pub const DEFAULT_NAME_FIELD: &str = "name";

/// Index of a resource within its [`Schema`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceId(usize);

impl ResourceId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a bound field holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    /// The message's own resource name.
    NameField,
    /// The name of a resource declared elsewhere.
    Reference,
}

/// A message field bound to a resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accessor {
    pub field: String,
    /// `Parse<Field>`, e.g. `ParseName`.
    pub ident: String,
    pub resource: ResourceId,
    pub kind: AccessorKind,
}

/// A compiled message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub fields: Vec<String>,
    /// Resource this message is the record of, if any.
    pub resource: Option<ResourceId>,
    /// Name field first (if any), then references in declaration order.
    pub accessors: Vec<Accessor>,
}

impl Record {
    fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}

/// Compiled schema: resources plus the records bound to them.
#[derive(Debug, Default)]
pub struct Schema {
    resources: Vec<Resource>,
    by_type: FxHashMap<String, ResourceId>,
    records: Vec<Record>,
    records_by_name: FxHashMap<String, usize>,
}

impl Schema {
    /// Compile a manifest. Stops at the first error.
    #[tracing::instrument(level = "debug", skip_all, fields(
        definitions = manifest.resource_definition.len(),
        messages = manifest.message.len(),
    ))]
    pub fn compile(manifest: &Manifest) -> Result<Self, SchemaError> {
        let mut schema = Schema::default();

        for decl in &manifest.resource_definition {
            schema.add_resource(decl)?;
        }
        for message in &manifest.message {
            schema.add_message(message)?;
        }
        for (index, message) in manifest.message.iter().enumerate() {
            schema.bind_references(index, message)?;
        }

        debug!(
            resources = schema.resources.len(),
            records = schema.records.len(),
            "schema compiled"
        );
        Ok(schema)
    }

    /// Parse and compile a manifest document.
    pub fn from_source(source: &str) -> Result<Self, SchemaError> {
        Schema::compile(&Manifest::parse(source)?)
    }

    /// Load and compile a manifest file.
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        Schema::compile(&Manifest::load(path)?)
    }

    fn add_resource(&mut self, decl: &ResourceDecl) -> Result<ResourceId, SchemaError> {
        let resource =
            Resource::compile(&decl.ty, decl.pattern.as_slice(), decl.authority.as_deref())?;
        let key = resource.ty().to_string();
        if self.by_type.contains_key(&key) {
            return Err(SchemaError::DuplicateResource(key));
        }

        let id = ResourceId(self.resources.len());
        self.by_type.insert(key, id);
        self.resources.push(resource);
        Ok(id)
    }

    fn add_message(&mut self, message: &MessageDecl) -> Result<(), SchemaError> {
        if self.records_by_name.contains_key(&message.name) {
            return Err(SchemaError::DuplicateMessage(message.name.clone()));
        }

        let mut record = Record {
            name: message.name.clone(),
            fields: message.fields.clone(),
            resource: None,
            accessors: Vec::new(),
        };

        if let Some(decl) = &message.resource {
            let id = self.add_resource(decl)?;
            let field = decl.name_field.as_deref().unwrap_or(DEFAULT_NAME_FIELD);
            if !record.has_field(field) {
                return Err(SchemaError::MissingNameField {
                    message: message.name.clone(),
                    field: field.to_owned(),
                });
            }

            record.resource = Some(id);
            record.accessors.push(Accessor {
                field: field.to_owned(),
                ident: naming::accessor_ident(field),
                resource: id,
                kind: AccessorKind::NameField,
            });
        }

        self.records_by_name.insert(record.name.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    fn bind_references(&mut self, index: usize, message: &MessageDecl) -> Result<(), SchemaError> {
        for (field, ty) in &message.references {
            let record = &self.records[index];
            if !record.has_field(field) {
                return Err(SchemaError::MissingReferenceField {
                    message: message.name.clone(),
                    field: field.clone(),
                    ty: ty.clone(),
                });
            }
            let Some(&resource) = self.by_type.get(ty) else {
                return Err(SchemaError::UnknownResourceReference {
                    message: message.name.clone(),
                    field: field.clone(),
                    ty: ty.clone(),
                });
            };

            self.records[index].accessors.push(Accessor {
                field: field.clone(),
                ident: naming::accessor_ident(field),
                resource,
                kind: AccessorKind::Reference,
            });
        }
        Ok(())
    }

    /// Resources in compilation order.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn resource_id(&self, ty: &str) -> Option<ResourceId> {
        self.by_type.get(ty).copied()
    }

    /// Look up a resource by qualified type name.
    pub fn resource(&self, ty: &str) -> Option<&Resource> {
        self.resource_id(ty).map(|id| self.get(id))
    }

    /// Resolve an id handed out by this schema.
    pub fn get(&self, id: ResourceId) -> &Resource {
        &self.resources[id.0]
    }

    pub fn record(&self, name: &str) -> Option<&Record> {
        self.records_by_name.get(name).map(|&i| &self.records[i])
    }
}
