//! Structured descriptors handed to an emission step.
//!
//! Descriptors carry identifiers and compiled patterns only; rendering them
//! into source text is left to the consumer.

use resname_ir::{Pattern, Resource, ResourceIdents, VariantIdents};

use crate::schema::AccessorKind;
use crate::Schema;

/// One variable of a pattern, as a field of the parsed value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Declared variable name.
    pub name: String,
    /// Field identifier, e.g. `ProjectID`.
    pub ident: String,
    /// Index among the pattern's variables.
    pub index: usize,
}

/// One pattern of a resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantDescriptor<'s> {
    pub pattern: &'s Pattern,
    /// `None` for single-pattern resources, whose only pattern uses the
    /// resource-level identifiers.
    pub idents: Option<VariantIdents>,
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceDescriptor<'s> {
    pub resource: &'s Resource,
    pub idents: &'s ResourceIdents,
    pub variants: Vec<VariantDescriptor<'s>>,
}

/// A record accessor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessorDescriptor<'s> {
    pub record: &'s str,
    pub field: &'s str,
    pub ident: &'s str,
    pub kind: AccessorKind,
    /// Identifier of the value the accessor returns, e.g. `ParsedThingName`.
    pub returns: &'s str,
}

impl<'s> ResourceDescriptor<'s> {
    pub fn new(resource: &'s Resource) -> Self {
        let mut variant_idents = resource.variant_idents().into_iter();
        let variants = resource
            .patterns()
            .iter()
            .map(|pattern| VariantDescriptor {
                pattern,
                idents: variant_idents.next(),
                fields: pattern
                    .variables()
                    .map(|var| FieldDescriptor {
                        name: var.name.clone(),
                        ident: var.field_ident(),
                        index: var.index,
                    })
                    .collect(),
            })
            .collect();

        ResourceDescriptor {
            resource,
            idents: resource.idents(),
            variants,
        }
    }
}

impl Schema {
    /// Descriptors for every resource, in compilation order.
    pub fn descriptors(&self) -> Vec<ResourceDescriptor<'_>> {
        self.resources().iter().map(ResourceDescriptor::new).collect()
    }

    /// Descriptors for every record accessor, grouped by record.
    pub fn accessor_descriptors(&self) -> Vec<AccessorDescriptor<'_>> {
        let mut out = Vec::new();
        for record in self.records() {
            for accessor in &record.accessors {
                out.push(AccessorDescriptor {
                    record: &record.name,
                    field: &accessor.field,
                    ident: &accessor.ident,
                    kind: accessor.kind,
                    returns: &self.get(accessor.resource).idents().parsed_type,
                });
            }
        }
        out
    }
}
