//! Record accessor bindings.
//!
//! A binding reads one field of a record instance and parses it with the
//! bound resource. Nothing is cached: every call parses the current value.

use std::collections::HashMap;
use std::hash::BuildHasher;

use indexmap::IndexMap;
use resname_ir::Resource;
use resname_match::{resolver, ParseError, ResourceName};

use crate::schema::{Accessor, AccessorKind};
use crate::Schema;

/// Read access to a record instance's string fields.
pub trait FieldSource {
    /// Current value of `field`, or `None` when the record has no value for it.
    fn field(&self, field: &str) -> Option<&str>;
}

impl<S: BuildHasher> FieldSource for HashMap<String, String, S> {
    fn field(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}

impl<S: BuildHasher> FieldSource for IndexMap<String, String, S> {
    fn field(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FieldSource for [(K, V)] {
    fn field(&self, field: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k.as_ref() == field)
            .map(|(_, v)| v.as_ref())
    }
}

/// An accessor paired with its resource.
#[derive(Copy, Clone, Debug)]
pub struct Binding<'s> {
    accessor: &'s Accessor,
    resource: &'s Resource,
}

impl<'s> Binding<'s> {
    /// Accessor identifier, e.g. `ParseName`.
    pub fn ident(&self) -> &'s str {
        &self.accessor.ident
    }

    pub fn field(&self) -> &'s str {
        &self.accessor.field
    }

    pub fn kind(&self) -> AccessorKind {
        self.accessor.kind
    }

    pub fn resource(&self) -> &'s Resource {
        self.resource
    }

    /// Parse the bound field of `record`. An absent field parses as `""`.
    pub fn parse<R: FieldSource + ?Sized>(&self, record: &R) -> Result<ResourceName, ParseError> {
        let value = record.field(&self.accessor.field).unwrap_or_default();
        resolver::parse(self.resource, value)
    }
}

impl Schema {
    /// Binding for `field` of message `message`.
    pub fn binding(&self, message: &str, field: &str) -> Option<Binding<'_>> {
        self.find_binding(message, |accessor| accessor.field == field)
    }

    /// Binding by accessor identifier, e.g. `("Person", "ParsePersonName")`.
    pub fn binding_by_ident(&self, message: &str, ident: &str) -> Option<Binding<'_>> {
        self.find_binding(message, |accessor| accessor.ident == ident)
    }

    /// Every binding of message `message`, name field first.
    pub fn bindings<'s>(&'s self, message: &str) -> impl Iterator<Item = Binding<'s>> + 's {
        self.record(message)
            .into_iter()
            .flat_map(|record| &record.accessors)
            .map(move |accessor| self.bind(accessor))
    }

    fn find_binding(
        &self,
        message: &str,
        predicate: impl Fn(&Accessor) -> bool,
    ) -> Option<Binding<'_>> {
        let record = self.record(message)?;
        let accessor = record.accessors.iter().find(|a| predicate(a))?;
        Some(self.bind(accessor))
    }

    fn bind<'s>(&'s self, accessor: &'s Accessor) -> Binding<'s> {
        Binding {
            accessor,
            resource: self.get(accessor.resource),
        }
    }
}
